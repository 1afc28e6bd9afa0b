use std::fmt;

/// Errors produced when splitting filter source into blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    line: usize,
    kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An unindented line while a block was still open.
    ExpectedIndentation,
    /// An indented line with no verb block to belong to.
    OrphanProperty,
    InvalidVerb(String),
    InvalidProperty(String),
}

impl ParseError {
    pub(crate) fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }

    /// 1-based line of the offending text.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::ExpectedIndentation => write!(f, "expected indentation"),
            ParseErrorKind::OrphanProperty => write!(f, "property outside of a verb block"),
            ParseErrorKind::InvalidVerb(verb) => write!(f, "invalid verb '{verb}'"),
            ParseErrorKind::InvalidProperty(prop) => write!(f, "invalid property '{prop}'"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error @ line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ParseError {}
