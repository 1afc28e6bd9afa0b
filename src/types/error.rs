use thiserror::Error;

use super::keyword::PropertyKind;

/// A block whose properties could not be evaluated.
///
/// `line` is always the line of the block's verb keyword, not of the offending
/// property line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("format error @ rule starting on line {line}: {kind}")]
pub struct FormatError {
    pub line: usize,
    pub kind: FormatErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    #[error("no basetype matching '{0}'")]
    NoBaseTypeMatch(String),

    #[error("invalid class '{0}'")]
    InvalidClass(String),

    #[error("invalid vfx '{0}'")]
    InvalidVfx(String),

    #[error("To can only appear in verb Rename")]
    ToOutsideRename,

    #[error("trailing data after '{property}': '{rest}'")]
    TrailingData { property: PropertyKind, rest: String },

    #[error("missing quote to close string")]
    UnterminatedQuote,

    #[error("expected space after quote")]
    MissingSpaceAfterQuote,

    #[error("empty argument")]
    EmptyArgument,

    #[error("missing argument for '{0}'")]
    MissingArgument(PropertyKind),

    #[error("property '{0}' is not supported yet")]
    Unsupported(PropertyKind),
}

/// Two rules claim the same base type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("base '{base_type}' appears in rule at line {first_line} and line {second_line}")]
pub struct ConflictError {
    pub base_type: String,
    pub first_line: usize,
    pub second_line: usize,
}

impl FormatError {
    pub fn new(line: usize, kind: FormatErrorKind) -> Self {
        Self { line, kind }
    }
}
