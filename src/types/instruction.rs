use std::fmt;

use super::keyword::{PropertyKind, Verb};

/// A property line inside a block: its keyword and the unlexed argument text
/// that followed the first space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub kind: PropertyKind,
    pub raw: String,
}

/// One verb block of filter source, as produced by the block splitter.
///
/// `source_line` is the 1-based line of the verb keyword and is the line every
/// evaluation error for this block is reported against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub source_line: usize,
    pub verb: Verb,
    pub properties: Vec<Property>,
}

impl Property {
    pub fn new(kind: PropertyKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }
}

impl Instruction {
    pub fn new(source_line: usize, verb: Verb) -> Self {
        Self {
            source_line,
            verb,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, kind: PropertyKind, raw: impl Into<String>) -> Self {
        self.properties.push(Property::new(kind, raw));
        self
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {}", self.kind, self.raw)
        }
    }
}

/// Renders the block back to filter source: the verb line followed by one
/// four-space indented line per property.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb)?;
        for prop in &self.properties {
            write!(f, "\n    {prop}")?;
        }
        Ok(())
    }
}
