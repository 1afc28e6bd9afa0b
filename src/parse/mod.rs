mod error;
pub(crate) mod grammar;
mod parser;

pub use error::{ParseError, ParseErrorKind};

use crate::types::Instruction;

/// Split filter source text into [`Instruction`]s, one per verb block.
///
/// # Errors
///
/// Returns [`ParseError`] on a malformed block structure or an unknown verb
/// or property keyword.
pub fn parse(input: &str) -> Result<Vec<Instruction>, ParseError> {
    parser::split_blocks(input.lines())
}

/// Like [`parse`], over lines that have already been split.
///
/// # Errors
///
/// Returns [`ParseError`] on a malformed block structure or an unknown verb
/// or property keyword.
pub fn parse_lines<I>(lines: I) -> Result<Vec<Instruction>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    parser::split_blocks(lines)
}
