//! Argument lexing for property lines.
//!
//! Property arguments are a run of quoted strings or bare tokens separated by
//! spaces. Each property handler pulls arguments one at a time from the raw
//! text and decides for itself how many it expects.

use winnow::combinator::{alt, delimited, eof, peek};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{take_till, take_while};

use crate::types::RelationalOp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexError {
    UnterminatedQuote,
    MissingSpaceAfterQuote,
    EmptyArgument,
}

// -- Primitives -------------------------------------------------------------

fn skip_blanks(input: &mut &str) {
    let _: ModalResult<&str> =
        take_while(0.., |c: char| c == ' ' || c == '\t').parse_next(input);
}

fn bare<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_till(0.., ' ').parse_next(input)
}

fn quoted<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('"', take_till(0.., '"'), '"').parse_next(input)
}

/// A closing quote must be followed by a space or the end of the text.
fn quote_boundary(input: &mut &str) -> ModalResult<()> {
    alt((eof.void(), peek(' ').void())).parse_next(input)
}

fn non_empty(arg: &str, optional: bool) -> Result<Option<&str>, LexError> {
    let arg = arg.trim();
    match (arg.is_empty(), optional) {
        (false, _) => Ok(Some(arg)),
        (true, true) => Ok(None),
        (true, false) => Err(LexError::EmptyArgument),
    }
}

// -- Arguments --------------------------------------------------------------

/// Consume the next quote-aware argument.
///
/// Returns `Ok(None)` when nothing but blanks remains. With `optional` set an
/// empty argument such as `""` also yields `Ok(None)`; otherwise it is
/// [`LexError::EmptyArgument`].
pub(crate) fn string_arg<'i>(
    input: &mut &'i str,
    optional: bool,
) -> Result<Option<&'i str>, LexError> {
    skip_blanks(input);
    if input.is_empty() {
        return Ok(None);
    }
    if input.starts_with('"') {
        let body = quoted
            .parse_next(input)
            .map_err(|_| LexError::UnterminatedQuote)?;
        quote_boundary
            .parse_next(input)
            .map_err(|_| LexError::MissingSpaceAfterQuote)?;
        non_empty(body, optional)
    } else {
        let token = bare.parse_next(input).map_err(|_| LexError::EmptyArgument)?;
        non_empty(token, optional)
    }
}

/// Consume the next bare token, treating quotes as ordinary characters.
pub(crate) fn bare_arg<'i>(input: &mut &'i str) -> Result<Option<&'i str>, LexError> {
    skip_blanks(input);
    if input.is_empty() {
        return Ok(None);
    }
    let token = bare.parse_next(input).map_err(|_| LexError::EmptyArgument)?;
    non_empty(token, false)
}

/// Consume a leading relational operator token if there is one. The operator
/// must stand alone: `==Cap` is an argument, not an operator.
pub(crate) fn relational_op(input: &mut &str) -> Option<RelationalOp> {
    let checkpoint = input.checkpoint();
    skip_blanks(input);
    let op = bare
        .parse_next(input)
        .ok()
        .and_then(|token| token.parse::<RelationalOp>().ok());
    if op.is_none() {
        input.reset(&checkpoint);
    }
    op
}

/// Whatever is left after the expected arguments, if anything but blanks.
pub(crate) fn remainder<'i>(input: &mut &'i str) -> Option<&'i str> {
    skip_blanks(input);
    let rest: &'i str = *input;
    let rest = rest.trim_end();
    (!rest.is_empty()).then_some(rest)
}
