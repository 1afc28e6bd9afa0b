use crate::types::{Instruction, Property, PropertyKind, Verb};

use super::error::{ParseError, ParseErrorKind};

enum Line<'a> {
    /// Empty or `#` comment. Closes the open block.
    Break,
    /// Indented, including whitespace-only lines; holds the text after the
    /// indentation.
    Property(&'a str),
    Verb(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() || line.starts_with('#') {
        Line::Break
    } else if line.starts_with([' ', '\t']) {
        Line::Property(line.trim_start())
    } else {
        Line::Verb(line)
    }
}

/// Group raw lines into one [`Instruction`] per verb block.
pub(crate) fn split_blocks<I>(lines: I) -> Result<Vec<Instruction>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut instructions = Vec::new();
    let mut open: Option<Instruction> = None;

    for (index, line) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        match classify(line.as_ref()) {
            Line::Break => {
                if let Some(instr) = open.take() {
                    instructions.push(instr);
                }
            }
            Line::Property(text) => {
                let Some(instr) = open.as_mut() else {
                    return Err(ParseError::new(line_no, ParseErrorKind::OrphanProperty));
                };
                let (keyword, raw) = text.split_once(' ').unwrap_or((text, ""));
                let kind = keyword.parse::<PropertyKind>().map_err(|_| {
                    ParseError::new(line_no, ParseErrorKind::InvalidProperty(keyword.to_owned()))
                })?;
                instr.properties.push(Property::new(kind, raw));
            }
            Line::Verb(text) => {
                if open.is_some() {
                    return Err(ParseError::new(
                        line_no,
                        ParseErrorKind::ExpectedIndentation,
                    ));
                }
                let verb = text.parse::<Verb>().map_err(|_| {
                    ParseError::new(line_no, ParseErrorKind::InvalidVerb(text.to_owned()))
                })?;
                open = Some(Instruction::new(line_no, verb));
            }
        }
    }

    instructions.extend(open);
    Ok(instructions)
}
