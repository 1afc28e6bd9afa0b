use indexmap::IndexSet;
use tracing::debug;

use crate::catalog::{is_rune_key, Catalog, CatalogEntry};
use crate::parse::grammar::{self, LexError};
use crate::types::{
    FormatError, FormatErrorKind, Instruction, ItemClass, PropertyKind, RelationalOp,
    ResolvedRule, Verb, VisualEffect,
};

/// Resolve one instruction against `catalog`.
///
/// Properties are applied in source order. A `Class` property restricts the
/// final base types to that class, whether it comes before or after the
/// `BaseType` lines of the block.
///
/// # Errors
///
/// Returns [`FormatError`] tagged with the block's verb line on the first
/// malformed or unresolvable property.
pub fn evaluate<C>(instruction: &Instruction, catalog: &C) -> Result<ResolvedRule, FormatError>
where
    C: Catalog + ?Sized,
{
    let mut state = RuleState::new(instruction, catalog);
    for prop in &instruction.properties {
        state.apply(prop.kind, &prop.raw)?;
    }
    let rule = state.finish();
    debug!(%rule, "resolved rule");
    Ok(rule)
}

struct RuleState<'a, C: ?Sized> {
    catalog: &'a C,
    source_line: usize,
    verb: Verb,
    base_types: Option<IndexSet<String>>,
    class_bases: Option<IndexSet<String>>,
    rename: Option<String>,
    vfx: Vec<VisualEffect>,
}

impl<'a, C: Catalog + ?Sized> RuleState<'a, C> {
    fn new(instruction: &Instruction, catalog: &'a C) -> Self {
        Self {
            catalog,
            source_line: instruction.source_line,
            verb: instruction.verb,
            base_types: None,
            class_bases: None,
            rename: None,
            vfx: Vec::new(),
        }
    }

    fn error(&self, kind: FormatErrorKind) -> FormatError {
        FormatError::new(self.source_line, kind)
    }

    fn apply(&mut self, kind: PropertyKind, raw: &str) -> Result<(), FormatError> {
        let mut args = raw;
        match kind {
            PropertyKind::BaseType => self.base_type(&mut args),
            PropertyKind::Class => self.class(&mut args),
            PropertyKind::To => self.to(&mut args),
            PropertyKind::AddVfx => self.add_vfx(&mut args),
            PropertyKind::PlaySound => Err(self.error(FormatErrorKind::Unsupported(kind))),
        }
    }

    fn base_type(&mut self, args: &mut &str) -> Result<(), FormatError> {
        let op = grammar::relational_op(args);
        let mut next = Some(self.required(PropertyKind::BaseType, args)?);
        while let Some(fragment) = next {
            let keys = resolve_fragment(self.catalog, fragment, op);
            if keys.is_empty() {
                return Err(self.error(FormatErrorKind::NoBaseTypeMatch(fragment.to_owned())));
            }
            self.base_types
                .get_or_insert_with(IndexSet::new)
                .extend(keys.into_iter().map(str::to_owned));
            next = self.optional(args)?;
        }
        self.no_trailing(PropertyKind::BaseType, args)
    }

    fn class(&mut self, args: &mut &str) -> Result<(), FormatError> {
        let mut next = Some(self.required(PropertyKind::Class, args)?);
        while let Some(name) = next {
            let class = name
                .parse::<ItemClass>()
                .map_err(|_| self.error(FormatErrorKind::InvalidClass(name.to_owned())))?;
            let bases = self.class_bases.get_or_insert_with(IndexSet::new);
            if let Some(members) = self.catalog.class_bases(class) {
                bases.extend(members.iter().cloned());
            }
            next = self.optional(args)?;
        }
        self.no_trailing(PropertyKind::Class, args)
    }

    fn to(&mut self, args: &mut &str) -> Result<(), FormatError> {
        if self.verb != Verb::Rename {
            return Err(self.error(FormatErrorKind::ToOutsideRename));
        }
        let text = self.required(PropertyKind::To, args)?;
        self.no_trailing(PropertyKind::To, args)?;
        self.rename = Some(text.to_owned());
        Ok(())
    }

    fn add_vfx(&mut self, args: &mut &str) -> Result<(), FormatError> {
        let name = grammar::bare_arg(args)
            .map_err(|e| self.error(lex_error_kind(e)))?
            .ok_or_else(|| self.error(FormatErrorKind::MissingArgument(PropertyKind::AddVfx)))?;
        let vfx = name
            .parse::<VisualEffect>()
            .map_err(|_| self.error(FormatErrorKind::InvalidVfx(name.to_owned())))?;
        self.no_trailing(PropertyKind::AddVfx, args)?;
        self.vfx.push(vfx);
        Ok(())
    }

    /// Next argument of a list. An empty argument ends the list.
    fn optional<'i>(&self, args: &mut &'i str) -> Result<Option<&'i str>, FormatError> {
        grammar::string_arg(args, true).map_err(|e| self.error(lex_error_kind(e)))
    }

    fn required<'i>(&self, kind: PropertyKind, args: &mut &'i str) -> Result<&'i str, FormatError> {
        grammar::string_arg(args, false)
            .map_err(|e| self.error(lex_error_kind(e)))?
            .ok_or_else(|| self.error(FormatErrorKind::MissingArgument(kind)))
    }

    fn no_trailing(&self, property: PropertyKind, args: &mut &str) -> Result<(), FormatError> {
        match grammar::remainder(args) {
            Some(rest) => Err(self.error(FormatErrorKind::TrailingData {
                property,
                rest: rest.to_owned(),
            })),
            None => Ok(()),
        }
    }

    fn finish(self) -> ResolvedRule {
        let base_types = match (self.base_types, self.class_bases) {
            (Some(explicit), Some(class)) => Some(
                explicit
                    .into_iter()
                    .filter(|base| class.contains(base))
                    .collect(),
            ),
            (None, Some(class)) => Some(class),
            (explicit, None) => explicit,
        };
        ResolvedRule {
            source_line: self.source_line,
            verb: self.verb,
            base_types,
            rename: self.rename,
            vfx: self.vfx,
        }
    }
}

fn lex_error_kind(err: LexError) -> FormatErrorKind {
    match err {
        LexError::UnterminatedQuote => FormatErrorKind::UnterminatedQuote,
        LexError::MissingSpaceAfterQuote => FormatErrorKind::MissingSpaceAfterQuote,
        LexError::EmptyArgument => FormatErrorKind::EmptyArgument,
    }
}

fn entry_matches(entry: &CatalogEntry, fragment: &str, op: Option<RelationalOp>) -> bool {
    match op {
        Some(RelationalOp::Equal) => entry.en_us == fragment,
        None => entry.en_us.contains(fragment),
    }
}

/// Keys of every name-table entry and rune-table rune matching `fragment`.
fn resolve_fragment<'c, C>(catalog: &'c C, fragment: &str, op: Option<RelationalOp>) -> Vec<&'c str>
where
    C: Catalog + ?Sized,
{
    let runes = catalog.item_runes().iter().filter(|e| is_rune_key(&e.key));
    catalog
        .item_names()
        .iter()
        .chain(runes)
        .filter(|e| entry_matches(e, fragment, op))
        .map(|e| e.key.as_str())
        .collect()
}
