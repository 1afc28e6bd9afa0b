use std::fmt;

use indexmap::IndexSet;

use super::keyword::{Verb, VisualEffect};

/// Placeholder in a rename template that the writer replaces with the item's
/// current name.
pub const BASE_TYPE_PLACEHOLDER: &str = "$BaseType$";

/// The result of evaluating one [`Instruction`](super::Instruction) against a
/// catalog.
///
/// `base_types` is `None` when the block named neither `BaseType` nor `Class`,
/// meaning the rule targets nothing specific. When both were present the set is
/// already the intersection of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRule {
    pub source_line: usize,
    pub verb: Verb,
    pub base_types: Option<IndexSet<String>>,
    pub rename: Option<String>,
    pub vfx: Vec<VisualEffect>,
}

impl ResolvedRule {
    pub fn new(source_line: usize, verb: Verb) -> Self {
        Self {
            source_line,
            verb,
            base_types: None,
            rename: None,
            vfx: Vec::new(),
        }
    }

    /// Iterate the targeted base-type identifiers. Empty when unconstrained.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.base_types.iter().flatten().map(String::as_str)
    }

    #[must_use]
    pub fn targets_base_type(&self, base_type: &str) -> bool {
        self.base_types
            .as_ref()
            .is_some_and(|set| set.contains(base_type))
    }

    /// Whether applying this rule rewrites item names.
    #[must_use]
    pub fn changes_names(&self) -> bool {
        match self.verb {
            Verb::Rename => self.rename.is_some(),
            Verb::Hide => true,
            Verb::Show => false,
        }
    }

    /// Name the writer should give an item currently called `current`, or
    /// `None` if this rule leaves names alone.
    #[must_use]
    pub fn display_name(&self, current: &str) -> Option<String> {
        match self.verb {
            Verb::Rename => self
                .rename
                .as_deref()
                .map(|template| template.replace(BASE_TYPE_PLACEHOLDER, current)),
            Verb::Hide => Some(String::new()),
            Verb::Show => None,
        }
    }
}

impl fmt::Display for ResolvedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.base_types.as_ref().map_or(0, IndexSet::len);
        write!(
            f,
            "{} @ line {} ({} base types",
            self.verb, self.source_line, count
        )?;
        if let Some(rename) = &self.rename {
            write!(f, ", to {rename:?}")?;
        }
        for vfx in &self.vfx {
            write!(f, ", +{vfx}")?;
        }
        write!(f, ")")
    }
}
