use std::fmt;
use std::path::Path;

use tracing::info;

use crate::catalog::Catalog;

use super::rule::ResolvedRule;

/// A fully evaluated and validated filter: every block resolved against a
/// catalog, with no base type claimed twice.
///
/// # Example
///
/// ```
/// use d2lootfilter::{Filter, MemoryCatalog};
///
/// let catalog = MemoryCatalog::new()
///     .with_name("cap", "Cap")
///     .with_name("xap", "War Cap");
///
/// let filter = Filter::from_source("Show\n    BaseType == \"Cap\"\n", &catalog).unwrap();
/// assert_eq!(filter.rules()[0].targets().collect::<Vec<_>>(), ["cap"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    rules: Vec<ResolvedRule>,
}

impl Filter {
    /// Parse, evaluate and validate filter source text.
    ///
    /// Stops at the first error: a filter is either complete or not built at
    /// all.
    ///
    /// # Errors
    ///
    /// Returns [`LootFilterError`](crate::LootFilterError) on parse, format or
    /// conflict failure.
    pub fn from_source<C>(input: &str, catalog: &C) -> Result<Self, crate::LootFilterError>
    where
        C: Catalog + ?Sized,
    {
        let instructions = crate::parse::parse(input)?;
        let rules = instructions
            .iter()
            .map(|instr| crate::evaluate::evaluate(instr, catalog))
            .collect::<Result<Vec<_>, _>>()?;
        crate::validate::validate(&rules)?;
        Ok(Self { rules })
    }

    /// Read a filter file and build it with [`from_source`](Self::from_source).
    ///
    /// # Errors
    ///
    /// Returns [`LootFilterError`](crate::LootFilterError) on I/O, parse,
    /// format or conflict failure.
    pub fn from_file<C>(path: impl AsRef<Path>, catalog: &C) -> Result<Self, crate::LootFilterError>
    where
        C: Catalog + ?Sized,
    {
        let path = path.as_ref();
        let input = crate::datafile::read_text(path)?;
        let filter = Self::from_source(&input, catalog)?;
        info!("{filter} from {}", path.display());
        Ok(filter)
    }

    /// Resolved rules in source order.
    #[must_use]
    pub fn rules(&self) -> &[ResolvedRule] {
        &self.rules
    }

    #[must_use]
    pub fn into_rules(self) -> Vec<ResolvedRule> {
        self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let targets: usize = self.rules.iter().map(|r| r.targets().count()).sum();
        write!(f, "Filter({} rules, {} base types)", self.rules.len(), targets)
    }
}
