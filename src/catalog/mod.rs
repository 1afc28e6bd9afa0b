//! Read-only reference data the evaluator resolves names against.

mod error;
mod game;
mod memory;

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use serde::Deserialize;

use crate::types::ItemClass;

pub use error::CatalogError;
pub use game::GameCatalog;
pub use memory::MemoryCatalog;

static RUNE_KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^r[0-9]{2}$").unwrap());

/// One localized string table row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "enUS", default)]
    pub en_us: String,
}

impl CatalogEntry {
    pub fn new(key: impl Into<String>, en_us: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            en_us: en_us.into(),
        }
    }
}

/// Lookup service consulted while evaluating rules.
///
/// Implementations must not change for the duration of a parse and evaluate
/// pass.
pub trait Catalog {
    /// The item-name string table.
    fn item_names(&self) -> &[CatalogEntry];

    /// The rune string table. Only entries whose key is a rune code count as
    /// base types.
    fn item_runes(&self) -> &[CatalogEntry];

    /// Base types belonging to `class`, or `None` if the class has no members.
    fn class_bases(&self, class: ItemClass) -> Option<&IndexSet<String>>;

    /// Relative visual-asset name of a base type (e.g. `helmet/cap`).
    fn item_asset(&self, _base_type: &str) -> Option<&str> {
        None
    }
}

/// True for rune base-type codes: `r` followed by exactly two digits.
#[must_use]
pub fn is_rune_key(key: &str) -> bool {
    RUNE_KEY_RE.is_match(key)
}

/// All rune codes, `r01` through `r33`.
pub(crate) fn rune_codes() -> impl Iterator<Item = String> {
    (1..=33).map(|i| format!("r{i:02}"))
}
