use std::collections::HashMap;

use indexmap::IndexSet;

use crate::types::ItemClass;

use super::{rune_codes, Catalog, CatalogEntry};

/// In-memory catalog assembled with builder calls.
///
/// # Example
///
/// ```
/// use d2lootfilter::{Catalog, ItemClass, MemoryCatalog};
///
/// let catalog = MemoryCatalog::new()
///     .with_name("cap", "Cap")
///     .with_name("xap", "War Cap")
///     .with_class(ItemClass::Helmet, ["cap", "xap"]);
///
/// assert_eq!(catalog.item_names().len(), 2);
/// assert!(catalog.class_bases(ItemClass::Helmet).unwrap().contains("xap"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    names: Vec<CatalogEntry>,
    runes: Vec<CatalogEntry>,
    classes: HashMap<ItemClass, IndexSet<String>>,
    assets: HashMap<String, String>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item-name table row.
    #[must_use]
    pub fn with_name(mut self, key: &str, en_us: &str) -> Self {
        self.names.push(CatalogEntry::new(key, en_us));
        self
    }

    /// Add a rune table row.
    #[must_use]
    pub fn with_rune(mut self, key: &str, en_us: &str) -> Self {
        self.runes.push(CatalogEntry::new(key, en_us));
        self
    }

    /// Add base types to a class.
    #[must_use]
    pub fn with_class<I, S>(mut self, class: ItemClass, bases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes
            .entry(class)
            .or_default()
            .extend(bases.into_iter().map(Into::into));
        self
    }

    /// Register `r01`..`r33` as the members of [`ItemClass::Rune`].
    #[must_use]
    pub fn with_rune_class(self) -> Self {
        self.with_class(ItemClass::Rune, rune_codes())
    }

    /// Map a base type to its visual asset.
    #[must_use]
    pub fn with_asset(mut self, base_type: &str, asset: &str) -> Self {
        self.assets.insert(base_type.to_owned(), asset.to_owned());
        self
    }
}

impl Catalog for MemoryCatalog {
    fn item_names(&self) -> &[CatalogEntry] {
        &self.names
    }

    fn item_runes(&self) -> &[CatalogEntry] {
        &self.runes
    }

    fn class_bases(&self, class: ItemClass) -> Option<&IndexSet<String>> {
        self.classes.get(&class)
    }

    fn item_asset(&self, base_type: &str) -> Option<&str> {
        self.assets.get(base_type).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog() {
        let catalog = MemoryCatalog::new();
        assert!(catalog.item_names().is_empty());
        assert!(catalog.class_bases(ItemClass::Rune).is_none());
        assert_eq!(catalog.item_asset("cap"), None);
    }

    #[test]
    fn with_class_accumulates() {
        let catalog = MemoryCatalog::new()
            .with_class(ItemClass::Belt, ["lbl"])
            .with_class(ItemClass::Belt, ["vbl", "lbl"]);
        let belts = catalog.class_bases(ItemClass::Belt).unwrap();
        assert_eq!(belts.len(), 2);
    }

    #[test]
    fn rune_class_has_33_members() {
        let catalog = MemoryCatalog::new().with_rune_class();
        assert_eq!(catalog.class_bases(ItemClass::Rune).unwrap().len(), 33);
    }
}
