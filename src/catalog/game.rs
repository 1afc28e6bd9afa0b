use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexSet;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{info, warn};

use crate::datafile;
use crate::types::ItemClass;

use super::{rune_codes, Catalog, CatalogEntry, CatalogError};

/// Catalog loaded from a game data directory.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    names: Vec<CatalogEntry>,
    runes: Vec<CatalogEntry>,
    classes: HashMap<ItemClass, IndexSet<String>>,
    assets: HashMap<String, String>,
}

/// The two columns read from an excel table. Short rows leave the missing
/// fields empty.
#[derive(Debug)]
struct ExcelRow {
    name: String,
    code: String,
}

#[derive(Debug, Deserialize)]
struct AssetRef {
    asset: String,
}

impl GameCatalog {
    /// Load the string tables, the item class tables and the asset index from
    /// `data_dir`.
    ///
    /// `misc.txt` and `hd/items/items.json` are optional; without them the
    /// Ring and Amulet classes stay empty and no base type has an asset.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] naming the file that could not be read or
    /// decoded.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let data_dir = data_dir.as_ref();
        let mut catalog = Self {
            names: read_json(data_dir, datafile::ITEM_NAMES)?,
            runes: read_json(data_dir, datafile::ITEM_RUNES)?,
            ..Self::default()
        };

        for row in read_table(data_dir, datafile::ARMOR_TABLE)? {
            catalog.insert_class(classify_armor(&row.name), row.code);
        }

        if datafile::resolve(data_dir, datafile::MISC_TABLE).is_file() {
            for row in read_table(data_dir, datafile::MISC_TABLE)? {
                if let Some(class) = classify_misc(&row.code) {
                    catalog.insert_class(class, row.code);
                }
            }
        }

        catalog
            .classes
            .entry(ItemClass::Rune)
            .or_default()
            .extend(rune_codes());

        if datafile::resolve(data_dir, datafile::ITEM_ASSETS).is_file() {
            let index: Vec<HashMap<String, AssetRef>> = read_json(data_dir, datafile::ITEM_ASSETS)?;
            catalog.assets = index
                .into_iter()
                .flatten()
                .map(|(code, asset)| (code, asset.asset))
                .collect();
        }

        info!(
            names = catalog.names.len(),
            runes = catalog.runes.len(),
            assets = catalog.assets.len(),
            "loaded game catalog from {}",
            data_dir.display()
        );
        Ok(catalog)
    }

    fn insert_class(&mut self, class: ItemClass, code: String) {
        if code.is_empty() {
            warn!(?class, "skipping table row without a code");
            return;
        }
        self.classes.entry(class).or_default().insert(code);
    }
}

impl Catalog for GameCatalog {
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

/// Guess an armor row's class from its English name.
fn classify_armor(name: &str) -> ItemClass {
    let has = |words: &[&str]| words.iter().any(|w| name.contains(w));
    if has(&["Cap", "Helm"]) {
        ItemClass::Helmet
    } else if has(&["Armor", "Mail", "Plate"]) {
        ItemClass::Chest
    } else if has(&["Shield", "Buckler"]) {
        ItemClass::Shield
    } else if has(&["Gloves"]) {
        ItemClass::Gloves
    } else if has(&["Boots"]) {
        ItemClass::Boots
    } else if has(&["Belt"]) {
        ItemClass::Belt
    } else {
        ItemClass::Unknown
    }
}

fn classify_misc(code: &str) -> Option<ItemClass> {
    match code {
        "rin" => Some(ItemClass::Ring),
        "amu" => Some(ItemClass::Amulet),
        _ => None,
    }
}

fn read_json<T: DeserializeOwned>(data_dir: &Path, segments: &[&str]) -> Result<T, CatalogError> {
    let path = datafile::resolve(data_dir, segments);
    let text = datafile::read_text(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Json { path, source })
}

fn read_table(data_dir: &Path, segments: &[&str]) -> Result<Vec<ExcelRow>, CatalogError> {
    let path = datafile::resolve(data_dir, segments);
    let table_error = |source| CatalogError::Table {
        path: path.clone(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_path(&path)
        .map_err(table_error)?;

    let headers = reader.headers().map_err(table_error)?;
    let column = |wanted: &'static str| {
        headers
            .iter()
            .position(|header| header == wanted)
            .ok_or_else(|| CatalogError::MissingColumn {
                path: path.clone(),
                column: wanted,
            })
    };
    let name = column("name")?;
    let code = column("code")?;

    reader
        .records()
        .map(|record| {
            let record = record.map_err(table_error)?;
            let field = |index| record.get(index).unwrap_or_default().to_owned();
            Ok(ExcelRow {
                name: field(name),
                code: field(code),
            })
        })
        .collect()
}
