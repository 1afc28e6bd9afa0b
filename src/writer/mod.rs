//! Applies resolved rules to the game's data files.

mod backup;
mod vfx;

use std::path::{Path, PathBuf};

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{is_rune_key, Catalog};
use crate::datafile;
use crate::types::{ResolvedRule, VisualEffect};

pub use backup::remove_all_rules;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("base type '{0}' has no visual asset")]
    NoAsset(String),

    #[error("malformed asset {path}: {reason}")]
    MalformedAsset { path: PathBuf, reason: &'static str },

    #[error("invalid backup pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Glob(#[from] glob::GlobError),
}

impl WriteError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        WriteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Stages rule effects in memory and writes every touched file on
/// [`finish`](Self::finish).
///
/// Renames go to the string table the base type lives in: rune codes to the
/// rune table, everything else to the item-name table.
pub struct FilterWriter<'c, C: ?Sized> {
    data_dir: PathBuf,
    catalog: &'c C,
    names: Option<Vec<Value>>,
    runes: Option<Vec<Value>>,
    assets: IndexMap<PathBuf, Value>,
}

impl<'c, C: Catalog + ?Sized> FilterWriter<'c, C> {
    pub fn new(data_dir: impl Into<PathBuf>, catalog: &'c C) -> Self {
        Self {
            data_dir: data_dir.into(),
            catalog,
            names: None,
            runes: None,
            assets: IndexMap::new(),
        }
    }

    /// Stage the name change and visual effects of one rule.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError`] if a data file cannot be read or a targeted base
    /// type has no usable asset descriptor.
    pub fn write(&mut self, rule: &ResolvedRule) -> Result<(), WriteError> {
        for base in rule.targets() {
            self.rename(base, rule)?;
            for &effect in &rule.vfx {
                self.add_vfx(base, effect)?;
            }
        }
        Ok(())
    }

    /// Stage every rule in order.
    ///
    /// # Errors
    ///
    /// Stops at the first [`WriteError`].
    pub fn write_all<'r>(
        &mut self,
        rules: impl IntoIterator<Item = &'r ResolvedRule>,
    ) -> Result<(), WriteError> {
        rules.into_iter().try_for_each(|rule| self.write(rule))
    }

    /// Write all staged files, backing each one up first. Returns the paths
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError`] on the first file that cannot be backed up or
    /// written.
    pub fn finish(self) -> Result<Vec<PathBuf>, WriteError> {
        let mut written = Vec::new();
        let tables = [
            (datafile::ITEM_NAMES, self.names),
            (datafile::ITEM_RUNES, self.runes),
        ];
        for (segments, table) in tables {
            if let Some(entries) = table {
                let path = datafile::resolve(&self.data_dir, segments);
                backup::write_with_backup(&path, &Value::Array(entries))?;
                written.push(path);
            }
        }
        for (path, doc) in self.assets {
            backup::write_with_backup(&path, &doc)?;
            written.push(path);
        }
        Ok(written)
    }

    fn rename(&mut self, base: &str, rule: &ResolvedRule) -> Result<(), WriteError> {
        if !rule.changes_names() {
            return Ok(());
        }
        let table = if is_rune_key(base) {
            load_table(&self.data_dir, datafile::ITEM_RUNES, &mut self.runes)?
        } else {
            load_table(&self.data_dir, datafile::ITEM_NAMES, &mut self.names)?
        };

        let entry = table
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|entry| entry.get("Key").and_then(Value::as_str) == Some(base));
        let Some(entry) = entry else {
            debug!(base, "no string table entry to rename");
            return Ok(());
        };
        let current = entry.get("enUS").and_then(Value::as_str).unwrap_or_default();
        if let Some(name) = rule.display_name(current) {
            entry.insert("enUS".to_owned(), Value::String(name));
        }
        Ok(())
    }

    fn add_vfx(&mut self, base: &str, effect: VisualEffect) -> Result<(), WriteError> {
        let catalog = self.catalog;
        let asset = catalog
            .item_asset(base)
            .ok_or_else(|| WriteError::NoAsset(base.to_owned()))?;
        let path = datafile::resolve(&self.data_dir, datafile::ASSET_DIR).join(format!("{asset}.json"));

        let doc = match self.assets.entry(path.clone()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let doc = read_json(e.key())?;
                e.insert(doc)
            }
        };
        vfx::apply(doc, effect).map_err(|reason| WriteError::MalformedAsset { path, reason })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, WriteError> {
    let text = datafile::read_text(path).map_err(|source| WriteError::io(path, source))?;
    serde_json::from_str(&text).map_err(|source| WriteError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn load_table<'t>(
    data_dir: &Path,
    segments: &[&str],
    slot: &'t mut Option<Vec<Value>>,
) -> Result<&'t mut Vec<Value>, WriteError> {
    if slot.is_none() {
        *slot = Some(read_json(&datafile::resolve(data_dir, segments))?);
    }
    Ok(slot.get_or_insert_with(Vec::new))
}
