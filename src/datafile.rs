//! Locations and encoding of the game data files this crate reads and writes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

pub(crate) const ITEM_NAMES: &[&str] = &["local", "lng", "strings", "item-names.json"];
pub(crate) const ITEM_RUNES: &[&str] = &["local", "lng", "strings", "item-runes.json"];
pub(crate) const ARMOR_TABLE: &[&str] = &["global", "excel", "armor.txt"];
pub(crate) const MISC_TABLE: &[&str] = &["global", "excel", "misc.txt"];
pub(crate) const ITEM_ASSETS: &[&str] = &["hd", "items", "items.json"];
pub(crate) const ASSET_DIR: &[&str] = &["hd", "items"];

/// Suffix of the pristine copy kept next to every file the writer touches.
pub const BACKUP_SUFFIX: &str = "d2lootfilter";

const BOM: char = '\u{feff}';

pub(crate) fn resolve(data_dir: &Path, segments: &[&str]) -> PathBuf {
    segments
        .iter()
        .fold(data_dir.to_path_buf(), |path, segment| path.join(segment))
}

/// Read a text file, dropping a leading UTF-8 byte order mark.
pub(crate) fn read_text(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(match text.strip_prefix(BOM) {
        Some(stripped) => stripped.to_owned(),
        None => text,
    })
}

/// Write `value` as 2-space indented JSON preceded by a byte order mark, the
/// encoding the game ships its string tables in.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let body = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    let mut text = String::with_capacity(body.len() + BOM.len_utf8());
    text.push(BOM);
    text.push_str(&body);
    fs::write(path, text)
}

/// Path of the backup kept for `path`.
pub(crate) fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}
