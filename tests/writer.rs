use std::fs;
use std::path::{Path, PathBuf};

use d2lootfilter::{remove_all_rules, Filter, FilterWriter, GameCatalog, WriteError, BACKUP_SUFFIX};
use serde_json::Value;

const NAMES: &str = r#"[
  {"id": 1, "Key": "cap", "enUS": "Cap"},
  {"id": 2, "Key": "xap", "enUS": "War Cap"},
  {"id": 3, "Key": "lgl", "enUS": "Leather Gloves"}
]"#;

const RUNES: &str = r#"[
  {"id": 10, "Key": "r01", "enUS": "El Rune"},
  {"id": 11, "Key": "r02", "enUS": "Eld Rune"},
  {"id": 12, "Key": "Runeword1", "enUS": "Ancient's Pledge"}
]"#;

const ARMOR: &str = "name\tversion\tcode\nCap\t0\tcap\nWar Cap\t100\txap\nLeather Gloves\t0\tlgl\n";

const ASSETS: &str = r#"[{"cap": {"asset": "helmet/cap"}}, {"r01": {"asset": "rune/el_rune"}}]"#;

const DESCRIPTOR: &str = r#"{
  "dependencies": {"particles": [], "models": []},
  "entities": [{"type": "Entity", "name": "droplight", "id": 1}]
}"#;

fn write(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

fn game_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "local/lng/strings/item-names.json", &format!("\u{feff}{NAMES}"));
    write(root, "local/lng/strings/item-runes.json", &format!("\u{feff}{RUNES}"));
    write(root, "global/excel/armor.txt", ARMOR);
    write(root, "hd/items/items.json", ASSETS);
    write(root, "hd/items/helmet/cap.json", DESCRIPTOR);
    write(root, "hd/items/rune/el_rune.json", DESCRIPTOR);
    dir
}

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).unwrap();
    serde_json::from_str(text.trim_start_matches('\u{feff}')).unwrap()
}

fn apply(root: &Path, src: &str) -> Result<Vec<PathBuf>, WriteError> {
    let catalog = GameCatalog::load(root).unwrap();
    let filter = Filter::from_source(src, &catalog).unwrap();
    let mut writer = FilterWriter::new(root, &catalog);
    writer.write_all(filter.rules())?;
    writer.finish()
}

const FILTER: &str = "\
Rename
    BaseType == Cap
    To \"+ $BaseType$ +\"
    AddVfx Beam

Hide
    Class Gloves

Rename
    Class Rune
    BaseType \"El Rune\"
    To \"[$BaseType$]\"
    AddVfx Glitter
";

#[test]
fn apply_and_remove_filter() {
    let dir = game_dir();
    let root = dir.path();
    let names_path = root.join("local/lng/strings/item-names.json");
    let runes_path = root.join("local/lng/strings/item-runes.json");
    let cap_path = root.join("hd/items/helmet/cap.json");
    let rune_path = root.join("hd/items/rune/el_rune.json");
    let original_names = fs::read(&names_path).unwrap();

    let written = apply(root, FILTER).unwrap();
    assert_eq!(written, [names_path.clone(), runes_path.clone(), cap_path.clone(), rune_path.clone()]);

    let names = read_json(&names_path);
    assert_eq!(names[0]["enUS"], "+ Cap +");
    assert_eq!(names[1]["enUS"], "War Cap");
    assert_eq!(names[2]["enUS"], "");
    assert_eq!(names[2]["id"], 3);

    let runes = read_json(&runes_path);
    assert_eq!(runes[0]["enUS"], "[El Rune]");
    assert_eq!(runes[1]["enUS"], "Eld Rune");

    let cap = read_json(&cap_path);
    assert_eq!(cap["entities"][1]["name"], "entity_beam");
    assert_eq!(cap["dependencies"]["particles"].as_array().unwrap().len(), 1);
    let rune = read_json(&rune_path);
    assert_eq!(rune["entities"][1]["name"], "entity_glitter");

    for path in &written {
        let mut backup = path.clone().into_os_string();
        backup.push(format!(".{BACKUP_SUFFIX}"));
        assert!(Path::new(&backup).exists(), "no backup for {}", path.display());
    }

    let restored = remove_all_rules(root).unwrap();
    assert_eq!(restored.len(), 4);
    assert_eq!(fs::read(&names_path).unwrap(), original_names);
    assert_eq!(fs::read_to_string(&cap_path).unwrap(), DESCRIPTOR);
}

#[test]
fn reapplying_keeps_first_backup() {
    let dir = game_dir();
    let root = dir.path();
    let names_path = root.join("local/lng/strings/item-names.json");
    let backup_path = root.join(format!("local/lng/strings/item-names.json.{BACKUP_SUFFIX}"));
    let original_names = fs::read(&names_path).unwrap();

    apply(root, "Hide\n    BaseType \"War Cap\"\n").unwrap();
    assert_eq!(fs::read(&backup_path).unwrap(), original_names);

    // A second run starts from the restored files, like the binary does.
    remove_all_rules(root).unwrap();
    assert!(!backup_path.exists());
    apply(root, "Rename\n    BaseType \"War Cap\"\n    To \"x\"\n").unwrap();
    assert_eq!(read_json(&names_path)[1]["enUS"], "x");
    assert_eq!(fs::read(&backup_path).unwrap(), original_names);

    // Writing again without restoring keeps the pristine backup.
    let catalog = GameCatalog::load(root).unwrap();
    let filter = Filter::from_source("Hide\n    BaseType Gloves\n", &catalog).unwrap();
    let mut writer = FilterWriter::new(root, &catalog);
    writer.write_all(filter.rules()).unwrap();
    writer.finish().unwrap();
    assert_eq!(fs::read(&backup_path).unwrap(), original_names);

    remove_all_rules(root).unwrap();
    assert_eq!(fs::read(&names_path).unwrap(), original_names);
}

#[test]
fn vfx_without_asset_fails() {
    let dir = game_dir();
    let err = apply(dir.path(), "Show\n    BaseType \"War Cap\"\n    AddVfx Flash\n").unwrap_err();
    assert!(matches!(err, WriteError::NoAsset(ref base) if base == "xap"));
    assert!(remove_all_rules(dir.path()).unwrap().is_empty());
}

#[test]
fn remove_on_clean_directory_is_a_no_op() {
    let dir = game_dir();
    assert!(remove_all_rules(dir.path()).unwrap().is_empty());
}
