//! Compiles an indentation-based loot filter language into edits of game
//! data files.
//!
//! The pipeline is [`parse`] (blocks of text into [`Instruction`]s),
//! [`evaluate`] (instructions into [`ResolvedRule`]s against a [`Catalog`]),
//! [`validate`] (no base type claimed twice) and finally [`FilterWriter`].
//! [`Filter`] runs the first three stages in one call.

mod catalog;
mod datafile;
mod error;
mod evaluate;
mod parse;
mod types;
mod validate;
mod writer;

pub use catalog::{is_rune_key, Catalog, CatalogEntry, CatalogError, GameCatalog, MemoryCatalog};
pub use datafile::BACKUP_SUFFIX;
pub use error::LootFilterError;
pub use evaluate::evaluate;
pub use parse::{parse, parse_lines, ParseError, ParseErrorKind};
pub use types::{
    ConflictError, Filter, FormatError, FormatErrorKind, Instruction, ItemClass, KeywordError,
    Property, PropertyKind, RelationalOp, ResolvedRule, Verb, VisualEffect,
    BASE_TYPE_PLACEHOLDER,
};
pub use validate::validate;
pub use writer::{remove_all_rules, FilterWriter, WriteError};
