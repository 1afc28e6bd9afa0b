use thiserror::Error;

use crate::catalog::CatalogError;
use crate::parse::ParseError;
use crate::types::{ConflictError, FormatError};
use crate::writer::WriteError;

/// Unified error type covering every stage from reading a filter to writing
/// game data.
///
/// Returned by convenience methods like
/// [`Filter::from_source()`](crate::Filter::from_source) and
/// [`Filter::from_file()`](crate::Filter::from_file).
#[derive(Debug, Error)]
pub enum LootFilterError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
