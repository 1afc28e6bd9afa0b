mod error;
mod filter;
mod instruction;
mod keyword;
mod rule;

pub use error::{ConflictError, FormatError, FormatErrorKind};
pub use filter::Filter;
pub use instruction::{Instruction, Property};
pub use keyword::{ItemClass, KeywordError, PropertyKind, RelationalOp, Verb, VisualEffect};
pub use rule::{ResolvedRule, BASE_TYPE_PLACEHOLDER};
