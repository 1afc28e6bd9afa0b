use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Returned when a keyword in filter source text does not name a known
/// enumeration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {expected} '{found}'")]
pub struct KeywordError {
    pub expected: &'static str,
    pub found: String,
}

impl KeywordError {
    fn new(expected: &'static str, found: &str) -> Self {
        Self {
            expected,
            found: found.to_owned(),
        }
    }
}

/// Top-level action of a filter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Show,
    Hide,
    Rename,
}

/// Indented parameter attached to a verb block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    BaseType,
    Class,
    /// Only valid under [`Verb::Rename`].
    To,
    AddVfx,
    /// Reserved. Evaluating it always fails.
    PlaySound,
}

/// Operators accepted in front of `BaseType` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationalOp {
    /// `==`: the fragment must equal the catalog text exactly.
    Equal,
}

/// Item grouping tag mapping to a set of base types in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemClass {
    Unknown,
    Helmet,
    Chest,
    Gloves,
    Shield,
    Boots,
    Ring,
    Amulet,
    Belt,
    Rune,
}

/// Visual effect tag attached to a rule and turned into asset entities by the
/// writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualEffect {
    Beam,
    Glitter,
    Flash,
}

impl Verb {
    pub const ALL: [Verb; 3] = [Verb::Show, Verb::Hide, Verb::Rename];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Show => "Show",
            Verb::Hide => "Hide",
            Verb::Rename => "Rename",
        }
    }
}

impl PropertyKind {
    pub const ALL: [PropertyKind; 5] = [
        PropertyKind::BaseType,
        PropertyKind::Class,
        PropertyKind::To,
        PropertyKind::AddVfx,
        PropertyKind::PlaySound,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::BaseType => "BaseType",
            PropertyKind::Class => "Class",
            PropertyKind::To => "To",
            PropertyKind::AddVfx => "AddVfx",
            PropertyKind::PlaySound => "PlaySound",
        }
    }
}

impl RelationalOp {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RelationalOp::Equal => "==",
        }
    }
}

impl ItemClass {
    pub const ALL: [ItemClass; 10] = [
        ItemClass::Unknown,
        ItemClass::Helmet,
        ItemClass::Chest,
        ItemClass::Gloves,
        ItemClass::Shield,
        ItemClass::Boots,
        ItemClass::Ring,
        ItemClass::Amulet,
        ItemClass::Belt,
        ItemClass::Rune,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemClass::Unknown => "N/A",
            ItemClass::Helmet => "Helmet",
            ItemClass::Chest => "Chest",
            ItemClass::Gloves => "Gloves",
            ItemClass::Shield => "Shield",
            ItemClass::Boots => "Boots",
            ItemClass::Ring => "Ring",
            ItemClass::Amulet => "Amulet",
            ItemClass::Belt => "Belt",
            ItemClass::Rune => "Rune",
        }
    }
}

impl VisualEffect {
    pub const ALL: [VisualEffect; 3] = [
        VisualEffect::Beam,
        VisualEffect::Glitter,
        VisualEffect::Flash,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VisualEffect::Beam => "Beam",
            VisualEffect::Glitter => "Glitter",
            VisualEffect::Flash => "Flash",
        }
    }
}

impl FromStr for Verb {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| KeywordError::new("verb", s))
    }
}

impl FromStr for PropertyKind {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyKind::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| KeywordError::new("property", s))
    }
}

impl FromStr for RelationalOp {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" => Ok(RelationalOp::Equal),
            other => Err(KeywordError::new("relational operator", other)),
        }
    }
}

impl FromStr for ItemClass {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemClass::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| KeywordError::new("class", s))
    }
}

impl FromStr for VisualEffect {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VisualEffect::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| KeywordError::new("vfx", s))
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RelationalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VisualEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
