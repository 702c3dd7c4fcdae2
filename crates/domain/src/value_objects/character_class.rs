//! Character classes and their starting stat templates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Starting stats granted by a class when an adventurer is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassTemplate {
    /// Base health; used for both current and maximum health.
    pub health: i64,
    pub defense: i64,
    pub attack: i64,
    pub speed: i64,
    /// Avatar image file name under the static images directory.
    pub avatar: &'static str,
}

const GUERRIER: ClassTemplate = ClassTemplate {
    health: 100,
    defense: 45,
    attack: 60,
    speed: 30,
    avatar: "guerrier.jpg",
};

const MAGE: ClassTemplate = ClassTemplate {
    health: 80,
    defense: 40,
    attack: 65,
    speed: 40,
    avatar: "mage.jpg",
};

const ARCHER: ClassTemplate = ClassTemplate {
    health: 90,
    defense: 35,
    attack: 55,
    speed: 50,
    avatar: "archer.jpg",
};

const UNKNOWN: ClassTemplate = ClassTemplate {
    health: 0,
    defense: 0,
    attack: 0,
    speed: 0,
    avatar: "avatar3.jpg",
};

/// Class of an adventurer.
///
/// Any name outside the three known classes is kept verbatim in `Other`
/// and receives the zeroed fallback template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterClass {
    Guerrier,
    Mage,
    Archer,
    Other(String),
}

impl CharacterClass {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Guerrier => "guerrier",
            Self::Mage => "mage",
            Self::Archer => "archer",
            Self::Other(name) => name,
        }
    }

    /// Starting stats for this class.
    pub fn template(&self) -> ClassTemplate {
        match self {
            Self::Guerrier => GUERRIER,
            Self::Mage => MAGE,
            Self::Archer => ARCHER,
            Self::Other(_) => UNKNOWN,
        }
    }
}

impl From<String> for CharacterClass {
    fn from(value: String) -> Self {
        match value.as_str() {
            "guerrier" => Self::Guerrier,
            "mage" => Self::Mage,
            "archer" => Self::Archer,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for CharacterClass {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CharacterClass> for String {
    fn from(class: CharacterClass) -> String {
        match class {
            CharacterClass::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
