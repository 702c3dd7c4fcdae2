//! Adventurer entity - a character record on the roster
//!
//! Stats are derived from the class template once, at creation. There is no
//! operation that edits an adventurer in place; the only way to change one is
//! to remove it and create a new record.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::AdventurerId;
use crate::value_objects::{AdventurerName, CharacterClass};

/// Validated creation input, as submitted through the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdventurerDraft {
    name: AdventurerName,
    class: CharacterClass,
    level: i64,
}

impl AdventurerDraft {
    pub fn new(name: AdventurerName, class: CharacterClass, level: i64) -> Self {
        Self { name, class, level }
    }

    /// Validate raw form values.
    ///
    /// # Errors
    ///
    /// - `DomainError::Validation` if `name` or `class` is empty
    /// - `DomainError::Parse` if `level` is not an integer
    pub fn from_form(name: &str, class: &str, level: &str) -> Result<Self, DomainError> {
        let name = AdventurerName::new(name)?;
        if class.is_empty() {
            return Err(DomainError::validation("Adventurer class cannot be empty"));
        }
        let level = level
            .parse::<i64>()
            .map_err(|_| DomainError::parse(format!("Invalid level: {level:?}")))?;

        Ok(Self::new(name, CharacterClass::from(class), level))
    }

    pub fn name(&self) -> &AdventurerName {
        &self.name
    }

    pub fn class(&self) -> &CharacterClass {
        &self.class
    }

    pub fn level(&self) -> i64 {
        self.level
    }
}

/// A character record on the roster.
///
/// Serialized with the field names of the roster file
/// (`nom`, `classe`, `niveau`, `pointVie`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adventurer {
    id: AdventurerId,
    #[serde(rename = "nom")]
    name: AdventurerName,
    #[serde(rename = "classe")]
    class: CharacterClass,
    #[serde(rename = "niveau")]
    level: i64,
    #[serde(rename = "pointVie")]
    health: i64,
    #[serde(rename = "pointVieMax")]
    health_max: i64,
    defense: i64,
    #[serde(rename = "attaque")]
    attack: i64,
    #[serde(rename = "vitesse")]
    speed: i64,
    avatar: String,
}

impl Adventurer {
    /// Create an adventurer from a draft, applying its class template.
    pub fn new(id: AdventurerId, draft: AdventurerDraft) -> Self {
        let template = draft.class.template();
        Self {
            id,
            name: draft.name,
            class: draft.class,
            level: draft.level,
            health: template.health,
            health_max: template.health,
            defense: template.defense,
            attack: template.attack,
            speed: template.speed,
            avatar: template.avatar.to_string(),
        }
    }

    // ──────────────────────────────────────────────────────────────────────────
    // Read accessors
    // ──────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> AdventurerId {
        self.id
    }

    pub fn name(&self) -> &AdventurerName {
        &self.name
    }

    pub fn class(&self) -> &CharacterClass {
        &self.class
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn health(&self) -> i64 {
        self.health
    }

    pub fn health_max(&self) -> i64 {
        self.health_max
    }

    pub fn defense(&self) -> i64 {
        self.defense
    }

    pub fn attack(&self) -> i64 {
        self.attack
    }

    pub fn speed(&self) -> i64 {
        self.speed
    }

    /// Avatar image file name.
    pub fn avatar(&self) -> &str {
        &self.avatar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, class: &str, level: &str) -> AdventurerDraft {
        AdventurerDraft::from_form(name, class, level).expect("valid draft")
    }

    #[test]
    fn guerrier_gets_template_stats() {
        let adventurer = Adventurer::new(AdventurerId::new(0), draft("Thorin", "guerrier", "3"));

        assert_eq!(adventurer.id(), AdventurerId::new(0));
        assert_eq!(adventurer.name().as_str(), "Thorin");
        assert_eq!(adventurer.class(), &CharacterClass::Guerrier);
        assert_eq!(adventurer.level(), 3);
        assert_eq!(adventurer.health(), 100);
        assert_eq!(adventurer.health_max(), 100);
        assert_eq!(adventurer.defense(), 45);
        assert_eq!(adventurer.attack(), 60);
        assert_eq!(adventurer.speed(), 30);
        assert_eq!(adventurer.avatar(), "guerrier.jpg");
    }

    #[test]
    fn health_equals_health_max_for_every_class() {
        for class in ["guerrier", "mage", "archer", "ninja"] {
            let adventurer = Adventurer::new(AdventurerId::new(1), draft("A", class, "1"));
            assert_eq!(adventurer.health(), adventurer.health_max(), "class {class}");
            assert_eq!(adventurer.health(), adventurer.class().template().health);
        }
    }

    #[test]
    fn unknown_class_is_zeroed() {
        let adventurer = Adventurer::new(AdventurerId::new(5), draft("Kage", "ninja", "9"));

        assert_eq!(adventurer.class().as_str(), "ninja");
        assert_eq!(adventurer.health(), 0);
        assert_eq!(adventurer.health_max(), 0);
        assert_eq!(adventurer.defense(), 0);
        assert_eq!(adventurer.attack(), 0);
        assert_eq!(adventurer.speed(), 0);
        assert_eq!(adventurer.avatar(), "avatar3.jpg");
    }

    #[test]
    fn draft_rejects_missing_fields() {
        assert!(matches!(
            AdventurerDraft::from_form("", "mage", "1"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            AdventurerDraft::from_form("Elrond", "", "1"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            AdventurerDraft::from_form("Elrond", "mage", "deux"),
            Err(DomainError::Parse(_))
        ));
        assert!(matches!(
            AdventurerDraft::from_form("Elrond", "mage", ""),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn draft_accepts_any_integer_level() {
        assert_eq!(draft("A", "mage", "-4").level(), -4);
        assert_eq!(draft("A", "mage", "250").level(), 250);
    }

    #[test]
    fn serializes_with_roster_file_field_names() {
        let adventurer = Adventurer::new(AdventurerId::new(2), draft("Legolas", "archer", "7"));
        let value = serde_json::to_value(&adventurer).expect("serialize");

        assert_eq!(
            value,
            serde_json::json!({
                "id": 2,
                "nom": "Legolas",
                "classe": "archer",
                "niveau": 7,
                "pointVie": 90,
                "pointVieMax": 90,
                "defense": 35,
                "attaque": 55,
                "vitesse": 50,
                "avatar": "archer.jpg"
            })
        );

        let back: Adventurer = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, adventurer);
    }
}
