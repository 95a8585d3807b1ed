use serde::{Deserialize, Serialize};

use crate::model::category::CategoryId;
use crate::model::difficulty::Difficulty;

/// A single dance move.
///
/// Built once during ingestion and never mutated afterwards. Serialises to
/// the same camelCase shape as the move document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// Primary (Spanish) name.
    pub spanish_name: String,

    /// English translation, may be empty.
    pub english_name: String,

    pub description: String,

    /// Reference video URL, empty when the move has no video.
    pub youtube_link: String,

    pub difficulty: Difficulty,

    pub category_id: CategoryId,
}

impl Move {
    #[must_use]
    pub fn new(spanish_name: impl Into<String>) -> Self {
        Self {
            spanish_name: spanish_name.into(),
            english_name: String::new(),
            description: String::new(),
            youtube_link: String::new(),
            difficulty: Difficulty::Beginner,
            category_id: CategoryId::Basic,
        }
    }

    #[must_use]
    pub fn with_english_name(mut self, name: impl Into<String>) -> Self {
        self.english_name = name.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_youtube_link(mut self, link: impl Into<String>) -> Self {
        self.youtube_link = link.into();
        self
    }

    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub const fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = category_id;
        self
    }

    #[must_use]
    pub fn has_video(&self) -> bool {
        !self.youtube_link.is_empty()
    }

    /// Whether the move carries a name in at least one language.
    #[must_use]
    pub fn is_named(&self) -> bool {
        !self.spanish_name.is_empty() || !self.english_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_new() {
        let m = Move::new("Dile que no");
        assert_eq!(m.spanish_name, "Dile que no");
        assert_eq!(m.difficulty, Difficulty::Beginner);
        assert_eq!(m.category_id, CategoryId::Basic);
        assert!(!m.has_video());
    }

    #[test]
    fn test_move_builder() {
        let m = Move::new("Sombrero")
            .with_english_name("Hat")
            .with_difficulty(Difficulty::Intermediate)
            .with_category(CategoryId::TurnComplex)
            .with_youtube_link("https://youtu.be/abc");

        assert_eq!(m.english_name, "Hat");
        assert_eq!(m.difficulty, Difficulty::Intermediate);
        assert_eq!(m.category_id, CategoryId::TurnComplex);
        assert!(m.has_video());
    }

    #[test]
    fn test_is_named() {
        assert!(Move::new("Enchufla").is_named());
        assert!(Move::new("").with_english_name("Plug").is_named());
        assert!(!Move::new("").is_named());
    }

    #[test]
    fn test_serializes_in_document_shape() {
        let m = Move::new("Vacílala").with_category(CategoryId::PartnerExchange);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["spanishName"], "Vacílala");
        assert_eq!(json["difficulty"], 1);
        assert_eq!(json["categoryId"], "partner-exchange");
    }
}
