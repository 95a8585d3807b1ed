use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The closed set of category identifiers a move may belong to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    #[default]
    Basic,
    PartnerExchange,
    TurnSimple,
    TurnComplex,
    Styling,
    Thematic,
    Sequence,
    Directional,
}

impl CategoryId {
    pub const ALL: [Self; 8] = [
        Self::Basic,
        Self::PartnerExchange,
        Self::TurnSimple,
        Self::TurnComplex,
        Self::Styling,
        Self::Thematic,
        Self::Sequence,
        Self::Directional,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::PartnerExchange => "partner-exchange",
            Self::TurnSimple => "turn-simple",
            Self::TurnComplex => "turn-complex",
            Self::Styling => "styling",
            Self::Thematic => "thematic",
            Self::Sequence => "sequence",
            Self::Directional => "directional",
        }
    }

    /// Exact, case-sensitive match against the closed set.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == id)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s.trim()).ok_or_else(|| Error::UnknownValue {
            kind: "category",
            value: s.to_string(),
        })
    }
}

/// A named grouping of moves, as loaded from the category document.
///
/// The `id` is kept verbatim: an id outside the closed set is not an error,
/// it simply never matches a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// A `null` name or description reads as empty, so display falls back to the
/// raw id for that category alone.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Category {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The typed id, when it belongs to the closed set.
    #[must_use]
    pub fn category_id(&self) -> Option<CategoryId> {
        CategoryId::from_id(&self.id)
    }
}

/// The loaded categories, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Parse a category document (a JSON array of `{id, name, description}`).
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Ok(Self::new(categories))
    }

    /// First category whose id equals `id`.
    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id.as_str())
    }

    /// Display name for a category id, falling back to the raw id when the
    /// category is unknown or has an empty name.
    #[must_use]
    pub fn display_name(&self, id: CategoryId) -> &str {
        self.get(id)
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| id.as_str())
    }

    /// Typed ids usable as filter options, in document order.
    pub fn filter_options(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.categories.iter().filter_map(Category::category_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
