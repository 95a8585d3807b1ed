//! Normalisation of raw move records into validated [`Move`]s.
//!
//! The move document is loosely typed: any field may be missing, `null`, a
//! number where a string is expected, or a string where a number is expected.
//! Each record is repaired field by field and never rejected for a bad
//! field; only a record without a name in either language is dropped. Only a
//! structurally malformed document (not a JSON array of objects) fails the
//! whole batch.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::model::{CategoryId, Difficulty, Move};

/// A move record exactly as found in the document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMove {
    #[serde(default)]
    pub spanish_name: Value,
    #[serde(default)]
    pub english_name: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub youtube_link: Value,
    #[serde(default)]
    pub difficulty: Value,
    #[serde(default)]
    pub category_id: Value,
}

/// The record field a [`FieldWarning`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SpanishName,
    EnglishName,
    Description,
    YoutubeLink,
    Difficulty,
    CategoryId,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SpanishName => "spanishName",
            Self::EnglishName => "englishName",
            Self::Description => "description",
            Self::YoutubeLink => "youtubeLink",
            Self::Difficulty => "difficulty",
            Self::CategoryId => "categoryId",
        }
    }

    const fn fallback(self) -> &'static str {
        match self {
            Self::Difficulty => "1",
            Self::CategoryId => "'basic'",
            _ => "an empty string",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal problem with one field of one record. The field was replaced
/// by its default and the record kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    /// Position of the record in the document.
    pub index: usize,
    pub field: Field,
    /// The offending value, as JSON text.
    pub raw: String,
}

impl FieldWarning {
    fn new(index: usize, field: Field, raw: &Value) -> Self {
        Self {
            index,
            field,
            raw: raw.to_string(),
        }
    }
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "record {}: invalid {} value {}, defaulting to {}",
            self.index,
            self.field,
            self.raw,
            self.field.fallback()
        )
    }
}

/// Result of ingesting a move document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingested {
    /// Validated moves, in document order.
    pub moves: Vec<Move>,
    pub warnings: Vec<FieldWarning>,
    /// Records dropped because both names were empty.
    pub dropped: usize,
}

/// Parse and normalise a move document.
///
/// # Errors
///
/// Fails only when the document is not a JSON array of objects.
pub fn parse_moves(json: &str) -> crate::Result<Ingested> {
    let raw: Vec<RawMove> = serde_json::from_str(json)?;
    Ok(ingest_moves(raw))
}

/// Normalise raw records into moves. Total: never fails.
pub fn ingest_moves(raw: Vec<RawMove>) -> Ingested {
    let mut ingested = Ingested::default();

    for (index, record) in raw.iter().enumerate() {
        match record.normalize(index, &mut ingested.warnings) {
            Some(m) => ingested.moves.push(m),
            None => ingested.dropped += 1,
        }
    }

    for warning in &ingested.warnings {
        log::warn!("{}", warning);
    }
    if ingested.dropped > 0 {
        log::debug!("Dropped {} unnamed move records", ingested.dropped);
    }

    ingested
}

impl RawMove {
    /// Normalise this record, appending any field warnings. Returns `None`
    /// when the record has no name in either language; warnings about a
    /// dropped record are discarded with it.
    pub fn normalize(&self, index: usize, warnings: &mut Vec<FieldWarning>) -> Option<Move> {
        let mut found = Vec::new();
        let mut text = |field: Field, value: &Value| {
            normalize_text(value).unwrap_or_else(|| {
                found.push(FieldWarning::new(index, field, value));
                String::new()
            })
        };

        let named = Move::new(text(Field::SpanishName, &self.spanish_name))
            .with_english_name(text(Field::EnglishName, &self.english_name))
            .with_description(text(Field::Description, &self.description))
            .with_youtube_link(text(Field::YoutubeLink, &self.youtube_link));

        if !named.is_named() {
            return None;
        }

        let difficulty = try_difficulty(&self.difficulty).unwrap_or_else(|| {
            found.push(FieldWarning::new(index, Field::Difficulty, &self.difficulty));
            Difficulty::Beginner
        });
        let category_id = try_category_id(&self.category_id).unwrap_or_else(|| {
            found.push(FieldWarning::new(index, Field::CategoryId, &self.category_id));
            CategoryId::Basic
        });

        warnings.append(&mut found);
        Some(named.with_difficulty(difficulty).with_category(category_id))
    }
}

/// Parse a raw difficulty, defaulting to [`Difficulty::Beginner`] (with a
/// logged warning) for anything that is not 1, 2 or 3.
pub fn parse_difficulty(value: &Value) -> Difficulty {
    try_difficulty(value).unwrap_or_else(|| {
        log::warn!("Invalid difficulty value: {}, defaulting to 1", value);
        Difficulty::Beginner
    })
}

/// Parse a raw category id, defaulting to [`CategoryId::Basic`] (with a
/// logged warning) for anything outside the closed set.
pub fn parse_category_id(value: &Value) -> CategoryId {
    try_category_id(value).unwrap_or_else(|| {
        log::warn!("Invalid categoryId: {}, defaulting to 'basic'", value);
        CategoryId::Basic
    })
}

fn try_difficulty(value: &Value) -> Option<Difficulty> {
    let level = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= 3.0)
                .map(|f| f as i64)
        })?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    Difficulty::from_level(level)
}

fn try_category_id(value: &Value) -> Option<CategoryId> {
    value.as_str().and_then(|s| CategoryId::from_id(s.trim()))
}

/// `None` when the value cannot sensibly be read as text.
fn normalize_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
