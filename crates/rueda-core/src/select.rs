//! Filtering and sorting of the move list.
//!
//! [`select`] is a pure function of the full move list and the four
//! selection parameters. It copies the matching moves, sorts the copy with a
//! stable sort on exactly one key, and leaves the input untouched. Ties keep
//! their document order in both directions.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::collation;
use crate::error::Error;
use crate::model::{CategoryCatalog, CategoryId, Difficulty, Move};

/// Message shown when no move survives the filters.
pub const EMPTY_MESSAGE: &str = "No moves found matching your filters.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(self, m: &Move) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => m.category_id == id,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    #[must_use]
    pub fn matches(self, m: &Move) -> bool {
        match self {
            Self::All => true,
            Self::Only(d) => m.difficulty == d,
        }
    }

    /// "All Levels", or the level label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Levels",
            Self::Only(d) => d.label(),
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(d) => write!(f, "{}", d.level()),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    SpanishName,
    Difficulty,
}

impl SortField {
    fn compare(self, a: &Move, b: &Move) -> Ordering {
        match self {
            Self::SpanishName => collation::compare(&a.spanish_name, &b.spanish_name),
            Self::Difficulty => a.difficulty.level().cmp(&b.difficulty.level()),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SpanishName => "Name",
            Self::Difficulty => "Difficulty",
        }
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" | "spanishName" | "spanish-name" => Ok(Self::SpanishName),
            "difficulty" => Ok(Self::Difficulty),
            other => Err(Error::UnknownValue {
                kind: "sort field",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// `▲` for ascending, `▼` for descending.
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Asc => '\u{25B2}',
            Self::Desc => '\u{25BC}',
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(Error::UnknownValue {
                kind: "sort direction",
                value: other.to_string(),
            }),
        }
    }
}

/// Produce the visible, ordered subset of `moves`.
pub fn select(
    moves: &[Move],
    category: CategoryFilter,
    difficulty: DifficultyFilter,
    field: SortField,
    direction: SortDirection,
) -> Vec<Move> {
    let mut selected: Vec<Move> = moves
        .iter()
        .filter(|m| category.matches(m) && difficulty.matches(m))
        .cloned()
        .collect();

    selected.sort_by(|a, b| direction.apply(field.compare(a, b)));
    selected
}

/// The filter and sort state of a move list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub category: CategoryFilter,
    pub difficulty: DifficultyFilter,
    pub field: SortField,
    pub direction: SortDirection,
}

impl Selection {
    #[must_use]
    pub fn apply(&self, moves: &[Move]) -> Vec<Move> {
        select(
            moves,
            self.category,
            self.difficulty,
            self.field,
            self.direction,
        )
    }

    /// Sort by `field`: the active field flips direction, a new field starts
    /// ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Advance the category filter through `All` and then the catalogue's
    /// categories in document order.
    pub fn cycle_category(&mut self, catalog: &CategoryCatalog) {
        let options: Vec<CategoryId> = catalog.filter_options().collect();
        self.category = match self.category {
            CategoryFilter::All => options
                .first()
                .copied()
                .map_or(CategoryFilter::All, CategoryFilter::Only),
            CategoryFilter::Only(current) => options
                .iter()
                .position(|id| *id == current)
                .and_then(|i| options.get(i + 1))
                .copied()
                .map_or(CategoryFilter::All, CategoryFilter::Only),
        };
    }

    /// Advance the difficulty filter: All, Beginner, Intermediate, Advanced.
    pub fn cycle_difficulty(&mut self) {
        self.difficulty = match self.difficulty {
            DifficultyFilter::All => DifficultyFilter::Only(Difficulty::Beginner),
            DifficultyFilter::Only(Difficulty::Beginner) => {
                DifficultyFilter::Only(Difficulty::Intermediate)
            }
            DifficultyFilter::Only(Difficulty::Intermediate) => {
                DifficultyFilter::Only(Difficulty::Advanced)
            }
            DifficultyFilter::Only(Difficulty::Advanced) => DifficultyFilter::All,
        };
    }

    /// Sort indicator for `field`: the arrow when it is active.
    #[must_use]
    pub fn indicator(&self, field: SortField) -> Option<char> {
        (self.field == field).then(|| self.direction.arrow())
    }
}

/// Counters for the "Showing N of M moves" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub shown: usize,
    pub total: usize,
}

impl SelectionSummary {
    #[must_use]
    pub const fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.shown == 0
    }
}

impl fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} moves", self.shown, self.total)
    }
}
