//! Core domain model for rueda.
//!
//! This crate defines the move and category model, the normalisation of raw
//! JSON records into validated moves, the filter/sort engine with its
//! Spanish collation, and the video link resolver. Nothing here performs I/O.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod collation;
pub mod error;
pub mod ingest;
pub mod model;
pub mod select;
pub mod video;

pub use error::{Error, Result};
pub use ingest::{
    ingest_moves, parse_category_id, parse_difficulty, parse_moves, Field, FieldWarning, Ingested,
    RawMove,
};
pub use model::{Category, CategoryCatalog, CategoryId, Difficulty, Move};
pub use select::{
    select, CategoryFilter, DifficultyFilter, Selection, SelectionSummary, SortDirection,
    SortField, EMPTY_MESSAGE,
};
pub use video::{resolve_video, EmbedVideo, VideoError, VideoLink};
