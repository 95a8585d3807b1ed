//! Document loading for rueda.
//!
//! Resolves the move and category documents against a source (an HTTP base
//! URL or a local directory), fetches them, and hands the text to
//! `rueda-core` for ingestion. Loads run as fire-once tasks guarded by a
//! liveness token so that a torn-down view never receives late results.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod liveness;
pub mod loader;
pub mod source;

pub use config::Config;
pub use error::{CategoryLoadError, LoadError, LoadResult};
pub use liveness::{Liveness, LivenessToken};
pub use loader::{spawn_categories_load, spawn_moves_load, DocumentLoader};
pub use source::{Document, DocumentSource};
