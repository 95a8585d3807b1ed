//! Loading error types.

use thiserror::Error;

use crate::source::Document;

/// Failure to load a document as a whole.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP error loading {document}: {message}")]
    Http { document: Document, message: String },

    /// The server answered with a non-success status.
    #[error("failed to load {document}: HTTP status {status}")]
    Status { document: Document, status: u16 },

    /// A local document could not be read.
    #[error("failed to read {document} from {path}: {source}")]
    Io {
        document: Document,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON of the expected shape.
    #[error("malformed {document}: {source}")]
    Parse {
        document: Document,
        #[source]
        source: rueda_core::Error,
    },

    /// The configured source cannot be used.
    #[error("invalid source {0:?}")]
    InvalidSource(String),

    /// An error propagated from `reqwest` while building the client.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl LoadError {
    /// The document this error concerns, when known.
    pub fn document(&self) -> Option<Document> {
        match self {
            Self::Http { document, .. }
            | Self::Status { document, .. }
            | Self::Io { document, .. }
            | Self::Parse { document, .. } => Some(*document),
            Self::InvalidSource(_) | Self::Request(_) => None,
        }
    }
}

/// Failure to load the category document. Never fatal: lookups fall back
/// to raw category ids.
#[derive(Debug, Error)]
#[error("failed to load categories: {0}")]
pub struct CategoryLoadError(#[from] pub LoadError);

/// Convenience alias for load results.
pub type LoadResult<T> = std::result::Result<T, LoadError>;
