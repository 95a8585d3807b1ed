//! Where the move and category documents live.

use std::fmt;
use std::path::PathBuf;

use reqwest::Url;

use crate::error::{LoadError, LoadResult};

/// The two documents the catalogue is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Moves,
    Categories,
}

impl Document {
    /// Path of the document relative to its source.
    ///
    /// The move document is resolved relative to the source itself; the
    /// category document is resolved against the root of the source.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Moves => "rueda-moves.json",
            Self::Categories => "/categories.json",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moves => f.write_str("move document"),
            Self::Categories => f.write_str("category document"),
        }
    }
}

/// A base URL or local directory both documents are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Http(Url),
    Directory(PathBuf),
}

impl DocumentSource {
    /// Interpret a configured source string.
    ///
    /// `http://` and `https://` values are URLs, following the usual
    /// relative-reference rules (end a directory URL with `/`). Anything
    /// without a scheme is a local directory.
    pub fn parse(source: &str) -> LoadResult<Self> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(LoadError::InvalidSource(source.to_string()));
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let url = Url::parse(trimmed)
                .map_err(|e| LoadError::InvalidSource(format!("{trimmed}: {e}")))?;
            return Ok(Self::Http(url));
        }

        if trimmed.contains("://") {
            return Err(LoadError::InvalidSource(format!(
                "{trimmed}: only http, https and local directories are supported"
            )));
        }

        Ok(Self::Directory(PathBuf::from(trimmed)))
    }

    /// URL of `document`, for HTTP sources.
    pub fn url_for(&self, document: Document) -> LoadResult<Option<Url>> {
        match self {
            Self::Http(base) => base
                .join(document.path())
                .map(Some)
                .map_err(|e| LoadError::InvalidSource(format!("{base}: {e}"))),
            Self::Directory(_) => Ok(None),
        }
    }

    /// File path of `document`, for directory sources.
    pub fn path_for(&self, document: Document) -> Option<PathBuf> {
        match self {
            Self::Directory(dir) => Some(dir.join(document.path().trim_start_matches('/'))),
            Self::Http(_) => None,
        }
    }

    /// Human-readable location of `document`.
    pub fn location(&self, document: Document) -> String {
        match self {
            Self::Http(_) => self
                .url_for(document)
                .ok()
                .flatten()
                .map(|url| url.to_string())
                .unwrap_or_else(|| document.path().to_string()),
            Self::Directory(_) => self
                .path_for(document)
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{url}"),
            Self::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}
