//! Fetching and ingesting the move and category documents.
//!
//! Each document is loaded whole or not at all. A failed move load is fatal
//! to the move view; a failed category load only degrades category names to
//! their raw ids. Neither load is retried.

use std::time::Duration;

use reqwest::Client;
use tokio::sync::oneshot;

use rueda_core::{CategoryCatalog, Ingested};

use crate::config::Config;
use crate::error::{CategoryLoadError, LoadError, LoadResult};
use crate::liveness::LivenessToken;
use crate::source::{Document, DocumentSource};

const USER_AGENT: &str = concat!("rueda/", env!("CARGO_PKG_VERSION"));

/// Loads documents from a [`DocumentSource`].
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: DocumentSource,
    http: Client,
}

impl DocumentLoader {
    /// Create a loader without a request timeout: a stalled server stalls
    /// the load.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(source: DocumentSource) -> LoadResult<Self> {
        Self::with_timeout(source, None)
    }

    /// Create a loader with an optional per-request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_timeout(source: DocumentSource, timeout: Option<Duration>) -> LoadResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            source,
            http: builder.build()?,
        })
    }

    /// Create a loader from the effective configuration.
    pub fn from_config(config: &Config) -> LoadResult<Self> {
        let source = DocumentSource::parse(&config.source)?;
        Self::with_timeout(source, config.request_timeout())
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    /// Fetch the raw text of `document`.
    pub async fn fetch(&self, document: Document) -> LoadResult<String> {
        log::debug!("Fetching {} from {}", document, self.source.location(document));

        match &self.source {
            DocumentSource::Http(_) => {
                let url = self
                    .source
                    .url_for(document)?
                    .ok_or_else(|| LoadError::InvalidSource(self.source.to_string()))?;

                let response = self.http.get(url).send().await.map_err(|e| LoadError::Http {
                    document,
                    message: e.to_string(),
                })?;

                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status {
                        document,
                        status: status.as_u16(),
                    });
                }

                response.text().await.map_err(|e| LoadError::Http {
                    document,
                    message: e.to_string(),
                })
            }
            DocumentSource::Directory(_) => {
                let path = self
                    .source
                    .path_for(document)
                    .ok_or_else(|| LoadError::InvalidSource(self.source.to_string()))?;

                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| LoadError::Io {
                        document,
                        path: path.display().to_string(),
                        source,
                    })
            }
        }
    }

    /// Load and ingest the move document.
    pub async fn load_moves(&self) -> LoadResult<Ingested> {
        let text = self.fetch(Document::Moves).await?;
        let ingested = rueda_core::parse_moves(&text).map_err(|source| LoadError::Parse {
            document: Document::Moves,
            source,
        })?;

        log::info!(
            "Loaded {} moves from {} ({} warnings, {} unnamed records dropped)",
            ingested.moves.len(),
            self.source,
            ingested.warnings.len(),
            ingested.dropped
        );
        Ok(ingested)
    }

    /// Load the category document.
    pub async fn load_categories(&self) -> Result<CategoryCatalog, CategoryLoadError> {
        let text = self.fetch(Document::Categories).await?;
        let catalog = CategoryCatalog::from_json(&text).map_err(|source| LoadError::Parse {
            document: Document::Categories,
            source,
        })?;

        log::info!("Loaded {} categories from {}", catalog.len(), self.source);
        Ok(catalog)
    }

    /// Load the category document, degrading to an empty catalogue on
    /// failure.
    pub async fn load_categories_or_empty(&self) -> CategoryCatalog {
        match self.load_categories().await {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("{}", e);
                CategoryCatalog::default()
            }
        }
    }
}

/// Start loading the move document in the background.
///
/// The result is delivered only while `token` is live; a load finishing
/// after teardown is discarded.
pub fn spawn_moves_load(
    loader: &DocumentLoader,
    token: LivenessToken,
) -> oneshot::Receiver<LoadResult<Ingested>> {
    let loader = loader.clone();
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = loader.load_moves().await;
        deliver(&token, tx, result, Document::Moves);
    });
    rx
}

/// Start loading the category document in the background.
pub fn spawn_categories_load(
    loader: &DocumentLoader,
    token: LivenessToken,
) -> oneshot::Receiver<Result<CategoryCatalog, CategoryLoadError>> {
    let loader = loader.clone();
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let result = loader.load_categories().await;
        deliver(&token, tx, result, Document::Categories);
    });
    rx
}

fn deliver<T>(token: &LivenessToken, tx: oneshot::Sender<T>, result: T, document: Document) {
    if !token.is_live() {
        log::debug!("Discarding {} loaded after teardown", document);
        return;
    }
    if tx.send(result).is_err() {
        log::debug!("Receiver for {} went away", document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_loader_creation() {
        let loader = DocumentLoader::new(DocumentSource::Directory(PathBuf::from(".")));
        assert!(loader.is_ok());
        let debug = format!("{:?}", loader.unwrap());
        assert!(debug.contains("DocumentLoader"));
    }

    #[test]
    fn test_loader_from_config() {
        let config = Config {
            source: "https://example.org/".to_string(),
            request_timeout_secs: Some(5),
            ..Config::default()
        };
        let loader = DocumentLoader::from_config(&config).unwrap();
        assert!(matches!(loader.source(), DocumentSource::Http(_)));
    }

    #[test]
    fn test_loader_from_config_rejects_bad_source() {
        let config = Config {
            source: "gopher://example.org/".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            DocumentLoader::from_config(&config),
            Err(LoadError::InvalidSource(_))
        ));
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("rueda/"));
    }
}
