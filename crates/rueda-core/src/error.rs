use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
