use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
