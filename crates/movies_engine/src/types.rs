use movies_core::Movie;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to read {source_name}: {message}")]
    Read {
        source_name: String,
        message: String,
    },
    #[error("failed to decode catalog: {0}")]
    Decode(String),
    #[error("load cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    LoadStarted,
    LoadCompleted {
        result: Result<Vec<Movie>, LoadError>,
    },
}
