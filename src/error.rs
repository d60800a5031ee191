use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown hash algorithm {0:?}")]
    UnknownAlgorithm(String),
    #[error("invalid hash {0:?}")]
    InvalidHash(String),
    #[error("input/output error: {0}")]
    Io(#[from] std::io::Error),
}
