use thiserror::Error;

use doobie::hash::AnyHash;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("{0}")]
    Doobie(#[from] doobie::Error),
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Hash mismatch: expected {0}, actual {1}")]
    HashMismatch(Box<AnyHash>, Box<AnyHash>),
}
