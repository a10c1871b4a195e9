use thiserror::Error;

/// Errors raised while loading world data.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
