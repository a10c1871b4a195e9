use thiserror::Error;

use cad_dispatch::DispatchError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

pub type EngineResult<T> = Result<T, EngineError>;
