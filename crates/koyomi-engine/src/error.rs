use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    CoreError(#[from] koyomi_core::error::CoreError),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
