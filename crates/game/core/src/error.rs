//! Errors that stop the engine.
//!
//! Player mistakes (travelling to an unconnected node, confirming a disabled
//! entry) are not errors; they are ignored by the state machine. Everything
//! here is fatal for the running frame loop.

use thiserror::Error;

use crate::presenter::PresenterError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Presenter(#[from] PresenterError),

    #[error("failed to serialize game state: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
