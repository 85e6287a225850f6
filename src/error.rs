//! Error types
//!
//! Level loading fails closed: the flow layer logs the error and stays in
//! its current scene.

use std::path::PathBuf;

use thiserror::Error;

use crate::flow::{FlowEvent, Scene};

/// Errors from loading or validating a level
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level {0} not found")]
    NotFound(u32),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("level {level} is malformed: {source}")]
    Decode {
        level: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("level {level} is invalid: {reason}")]
    Invalid { level: u32, reason: String },
}

/// Errors from the scene state machine
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("{event:?} is not a valid event in {scene:?}")]
    InvalidTransition { scene: Scene, event: FlowEvent },

    #[error("level {0} has no successor")]
    NoSuccessorLevel(u32),

    #[error("level {0} does not exist")]
    UnknownLevel(u32),

    #[error("level unavailable: {0}")]
    Level(#[from] LevelError),
}

/// Errors from reading or writing persisted JSON
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LevelResult<T> = Result<T, LevelError>;
pub type FlowResult<T> = Result<T, FlowError>;
pub type PersistResult<T> = Result<T, PersistError>;
