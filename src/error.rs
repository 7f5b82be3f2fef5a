//! Errors for catalog loading and mode-transition commands
//!
//! Simulation ticks never fail; these only surface at startup or when the
//! host issues a command the current mode does not accept.

use thiserror::Error;

use crate::sim::{GameMode, LevelId};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level catalog is empty")]
    EmptyCatalog,

    #[error("duplicate level id {0}")]
    DuplicateLevel(LevelId),

    #[error("level {id} ({width}x{height}) cannot hold the player at spawn")]
    LevelTooSmall { id: LevelId, width: f32, height: f32 },

    #[error("level {level} platform {index} has non-positive size")]
    DegeneratePlatform { level: LevelId, index: usize },

    #[error("invalid tuning: {field} {reason}")]
    InvalidTuning {
        field: &'static str,
        reason: &'static str,
    },

    #[error("unknown level {0}")]
    UnknownLevel(LevelId),

    #[error("level {0} is locked")]
    LevelLocked(LevelId),

    #[error("cannot {action} while in {mode:?}")]
    InvalidTransition {
        mode: GameMode,
        action: &'static str,
    },
}
