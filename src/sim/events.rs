//! Gameplay events emitted by a tick, in the order they happened.
//! Hosts use them for logging and effects; the simulation never reads them back.

use serde::Serialize;

use super::level::LevelId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Jump impulse applied
    Jumped,
    /// Came to rest on a platform or the floor after being airborne
    Landed,
    /// Rising player hit the underside of a platform
    HitCeiling,
    CoinCollected { index: usize },
    EnemyStomped { index: usize },
    /// Touched an enemy without stomping it
    PlayerHit { enemy: usize, lives_left: u8 },
    /// `unlocked` is the newly unlocked successor, if any
    LevelCompleted {
        level: LevelId,
        unlocked: Option<LevelId>,
    },
    GameOver { level: LevelId },
}
