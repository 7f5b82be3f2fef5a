//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, no wall-clock time
//! - Input sampled once per tick
//! - Stable iteration order (catalog order for platforms, coins and enemies)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entities;
pub mod events;
pub mod input;
pub mod level;
pub mod physics;
pub mod progression;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use entities::Resolution;
pub use events::GameEvent;
pub use input::{GameKey, InputIntent, InputState};
pub use level::{Level, LevelCatalog, LevelId, Platform};
pub use physics::step_player;
pub use progression::Unlocks;
pub use snapshot::FrameSnapshot;
pub use state::{Enemy, GameMode, GameState, Player, Session};
pub use tick::{TickOutcome, tick};
