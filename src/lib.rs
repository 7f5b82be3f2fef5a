//! Circle Platformer - A browser 2D platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, progression)
//! - `game`: Frame driver that owns state, input and configuration
//! - `tuning`: Data-driven physics and gameplay constants
//! - `error`: Catalog and command errors

pub mod error;
pub mod game;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::{FrameStatus, Game};
pub use tuning::{GameConfig, Tuning};

/// Game configuration constants
pub mod consts {
    /// Player bounding box edge (square)
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Downward acceleration added every tick
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied on jump (negative is up)
    pub const JUMP_VELOCITY: f32 = -15.0;
    /// Horizontal speed while a direction is held
    pub const MOVE_SPEED: f32 = 6.0;

    /// Coin pickup box edge
    pub const COIN_SIZE: f32 = 20.0;
    /// Enemy hit box edge
    pub const ENEMY_SIZE: f32 = 30.0;
    /// How far below an enemy's top edge a falling player may be and still stomp
    pub const STOMP_TOLERANCE: f32 = 10.0;
    /// Fraction of the jump velocity given back after a stomp
    pub const STOMP_BOUNCE: f32 = 0.5;
    /// Gap left under a platform after bonking its underside
    pub const CEILING_EPSILON: f32 = 0.5;

    /// Spawn point at the start of every attempt and after a hit
    pub const SPAWN_X: f32 = 50.0;
    pub const SPAWN_Y: f32 = 0.0;
    /// Lives at the start of every attempt
    pub const STARTING_LIVES: u8 = 3;
}
