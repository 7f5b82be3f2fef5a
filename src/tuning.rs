//! Data-driven game balance
//!
//! Physics constants live in one immutable object handed to the simulation
//! instead of being read from globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::LevelCatalog;

/// Physics and gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_size: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub move_speed: f32,
    pub coin_size: f32,
    pub enemy_size: f32,
    pub stomp_tolerance: f32,
    /// Multiplier on `jump_velocity` applied after a stomp
    pub stomp_bounce: f32,
    pub ceiling_epsilon: f32,
    pub spawn: Vec2,
    pub starting_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            move_speed: MOVE_SPEED,
            coin_size: COIN_SIZE,
            enemy_size: ENEMY_SIZE,
            stomp_tolerance: STOMP_TOLERANCE,
            stomp_bounce: STOMP_BOUNCE,
            ceiling_epsilon: CEILING_EPSILON,
            spawn: Vec2::new(SPAWN_X, SPAWN_Y),
            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Vertical velocity after bouncing off a stomped enemy
    pub fn stomp_velocity(&self) -> f32 {
        self.jump_velocity * self.stomp_bounce
    }

    /// Reject values that would leave a session alive with no lives or
    /// feed NaN into the physics step
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |field, reason| Err(GameError::InvalidTuning { field, reason });

        let scalars = [
            ("player_size", self.player_size),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("move_speed", self.move_speed),
            ("coin_size", self.coin_size),
            ("enemy_size", self.enemy_size),
            ("stomp_tolerance", self.stomp_tolerance),
            ("stomp_bounce", self.stomp_bounce),
            ("ceiling_epsilon", self.ceiling_epsilon),
        ];
        if let Some(&(field, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(field, "must be finite");
        }
        if !self.spawn.is_finite() {
            return invalid("spawn", "must be finite");
        }

        let sizes = [
            ("player_size", self.player_size),
            ("coin_size", self.coin_size),
            ("enemy_size", self.enemy_size),
        ];
        if let Some(&(field, _)) = sizes.iter().find(|(_, v)| *v <= 0.0) {
            return invalid(field, "must be positive");
        }

        if self.starting_lives == 0 {
            return invalid("starting_lives", "must be at least 1");
        }
        Ok(())
    }
}

/// Immutable configuration the simulation runs against
#[derive(Debug, Clone)]
pub struct GameConfig {
    catalog: LevelCatalog,
    tuning: Tuning,
}

impl GameConfig {
    /// Bundle a catalog with tuning, rejecting bad tuning and levels the
    /// player cannot fit in
    pub fn new(catalog: LevelCatalog, tuning: Tuning) -> Result<Self, GameError> {
        tuning.validate()?;
        catalog.validate(&tuning)?;
        Ok(Self { catalog, tuning })
    }

    /// Embedded level catalog with default tuning
    pub fn builtin() -> Result<Self, GameError> {
        Self::new(LevelCatalog::builtin()?, Tuning::default())
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
