//! Held-key input state
//!
//! The host writes key transitions here whenever they arrive; the simulation
//! takes exactly one [`InputIntent`] copy per tick.

use serde::{Deserialize, Serialize};

/// Normalized intent for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputIntent {
    pub const IDLE: Self = Self {
        left: false,
        right: false,
        jump: false,
    };
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    /// Space bar
    Jump,
    /// Up arrow (also jumps)
    Up,
}

impl GameKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(GameKey::Left),
            "ArrowRight" => Some(GameKey::Right),
            " " => Some(GameKey::Jump),
            "ArrowUp" => Some(GameKey::Up),
            _ => None,
        }
    }
}

/// Currently held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub space: bool,
    pub up: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: GameKey, held: bool) {
        match key {
            GameKey::Left => self.left = held,
            GameKey::Right => self.right = held,
            GameKey::Jump => self.space = held,
            GameKey::Up => self.up = held,
        }
    }

    /// Record a key press. Returns true if the key belongs to the game, so the
    /// host should suppress the browser's default action.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.apply_dom_key(key, true)
    }

    /// Record a key release. Returns true if the key belongs to the game.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.apply_dom_key(key, false)
    }

    fn apply_dom_key(&mut self, key: &str, held: bool) -> bool {
        match GameKey::from_dom_key(key) {
            Some(k) => {
                self.set(k, held);
                true
            }
            None => false,
        }
    }

    /// Drop every held key (window lost focus, so releases will never arrive)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the intent for one tick
    pub fn sample(&self) -> InputIntent {
        InputIntent {
            left: self.left,
            right: self.right,
            jump: self.space || self.up,
        }
    }
}
