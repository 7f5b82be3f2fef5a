//! Frame driver
//!
//! Owns the configuration, the current state snapshot and the held-key input.
//! The host calls [`Game::frame`] once per animation frame and keeps
//! scheduling frames only while it returns [`FrameStatus::Continue`].

use crate::error::GameError;
use crate::sim::{FrameSnapshot, GameEvent, GameMode, GameState, InputState, LevelId, tick};
use crate::tuning::GameConfig;

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stopped,
}

/// Game instance holding all state
pub struct Game {
    config: GameConfig,
    state: GameState,
    input: InputState,
    frames: u64,
    last_events: Vec<GameEvent>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(config.catalog());
        Self {
            config,
            state,
            input: InputState::default(),
            frames: 0,
            last_events: Vec::new(),
        }
    }

    /// Run one tick. A tick in flight always completes; stopping only means
    /// the host does not schedule the next one.
    pub fn frame(&mut self) -> FrameStatus {
        if !self.state.is_playing() {
            self.last_events.clear();
            return FrameStatus::Stopped;
        }

        let intent = self.input.sample();
        let outcome = tick(&self.state, &self.config, intent);
        self.state = outcome.state;
        self.last_events = outcome.events;
        self.frames += 1;

        if self.state.is_playing() {
            FrameStatus::Continue
        } else {
            log::info!("Simulation stopped in {:?}", self.state.mode);
            FrameStatus::Stopped
        }
    }

    pub fn select_level(&mut self, id: LevelId) -> Result<(), GameError> {
        self.apply(|state, config| state.select_level(id, config))
    }

    pub fn restart_level(&mut self) -> Result<(), GameError> {
        self.apply(|state, config| state.restart_level(config))
    }

    pub fn back_to_level_select(&mut self) -> Result<(), GameError> {
        self.apply(|state, _| state.back_to_level_select())
    }

    fn apply(
        &mut self,
        command: impl FnOnce(&mut GameState, &GameConfig) -> Result<(), GameError>,
    ) -> Result<(), GameError> {
        let result = command(&mut self.state, &self.config);
        match &result {
            Ok(()) => {
                // Keys held across a menu should not leak into the new session
                self.input.release_all();
                self.last_events.clear();
            }
            Err(e) => log::warn!("Command rejected: {}", e),
        }
        result
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state, &self.config)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Events produced by the most recent frame
    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    /// Frames simulated since startup
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
