//! Mode state machine and level unlocks
//!
//! ```text
//! LevelSelect --select--> Playing --complete--> LevelSelect
//!                            |
//!                       out of lives
//!                            v
//!                         GameOver --restart--> Playing
//!                            |
//!                            +--back--> LevelSelect
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::level::{LevelCatalog, LevelId};
use super::state::{GameMode, GameState, Session};
use crate::error::GameError;
use crate::tuning::GameConfig;

/// Set of selectable levels. Only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unlocks(BTreeSet<LevelId>);

impl Unlocks {
    pub fn new(first: LevelId) -> Self {
        Self(BTreeSet::from([first]))
    }

    pub fn contains(&self, id: LevelId) -> bool {
        self.0.contains(&id)
    }

    /// Returns true if `id` was newly unlocked
    pub fn unlock(&mut self, id: LevelId) -> bool {
        self.0.insert(id)
    }

    /// Ascending ids
    pub fn iter(&self) -> impl Iterator<Item = LevelId> + '_ {
        self.0.iter().copied()
    }

    pub fn is_superset(&self, other: &Unlocks) -> bool {
        self.0.is_superset(&other.0)
    }
}

impl GameState {
    /// Start an attempt at an unlocked level from level select
    pub fn select_level(&mut self, id: LevelId, config: &GameConfig) -> Result<(), GameError> {
        if self.mode != GameMode::LevelSelect {
            return Err(GameError::InvalidTransition {
                mode: self.mode,
                action: "select a level",
            });
        }
        if !config.catalog().contains(id) {
            return Err(GameError::UnknownLevel(id));
        }
        if !self.unlocked.contains(id) {
            return Err(GameError::LevelLocked(id));
        }
        self.begin(id, config)
    }

    /// Re-enter the level that was just lost, fully reset
    pub fn restart_level(&mut self, config: &GameConfig) -> Result<(), GameError> {
        match self.mode {
            GameMode::GameOver { level } => self.begin(level, config),
            mode => Err(GameError::InvalidTransition {
                mode,
                action: "restart",
            }),
        }
    }

    /// Leave the game over screen
    pub fn back_to_level_select(&mut self) -> Result<(), GameError> {
        match self.mode {
            GameMode::GameOver { .. } | GameMode::LevelSelect => {
                self.enter_level_select();
                Ok(())
            }
            GameMode::Playing => Err(GameError::InvalidTransition {
                mode: self.mode,
                action: "return to level select",
            }),
        }
    }

    fn begin(&mut self, id: LevelId, config: &GameConfig) -> Result<(), GameError> {
        let level = config
            .catalog()
            .get(id)
            .ok_or(GameError::UnknownLevel(id))?;
        self.session = Some(Session::start(level, config.tuning()));
        self.mode = GameMode::Playing;
        log::info!("Playing {} (id {})", level.name, id);
        Ok(())
    }

    fn enter_level_select(&mut self) {
        self.session = None;
        self.mode = GameMode::LevelSelect;
    }

    /// Level cleared: unlock its successor and return to level select
    pub(crate) fn complete_level(&mut self, level: LevelId, catalog: &LevelCatalog) -> GameEvent {
        let unlocked = level
            .checked_add(1)
            .filter(|&next| catalog.contains(next) && self.unlocked.unlock(next));

        match unlocked {
            Some(next) => log::info!("Level {} complete, unlocked level {}", level, next),
            None => log::info!("Level {} complete", level),
        }

        self.enter_level_select();
        GameEvent::LevelCompleted { level, unlocked }
    }

    /// Out of lives: end the session, remembering the level for a restart
    pub(crate) fn lose_level(&mut self, level: LevelId) -> GameEvent {
        log::info!("Game over on level {}", level);
        self.session = None;
        self.mode = GameMode::GameOver { level };
        GameEvent::GameOver { level }
    }

    /// The running session's level vanished from the catalog; drop it
    pub(crate) fn abandon_session(&mut self) {
        if let Some(session) = &self.session {
            log::warn!("Level {} not found, returning to level select", session.level);
        }
        self.enter_level_select();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn setup() -> (GameConfig, GameState) {
        let config = GameConfig::builtin().unwrap();
        let state = GameState::new(config.catalog());
        (config, state)
    }

    #[test]
    fn test_select_unlocked_level() {
        let (config, mut state) = setup();
        state.select_level(1, &config).unwrap();

        assert_eq!(state.mode, GameMode::Playing);
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.level, 1);
        assert_eq!(session.player.lives, 3);
        assert_eq!(session.enemies.len(), 1);
    }

    #[test]
    fn test_select_locked_level_rejected() {
        let (config, mut state) = setup();
        let err = state.select_level(2, &config).unwrap_err();
        assert!(matches!(err, GameError::LevelLocked(2)));
        assert_eq!(state.mode, GameMode::LevelSelect);
        assert!(state.session.is_none());
    }

    #[test]
    fn test_select_unknown_level_rejected() {
        let (config, mut state) = setup();
        let err = state.select_level(42, &config).unwrap_err();
        assert!(matches!(err, GameError::UnknownLevel(42)));
        assert_eq!(state.mode, GameMode::LevelSelect);
    }

    #[test]
    fn test_select_while_playing_rejected() {
        let (config, mut state) = setup();
        state.select_level(1, &config).unwrap();
        let err = state.select_level(1, &config).unwrap_err();
        assert!(matches!(err, GameError::InvalidTransition { .. }));
    }

    #[test]
    fn test_complete_unlocks_successor_once() {
        let (config, mut state) = setup();
        state.select_level(1, &config).unwrap();

        let event = state.complete_level(1, config.catalog());
        assert_eq!(
            event,
            GameEvent::LevelCompleted {
                level: 1,
                unlocked: Some(2)
            }
        );
        assert_eq!(state.mode, GameMode::LevelSelect);
        assert!(state.session.is_none());
        assert!(state.unlocked.contains(2));

        // Clearing it again unlocks nothing new
        state.select_level(1, &config).unwrap();
        let event = state.complete_level(1, config.catalog());
        assert_eq!(
            event,
            GameEvent::LevelCompleted {
                level: 1,
                unlocked: None
            }
        );
        assert_eq!(state.unlocked.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_complete_last_level_unlocks_nothing() {
        let (config, mut state) = setup();
        state.unlocked.unlock(2);
        state.select_level(2, &config).unwrap();

        let event = state.complete_level(2, config.catalog());
        assert_eq!(
            event,
            GameEvent::LevelCompleted {
                level: 2,
                unlocked: None
            }
        );
        assert!(!state.unlocked.contains(3));
    }

    #[test]
    fn test_game_over_restart() {
        let (config, mut state) = setup();
        state.select_level(1, &config).unwrap();
        state.session.as_mut().unwrap().player.pos = Vec2::new(400.0, 200.0);

        state.lose_level(1);
        assert_eq!(state.mode, GameMode::GameOver { level: 1 });
        assert!(state.session.is_none());

        state.restart_level(&config).unwrap();
        assert_eq!(state.mode, GameMode::Playing);
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.player.pos, Tuning::default().spawn);
        assert_eq!(session.player.lives, 3);
        assert!(session.enemies.iter().all(|e| e.alive));
    }

    #[test]
    fn test_game_over_back_to_select() {
        let (config, mut state) = setup();
        state.select_level(1, &config).unwrap();
        state.lose_level(1);

        state.back_to_level_select().unwrap();
        assert_eq!(state.mode, GameMode::LevelSelect);
        assert!(state.session.is_none());
    }

    #[test]
    fn test_restart_outside_game_over_rejected() {
        let (config, mut state) = setup();
        assert!(state.restart_level(&config).is_err());
        state.select_level(1, &config).unwrap();
        assert!(state.restart_level(&config).is_err());
        assert!(state.back_to_level_select().is_err());
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_unlocks_only_grow() {
        let mut unlocks = Unlocks::new(1);
        let before = unlocks.clone();
        assert!(unlocks.unlock(3));
        assert!(!unlocks.unlock(3));
        assert!(unlocks.is_superset(&before));
        assert_eq!(unlocks.iter().collect::<Vec<_>>(), vec![1, 3]);
    }
}
