//! Game state and core simulation types
//!
//! Everything a tick reads and writes lives here. Static level data stays in
//! the catalog; runtime entities are addressed by their index in it.

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::level::{Level, LevelCatalog, LevelId};
use super::progression::Unlocks;
use crate::tuning::Tuning;

/// Top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Choosing a level (initial)
    LevelSelect,
    /// A session is running
    Playing,
    /// Out of lives; remembers which level a restart re-enters
    GameOver { level: LevelId },
}

/// The player-controlled circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Resting on a platform or the floor; a jump is allowed next tick
    pub grounded: bool,
    pub lives: u8,
}

impl Player {
    pub fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.spawn,
            vel: Vec2::ZERO,
            grounded: false,
            lives: tuning.starting_lives,
        }
    }

    pub fn aabb(&self, size: f32) -> Aabb {
        Aabb::square(self.pos, size)
    }

    /// Return to the spawn point at rest. Lives and grounded are untouched.
    pub fn respawn(&mut self, tuning: &Tuning) {
        self.pos = tuning.spawn;
        self.vel = Vec2::ZERO;
    }
}

/// A patrol enemy spawned from the level definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub alive: bool,
}

impl Enemy {
    pub fn aabb(&self, size: f32) -> Aabb {
        Aabb::square(self.pos, size)
    }
}

/// One level attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub level: LevelId,
    pub player: Player,
    /// Indexed like `Level::enemies`
    pub enemies: Vec<Enemy>,
    /// Indices into `Level::coins` collected this attempt
    pub collected: BTreeSet<usize>,
    /// Ticks simulated this attempt
    pub ticks: u64,
}

impl Session {
    /// Fresh attempt: player at spawn, every enemy alive, nothing collected
    pub fn start(level: &Level, tuning: &Tuning) -> Self {
        Self {
            level: level.id,
            player: Player::spawn(tuning),
            enemies: level
                .enemies
                .iter()
                .map(|&pos| Enemy { pos, alive: true })
                .collect(),
            collected: BTreeSet::new(),
            ticks: 0,
        }
    }

    pub fn is_collected(&self, coin: usize) -> bool {
        self.collected.contains(&coin)
    }

    pub fn enemies_alive(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    /// All coins picked up and no enemy left standing
    pub fn is_complete(&self, level: &Level) -> bool {
        self.collected.len() == level.coins.len() && self.enemies_alive() == 0
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    /// Present exactly while `mode == Playing`
    pub session: Option<Session>,
    /// Levels eligible for selection; survives sessions
    pub unlocked: Unlocks,
}

impl GameState {
    /// Start at level select with only the first level unlocked
    pub fn new(catalog: &LevelCatalog) -> Self {
        Self {
            mode: GameMode::LevelSelect,
            session: None,
            unlocked: Unlocks::new(catalog.first_id()),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.mode == GameMode::Playing
    }

    /// Level of the running session, if it still resolves in the catalog
    pub fn active_level<'a>(&self, catalog: &'a LevelCatalog) -> Option<&'a Level> {
        self.session.as_ref().and_then(|s| catalog.get(s.level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let catalog = LevelCatalog::builtin().unwrap();
        let state = GameState::new(&catalog);
        assert_eq!(state.mode, GameMode::LevelSelect);
        assert!(state.session.is_none());
        assert!(state.unlocked.contains(1));
        assert!(!state.unlocked.contains(2));
    }

    #[test]
    fn test_session_start() {
        let catalog = LevelCatalog::builtin().unwrap();
        let tuning = Tuning::default();
        let level = catalog.get(2).unwrap();
        let session = Session::start(level, &tuning);

        assert_eq!(session.level, 2);
        assert_eq!(session.player.pos, Vec2::new(50.0, 0.0));
        assert_eq!(session.player.vel, Vec2::ZERO);
        assert!(!session.player.grounded);
        assert_eq!(session.player.lives, 3);
        assert_eq!(session.enemies.len(), 2);
        assert!(session.enemies.iter().all(|e| e.alive));
        assert!(session.collected.is_empty());
        assert!(!session.is_complete(level));
    }

    #[test]
    fn test_completion_needs_coins_and_enemies() {
        let catalog = LevelCatalog::builtin().unwrap();
        let level = catalog.get(1).unwrap();
        let mut session = Session::start(level, &Tuning::default());

        session.collected.extend([0, 1, 2]);
        assert!(!session.is_complete(level));

        session.enemies[0].alive = false;
        assert_eq!(session.enemies_alive(), 0);
        assert!(session.is_complete(level));
    }

    #[test]
    fn test_respawn_keeps_lives() {
        let tuning = Tuning::default();
        let mut player = Player::spawn(&tuning);
        player.pos = Vec2::new(300.0, 200.0);
        player.vel = Vec2::new(6.0, 4.0);
        player.lives = 1;
        player.grounded = true;
        player.respawn(&tuning);
        assert_eq!(player.pos, tuning.spawn);
        assert_eq!(player.vel, Vec2::ZERO);
        assert_eq!(player.lives, 1);
        assert!(player.grounded);
    }
}
