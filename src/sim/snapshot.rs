//! Render-facing frame state
//!
//! A flat, serializable view of everything the page needs to draw one frame
//! or the current menu. Built fresh from the game state; never fed back.

use glam::Vec2;
use serde::Serialize;

use super::level::LevelId;
use super::state::{GameMode, GameState};
use crate::error::GameError;
use crate::tuning::GameConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinView {
    pub index: usize,
    pub pos: Vec2,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub index: usize,
    pub pos: Vec2,
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformView {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Active level geometry and entities
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelView {
    pub id: LevelId,
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub platforms: Vec<PlatformView>,
    pub coins: Vec<CoinView>,
    pub enemies: Vec<EnemyView>,
    pub coin_size: f32,
    pub enemy_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: f32,
}

/// Level-select menu entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelEntry {
    pub id: LevelId,
    pub name: String,
    pub unlocked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub lives: u8,
    pub coins_collected: usize,
    pub coins_total: usize,
}

/// Everything needed to draw the current frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub mode: GameMode,
    /// Present only while playing
    pub level: Option<LevelView>,
    pub player: Option<PlayerView>,
    pub hud: Option<Hud>,
    /// Sorted ascending
    pub unlocked: Vec<LevelId>,
    pub levels: Vec<LevelEntry>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState, config: &GameConfig) -> Self {
        let tuning = config.tuning();
        let active = state
            .session
            .as_ref()
            .filter(|_| state.is_playing())
            .and_then(|s| config.catalog().get(s.level).map(|level| (s, level)));

        let (level, player, hud) = match active {
            Some((session, level)) => {
                let view = LevelView {
                    id: level.id,
                    name: level.name.clone(),
                    width: level.width,
                    height: level.height,
                    platforms: level
                        .platforms
                        .iter()
                        .map(|p| PlatformView {
                            pos: Vec2::new(p.x, p.y),
                            size: Vec2::new(p.width, p.height),
                        })
                        .collect(),
                    coins: level
                        .coins
                        .iter()
                        .enumerate()
                        .map(|(index, &pos)| CoinView {
                            index,
                            pos,
                            visible: !session.is_collected(index),
                        })
                        .collect(),
                    enemies: session
                        .enemies
                        .iter()
                        .enumerate()
                        .map(|(index, e)| EnemyView {
                            index,
                            pos: e.pos,
                            alive: e.alive,
                        })
                        .collect(),
                    coin_size: tuning.coin_size,
                    enemy_size: tuning.enemy_size,
                };
                let player = PlayerView {
                    pos: session.player.pos,
                    size: tuning.player_size,
                };
                let hud = Hud {
                    lives: session.player.lives,
                    coins_collected: session.collected.len(),
                    coins_total: level.coins.len(),
                };
                (Some(view), Some(player), Some(hud))
            }
            None => (None, None, None),
        };

        Self {
            mode: state.mode,
            level,
            player,
            hud,
            unlocked: state.unlocked.iter().collect(),
            levels: config
                .catalog()
                .iter()
                .map(|l| LevelEntry {
                    id: l.id,
                    name: l.name.clone(),
                    unlocked: state.unlocked.contains(l.id),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }
}
