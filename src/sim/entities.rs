//! Player interactions with coins and enemies
//!
//! Runs after physics on the post-physics player box.

use super::collision::Aabb;
use super::events::GameEvent;
use super::level::Level;
use super::state::Session;
use crate::tuning::Tuning;

/// What the resolver decided beyond per-entity updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Lives reached zero during this pass
    pub defeated: bool,
}

/// Collect every overlapped coin not already collected
pub fn collect_coins(
    session: &mut Session,
    level: &Level,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    let player_box = session.player.aabb(tuning.player_size);

    for (index, &coin) in level.coins.iter().enumerate() {
        if session.is_collected(index) {
            continue;
        }
        if player_box.overlaps(&Aabb::square(coin, tuning.coin_size)) {
            session.collected.insert(index);
            log::debug!("Coin {} collected", index);
            events.push(GameEvent::CoinCollected { index });
        }
    }
}

/// Stomp or take damage from every overlapping living enemy.
///
/// All contacts are judged against the player box and vertical velocity as
/// they were when the pass began. A hit that respawns the player does not
/// stop later enemies in the list from also hitting, so simultaneous
/// contacts each cost a life.
pub fn resolve_enemies(
    session: &mut Session,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> Resolution {
    let player_box = session.player.aabb(tuning.player_size);
    let falling = session.player.vel.y > 0.0;
    let mut resolution = Resolution::default();

    for (index, enemy) in session.enemies.iter_mut().enumerate() {
        if !enemy.alive {
            continue;
        }
        if !player_box.overlaps(&enemy.aabb(tuning.enemy_size)) {
            continue;
        }

        if falling && player_box.bottom() <= enemy.pos.y + tuning.stomp_tolerance {
            enemy.alive = false;
            session.player.vel.y = tuning.stomp_velocity();
            log::debug!("Enemy {} stomped", index);
            events.push(GameEvent::EnemyStomped { index });
        } else {
            let player = &mut session.player;
            player.lives = player.lives.saturating_sub(1);
            player.respawn(tuning);
            log::debug!("Hit by enemy {}, {} lives left", index, player.lives);
            events.push(GameEvent::PlayerHit {
                enemy: index,
                lives_left: player.lives,
            });
            if player.lives == 0 {
                resolution.defeated = true;
            }
        }
    }

    resolution
}

/// Coins first, then enemies
pub fn resolve(
    session: &mut Session,
    level: &Level,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> Resolution {
    collect_coins(session, level, tuning, events);
    resolve_enemies(session, tuning, events)
}
