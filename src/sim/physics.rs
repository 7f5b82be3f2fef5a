//! Player kinematics and platform collision
//!
//! One explicit Euler step per tick with a fixed implicit timestep of one
//! frame. Platform contacts are resolved against the previous frame's edges
//! on the vertical axis only, while horizontal overlap is tested at the
//! candidate x alone. A player sliding off a platform edge in the same tick
//! it crosses the top falls past it, and platform sides never block movement.

use super::collision::Aabb;
use super::events::GameEvent;
use super::input::InputIntent;
use super::level::Level;
use super::state::Player;
use crate::tuning::Tuning;

/// Horizontal velocity straight from intent. Left wins when both are held.
fn horizontal_velocity(intent: InputIntent, tuning: &Tuning) -> f32 {
    if intent.left {
        -tuning.move_speed
    } else if intent.right {
        tuning.move_speed
    } else {
        0.0
    }
}

/// Advance the player by one tick against the level's platforms and bounds.
///
/// Order matters: velocity from intent, gravity then jump, integrate, clamp x,
/// platforms in catalog order (last match wins), world floor, ceiling stop.
pub fn step_player(
    player: &mut Player,
    intent: InputIntent,
    level: &Level,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    let size = tuning.player_size;
    let prev = player.pos;
    let was_grounded = player.grounded;

    player.vel.x = horizontal_velocity(intent, tuning);

    // Gravity accumulates even while grounded; landing never zeroes it
    player.vel.y += tuning.gravity;
    if intent.jump && player.grounded {
        player.vel.y = tuning.jump_velocity;
        player.grounded = false;
        events.push(GameEvent::Jumped);
    }

    let mut next = prev + player.vel;
    next.x = next.x.max(0.0).min(level.max_x(size));

    // x is final from here on, so one span serves every platform
    let span = Aabb::square(next, size);
    let mut grounded = false;
    let mut hit_ceiling = false;

    for plat in &level.platforms {
        if !span.overlaps_x(&plat.aabb()) {
            continue;
        }

        if prev.y + size <= plat.top() && next.y + size >= plat.top() && player.vel.y >= 0.0 {
            next.y = plat.top() - size;
            grounded = true;
            hit_ceiling = false;
        } else if prev.y >= plat.bottom() && next.y <= plat.bottom() && player.vel.y < 0.0 {
            next.y = plat.bottom() + tuning.ceiling_epsilon;
            hit_ceiling = true;
        }
    }

    // World floor beats any ceiling result above
    let floor = level.max_y(size);
    if next.y > floor {
        next.y = floor;
        grounded = true;
        hit_ceiling = false;
    }

    if hit_ceiling {
        player.vel.y = 0.0;
        events.push(GameEvent::HitCeiling);
    }

    player.pos = next;
    player.grounded = grounded;

    if grounded && !was_grounded {
        events.push(GameEvent::Landed);
    }
}
