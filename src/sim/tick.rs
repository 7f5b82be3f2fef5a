//! Fixed timestep simulation tick
//!
//! Takes the previous state snapshot and returns the next one. Nothing is
//! read from the previous snapshot after it has been partially updated, so
//! every stage sees the results of the stages before it in the same tick.

use super::entities;
use super::events::GameEvent;
use super::input::InputIntent;
use super::physics::step_player;
use super::state::GameState;
use crate::tuning::GameConfig;

/// Result of advancing one tick
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub state: GameState,
    /// Events in the order they happened
    pub events: Vec<GameEvent>,
}

/// Advance the game by one frame.
///
/// Outside `Playing` this returns the state unchanged. Inside it runs, in
/// order: physics, coin pickup, enemy contacts, then the defeat and
/// completion checks.
pub fn tick(prev: &GameState, config: &GameConfig, intent: InputIntent) -> TickOutcome {
    let mut state = prev.clone();
    let mut events = Vec::new();

    if !state.is_playing() {
        return TickOutcome { state, events };
    }

    let catalog = config.catalog();
    let tuning = config.tuning();

    let Some(session) = state.session.as_mut() else {
        state.abandon_session();
        return TickOutcome { state, events };
    };
    let Some(level) = catalog.get(session.level) else {
        state.abandon_session();
        return TickOutcome { state, events };
    };

    step_player(&mut session.player, intent, level, tuning, &mut events);
    let resolution = entities::resolve(session, level, tuning, &mut events);
    session.ticks += 1;

    let level_id = session.level;
    let complete = session.is_complete(level);

    if resolution.defeated {
        events.push(state.lose_level(level_id));
    } else if complete {
        events.push(state.complete_level(level_id, catalog));
    }

    TickOutcome { state, events }
}
