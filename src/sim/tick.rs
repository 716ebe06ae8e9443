//! Per-frame simulation tick
//!
//! Runs the clock, ship physics and comet collisions in that order. Ending the
//! session (best score, persistence) is left to [`crate::session::Session`],
//! which reacts to [`TickEvents::game_over`].

use super::clock::{advance_clock, clamp_dt};
use super::collision::resolve_comets;
use super::physics::{integrate_player, scroll_stars};
use super::state::GameState;

/// Steering intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// A comet was spawned this tick
    pub spawned: bool,
    /// Comets that fell off the bottom
    pub missed: u32,
    /// Comets that struck the ship
    pub hits: u32,
    /// Lives reached zero; the session must end
    pub game_over: bool,
}

/// Advance the game by one frame. Does nothing unless the game is running.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickEvents {
    if !state.is_running() {
        return TickEvents::default();
    }

    let dt = clamp_dt(dt, state.tuning.max_frame_dt);

    let spawned = advance_clock(state, dt);

    integrate_player(&mut state.player, input.left, input.right, dt, &state.tuning);
    scroll_stars(
        &mut state.stars,
        state.speed,
        dt,
        &mut state.rng,
        &state.tuning,
    );

    let despawn_y = state.tuning.playfield_height + state.tuning.comet_despawn_margin;
    let collisions = resolve_comets(
        &mut state.comets,
        &state.player,
        &mut state.lives,
        dt,
        despawn_y,
    );

    if collisions.hits > 0 {
        log::info!("Ship hit by {} comet(s), lives: {}", collisions.hits, state.lives);
    }

    TickEvents {
        spawned,
        missed: collisions.missed,
        hits: collisions.hits,
        game_over: collisions.out_of_lives,
    }
}
