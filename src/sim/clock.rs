//! Simulation clock: elapsed time, score and difficulty ramp

use super::spawn::spawn_comet;
use super::state::GameState;

/// Bound a raw frame delta to `[0, max_dt]`.
///
/// Stalls (tab switch, debugger) would otherwise feed one huge step into the
/// simulation. Negative and non-finite deltas count as zero.
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max_dt)
    }
}

/// Advance time, score and difficulty, spawning a comet when the spawn timer
/// reaches the current interval. Returns true if a comet was spawned.
pub fn advance_clock(state: &mut GameState, dt: f32) -> bool {
    let tuning = &state.tuning;

    state.time += dt;
    state.score += dt * tuning.score_per_second;
    state.speed = 1.0 + state.time / tuning.speed_ramp_secs;
    state.spawn_interval = (tuning.spawn_interval_base
        - state.time / tuning.spawn_interval_ramp_secs)
        .max(tuning.spawn_interval_min);

    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval {
        state.spawn_timer = 0.0;
        let comet = spawn_comet(&mut state.rng, &state.tuning, state.speed);
        log::debug!(
            "Comet spawned at x={:.1} r={:.1} speed={:.1}",
            comet.pos.x,
            comet.radius,
            comet.speed
        );
        state.comets.push(comet);
        return true;
    }

    false
}
