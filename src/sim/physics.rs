//! Ship kinematics and star-field scrolling

use rand::Rng;

use super::state::{Player, Star};
use crate::consts::*;
use crate::tuning::Tuning;

/// Apply steering, damping and wall clamping to the ship for one tick.
///
/// Left and right are applied independently, so holding both cancels out
/// instead of picking a winner. Damping is a per-tick factor, not scaled by dt.
pub fn integrate_player(player: &mut Player, left: bool, right: bool, dt: f32, tuning: &Tuning) {
    if left {
        player.vx -= player.accel * dt;
    }
    if right {
        player.vx += player.accel * dt;
    }
    if !left && !right {
        player.vx *= tuning.player_damping;
    }

    player.vx = player.vx.clamp(-player.max_speed, player.max_speed);

    player.pos.x += player.vx * dt;
    player.pos.x = player
        .pos
        .x
        .clamp(tuning.player_min_x(), tuning.player_max_x());
}

/// Scroll stars downward, wrapping any that leave the bottom back to the top
/// at a fresh random x.
pub fn scroll_stars(
    stars: &mut [Star],
    speed_multiplier: f32,
    dt: f32,
    rng: &mut impl Rng,
    tuning: &Tuning,
) {
    let parallax = STAR_PARALLAX_BASE + speed_multiplier * STAR_PARALLAX_PER_SPEED;
    for star in stars.iter_mut() {
        star.pos.y += star.speed * dt * parallax;
        if star.pos.y > tuning.playfield_height + STAR_WRAP_MARGIN {
            star.pos.y = -STAR_WRAP_MARGIN;
            star.pos.x = rng.random_range(0.0..tuning.playfield_width);
        }
    }
}
