//! Comet movement and ship collision
//!
//! The hit test treats the comet as a point padded by its radius on both axes
//! and checks it against the ship's half extents. Corners of that box register
//! hits a true circle would miss; gameplay is tuned around it.

use super::state::{Comet, Player};

/// Outcome of moving every comet one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    /// Comets that fell past the bottom edge
    pub missed: u32,
    /// Comets that struck the ship
    pub hits: u32,
    /// Lives reached zero during this pass
    pub out_of_lives: bool,
}

/// Axis-aligned overlap between a comet and the ship
#[inline]
pub fn hit_test(comet: &Comet, player: &Player) -> bool {
    let dx = (comet.pos.x - player.pos.x).abs();
    let dy = (comet.pos.y - player.pos.y).abs();
    dx < comet.radius + player.half_width && dy < comet.radius + player.half_height
}

/// Advance comets, drop the ones that left the playfield and resolve hits.
///
/// Each hit removes the comet and costs one life. Once lives reach zero the
/// pass stops: later comets are neither moved nor tested, and lives never go
/// below zero.
pub fn resolve_comets(
    comets: &mut Vec<Comet>,
    player: &Player,
    lives: &mut u8,
    dt: f32,
    despawn_y: f32,
) -> CollisionResult {
    let mut result = CollisionResult::default();

    comets.retain_mut(|comet| {
        if result.out_of_lives {
            return true;
        }

        comet.pos.y += comet.speed * dt;

        if comet.pos.y - comet.radius > despawn_y {
            result.missed += 1;
            return false;
        }

        if hit_test(comet, player) {
            result.hits += 1;
            *lives = lives.saturating_sub(1);
            if *lives == 0 {
                result.out_of_lives = true;
            }
            return false;
        }

        true
    });

    result
}
