//! Shape generation for the ship

use glam::Vec2;

use crate::sim::Player;

/// Ship hull triangle: nose at the top, base along the bottom of the hitbox
pub fn ship_hull(player: &Player) -> [Vec2; 3] {
    let (hw, hh) = (player.half_width, player.half_height);
    [
        player.pos + Vec2::new(0.0, -hh),
        player.pos + Vec2::new(hw, hh),
        player.pos + Vec2::new(-hw, hh),
    ]
}

/// Exhaust flame below the hull
pub fn ship_flame(player: &Player) -> [Vec2; 3] {
    let hh = player.half_height;
    [
        player.pos + Vec2::new(0.0, hh - 2.0),
        player.pos + Vec2::new(6.0, hh + 12.0),
        player.pos + Vec2::new(-6.0, hh + 12.0),
    ]
}
