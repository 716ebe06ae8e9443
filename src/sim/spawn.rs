//! Comet spawning and star-field seeding

use glam::Vec2;
use rand::Rng;

use super::state::{Comet, Star};
use crate::consts::*;
use crate::tuning::Tuning;

/// Create one comet just above the top edge.
///
/// The radius and x are drawn so the whole comet fits horizontally inside the
/// playfield; fall speed grows with the difficulty multiplier.
pub fn spawn_comet(rng: &mut impl Rng, tuning: &Tuning, speed_multiplier: f32) -> Comet {
    let radius = rng.random_range(tuning.comet_min_radius..tuning.comet_max_radius);
    let x = rng.random_range(radius..tuning.playfield_width - radius);
    let y = -radius - COMET_SPAWN_GAP;
    let speed = rng.random_range(tuning.comet_min_speed..tuning.comet_max_speed)
        + speed_multiplier * tuning.comet_speed_bonus;

    Comet {
        pos: Vec2::new(x, y),
        radius,
        speed,
    }
}

/// Scatter the background star field over the playfield
pub fn seed_stars(rng: &mut impl Rng, tuning: &Tuning) -> Vec<Star> {
    (0..tuning.star_count)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random_range(0.0..tuning.playfield_width),
                rng.random_range(0.0..tuning.playfield_height),
            ),
            radius: rng.random_range(STAR_MIN_RADIUS..STAR_MAX_RADIUS),
            speed: rng.random_range(STAR_MIN_SPEED..STAR_MAX_SPEED),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_comet_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2024);

        for speed_multiplier in [1.0, 2.5, 6.0] {
            for _ in 0..2000 {
                let comet = spawn_comet(&mut rng, &tuning, speed_multiplier);
                assert!(comet.radius >= 10.0 && comet.radius < 24.0, "radius {}", comet.radius);
                assert!(comet.pos.x - comet.radius >= 0.0, "left edge {:?}", comet);
                assert!(comet.pos.x + comet.radius <= PLAYFIELD_WIDTH, "right edge {:?}", comet);
                assert_eq!(comet.pos.y, -comet.radius - COMET_SPAWN_GAP);
                assert!(comet.pos.y + comet.radius < 0.0, "must start off-screen");

                let bonus = speed_multiplier * COMET_SPEED_BONUS;
                assert!(comet.speed >= 160.0 + bonus, "speed {}", comet.speed);
                assert!(comet.speed < 280.0 + bonus, "speed {}", comet.speed);
            }
        }
    }

    #[test]
    fn test_comets_vary() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let a = spawn_comet(&mut rng, &tuning, 1.0);
        let b = spawn_comet(&mut rng, &tuning, 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_star_field() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(99);
        let stars = seed_stars(&mut rng, &tuning);

        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            assert!(star.pos.x >= 0.0 && star.pos.x < PLAYFIELD_WIDTH);
            assert!(star.pos.y >= 0.0 && star.pos.y < PLAYFIELD_HEIGHT);
            assert!(star.radius >= STAR_MIN_RADIUS && star.radius < STAR_MAX_RADIUS);
            assert!(star.speed >= STAR_MIN_SPEED && star.speed < STAR_MAX_SPEED);
        }
    }
}
