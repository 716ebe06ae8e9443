//! Game state and core simulation types
//!
//! Everything one session mutates lives in [`GameState`]; nothing is global,
//! so independent instances can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use super::spawn::seed_stars;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title overlay shown, waiting for Start
    Idle,
    /// Simulation ticking
    Running,
    /// Game over overlay shown, waiting for Restart
    Ended,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    /// Horizontal velocity (pixels/s)
    pub vx: f32,
    pub half_width: f32,
    pub half_height: f32,
    pub accel: f32,
    pub max_speed: f32,
}

impl Player {
    /// Ship centered horizontally, resting near the bottom edge
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.playfield_width / 2.0,
                tuning.playfield_height - tuning.player_bottom_offset,
            ),
            vx: 0.0,
            half_width: tuning.player_half_width,
            half_height: tuning.player_half_height,
            accel: tuning.player_accel,
            max_speed: tuning.player_max_speed,
        }
    }
}

/// A falling hazard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comet {
    pub pos: Vec2,
    pub radius: f32,
    /// Fall speed (pixels/s)
    pub speed: f32,
}

/// A decorative background star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Base scroll speed before parallax scaling (pixels/s)
    pub speed: f32,
}

/// Complete state of one game instance
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Spawn / star RNG
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Real-valued score, floored for display
    pub score: f32,
    /// Best floored score across sessions
    pub best: u64,
    pub lives: u8,
    /// Difficulty scalar, `1 + time / speed_ramp_secs`
    pub speed: f32,
    pub spawn_timer: f32,
    pub spawn_interval: f32,
    /// Seconds of simulated play this session
    pub time: f32,
    pub player: Player,
    pub comets: Vec<Comet>,
    /// Fixed-size star field, recycled rather than reallocated
    pub stars: Vec<Star>,
}

impl GameState {
    /// Create an idle game with a freshly seeded star field
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = seed_stars(&mut rng, &tuning);
        let player = Player::new(&tuning);

        Self {
            seed,
            rng,
            phase: GamePhase::Idle,
            score: 0.0,
            best: 0,
            lives: tuning.starting_lives,
            speed: 1.0,
            spawn_timer: 0.0,
            spawn_interval: tuning.spawn_interval_base,
            time: 0.0,
            player,
            comets: Vec::new(),
            stars,
            tuning,
        }
    }

    /// Reset every per-session field. Stars, RNG and best score carry over.
    pub fn reset_session(&mut self) {
        self.score = 0.0;
        self.lives = self.tuning.starting_lives;
        self.speed = 1.0;
        self.spawn_timer = 0.0;
        self.spawn_interval = self.tuning.spawn_interval_base;
        self.time = 0.0;
        self.comets.clear();
        self.player = Player::new(&self.tuning);
    }

    /// Score as shown on the HUD
    #[inline]
    pub fn floored_score(&self) -> u64 {
        self.score.max(0.0).floor() as u64
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
