//! Comet Dodge - a single-screen comet dodging arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (clock, spawner, physics, collisions, game state)
//! - `session`: Start/end/restart transitions and best-score bookkeeping
//! - `renderer`: Read-only snapshots for the HUD and the canvas renderer
//! - `platform`: Browser/native platform abstraction (input, storage, time)
//! - `persistence`: Best score load/save
//! - `tuning`: Data-driven game balance

pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta fed into one tick (seconds)
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Playfield dimensions (canvas pixels)
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;

    /// Ship defaults
    pub const PLAYER_HALF_WIDTH: f32 = 13.0;
    pub const PLAYER_HALF_HEIGHT: f32 = 17.0;
    /// Distance from the bottom edge to the ship center
    pub const PLAYER_BOTTOM_OFFSET: f32 = 70.0;
    pub const PLAYER_ACCEL: f32 = 1800.0;
    pub const PLAYER_MAX_SPEED: f32 = 360.0;
    /// Per-tick velocity decay when no steering key is held
    pub const PLAYER_DAMPING: f32 = 0.88;
    /// Gap kept between the ship and the side walls
    pub const WALL_MARGIN: f32 = 8.0;

    /// Points per second survived
    pub const SCORE_PER_SECOND: f32 = 10.0;
    /// Seconds for the speed multiplier to grow by 1.0
    pub const SPEED_RAMP_SECS: f32 = 18.0;

    /// Spawn interval: starts at BASE, shrinks by 1s every RAMP seconds, floored at MIN
    pub const SPAWN_INTERVAL_BASE: f32 = 0.9;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.35;
    pub const SPAWN_INTERVAL_RAMP_SECS: f32 = 80.0;

    /// Comet defaults
    pub const COMET_MIN_RADIUS: f32 = 10.0;
    pub const COMET_MAX_RADIUS: f32 = 24.0;
    pub const COMET_MIN_SPEED: f32 = 160.0;
    pub const COMET_MAX_SPEED: f32 = 280.0;
    /// Extra fall speed per unit of speed multiplier
    pub const COMET_SPEED_BONUS: f32 = 25.0;
    /// Comets spawn this far above the top edge (plus their radius)
    pub const COMET_SPAWN_GAP: f32 = 10.0;
    /// Comets are dropped once their top edge is this far below the playfield
    pub const COMET_DESPAWN_MARGIN: f32 = 40.0;

    /// Background star field
    pub const STAR_COUNT: usize = 80;
    pub const STAR_WRAP_MARGIN: f32 = 10.0;
    pub const STAR_MIN_RADIUS: f32 = 0.4;
    pub const STAR_MAX_RADIUS: f32 = 2.0;
    pub const STAR_MIN_SPEED: f32 = 20.0;
    pub const STAR_MAX_SPEED: f32 = 40.0;
    /// Star scroll factor is BASE + speed_multiplier * PER_SPEED
    pub const STAR_PARALLAX_BASE: f32 = 0.6;
    pub const STAR_PARALLAX_PER_SPEED: f32 = 0.2;

    pub const STARTING_LIVES: u8 = 3;

    /// Storage keys
    pub const BEST_SCORE_KEY: &str = "comet-best";
    pub const TUNING_KEY: &str = "comet-tuning";
}
