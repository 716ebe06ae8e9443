//! Data-driven game balance
//!
//! Every knob defaults to the value in [`crate::consts`]. A tuning file only
//! needs the fields it wants to change:
//!
//! ```json
//! { "playfield_width": 600.0, "spawn_interval_min": 0.25 }
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance parameters for one game instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Ship ===
    pub player_half_width: f32,
    pub player_half_height: f32,
    pub player_bottom_offset: f32,
    pub player_accel: f32,
    pub player_max_speed: f32,
    pub player_damping: f32,
    pub wall_margin: f32,

    // === Scoring / difficulty ===
    pub score_per_second: f32,
    pub speed_ramp_secs: f32,
    pub spawn_interval_base: f32,
    pub spawn_interval_min: f32,
    pub spawn_interval_ramp_secs: f32,

    // === Comets ===
    pub comet_min_radius: f32,
    pub comet_max_radius: f32,
    pub comet_min_speed: f32,
    pub comet_max_speed: f32,
    pub comet_speed_bonus: f32,
    pub comet_despawn_margin: f32,

    // === Stars ===
    pub star_count: usize,

    // === Session ===
    pub starting_lives: u8,
    /// Largest frame delta fed into one tick (seconds)
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            player_half_width: PLAYER_HALF_WIDTH,
            player_half_height: PLAYER_HALF_HEIGHT,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,
            player_accel: PLAYER_ACCEL,
            player_max_speed: PLAYER_MAX_SPEED,
            player_damping: PLAYER_DAMPING,
            wall_margin: WALL_MARGIN,

            score_per_second: SCORE_PER_SECOND,
            speed_ramp_secs: SPEED_RAMP_SECS,
            spawn_interval_base: SPAWN_INTERVAL_BASE,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_ramp_secs: SPAWN_INTERVAL_RAMP_SECS,

            comet_min_radius: COMET_MIN_RADIUS,
            comet_max_radius: COMET_MAX_RADIUS,
            comet_min_speed: COMET_MIN_SPEED,
            comet_max_speed: COMET_MAX_SPEED,
            comet_speed_bonus: COMET_SPEED_BONUS,
            comet_despawn_margin: COMET_DESPAWN_MARGIN,

            star_count: STAR_COUNT,

            starting_lives: STARTING_LIVES,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.validated())
    }

    /// Clamp values that would break simulation invariants.
    ///
    /// The playfield must fit the ship plus its wall margins, ranges must be
    /// non-empty, and lives/intervals must stay positive.
    pub fn validated(mut self) -> Self {
        let defaults = Tuning::default();

        self.player_half_width = self.player_half_width.max(1.0);
        self.player_half_height = self.player_half_height.max(1.0);
        self.wall_margin = self.wall_margin.max(0.0);
        let min_width = 2.0 * (self.player_half_width + self.wall_margin) + 1.0;
        self.playfield_width = self.playfield_width.max(min_width);
        self.playfield_height = self.playfield_height.max(2.0 * self.player_half_height + 1.0);

        self.player_accel = self.player_accel.max(0.0);
        self.player_max_speed = self.player_max_speed.max(0.0);
        self.player_damping = self.player_damping.clamp(0.0, 1.0);

        if self.speed_ramp_secs <= 0.0 {
            self.speed_ramp_secs = defaults.speed_ramp_secs;
        }
        if self.spawn_interval_ramp_secs <= 0.0 {
            self.spawn_interval_ramp_secs = defaults.spawn_interval_ramp_secs;
        }
        self.spawn_interval_min = self.spawn_interval_min.max(0.01);
        self.spawn_interval_base = self.spawn_interval_base.max(self.spawn_interval_min);

        self.comet_min_radius = self.comet_min_radius.max(1.0);
        if self.comet_max_radius <= self.comet_min_radius {
            self.comet_max_radius = self.comet_min_radius + 1.0;
        }
        // A comet must fit inside the playfield horizontally
        let widest = self.playfield_width / 2.0 - 0.5;
        self.comet_max_radius = self.comet_max_radius.min(widest);
        self.comet_min_radius = self.comet_min_radius.min(self.comet_max_radius - 0.5);
        self.comet_min_speed = self.comet_min_speed.max(0.0);
        if self.comet_max_speed <= self.comet_min_speed {
            self.comet_max_speed = self.comet_min_speed + 1.0;
        }

        self.starting_lives = self.starting_lives.clamp(1, STARTING_LIVES);
        if self.max_frame_dt.is_nan() || self.max_frame_dt <= 0.0 {
            self.max_frame_dt = defaults.max_frame_dt;
        }

        self
    }

    /// Lowest x the ship center may reach
    #[inline]
    pub fn player_min_x(&self) -> f32 {
        self.player_half_width + self.wall_margin
    }

    /// Highest x the ship center may reach
    #[inline]
    pub fn player_max_x(&self) -> f32 {
        self.playfield_width - self.player_half_width - self.wall_margin
    }
}
