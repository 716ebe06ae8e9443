//! Read-only views handed to the HUD and renderer each frame

use std::fmt;

use glam::Vec2;

use crate::sim::{Comet, GameState, Player, Star};

/// HUD text values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    /// Floored score
    pub score: u64,
    pub best: u64,
    pub lives: u8,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.floored_score(),
            best: state.best,
            lives: state.lives,
        }
    }
}

impl fmt::Display for Hud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {}  Best: {}  Lives: {}",
            self.score, self.best, self.lives
        )
    }
}

/// Everything the renderer draws, borrowed from the game state
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub playfield: Vec2,
    pub player: &'a Player,
    pub comets: &'a [Comet],
    pub stars: &'a [Star],
}

impl<'a> Snapshot<'a> {
    pub fn from_state(state: &'a GameState) -> Self {
        Self {
            playfield: Vec2::new(state.tuning.playfield_width, state.tuning.playfield_height),
            player: &state.player,
            comets: &state.comets,
            stars: &state.stars,
        }
    }
}
