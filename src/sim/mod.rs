//! Simulation core
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Seeded RNG only
//! - Caller supplies the frame delta (clamped here)
//! - One tick runs to completion before the next

pub mod clock;
pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{advance_clock, clamp_dt};
pub use collision::{CollisionResult, hit_test, resolve_comets};
pub use physics::{integrate_player, scroll_stars};
pub use spawn::{seed_stars, spawn_comet};
pub use state::{Comet, GamePhase, GameState, Player, Star};
pub use tick::{TickEvents, TickInput, tick};
