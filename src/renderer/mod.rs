//! Presentation layer
//!
//! Platform-neutral views (HUD values, draw snapshots, overlay panels) plus the
//! Canvas 2D renderer used in the browser. Nothing here feeds back into the
//! simulation.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod overlay;
pub mod shapes;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use overlay::{OverlayAction, OverlayPanel};
pub use view::{Hud, Snapshot};
