//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (held-key set)
//! - Storage (LocalStorage on web, in-memory on native)
//! - Frame timing

pub mod input;
pub mod storage;
pub mod time;

pub use input::{HeldKeys, KeyBindings};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
#[cfg(target_arch = "wasm32")]
pub use time::AnimationFrameScheduler;
pub use time::{FrameClock, ManualScheduler, Scheduler};
