//! Held-key tracking and steering intent
//!
//! Key identifiers are the DOM `KeyboardEvent.key` strings ("ArrowLeft", "a", ...).

use std::collections::HashSet;

use crate::sim::TickInput;

/// Which key identifiers steer the ship
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec!["ArrowLeft".into(), "a".into(), "A".into()],
            right: vec!["ArrowRight".into(), "d".into(), "D".into()],
        }
    }
}

impl KeyBindings {
    /// True if the key steers in either direction
    pub fn is_bound(&self, key: &str) -> bool {
        self.left.iter().chain(&self.right).any(|k| k == key)
    }
}

/// Keys currently held down, as last reported by the input source.
///
/// Lives for the whole page; it is not cleared between sessions, so a key held
/// through a restart keeps steering.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashSet<String>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.keys.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.keys.remove(key);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Forget every key (e.g. the window lost focus and key-ups will never arrive)
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Reduce the held set to steering intent
    pub fn sample(&self, bindings: &KeyBindings) -> TickInput {
        TickInput {
            left: bindings.left.iter().any(|k| self.is_held(k)),
            right: bindings.right.iter().any(|k| self.is_held(k)),
        }
    }
}
