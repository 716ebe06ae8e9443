//! Best score persistence
//!
//! The best score is stored as a plain decimal string under
//! [`BEST_SCORE_KEY`](crate::consts::BEST_SCORE_KEY). Anything unparseable
//! reads back as zero.

use crate::consts::BEST_SCORE_KEY;
use crate::platform::{KeyValueStore, StorageError};

/// Interpret a stored best score. Missing, non-numeric, negative or
/// non-finite values count as zero; fractional values are floored.
pub fn parse_best(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value.floor() as u64,
        _ => 0,
    }
}

/// Read the best score from the store
pub fn load_best(store: &impl KeyValueStore) -> u64 {
    let raw = store.get(BEST_SCORE_KEY);
    let best = parse_best(raw.as_deref());
    if let Some(raw) = raw.as_deref() {
        if best == 0 && raw.trim().parse::<f64>().is_err() {
            log::warn!("Ignoring malformed best score {:?}", raw);
        }
    }
    best
}

/// Write the best score to the store
pub fn save_best(store: &mut impl KeyValueStore, best: u64) -> Result<(), StorageError> {
    store.set(BEST_SCORE_KEY, &best.to_string())
}
