//! Frame timing
//!
//! [`FrameClock`] turns display-refresh timestamps into clamped tick deltas.
//! A [`Scheduler`] decides when the next frame callback runs:
//! `AnimationFrameScheduler` wraps `requestAnimationFrame` in the browser,
//! [`ManualScheduler`] hands out evenly spaced timestamps so the frame
//! callback can be driven deterministically.

#[cfg(target_arch = "wasm32")]
use std::{cell::Cell, rc::Rc};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, closure::Closure};

use crate::sim::clamp_dt;

/// Source of frame callbacks
///
/// At most one frame is outstanding at a time; requesting again before it is
/// delivered does nothing.
pub trait Scheduler {
    /// Ask for one more frame callback
    fn request_frame(&mut self);
    /// Drop any pending request
    fn cancel(&mut self);
    fn is_requested(&self) -> bool;
}

/// Converts frame timestamps (milliseconds) into tick deltas (seconds)
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Forget the previous timestamp; the next frame yields a zero delta
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// Delta since the previous frame, capped at `max_dt`
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        clamp_dt(dt, self.max_dt)
    }
}

/// Fixed-step frame source for headless runs and tests
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    now_ms: f64,
    step_ms: f64,
    requested: bool,
    frames: u64,
}

impl ManualScheduler {
    pub fn new(step_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            step_ms,
            requested: false,
            frames: 0,
        }
    }

    /// Frames delivered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Deliver the pending frame's timestamp, if one was requested
    pub fn next_frame(&mut self) -> Option<f64> {
        if !self.requested {
            return None;
        }
        self.requested = false;
        self.now_ms += self.step_ms;
        self.frames += 1;
        Some(self.now_ms)
    }

    /// Deliver frames until the callback stops requesting them or `max_frames`
    /// is hit. Requests the first frame itself.
    ///
    /// Like a `requestAnimationFrame` callback, `on_frame` gets the frame
    /// timestamp and must request the next frame through the scheduler.
    /// Returns the number of frames delivered by this call.
    pub fn run(&mut self, max_frames: u64, mut on_frame: impl FnMut(f64, &mut Self)) -> u64 {
        let start = self.frames;
        self.request_frame();
        while self.frames - start < max_frames {
            let Some(now_ms) = self.next_frame() else {
                break;
            };
            on_frame(now_ms, self);
        }
        self.cancel();
        self.frames - start
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.requested = true;
    }

    fn cancel(&mut self) {
        self.requested = false;
    }

    fn is_requested(&self) -> bool {
        self.requested
    }
}

/// `requestAnimationFrame`-backed scheduler
#[cfg(target_arch = "wasm32")]
pub struct AnimationFrameScheduler {
    callback: Option<Closure<dyn FnMut(f64)>>,
    /// Handle of the outstanding request; cleared when the frame fires
    handle: Rc<Cell<Option<i32>>>,
}

#[cfg(target_arch = "wasm32")]
impl AnimationFrameScheduler {
    pub fn new() -> Self {
        Self {
            callback: None,
            handle: Rc::new(Cell::new(None)),
        }
    }

    /// Install the frame callback. It receives the rAF timestamp in milliseconds.
    pub fn set_callback(&mut self, mut on_frame: impl FnMut(f64) + 'static) {
        let handle = self.handle.clone();
        self.callback = Some(Closure::new(move |now_ms: f64| {
            handle.set(None);
            on_frame(now_ms);
        }));
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for AnimationFrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl Scheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) {
        if self.handle.get().is_some() {
            return;
        }
        let (Some(window), Some(callback)) = (web_sys::window(), self.callback.as_ref()) else {
            log::warn!("Cannot request animation frame");
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    fn is_requested(&self) -> bool {
        self.handle.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_FRAME_DT;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new(MAX_FRAME_DT);
        assert_eq!(clock.delta(12_345.0), 0.0);
        assert!((clock.delta(12_361.0) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut clock = FrameClock::new(MAX_FRAME_DT);
        clock.delta(0.0);
        assert_eq!(clock.delta(4_000.0), MAX_FRAME_DT);
    }

    #[test]
    fn test_backwards_timestamp_is_zero() {
        let mut clock = FrameClock::new(MAX_FRAME_DT);
        clock.delta(500.0);
        assert_eq!(clock.delta(400.0), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new(MAX_FRAME_DT);
        clock.delta(100.0);
        clock.reset();
        assert_eq!(clock.delta(200.0), 0.0);
    }

    #[test]
    fn test_manual_only_delivers_requested_frames() {
        let mut scheduler = ManualScheduler::new(16.0);
        assert_eq!(scheduler.next_frame(), None);
        scheduler.request_frame();
        assert_eq!(scheduler.next_frame(), Some(16.0));
        assert_eq!(scheduler.next_frame(), None);
        scheduler.request_frame();
        scheduler.cancel();
        assert_eq!(scheduler.next_frame(), None);
    }

    #[test]
    fn test_manual_request_is_not_stacked() {
        let mut scheduler = ManualScheduler::new(16.0);
        scheduler.request_frame();
        scheduler.request_frame();
        assert_eq!(scheduler.next_frame(), Some(16.0));
        assert_eq!(scheduler.next_frame(), None);
        assert_eq!(scheduler.frames(), 1);
    }

    #[test]
    fn test_manual_run_stops_when_callback_declines() {
        let mut scheduler = ManualScheduler::new(10.0);
        let mut seen = Vec::new();
        let frames = scheduler.run(100, |ts, s| {
            seen.push(ts);
            if seen.len() < 5 {
                s.request_frame();
            }
        });
        assert_eq!(frames, 5);
        assert_eq!(seen, vec![10.0, 20.0, 30.0, 40.0, 50.0]);
        assert!(!scheduler.is_requested());
    }

    #[test]
    fn test_manual_run_respects_frame_limit() {
        let mut scheduler = ManualScheduler::new(10.0);
        assert_eq!(scheduler.run(7, |_, s| s.request_frame()), 7);
        assert_eq!(scheduler.frames(), 7);
    }
}
