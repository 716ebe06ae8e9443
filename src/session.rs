//! Session controller
//!
//! Owns the game state and the best-score store and drives the
//! Idle → Running → Ended cycle. Restart goes straight back to Running.

use crate::persistence::{load_best, save_best};
use crate::platform::{FrameClock, HeldKeys, KeyBindings, KeyValueStore, Scheduler};
use crate::renderer::{Hud, OverlayPanel, Snapshot};
use crate::sim::{GamePhase, GameState, TickEvents, TickInput, tick};
use crate::tuning::Tuning;

/// One game instance plus its persistence
pub struct Session<S: KeyValueStore> {
    state: GameState,
    store: S,
    clock: FrameClock,
}

impl<S: KeyValueStore> Session<S> {
    /// Create an idle session, reading the persisted best score once
    pub fn new(seed: u64, tuning: Tuning, store: S) -> Self {
        let tuning = tuning.validated();
        let clock = FrameClock::new(tuning.max_frame_dt);
        let mut state = GameState::new(seed, tuning);
        state.best = load_best(&store);
        log::info!("Session created (seed {}, best {})", seed, state.best);
        Self {
            state,
            store,
            clock,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted setups (tests, demos)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Reset the session and begin running
    pub fn start(&mut self) {
        self.state.reset_session();
        self.state.phase = GamePhase::Running;
        self.clock.reset();
        log::info!("Session started");
    }

    /// Start over after a game over
    pub fn restart(&mut self) {
        self.start();
    }

    /// Advance one tick with an explicit delta. Ends the session when the
    /// last life is lost. No-op unless running.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> TickEvents {
        let events = tick(&mut self.state, input, dt);
        if events.game_over {
            self.end();
        }
        events
    }

    /// Frame callback: derive the delta from the frame timestamp, sample the
    /// held keys and tick. See [`drive`](Self::drive) for the scheduled form.
    pub fn frame(&mut self, now_ms: f64, held: &HeldKeys, bindings: &KeyBindings) -> TickEvents {
        if !self.is_running() {
            return TickEvents::default();
        }
        let dt = self.clock.delta(now_ms);
        let input = held.sample(bindings);
        self.tick(&input, dt)
    }

    /// Scheduled frame callback: run [`frame`](Self::frame), then request the
    /// next frame while the session is still running
    pub fn drive(
        &mut self,
        scheduler: &mut impl Scheduler,
        now_ms: f64,
        held: &HeldKeys,
        bindings: &KeyBindings,
    ) -> TickEvents {
        let events = self.frame(now_ms, held, bindings);
        if self.is_running() {
            scheduler.request_frame();
        } else {
            scheduler.cancel();
        }
        events
    }

    /// Stop running, fold the final score into the best and persist it
    pub fn end(&mut self) {
        if !self.is_running() {
            return;
        }
        let final_score = self.state.floored_score();
        self.state.best = self.state.best.max(final_score);
        self.state.phase = GamePhase::Ended;

        if let Err(e) = save_best(&mut self.store, self.state.best) {
            log::warn!("Failed to save best score {}: {}", self.state.best, e);
        }
        log::info!(
            "Game over: score {}, best {}",
            final_score,
            self.state.best
        );
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::from_state(&self.state)
    }

    /// Overlay to show for the current phase
    pub fn overlay(&self) -> Option<OverlayPanel> {
        OverlayPanel::for_phase(self.state.phase, self.state.floored_score())
    }
}
