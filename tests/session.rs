//! End-to-end session scenarios

use comet_dodge::consts::*;
use comet_dodge::platform::{
    HeldKeys, KeyBindings, KeyValueStore, ManualScheduler, MemoryStore, Scheduler,
};
use comet_dodge::sim::{Comet, GamePhase, TickInput, hit_test};
use comet_dodge::{Session, Tuning};

fn lethal_comet(session: &Session<MemoryStore>) -> Comet {
    Comet {
        pos: session.state().player.pos,
        radius: 12.0,
        speed: 0.0,
    }
}

/// Run the session into the ground with comets dropped on the ship
fn lose_all_lives(session: &mut Session<MemoryStore>) {
    while session.is_running() {
        let comet = lethal_comet(session);
        session.state_mut().comets.push(comet);
        session.tick(&TickInput::default(), 0.0);
    }
}

#[test]
fn survive_100_ticks_without_comets() {
    let mut session = Session::new(1, Tuning::default(), MemoryStore::new());
    session.start();

    for _ in 0..100 {
        session.tick(&TickInput::default(), 0.033);
        session.state_mut().comets.clear();
    }

    assert!((session.state().score - 33.0).abs() < 0.01);
    assert!(matches!(session.hud().score, 32 | 33));
    assert_eq!(session.state().lives, 3);
    assert!(session.is_running());
}

#[test]
fn comet_on_ship_costs_one_life() {
    let mut session = Session::new(1, Tuning::default(), MemoryStore::new());
    session.start();
    let comet = lethal_comet(&session);
    assert!(hit_test(&comet, &session.state().player));
    session.state_mut().comets.push(comet);

    let events = session.tick(&TickInput::default(), 0.016);

    assert_eq!(events.hits, 1);
    assert_eq!(session.state().lives, 2);
    assert!(session.state().comets.is_empty());
}

#[test]
fn lower_score_keeps_best() {
    let store = MemoryStore::with_entry(BEST_SCORE_KEY, "50");
    let mut session = Session::new(1, Tuning::default(), store);
    assert_eq!(session.state().best, 50);

    session.start();
    session.state_mut().score = 30.4;
    lose_all_lives(&mut session);

    assert_eq!(session.phase(), GamePhase::Ended);
    assert_eq!(session.state().best, 50);
    assert_eq!(session.store().get(BEST_SCORE_KEY).as_deref(), Some("50"));
}

#[test]
fn higher_score_becomes_best_and_is_written() {
    let store = MemoryStore::with_entry(BEST_SCORE_KEY, "50");
    let mut session = Session::new(1, Tuning::default(), store);

    session.start();
    session.state_mut().score = 75.2;
    lose_all_lives(&mut session);

    assert_eq!(session.state().best, 75);
    assert_eq!(
        session.store().writes(),
        &[(BEST_SCORE_KEY.to_string(), "75".to_string())]
    );
}

#[test]
fn malformed_best_reads_as_zero() {
    let store = MemoryStore::with_entry(BEST_SCORE_KEY, "lots");
    let session = Session::new(1, Tuning::default(), store);
    assert_eq!(session.state().best, 0);
}

#[test]
fn restart_resets_session_but_not_best() {
    let mut session = Session::new(1, Tuning::default(), MemoryStore::new());
    session.start();
    session.state_mut().score = 20.0;
    lose_all_lives(&mut session);
    assert_eq!(session.state().best, 20);

    session.state_mut().comets.push(Comet {
        pos: glam::Vec2::new(100.0, 100.0),
        radius: 15.0,
        speed: 200.0,
    });
    session.restart();

    let state = session.state();
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.score, 0.0);
    assert_eq!(state.lives, STARTING_LIVES);
    assert!(state.comets.is_empty());
    assert_eq!(state.best, 20);

    // A short second run does not beat the best
    session.tick(&TickInput::default(), 0.033);
    lose_all_lives(&mut session);
    assert_eq!(session.state().best, 20);
}

#[test]
fn held_keys_survive_restart() {
    let mut session = Session::new(5, Tuning::default(), MemoryStore::new());
    let bindings = KeyBindings::default();
    let mut held = HeldKeys::new();
    held.press("a");

    session.start();
    lose_all_lives(&mut session);
    session.restart();

    let start_x = session.state().player.pos.x;
    for i in 0..10 {
        session.frame(i as f64 * 16.0, &held, &bindings);
    }
    assert!(session.state().player.pos.x < start_x);
}

#[test]
fn scheduler_drives_session_to_game_over() {
    let tuning = Tuning {
        spawn_interval_base: 0.1,
        spawn_interval_min: 0.05,
        ..Default::default()
    };
    let mut session = Session::new(77, tuning, MemoryStore::new());
    let held = HeldKeys::new();
    let bindings = KeyBindings::default();
    let mut scheduler = ManualScheduler::new(1000.0 / 60.0);

    session.start();
    let frames = scheduler.run(200_000, |now_ms, s| {
        session.drive(s, now_ms, &held, &bindings);
    });

    assert!(frames < 200_000, "session never ended");
    assert_eq!(session.phase(), GamePhase::Ended);
    assert_eq!(session.state().lives, 0);
    assert_eq!(session.store().writes().len(), 1);
    assert!(!scheduler.is_requested());
}
