//! Property tests for simulation invariants

use comet_dodge::Tuning;
use comet_dodge::consts::*;
use comet_dodge::sim::{Comet, GamePhase, GameState, TickInput, hit_test, tick};
use glam::Vec2;
use proptest::prelude::*;

fn running_state(seed: u64) -> GameState {
    let mut state = GameState::new(seed, Tuning::default());
    state.phase = GamePhase::Running;
    state
}

fn arb_step() -> impl Strategy<Value = (bool, bool, f32)> {
    (any::<bool>(), any::<bool>(), 0.0f32..=MAX_FRAME_DT)
}

proptest! {
    #[test]
    fn lives_never_increase(seed in any::<u64>(), steps in prop::collection::vec(arb_step(), 1..300)) {
        let mut state = running_state(seed);
        for (left, right, dt) in steps {
            let before = state.lives;
            tick(&mut state, &TickInput { left, right }, dt);
            prop_assert!(state.lives <= before);
            prop_assert!(state.lives <= STARTING_LIVES);
        }
    }

    #[test]
    fn player_stays_inside_walls(seed in any::<u64>(), steps in prop::collection::vec(arb_step(), 1..300)) {
        let mut state = running_state(seed);
        let min_x = PLAYER_HALF_WIDTH + WALL_MARGIN;
        let max_x = PLAYFIELD_WIDTH - PLAYER_HALF_WIDTH - WALL_MARGIN;
        for (left, right, dt) in steps {
            tick(&mut state, &TickInput { left, right }, dt);
            prop_assert!(state.player.pos.x >= min_x && state.player.pos.x <= max_x,
                "x = {}", state.player.pos.x);
            prop_assert!(state.player.vx.abs() <= PLAYER_MAX_SPEED);
        }
    }

    #[test]
    fn difficulty_only_ramps_up(seed in any::<u64>(), steps in prop::collection::vec(arb_step(), 1..300)) {
        let mut state = running_state(seed);
        let mut speed = state.speed;
        let mut interval = state.spawn_interval;
        for (left, right, dt) in steps {
            tick(&mut state, &TickInput { left, right }, dt);
            prop_assert!(state.speed >= speed);
            prop_assert!(state.spawn_interval <= interval);
            prop_assert!(state.spawn_interval >= SPAWN_INTERVAL_MIN);
            speed = state.speed;
            interval = state.spawn_interval;
        }
    }

    #[test]
    fn overlapping_comets_each_cost_one_life(
        offsets in prop::collection::vec((-20.0f32..20.0, -20.0f32..20.0, 10.0f32..24.0), 0..3),
        dt in 0.0f32..=MAX_FRAME_DT,
    ) {
        let mut state = running_state(3);
        let player_pos = state.player.pos;
        for &(dx, dy, radius) in &offsets {
            state.comets.push(Comet { pos: player_pos + Vec2::new(dx, dy), radius, speed: 0.0 });
        }
        let overlapping = state.comets.iter().filter(|c| hit_test(c, &state.player)).count();

        let events = tick(&mut state, &TickInput::default(), dt);

        prop_assert_eq!(events.hits as usize, overlapping);
        prop_assert_eq!(state.lives as usize, STARTING_LIVES as usize - overlapping);
        prop_assert!(state.comets.iter().all(|c| !hit_test(c, &state.player)));
    }
}
