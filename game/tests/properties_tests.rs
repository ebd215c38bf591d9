use std::time::Duration;

use car_race::config::RaceConfig;
use car_race::lanes::{FixedLane, Lane, RandomLanes};
use car_race::logic::{RaceInput, RaceLogic, advance};
use car_race::session::{Phase, Session};
use engine::GameLogic;
use proptest::prelude::*;

fn frame_input() -> impl Strategy<Value = RaceInput> {
    (1u64..=120, prop::bool::weighted(0.1)).prop_map(|(ms, press)| {
        let dt = Duration::from_millis(ms);
        if press {
            RaceInput::press(dt)
        } else {
            RaceInput::idle(dt)
        }
    })
}

proptest! {
    #[test]
    fn live_obstacles_stay_above_the_bottom_edge(
        seed in any::<u64>(),
        inputs in prop::collection::vec(frame_input(), 1..300),
    ) {
        let config = RaceConfig::default();
        let mut session = Session::new(config, RandomLanes::seeded(seed));
        for input in &inputs {
            advance(&mut session, input);
            let height = config.screen_height as i32;
            prop_assert!(session.obstacles().iter().all(|o| o.y < height));
        }
    }

    #[test]
    fn speed_tracks_score_while_running(
        inputs in prop::collection::vec(frame_input(), 1..300),
    ) {
        let mut session = Session::new(RaceConfig::default(), FixedLane(Lane::Right));
        for input in &inputs {
            advance(&mut session, input);
            if session.phase() == Phase::Running {
                let expected = 5 + (session.score() / 50.0).floor() as u32;
                prop_assert_eq!(session.game_speed(), expected);
            }
        }
    }

    #[test]
    fn score_never_decreases_within_a_run(
        seed in any::<u64>(),
        inputs in prop::collection::vec(frame_input(), 1..300),
    ) {
        let logic = RaceLogic::new(RaceConfig::default(), RandomLanes::seeded(seed));
        let mut state = logic.initial_state();
        for input in inputs {
            let restarting = state.phase() == Phase::GameOver;
            let next = logic.step(&state, input);
            if !restarting {
                prop_assert!(next.score() >= state.score());
            }
            state = next;
        }
    }

    #[test]
    fn toggling_twice_restores_the_player(presses in 0usize..10) {
        let mut session = Session::new(RaceConfig::default(), FixedLane(Lane::Left));
        for _ in 0..presses {
            session.toggle_lane();
        }
        let before = session.player();
        session.toggle_lane();
        session.toggle_lane();
        prop_assert_eq!(session.player(), before);
        prop_assert!([75, 275].contains(&session.player().x));
    }
}
