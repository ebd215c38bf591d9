use std::time::Duration;

use engine::HeadlessRunner;
use engine::app::{GameApp, InputFrame};
use engine::graphics::Renderer2d;
use winit::event::VirtualKeyCode;

use crate::config::RaceConfig;
use crate::lanes::RandomLanes;
use crate::logic::{RaceEvent, RaceInput, RaceLogic};
use crate::render::draw_frame;
use crate::session::{Phase, Session};

pub const ACTION_KEY: VirtualKeyCode = VirtualKeyCode::Space;

pub fn map_key_to_event(key: VirtualKeyCode) -> Option<RaceEvent> {
    match key {
        ACTION_KEY => Some(RaceEvent::Press),
        _ => None,
    }
}

pub fn race_input(input: &InputFrame, dt: Duration) -> RaceInput {
    RaceInput {
        dt,
        events: input
            .keys_pressed
            .iter()
            .filter_map(|&key| map_key_to_event(key))
            .collect(),
    }
}

/// Headful glue: windowed input in, logged phase changes out.
pub struct RaceApp {
    logic: RaceLogic<RandomLanes>,
}

impl RaceApp {
    pub fn new(config: RaceConfig, seed: u64) -> Self {
        Self {
            logic: RaceLogic::new(config, RandomLanes::seeded(seed)),
        }
    }
}

impl GameApp for RaceApp {
    type State = HeadlessRunner<RaceLogic<RandomLanes>>;

    fn init_state(&mut self) -> Self::State {
        log::info!("run started");
        HeadlessRunner::new(self.logic.clone())
    }

    fn update_state(&mut self, state: &mut Self::State, input: &InputFrame, dt: Duration) {
        let before = state.state().phase();
        state.step(race_input(input, dt));
        log_transition(before, state.state(), state.frame());
    }

    fn render(&mut self, state: &Self::State, renderer: &mut dyn Renderer2d) {
        draw_frame(renderer, state.state());
    }
}

fn log_transition<S>(before: Phase, session: &Session<S>, frame: usize) {
    match (before, session.phase()) {
        (Phase::Running, Phase::GameOver) => {
            let summary = session.summary();
            match serde_json::to_string(&summary) {
                Ok(json) => log::info!("game over at frame {frame}: {json}"),
                Err(err) => log::warn!("game over at frame {frame} (summary unavailable: {err})"),
            }
        }
        (Phase::GameOver, Phase::Running) => log::info!("restarted at frame {frame}"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::{FixedLane, Lane};

    #[test]
    fn only_space_maps_to_press() {
        assert_eq!(map_key_to_event(VirtualKeyCode::Space), Some(RaceEvent::Press));
        assert_eq!(map_key_to_event(VirtualKeyCode::Return), None);
        assert_eq!(map_key_to_event(VirtualKeyCode::Escape), None);
    }

    #[test]
    fn race_input_keeps_each_press_and_the_frame_time() {
        let frame = InputFrame {
            keys_pressed: vec![
                VirtualKeyCode::Space,
                VirtualKeyCode::A,
                VirtualKeyCode::Space,
            ],
        };
        let input = race_input(&frame, Duration::from_millis(17));
        assert_eq!(input.dt, Duration::from_millis(17));
        assert_eq!(input.events, vec![RaceEvent::Press, RaceEvent::Press]);
    }

    #[test]
    fn app_steps_its_runner_through_a_crash_and_restart() {
        let mut app = RaceApp::new(RaceConfig::default(), 99);
        let mut runner = app.init_state();
        assert_eq!(runner.state().phase(), Phase::Running);

        let space = InputFrame {
            keys_pressed: vec![VirtualKeyCode::Space],
        };
        app.update_state(&mut runner, &space, Duration::from_millis(16));
        assert_eq!(runner.frame(), 1);
        assert_eq!(runner.state().player_lane(), Lane::Right);

        // Sit in one lane until something hits us; with a fair coin that happens quickly.
        let idle = InputFrame::default();
        for _ in 0..20_000 {
            if runner.state().phase() == Phase::GameOver {
                break;
            }
            app.update_state(&mut runner, &idle, Duration::from_millis(16));
        }
        assert_eq!(runner.state().phase(), Phase::GameOver);

        app.update_state(&mut runner, &space, Duration::from_millis(16));
        assert_eq!(runner.state().phase(), Phase::Running);
        assert_eq!(runner.state().score(), 0.0);
    }

    #[test]
    fn crash_summary_serializes_to_flat_json() {
        let mut session = Session::new(RaceConfig::default(), FixedLane(Lane::Right));
        session.push_obstacle(session.player());
        session.tick(Duration::from_millis(20));
        assert!(!session.is_running());

        let json = serde_json::to_value(session.summary()).expect("summary serializes");
        assert_eq!(json["score"], 0);
        assert_eq!(json["elapsed_ms"], 20);
        assert_eq!(json["final_speed"], 5);
        assert_eq!(json["obstacles_spawned"], 0);
    }
}
