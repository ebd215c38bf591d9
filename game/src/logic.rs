use std::time::Duration;

use engine::GameLogic;

use crate::config::RaceConfig;
use crate::lanes::LaneSource;
use crate::session::{Phase, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceEvent {
    /// The single action key: switches lanes while racing, restarts after a crash.
    Press,
}

/// Everything that happened during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceInput {
    pub dt: Duration,
    pub events: Vec<RaceEvent>,
}

impl RaceInput {
    pub fn idle(dt: Duration) -> Self {
        Self {
            dt,
            events: Vec::new(),
        }
    }

    pub fn press(dt: Duration) -> Self {
        Self {
            dt,
            events: vec![RaceEvent::Press],
        }
    }
}

/// Applies one frame of input to `session`.
///
/// While running, every press toggles the lane before the frame is simulated. After a crash the
/// first press restarts the run; anything else that frame is dropped.
pub fn advance<S: LaneSource>(session: &mut Session<S>, input: &RaceInput) {
    match session.phase() {
        Phase::Running => {
            for event in &input.events {
                match event {
                    RaceEvent::Press => session.toggle_lane(),
                }
            }
            session.tick(input.dt);
        }
        Phase::GameOver => {
            if input.events.contains(&RaceEvent::Press) {
                session.reset();
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RaceLogic<S> {
    config: RaceConfig,
    source: S,
}

impl<S> RaceLogic<S> {
    pub fn new(config: RaceConfig, source: S) -> Self {
        Self { config, source }
    }
}

impl<S: LaneSource + Clone> GameLogic for RaceLogic<S> {
    type State = Session<S>;
    type Input = RaceInput;

    fn initial_state(&self) -> Self::State {
        Session::new(self.config, self.source.clone())
    }

    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
        let mut next = state.clone();
        advance(&mut next, &input);
        next
    }
}
