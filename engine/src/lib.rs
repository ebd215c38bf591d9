pub mod app;
pub mod error;
pub mod frame_hash;
pub mod graphics;
pub mod pixels_surface;
pub mod surface;
pub mod ui;

pub trait GameLogic {
    type State;
    type Input;

    fn initial_state(&self) -> Self::State;
    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State;
}

/// Drives a `GameLogic` without a window.
///
/// The runner owns exactly one state and advances it one input at a time, which keeps scripted
/// scenarios and tests deterministic.
#[derive(Debug)]
pub struct HeadlessRunner<G: GameLogic> {
    game: G,
    state: G::State,
    frame: usize,
}

impl<G: GameLogic> HeadlessRunner<G> {
    pub fn new(game: G) -> Self {
        let state = game.initial_state();
        Self {
            game,
            state,
            frame: 0,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn state(&self) -> &G::State {
        &self.state
    }

    pub fn step(&mut self, input: G::Input) -> usize {
        self.state = self.game.step(&self.state, input);
        self.frame += 1;
        self.frame
    }

    pub fn run<I>(&mut self, inputs: I) -> usize
    where
        I: IntoIterator<Item = G::Input>,
    {
        for input in inputs {
            self.step(input);
        }
        self.frame
    }
}
