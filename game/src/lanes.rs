use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Lane {
    #[default]
    Left,
    Right,
}

impl Lane {
    pub fn index(self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Right => 1,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lane::Left => Lane::Right,
            Lane::Right => Lane::Left,
        }
    }
}

/// Horizontal lane centers, derived once from the screen width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneSet {
    centers: [i32; 2],
}

impl LaneSet {
    pub fn for_width(width: u32) -> Self {
        let width = width as i32;
        Self {
            centers: [width / 4, 3 * width / 4],
        }
    }

    pub fn center(&self, lane: Lane) -> i32 {
        self.centers[lane.index()]
    }

    /// Left edge of a car of `car_width` centered in `lane`.
    pub fn car_x(&self, lane: Lane, car_width: u32) -> i32 {
        self.center(lane) - (car_width / 2) as i32
    }
}

/// Where the next obstacle goes.
pub trait LaneSource {
    fn next_lane(&mut self) -> Lane;
}

/// Fair coin per spawn, reproducible from a seed.
#[derive(Debug, Clone)]
pub struct RandomLanes {
    rng: Pcg32,
}

impl RandomLanes {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl LaneSource for RandomLanes {
    fn next_lane(&mut self) -> Lane {
        if self.rng.random_bool(0.5) {
            Lane::Right
        } else {
            Lane::Left
        }
    }
}

/// Always yields the same lane. Used for scripted runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLane(pub Lane);

impl LaneSource for FixedLane {
    fn next_lane(&mut self) -> Lane {
        self.0
    }
}
