//! One player's run, from reset to collision.
//!
//! `Session` is the only owner of mutable game state. A frame of simulation is a single call to
//! [`Session::tick`], which applies the steps in a fixed order:
//!
//! 1. spawn (at most one obstacle, when the spawn interval has elapsed),
//! 2. score (`game_speed * dt` in seconds),
//! 3. speed (re-derived from score),
//! 4. move obstacles down by `game_speed` pixels,
//! 5. cull obstacles that reached the bottom edge,
//! 6. collision check, which ends the run on the first hit.
//!
//! Obstacles move a fixed number of pixels per frame while score grows with wall-clock time, so
//! fall speed on screen depends on the frame rate. Both halves are kept as they are.

use std::time::Duration;

use serde::Serialize;

use crate::config::RaceConfig;
use crate::geometry::Aabb;
use crate::lanes::{Lane, LaneSet, LaneSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub score: u32,
    pub elapsed_ms: u64,
    pub final_speed: u32,
    pub obstacles_spawned: u32,
}

#[derive(Debug, Clone)]
pub struct Session<S> {
    config: RaceConfig,
    lanes: LaneSet,
    source: S,
    phase: Phase,
    player_lane: Lane,
    player: Aabb,
    obstacles: Vec<Aabb>,
    score: f64,
    game_speed: u32,
    /// Simulated time since the last reset.
    clock: Duration,
    last_spawn: Duration,
    spawned: u32,
}

impl<S> Session<S> {
    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn player_lane(&self) -> Lane {
        self.player_lane
    }

    pub fn player(&self) -> Aabb {
        self.player
    }

    /// Live obstacles in spawn order.
    pub fn obstacles(&self) -> &[Aabb] {
        &self.obstacles
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn game_speed(&self) -> u32 {
        self.game_speed
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.score as u32,
            elapsed_ms: self.clock.as_millis().min(u64::MAX as u128) as u64,
            final_speed: self.game_speed,
            obstacles_spawned: self.spawned,
        }
    }

    /// Starts a fresh run. The lane source keeps its position so restarts don't replay the same
    /// obstacle sequence.
    pub fn reset(&mut self) {
        self.phase = Phase::Running;
        self.player_lane = Lane::Left;
        self.player = Aabb::new(
            self.lanes.car_x(self.player_lane, self.config.car_width),
            self.config.player_y(),
            self.config.car_width as i32,
            self.config.car_height as i32,
        );
        self.obstacles.clear();
        self.score = 0.0;
        self.game_speed = self.config.base_speed;
        self.clock = Duration::ZERO;
        self.last_spawn = Duration::ZERO;
        self.spawned = 0;
    }

    /// Moves the player to the other lane.
    pub fn toggle_lane(&mut self) {
        self.player_lane = self.player_lane.toggled();
        self.player.x = self.lanes.car_x(self.player_lane, self.config.car_width);
    }

    /// Inserts an obstacle as-is, bypassing the spawn timer.
    pub fn push_obstacle(&mut self, obstacle: Aabb) {
        self.obstacles.push(obstacle);
    }

    fn advance_score(&mut self, dt: Duration) {
        self.score += f64::from(self.game_speed) * dt.as_secs_f64();
    }

    fn advance_speed(&mut self) {
        let steps = (self.score / self.config.speed_step_score).floor();
        self.game_speed = self.config.base_speed + steps as u32;
    }

    fn advance_obstacles(&mut self) {
        let dy = self.game_speed as i32;
        for obstacle in &mut self.obstacles {
            obstacle.y += dy;
        }
    }

    fn cull_obstacles(&mut self) {
        let bottom = self.config.screen_height as i32;
        self.obstacles.retain(|o| o.y < bottom);
    }

    fn first_collision(&self) -> Option<usize> {
        self.obstacles
            .iter()
            .position(|o| o.intersects(&self.player))
    }
}

impl<S: LaneSource> Session<S> {
    pub fn new(config: RaceConfig, source: S) -> Self {
        let lanes = LaneSet::for_width(config.screen_width);
        let mut session = Self {
            config,
            lanes,
            source,
            phase: Phase::Running,
            player_lane: Lane::Left,
            player: Aabb::new(0, 0, 0, 0),
            obstacles: Vec::new(),
            score: 0.0,
            game_speed: config.base_speed,
            clock: Duration::ZERO,
            last_spawn: Duration::ZERO,
            spawned: 0,
        };
        session.reset();
        session
    }

    /// Advances one frame of `dt`. Does nothing once the run is over.
    ///
    /// Returns the index of the obstacle that ended the run, if one did.
    pub fn tick(&mut self, dt: Duration) -> Option<usize> {
        if !self.is_running() {
            return None;
        }

        self.clock = self.clock.saturating_add(dt);
        self.maybe_spawn();
        self.advance_score(dt);
        self.advance_speed();
        self.advance_obstacles();
        self.cull_obstacles();

        let hit = self.first_collision();
        if hit.is_some() {
            self.phase = Phase::GameOver;
        }
        hit
    }

    /// Spawns at most one obstacle; a late frame does not catch up on missed spawns.
    fn maybe_spawn(&mut self) -> Option<Lane> {
        if self.clock.saturating_sub(self.last_spawn) <= self.config.spawn_interval {
            return None;
        }

        let lane = self.source.next_lane();
        self.obstacles.push(Aabb::new(
            self.lanes.car_x(lane, self.config.car_width),
            self.config.spawn_y(),
            self.config.car_width as i32,
            self.config.car_height as i32,
        ));
        self.last_spawn = self.clock;
        self.spawned += 1;
        log::debug!(
            "spawned obstacle #{} in {:?} lane at {} ms",
            self.spawned,
            lane,
            self.clock.as_millis()
        );
        Some(lane)
    }
}
