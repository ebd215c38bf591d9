use std::time::Duration;

use car_race::config::RaceConfig;
use car_race::geometry::Aabb;
use car_race::lanes::{FixedLane, Lane};
use car_race::logic::{RaceInput, RaceLogic};
use car_race::session::{Phase, Session};
use engine::HeadlessRunner;

fn right_lane_only() -> Session<FixedLane> {
    Session::new(RaceConfig::default(), FixedLane(Lane::Right))
}

#[test]
fn first_spawn_waits_until_strictly_after_the_interval() {
    let mut session = right_lane_only();
    let step = Duration::from_millis(100);

    for _ in 0..15 {
        session.tick(step);
    }
    assert_eq!(session.clock(), Duration::from_millis(1500));
    assert!(session.obstacles().is_empty());

    session.tick(step);
    assert_eq!(session.obstacles().len(), 1);

    // The timer restarted at 1600 ms, so nothing new before 3000 ms.
    while session.clock() < Duration::from_millis(3000) {
        session.tick(step);
        assert_eq!(session.obstacles().len(), 1, "at {:?}", session.clock());
    }
    while session.obstacles().len() < 2 {
        session.tick(step);
    }
    assert_eq!(session.clock(), Duration::from_millis(3200));
}

#[test]
fn ten_seconds_without_hazards_scores_base_speed_times_ten() {
    let logic = RaceLogic::new(RaceConfig::default(), FixedLane(Lane::Right));
    let mut runner = HeadlessRunner::new(logic);

    let frames = runner.run((0..1000).map(|_| RaceInput::idle(Duration::from_millis(10))));
    assert_eq!(frames, 1000);

    let session = runner.state();
    assert_eq!(session.phase(), Phase::Running);
    assert!(
        (session.score() - 50.0).abs() < 1e-6,
        "score = {}",
        session.score()
    );
    assert!(session.summary().obstacles_spawned > 0);
    assert!(session.obstacles().iter().all(|o| o.x == 275));
}

#[test]
fn forced_obstacle_on_the_player_ends_the_run_and_freezes_score() {
    let logic = RaceLogic::new(RaceConfig::default(), FixedLane(Lane::Right));
    let mut runner = HeadlessRunner::new(logic);
    runner.run((0..30).map(|_| RaceInput::idle(Duration::from_millis(16))));

    let mut session = runner.state().clone();
    let before = session.score();
    session.push_obstacle(session.player());
    let hit = session.tick(Duration::from_millis(16));

    assert!(hit.is_some());
    assert_eq!(session.phase(), Phase::GameOver);
    let frozen = session.score();
    assert!(frozen >= before);

    for _ in 0..10 {
        session.tick(Duration::from_millis(16));
    }
    assert_eq!(session.score(), frozen);
    assert_eq!(session.phase(), Phase::GameOver);
}

#[test]
fn restart_after_game_over_resets_score_to_zero() {
    let logic = RaceLogic::new(RaceConfig::default(), FixedLane(Lane::Left));
    let mut runner = HeadlessRunner::new(logic);

    // Every obstacle comes down the player's lane.
    let mut frames = 0;
    while runner.state().phase() == Phase::Running {
        runner.step(RaceInput::idle(Duration::from_millis(16)));
        frames += 1;
        assert!(frames < 10_000, "never crashed");
    }
    assert!(runner.state().score() > 0.0);

    runner.step(RaceInput::press(Duration::from_millis(16)));
    let session = runner.state();
    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.score(), 0.0);
    assert_eq!(session.game_speed(), 5);
    assert!(session.obstacles().is_empty());
    assert_eq!(session.player_lane(), Lane::Left);
}

#[test]
fn dodging_into_the_other_lane_avoids_the_crash() {
    let logic = RaceLogic::new(RaceConfig::default(), FixedLane(Lane::Left));
    let mut runner = HeadlessRunner::new(logic);

    runner.step(RaceInput::press(Duration::from_millis(16)));
    runner.run((0..1000).map(|_| RaceInput::idle(Duration::from_millis(16))));

    assert_eq!(runner.state().player_lane(), Lane::Right);
    assert_eq!(runner.state().phase(), Phase::Running);
}

#[test]
fn collision_examples_match_half_open_overlap() {
    let player = Aabb::new(100, 500, 50, 90);
    assert!(player.intersects(&Aabb::new(100, 550, 50, 90)));
    assert!(!player.intersects(&Aabb::new(100, 591, 50, 90)));
    assert!(!player.intersects(&Aabb::new(300, 500, 50, 90)));
}
