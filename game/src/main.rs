use anyhow::Context;
use car_race::app::RaceApp;
use car_race::config::{RaceConfig, WINDOW_TITLE};
use engine::app::run_game;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RaceConfig::default();
    let seed: u64 = rand::random();
    log::info!("{WINDOW_TITLE} starting (lane seed {seed})");

    run_game(config.app_config(), RaceApp::new(config, seed))
        .context("failed to start the game window")?;
    Ok(())
}
