use std::time::Duration;

use engine::app::AppConfig;
use engine::surface::SurfaceSize;

pub const WINDOW_TITLE: &str = "Simple Car Race";

/// Gameplay constants. Everything here is fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub car_width: u32,
    pub car_height: u32,
    /// Gap between the player's car and the bottom edge.
    pub player_bottom_margin: u32,
    pub base_speed: u32,
    /// Score needed for each +1 of game speed.
    pub speed_step_score: f64,
    pub spawn_interval: Duration,
    pub target_fps: u32,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            screen_width: 400,
            screen_height: 600,
            car_width: 50,
            car_height: 90,
            player_bottom_margin: 10,
            base_speed: 5,
            speed_step_score: 50.0,
            spawn_interval: Duration::from_millis(1500),
            target_fps: 60,
        }
    }
}

impl RaceConfig {
    pub fn screen_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.screen_width, self.screen_height)
    }

    pub fn player_y(&self) -> i32 {
        self.screen_height
            .saturating_sub(self.car_height)
            .saturating_sub(self.player_bottom_margin) as i32
    }

    /// Obstacles enter with their bottom edge on the top of the screen.
    pub fn spawn_y(&self) -> i32 {
        -(self.car_height as i32)
    }

    /// Fixed-size, vsynced window sized to the screen.
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            title: WINDOW_TITLE.to_string(),
            size: self.screen_size(),
            target_fps: self.target_fps,
            vsync: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_place_player_near_bottom() {
        let config = RaceConfig::default();
        assert_eq!(config.player_y(), 500);
        assert_eq!(config.spawn_y(), -90);
        assert_eq!(config.screen_size(), SurfaceSize::new(400, 600));
    }

    #[test]
    fn window_matches_screen_and_always_vsyncs() {
        let app = RaceConfig::default().app_config();
        assert_eq!(app.title, "Simple Car Race");
        assert_eq!(app.size, SurfaceSize::new(400, 600));
        assert_eq!(app.target_fps, 60);
        assert!(app.vsync);
    }
}
