use engine::graphics::{Color, Renderer2d, text_size};
use engine::ui::{Anchor, Insets, Rect, Size};

use crate::session::{Phase, Session};

pub const WHITE: Color = [255, 255, 255, 255];
pub const BLACK: Color = [0, 0, 0, 255];
pub const RED: Color = [255, 0, 0, 255];
pub const BLUE: Color = [0, 0, 255, 255];

pub const DIVIDER_WIDTH: u32 = 5;
pub const SCORE_MARGIN: u32 = 10;
pub const SCORE_TEXT_SCALE: u32 = 3;
pub const GAME_OVER_TEXT_SCALE: u32 = 2;
pub const GAME_OVER_TEXT: &str = "Game Over! Press Space to Restart";

pub fn score_label(score: f64) -> String {
    format!("Score: {}", score as u32)
}

/// Screen-space box of the centered game-over message.
pub fn game_over_text_rect(width: u32, height: u32) -> Rect {
    let (w, h) = text_size(GAME_OVER_TEXT, GAME_OVER_TEXT_SCALE);
    Rect::from_size(width, height).place(Size::new(w, h), Anchor::Center)
}

/// Full frame for the current phase: the road scene, plus the crash message once the run is over.
pub fn draw_frame<S>(gfx: &mut dyn Renderer2d, session: &Session<S>) {
    draw_scene(gfx, session);
    if session.phase() == Phase::GameOver {
        draw_game_over(gfx);
    }
}

pub fn draw_scene<S>(gfx: &mut dyn Renderer2d, session: &Session<S>) {
    let size = gfx.size();
    gfx.clear(WHITE);

    let divider_x = (size.width / 2).saturating_sub(DIVIDER_WIDTH / 2);
    gfx.fill_rect(Rect::new(divider_x, 0, DIVIDER_WIDTH, size.height), BLACK);

    if let Some(player) = session.player().clip_to(size.width, size.height) {
        gfx.fill_rect(player, BLUE);
    }
    for obstacle in session.obstacles() {
        if let Some(rect) = obstacle.clip_to(size.width, size.height) {
            gfx.fill_rect(rect, RED);
        }
    }

    let label = score_label(session.score());
    let (w, h) = text_size(&label, SCORE_TEXT_SCALE);
    let at = Rect::from_size(size.width, size.height)
        .inset(Insets::all(SCORE_MARGIN))
        .place(Size::new(w, h), Anchor::TopLeft);
    gfx.draw_text_scaled(at.x, at.y, &label, BLACK, SCORE_TEXT_SCALE);
}

pub fn draw_game_over(gfx: &mut dyn Renderer2d) {
    let size = gfx.size();
    let at = game_over_text_rect(size.width, size.height);
    gfx.draw_text_scaled(at.x, at.y, GAME_OVER_TEXT, RED, GAME_OVER_TEXT_SCALE);
}
