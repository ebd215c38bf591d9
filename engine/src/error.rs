use thiserror::Error;

/// Failures while bringing up the window and its framebuffer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels framebuffer error: {0}")]
    Pixels(#[from] pixels::Error),
}
