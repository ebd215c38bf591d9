use pixels::Pixels;

use crate::surface::{Surface, SurfaceSize};

/// Window-backed RGBA surface built on `pixels`.
///
/// The logical buffer keeps the game's fixed size; `pixels` scales it onto whatever physical
/// surface the window ends up with (hi-dpi, scale factor changes).
pub struct PixelsSurface {
    pixels: Pixels,
    size: SurfaceSize,
}

impl PixelsSurface {
    pub fn new(pixels: Pixels, size: SurfaceSize) -> Self {
        Self { pixels, size }
    }

    /// Resizes the presentation surface only; the logical buffer stays the same.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)?;
        Ok(())
    }
}

impl Surface for PixelsSurface {
    type Error = pixels::Error;

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn frame_mut(&mut self) -> &mut [u8] {
        self.pixels.frame_mut()
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.pixels.render()
    }
}
