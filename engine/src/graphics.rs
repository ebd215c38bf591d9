use crate::{
    surface::{Surface, SurfaceSize},
    ui::Rect,
};

pub type Color = [u8; 4];

// Built-in 3x5 block font, upper-case only.
const GLYPH_W: u32 = 3;
const GLYPH_H: u32 = 5;

fn glyph_advance_x(scale: u32) -> u32 {
    (GLYPH_W + 1) * scale.max(1)
}

fn line_advance_y(scale: u32) -> u32 {
    (GLYPH_H + 1) * scale.max(1)
}

/// Pixel extent of `text` drawn at `scale`, without trailing glyph spacing.
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let scale = scale.max(1);
    let mut lines = 0u32;
    let mut widest = 0u32;
    for line in text.split('\n') {
        lines += 1;
        widest = widest.max(line.chars().count() as u32);
    }
    if widest == 0 {
        return (0, 0);
    }
    let w = (widest * glyph_advance_x(scale)).saturating_sub(scale);
    let h = (lines * line_advance_y(scale)).saturating_sub(scale);
    (w, h)
}

/// Unified 2D drawing interface.
///
/// Game code draws through this trait only; the backing buffer may belong to a window or to a
/// headless surface.
pub trait Renderer2d {
    fn begin_frame(&mut self, size: SurfaceSize);
    fn size(&self) -> SurfaceSize;

    /// Opaque fill, clipped to the frame.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32);

    fn clear(&mut self, color: Color) {
        let s = self.size();
        self.fill_rect(Rect::from_size(s.width, s.height), color);
    }
}

/// Runs `f` against a CPU renderer over `surface`'s frame buffer.
///
/// Works the same for the window-backed surface and for headless buffers.
pub fn draw_on<S, R, F>(surface: &mut S, f: F) -> R
where
    S: Surface + ?Sized,
    F: FnOnce(&mut dyn Renderer2d) -> R,
{
    let size = surface.size();
    let mut cpu = CpuRenderer::new(surface.frame_mut(), size);
    cpu.begin_frame(size);
    f(&mut cpu)
}

/// CPU renderer that draws into an RGBA frame buffer.
pub struct CpuRenderer<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
}

impl<'a> CpuRenderer<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self { frame, size }
    }

    fn draw_glyph(&mut self, x: u32, y: u32, ch: char, color: Color, scale: u32) {
        for (row, bits) in glyph_rows(ch).into_iter().enumerate() {
            let py0 = y.saturating_add((row as u32).saturating_mul(scale));
            for col in 0..GLYPH_W {
                let mask = 1u8 << (GLYPH_W - 1 - col);
                if bits & mask == 0 {
                    continue;
                }
                let px0 = x.saturating_add(col.saturating_mul(scale));
                self.fill_rect(Rect::new(px0, py0, scale, scale), color);
            }
        }
    }
}

impl Renderer2d for CpuRenderer<'_> {
    fn begin_frame(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let max_x = rect.right().min(self.size.width);
        let max_y = rect.bottom().min(self.size.height);
        if rect.x >= max_x || rect.y >= max_y {
            return;
        }
        if self.frame.len() < self.size.rgba_len() {
            return;
        }

        let stride = self.size.width as usize * 4;
        let row_bytes = (max_x - rect.x) as usize * 4;
        let mut row_start = rect.y as usize * stride + rect.x as usize * 4;
        for _ in rect.y..max_y {
            let row = &mut self.frame[row_start..row_start + row_bytes];
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
            row_start += stride;
        }
    }

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32) {
        let scale = scale.max(1);
        let adv_x = glyph_advance_x(scale);
        let adv_y = line_advance_y(scale);

        let mut cursor_x = x;
        let mut cursor_y = y;
        for ch in text.chars() {
            match ch {
                '\n' => {
                    cursor_x = x;
                    cursor_y = cursor_y.saturating_add(adv_y);
                    if cursor_y >= self.size.height {
                        break;
                    }
                    continue;
                }
                ' ' => {}
                _ => self.draw_glyph(cursor_x, cursor_y, ch, color, scale),
            }
            cursor_x = cursor_x.saturating_add(adv_x);
        }
    }
}

fn glyph_rows(ch: char) -> [u8; GLYPH_H as usize] {
    match ch.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],

        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b111, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b111, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b111, 0b101, 0b111, 0b110, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],

        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],

        _ => [0b111, 0b001, 0b010, 0b000, 0b010], // '?'
    }
}
