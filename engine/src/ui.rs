//! Screen-space layout primitives.
//!
//! Everything here is unsigned pixel space: `Rect` covers `[x, x + w) × [y, y + h)` and never
//! extends left of or above the origin.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_size(w: u32, h: u32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// The rectangle shrunk by `insets`. Saturates to zero size.
    pub fn inset(&self, insets: Insets) -> Self {
        let w = self
            .w
            .saturating_sub(insets.left.saturating_add(insets.right));
        let h = self
            .h
            .saturating_sub(insets.top.saturating_add(insets.bottom));
        Self {
            x: self.x.saturating_add(insets.left),
            y: self.y.saturating_add(insets.top),
            w,
            h,
        }
    }

    /// Places a child of `size` inside this rect at `anchor`, clamping the child to fit.
    pub fn place(&self, size: Size, anchor: Anchor) -> Self {
        let w = size.w.min(self.w);
        let h = size.h.min(self.h);

        match anchor {
            Anchor::TopLeft => Self::new(self.x, self.y, w, h),
            Anchor::Center => Self::new(
                self.x.saturating_add((self.w - w) / 2),
                self.y.saturating_add((self.h - h) / 2),
                w,
                h,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Insets {
    pub fn all(v: u32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_then_top_left_gives_corner_margin() {
        let screen = Rect::from_size(400, 600);
        let label = screen
            .inset(Insets::all(10))
            .place(Size::new(80, 15), Anchor::TopLeft);
        assert_eq!(label, Rect::new(10, 10, 80, 15));
    }

    #[test]
    fn place_center_positions_child_in_parent() {
        let parent = Rect::from_size(100, 100);
        let child = parent.place(Size::new(20, 10), Anchor::Center);
        assert_eq!(child, Rect::new(40, 45, 20, 10));
    }

    #[test]
    fn place_clamps_size_to_parent() {
        let parent = Rect::from_size(50, 40);
        let child = parent.place(Size::new(999, 999), Anchor::Center);
        assert_eq!(child, Rect::new(0, 0, 50, 40));

        let inner = Rect::new(10, 10, 30, 20).place(Size::new(999, 5), Anchor::Center);
        assert_eq!(inner, Rect::new(10, 17, 30, 5));
    }
}
