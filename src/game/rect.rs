//! Rectangle type for sprites, hitboxes and source frames

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Shrink by padding on all sides
    ///
    /// Unlike UI padding this does not clamp: a padding larger than half the
    /// size yields a zero or negative extent, which `intersects` treats as a
    /// point (or nothing) at the shrunk origin.
    pub fn inset(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            self.w - padding * 2.0,
            self.h - padding * 2.0,
        )
    }

    /// Strict axis-aligned overlap test (touching edges do not overlap)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        let r = Rect::new(10.0, 20.0, 100.0, 60.0).inset(5.0);
        assert_eq!(r, Rect::new(15.0, 25.0, 90.0, 50.0));
    }

    #[test]
    fn test_inset_does_not_clamp() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0).inset(50.0);
        assert_eq!(r, Rect::new(50.0, 50.0, 0.0, 0.0));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(20.0, 0.0, 10.0, 10.0)));
        // Shared edge is not an overlap
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_zero_size_rect_hits_strictly_inside() {
        let player = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(Rect::new(50.0, 50.0, 0.0, 0.0).intersects(&player));
        assert!(!Rect::new(100.0, 50.0, 0.0, 0.0).intersects(&player));
    }
}
