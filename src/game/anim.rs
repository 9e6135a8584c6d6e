//! Sprite Animation
//!
//! Flip-book animation over a single row of a spritesheet. Sprites are plain
//! values: the update takes one and hands back the advanced copy.

use macroquad::prelude::Vec2;
use super::rect::Rect;

/// A sprite's display rectangle, world position and animation timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedSprite {
    /// Source frame inside the spritesheet (pixels)
    pub source: Rect,
    /// Top-left corner in the world (pixels)
    pub pos: Vec2,
    /// Index of the next frame to show, always < the sheet's frame count
    pub frame: usize,
    /// Seconds each frame stays on screen
    pub frame_duration: f32,
    /// Seconds since the last frame change
    pub elapsed: f32,
}

impl AnimatedSprite {
    /// Sprite at frame 0 showing the top-left cell of its sheet
    pub fn new(frame_w: f32, frame_h: f32, pos: Vec2, frame_duration: f32) -> Self {
        Self {
            source: Rect::new(0.0, 0.0, frame_w, frame_h),
            pos,
            frame: 0,
            frame_duration,
            elapsed: 0.0,
        }
    }

    /// The sprite's footprint in world space
    pub fn world_rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.source.w, self.source.h)
    }
}

/// Bottom edge at or below the ground line
pub fn is_on_ground(sprite: &AnimatedSprite, ground_y: f32) -> bool {
    sprite.pos.y + sprite.source.h >= ground_y
}

/// Advance a sprite's animation clock by `delta_time`
///
/// When the clock passes `frame_duration` the source rect moves to the
/// current frame and the index steps on, so the rect always trails the index
/// by one frame.
pub fn update_anim(mut sprite: AnimatedSprite, delta_time: f32, max_frames: usize) -> AnimatedSprite {
    sprite.elapsed += delta_time;

    if sprite.elapsed > sprite.frame_duration {
        sprite.elapsed = 0.0;
        sprite.source.x = sprite.frame as f32 * sprite.source.w;
        sprite.frame = (sprite.frame + 1) % max_frames;
    }
    sprite
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;

    fn sprite() -> AnimatedSprite {
        AnimatedSprite::new(64.0, 128.0, vec2(0.0, 0.0), 0.1)
    }

    #[test]
    fn test_below_threshold_only_accumulates() {
        let s = update_anim(sprite(), 0.05, 6);
        assert_eq!(s.frame, 0);
        assert_eq!(s.source.x, 0.0);
        assert!((s.elapsed - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_exact_threshold_does_not_advance() {
        let s = update_anim(sprite(), 0.1, 6);
        assert_eq!(s.frame, 0);
    }

    #[test]
    fn test_crossing_threshold_resets_clock_and_lags_rect() {
        let mut s = sprite();
        s.frame = 2;
        let s = update_anim(s, 0.2, 6);
        assert_eq!(s.elapsed, 0.0);
        // Rect shows the frame that was current, index moves on
        assert_eq!(s.source.x, 128.0);
        assert_eq!(s.frame, 3);
    }

    #[test]
    fn test_frame_index_cycles() {
        let mut s = sprite();
        for step in 0..6 {
            s = update_anim(s, 0.2, 6);
            assert!(s.frame < 6, "step {} left range: {}", step, s.frame);
        }
        assert_eq!(s.frame, 0);
        assert_eq!(s.source.x, 5.0 * 64.0);
    }

    #[test]
    fn test_cycle_returns_to_starting_frame() {
        let mut s = sprite();
        s.frame = 3;
        for _ in 0..6 {
            s = update_anim(s, 0.2, 6);
        }
        assert_eq!(s.frame, 3);
        // Last crossing showed the frame before the start
        assert_eq!(s.source.x, 2.0 * 64.0);
    }

    #[test]
    fn test_is_on_ground() {
        let mut s = sprite();
        s.pos.y = 380.0 - 128.0;
        assert!(is_on_ground(&s, 380.0));
        s.pos.y -= 0.5;
        assert!(!is_on_ground(&s, 380.0));
        s.pos.y = 300.0;
        assert!(is_on_ground(&s, 380.0));
    }
}
