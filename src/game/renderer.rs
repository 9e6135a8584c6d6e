//! Frame Renderer
//!
//! `tick` describes a frame as a list of draw commands; a `Canvas` replays
//! them. Keeping the two apart lets the update loop run without a window.

use macroquad::prelude::{Color, Vec2};
use super::rect::Rect;

/// The textures a frame can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    Player,
    Obstacle,
    FarLayer,
    MidLayer,
    NearLayer,
}

/// One drawing operation, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    /// Part of a texture at its native size
    Texture {
        texture: TextureId,
        source: Rect,
        dest: Vec2,
    },
    /// A whole texture scaled uniformly
    TextureScaled {
        texture: TextureId,
        dest: Vec2,
        scale: f32,
    },
    Text {
        text: &'static str,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
}

/// Drawing surface the frame is replayed onto
pub trait Canvas {
    fn clear_background(&mut self, color: Color);
    fn draw_texture_rec(&mut self, texture: TextureId, source: Rect, dest: Vec2);
    fn draw_texture_scaled(&mut self, texture: TextureId, dest: Vec2, scale: f32);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}

/// Replay a frame's commands in order
pub fn execute(commands: &[DrawCommand], canvas: &mut impl Canvas) {
    for command in commands {
        match command {
            DrawCommand::Clear(color) => canvas.clear_background(*color),
            DrawCommand::Texture { texture, source, dest } => {
                canvas.draw_texture_rec(*texture, *source, *dest)
            }
            DrawCommand::TextureScaled { texture, dest, scale } => {
                canvas.draw_texture_scaled(*texture, *dest, *scale)
            }
            DrawCommand::Text { text, x, y, size, color } => {
                canvas.draw_text(text, *x, *y, *size, *color)
            }
        }
    }
}

/// Canvas backed by macroquad's immediate-mode drawing
pub struct MacroquadCanvas<'a> {
    assets: &'a crate::asset::Assets,
}

impl<'a> MacroquadCanvas<'a> {
    pub fn new(assets: &'a crate::asset::Assets) -> Self {
        Self { assets }
    }
}

impl Canvas for MacroquadCanvas<'_> {
    fn clear_background(&mut self, color: Color) {
        macroquad::prelude::clear_background(color);
    }

    fn draw_texture_rec(&mut self, texture: TextureId, source: Rect, dest: Vec2) {
        use macroquad::prelude::{draw_texture_ex, DrawTextureParams, WHITE};

        draw_texture_ex(
            self.assets.texture(texture),
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                source: Some(macroquad::prelude::Rect::new(source.x, source.y, source.w, source.h)),
                ..Default::default()
            },
        );
    }

    fn draw_texture_scaled(&mut self, texture: TextureId, dest: Vec2, scale: f32) {
        use macroquad::prelude::{draw_texture_ex, vec2, DrawTextureParams, WHITE};

        let tex = self.assets.texture(texture);
        draw_texture_ex(
            tex,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(tex.width() * scale, tex.height() * scale)),
                ..Default::default()
            },
        );
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        // macroquad anchors text at the baseline, commands anchor at the top
        macroquad::prelude::draw_text(text, x, y + size, size, color);
    }
}
