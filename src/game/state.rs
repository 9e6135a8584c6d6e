//! Run State
//!
//! Everything a run owns: the player, the obstacle wave, the finish marker
//! and the parallax layers. `GameState::tick` advances all of it by one frame
//! and returns the frame's draw commands.

use macroquad::prelude::{vec2, Color, GREEN, RED, WHITE};
use crate::input::FrameInput;
use super::anim::{is_on_ground, update_anim, AnimatedSprite};
use super::renderer::{DrawCommand, TextureId};
use super::tuning::Tuning;

const GAME_OVER_TEXT: &str = "Game Over! :(";
const WIN_TEXT: &str = "You Win! :)";
const BANNER_SIZE: f32 = 50.0;

/// Pixel dimensions of a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextureSize {
    pub width: u32,
    pub height: u32,
}

impl TextureSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Dimensions of every texture the run lays itself out from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SheetSizes {
    pub player: TextureSize,
    pub obstacle: TextureSize,
    pub far: TextureSize,
    pub mid: TextureSize,
    pub near: TextureSize,
}

/// How the run stands this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Playing,
    Lost,
    Won,
}

/// The player sprite plus its vertical motion
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub sprite: AnimatedSprite,
    /// Vertical velocity (pixels per second, negative = up)
    pub velocity: f32,
    pub airborne: bool,
}

/// One horizontally scrolling background strip
#[derive(Debug, Clone, Copy)]
pub struct ScrollLayer {
    pub texture: TextureId,
    /// Current x offset (pixels, only ever <= 0)
    pub offset: f32,
    /// Scroll speed (pixels per second, leftwards)
    pub speed: f32,
    /// Texture width before scaling
    pub width: f32,
}

impl ScrollLayer {
    pub fn new(texture: TextureId, speed: f32, width: u32) -> Self {
        Self {
            texture,
            offset: 0.0,
            speed,
            width: width as f32,
        }
    }

    /// Scroll left, wrapping once a full scaled copy has passed
    pub fn advance(&mut self, delta_time: f32, scale: f32) {
        self.offset -= self.speed * delta_time;
        if self.offset <= -self.width * scale {
            self.offset = 0.0;
        }
    }

    fn draw(&self, scale: f32, commands: &mut Vec<DrawCommand>) {
        // Two copies side by side so the strip tiles while scrolling
        for dx in [0.0, self.width * scale] {
            commands.push(DrawCommand::TextureScaled {
                texture: self.texture,
                dest: vec2(self.offset + dx, 0.0),
                scale,
            });
        }
    }
}

/// A single run from spawn to win or loss
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub player: Player,
    /// Fixed wave, spawned once and never resized
    pub obstacles: Vec<AnimatedSprite>,
    /// X the player has to get past to win
    pub finish_x: f32,
    /// Far, mid and near background, back to front
    pub layers: [ScrollLayer; 3],
    /// Latched on the first hit; never cleared
    pub collided: bool,
    outcome: Outcome,
}

impl GameState {
    pub fn new(tuning: Tuning, sizes: SheetSizes) -> Self {
        let win_w = tuning.window_width;
        let win_h = tuning.window_height;

        let player_frame_w = (sizes.player.width / tuning.player_frames as u32) as f32;
        let player_frame_h = sizes.player.height as f32;
        let player_pos = vec2(
            (win_w / 2) as f32 - player_frame_w / 2.0,
            win_h as f32 - player_frame_h,
        );
        let player = Player {
            sprite: AnimatedSprite::new(player_frame_w, player_frame_h, player_pos, tuning.player_frame_time),
            velocity: 0.0,
            airborne: false,
        };

        // Obstacle sheet is a square grid, animation runs along the first row.
        // Validated tuning keeps both counts within u32.
        let grid = tuning.obstacle_grid as u32;
        let obstacle_w = (sizes.obstacle.width / grid) as f32;
        let obstacle_h = (sizes.obstacle.height / grid) as f32;
        let obstacles: Vec<AnimatedSprite> = (0..tuning.obstacle_count)
            .map(|i| {
                let pos = vec2(
                    win_w as f32 + tuning.obstacle_spacing * i as f32,
                    win_h as f32 - obstacle_h,
                );
                AnimatedSprite::new(obstacle_w, obstacle_h, pos, tuning.obstacle_frame_time)
            })
            .collect();

        let finish_x = obstacles.last().map_or(win_w as f32, |last| last.pos.x);

        let layers = [
            ScrollLayer::new(TextureId::FarLayer, tuning.far_speed, sizes.far.width),
            ScrollLayer::new(TextureId::MidLayer, tuning.mid_speed, sizes.mid.width),
            ScrollLayer::new(TextureId::NearLayer, tuning.near_speed, sizes.near.width),
        ];

        Self {
            tuning,
            player,
            obstacles,
            finish_x,
            layers,
            collided: false,
            outcome: Outcome::Playing,
        }
    }

    /// Outcome as of the last tick
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Advance the run by `delta_time` seconds and describe the frame
    pub fn tick(&mut self, delta_time: f32, input: FrameInput) -> Vec<DrawCommand> {
        let t = self.tuning;

        for layer in &mut self.layers {
            layer.advance(delta_time, t.layer_scale);
        }

        if is_on_ground(&self.player.sprite, t.ground_y()) {
            self.player.velocity = 0.0;
            self.player.airborne = false;
        } else {
            self.player.airborne = true;
            self.player.velocity += t.gravity * delta_time;
        }

        if input.jump_pressed && !self.player.airborne {
            self.player.velocity += t.jump_velocity;
        }

        for obstacle in &mut self.obstacles {
            obstacle.pos.x += t.obstacle_velocity * delta_time;
        }

        self.player.sprite.pos.y += self.player.velocity * delta_time;
        self.finish_x += t.obstacle_velocity * delta_time;

        // Legs stop cycling mid-air
        if !self.player.airborne {
            self.player.sprite = update_anim(self.player.sprite, delta_time, t.player_frames);
        }
        for obstacle in &mut self.obstacles {
            *obstacle = update_anim(*obstacle, delta_time, t.obstacle_frames);
        }

        if !self.collided {
            let player_rect = self.player.sprite.world_rect();
            self.collided = self
                .obstacles
                .iter()
                .any(|o| o.world_rect().inset(t.hitbox_padding).intersects(&player_rect));
        }

        let outcome = if self.collided {
            Outcome::Lost
        } else if self.finish_x <= self.player.sprite.pos.x - t.win_margin() {
            Outcome::Won
        } else {
            Outcome::Playing
        };
        if outcome != self.outcome {
            log::info!("Run {:?} -> {:?} (finish_x {:.1})", self.outcome, outcome, self.finish_x);
            self.outcome = outcome;
        }

        self.draw_commands()
    }

    fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(8 + self.obstacles.len());
        commands.push(DrawCommand::Clear(WHITE));

        for layer in &self.layers {
            layer.draw(self.tuning.layer_scale, &mut commands);
        }

        match self.outcome {
            Outcome::Lost => commands.push(banner(GAME_OVER_TEXT, RED)),
            Outcome::Won => commands.push(banner(WIN_TEXT, GREEN)),
            Outcome::Playing => {
                for obstacle in &self.obstacles {
                    commands.push(DrawCommand::Texture {
                        texture: TextureId::Obstacle,
                        source: obstacle.source,
                        dest: obstacle.pos,
                    });
                }
                commands.push(DrawCommand::Texture {
                    texture: TextureId::Player,
                    source: self.player.sprite.source,
                    dest: self.player.sprite.pos,
                });
            }
        }
        commands
    }
}

fn banner(text: &'static str, color: Color) -> DrawCommand {
    DrawCommand::Text { text, x: 0.0, y: 0.0, size: BANNER_SIZE, color }
}
