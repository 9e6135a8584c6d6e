//! Game tuning
//!
//! Every constant the run depends on, gathered in one serde struct. Defaults
//! are the shipped values; an optional RON file can override any subset of
//! fields (missing fields keep their defaults).

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};

/// Tuning file looked up in the working directory at startup
pub const TUNING_FILE: &str = "dasher.ron";

/// Validation limits for values read from the tuning file
pub mod limits {
    /// Maximum obstacles in a wave
    pub const MAX_OBSTACLES: usize = 256;
    /// Maximum frames (or grid cells per row) in a spritesheet
    pub const MAX_FRAMES: usize = 256;
}

/// Error type for tuning loading
#[derive(Debug)]
pub enum TuningError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for TuningError {
    fn from(e: ron::error::SpannedError) -> Self {
        TuningError::ParseError(e)
    }
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::IoError(e) => write!(f, "IO error: {}", e),
            TuningError::ParseError(e) => write!(f, "Parse error: {}", e),
            TuningError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for TuningError {}

/// Physics, layout and animation constants for a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Window width (pixels)
    pub window_width: i32,
    /// Window height (pixels), also the ground line
    pub window_height: i32,
    /// Frame rate the loop paces itself to
    pub target_fps: u32,
    /// Downward acceleration while airborne (pixels per second squared)
    pub gravity: f32,
    /// Velocity added on jump (pixels per second, negative = up)
    pub jump_velocity: f32,
    /// Horizontal velocity shared by all obstacles and the finish marker
    pub obstacle_velocity: f32,
    /// Number of obstacles spawned at startup
    pub obstacle_count: usize,
    /// Horizontal gap between consecutive obstacle spawns (pixels)
    pub obstacle_spacing: f32,
    /// Inset applied to each side of an obstacle's frame for collision
    pub hitbox_padding: f32,
    /// Far background scroll speed (pixels per second)
    pub far_speed: f32,
    /// Mid background scroll speed (pixels per second)
    pub mid_speed: f32,
    /// Near background scroll speed (pixels per second)
    pub near_speed: f32,
    /// Draw scale for background layers
    pub layer_scale: f32,
    /// Frames in the player spritesheet (single row)
    pub player_frames: usize,
    /// Seconds per player frame
    pub player_frame_time: f32,
    /// Frames the obstacle animation cycles through (first row of the grid)
    pub obstacle_frames: usize,
    /// Cells per row (and rows) of the square obstacle spritesheet
    pub obstacle_grid: usize,
    /// Seconds per obstacle frame
    pub obstacle_frame_time: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: 512,
            window_height: 380,
            target_fps: 60,
            gravity: 1200.0,
            jump_velocity: -600.0,
            obstacle_velocity: -200.0,
            obstacle_count: 6,
            obstacle_spacing: 300.0,
            hitbox_padding: 50.0,
            far_speed: 20.0,
            mid_speed: 40.0,
            near_speed: 80.0,
            layer_scale: 2.0,
            player_frames: 6,
            player_frame_time: 1.0 / 12.0,
            obstacle_frames: 8,
            obstacle_grid: 8,
            obstacle_frame_time: 1.0 / 16.0,
        }
    }
}

impl Tuning {
    /// Ground line the player lands on
    pub fn ground_y(&self) -> f32 {
        self.window_height as f32
    }

    /// How far the finish marker must fall behind the player to win
    ///
    /// Half the window height, in integer pixels.
    pub fn win_margin(&self) -> f32 {
        (self.window_height / 2) as f32
    }

    /// Target duration of one frame (seconds)
    pub fn frame_time(&self) -> f64 {
        1.0 / self.target_fps as f64
    }

    /// Parse tuning from RON text
    pub fn from_ron(text: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = ron::from_str(text)?;
        tuning.validate().map_err(TuningError::ValidationError)?;
        Ok(tuning)
    }

    /// Load tuning from a RON file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load tuning from `path`, falling back to defaults
    ///
    /// A missing file is the normal case; any other failure is logged.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(TuningError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(format!(
                "window must be positive, got {}x{}",
                self.window_width, self.window_height
            ));
        }
        if self.target_fps == 0 {
            return Err("target_fps must be at least 1".to_string());
        }
        if self.obstacle_count == 0 || self.obstacle_count > limits::MAX_OBSTACLES {
            return Err(format!(
                "obstacle_count must be in 1..={}, got {}",
                limits::MAX_OBSTACLES, self.obstacle_count
            ));
        }
        let frames = [
            ("player_frames", self.player_frames),
            ("obstacle_frames", self.obstacle_frames),
            ("obstacle_grid", self.obstacle_grid),
        ];
        for (name, count) in frames {
            if count == 0 || count > limits::MAX_FRAMES {
                return Err(format!("{} must be in 1..={}, got {}", name, limits::MAX_FRAMES, count));
            }
        }
        let values = [
            self.gravity,
            self.jump_velocity,
            self.obstacle_velocity,
            self.obstacle_spacing,
            self.hitbox_padding,
            self.far_speed,
            self.mid_speed,
            self.near_speed,
            self.layer_scale,
            self.player_frame_time,
            self.obstacle_frame_time,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err("tuning values must be finite".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let t = Tuning::default();
        assert_eq!((t.window_width, t.window_height), (512, 380));
        assert_eq!(t.gravity, 1200.0);
        assert_eq!(t.jump_velocity, -600.0);
        assert_eq!(t.obstacle_velocity, -200.0);
        assert_eq!(t.hitbox_padding, 50.0);
        assert_eq!(t.win_margin(), 190.0);
        assert_eq!(t.ground_y(), 380.0);
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let t = Tuning::from_ron("(gravity: 900.0, obstacle_count: 3)").unwrap();
        assert_eq!(t.gravity, 900.0);
        assert_eq!(t.obstacle_count, 3);
        assert_eq!(t.jump_velocity, -600.0);
        assert_eq!(t.window_height, 380);
    }

    #[test]
    fn test_rejects_zero_obstacles() {
        let err = Tuning::from_ron("(obstacle_count: 0)").unwrap_err();
        assert!(matches!(err, TuningError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_oversized_frame_count() {
        // Would wrap to zero if narrowed to u32
        let err = Tuning::from_ron("(player_frames: 4294967296)").unwrap_err();
        assert!(matches!(err, TuningError::ValidationError(_)));

        let err = Tuning::from_ron("(obstacle_grid: 257)").unwrap_err();
        assert!(matches!(err, TuningError::ValidationError(_)));

        assert!(Tuning::from_ron("(obstacle_frames: 256)").is_ok());
    }

    #[test]
    fn test_rejects_huge_obstacle_count() {
        let err = Tuning::from_ron("(obstacle_count: 1000000000000)").unwrap_err();
        assert!(matches!(err, TuningError::ValidationError(_)));
        assert!(Tuning::from_ron("(obstacle_count: 256)").is_ok());
    }

    #[test]
    fn test_rejects_malformed() {
        let err = Tuning::from_ron("(gravity: \"heavy\")").unwrap_err();
        assert!(matches!(err, TuningError::ParseError(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let t = Tuning::load_or_default(&dir.path().join(TUNING_FILE));
        assert_eq!(t, Tuning::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TUNING_FILE);
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "(jump_velocity: -700.0)").unwrap();

        let t = Tuning::load(&path).unwrap();
        assert_eq!(t.jump_velocity, -700.0);
    }

    #[test]
    fn test_load_or_default_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TUNING_FILE);
        fs::write(&path, "not ron at all").unwrap();
        assert_eq!(Tuning::load_or_default(&path), Tuning::default());
    }
}
