//! Asset Library - loading and ownership of the game's textures

use macroquad::prelude::{load_texture, FilterMode, Texture2D};
use crate::game::{SheetSizes, TextureId, TextureSize};

/// Directory textures are loaded from, relative to the working directory
pub const TEXTURES_DIR: &str = "textures";

/// Error type for asset loading
#[derive(Debug)]
pub enum AssetError {
    /// A texture could not be read or decoded
    Load { path: String, reason: String },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Load { path, reason } => write!(f, "Failed to load {}: {}", path, reason),
        }
    }
}

impl std::error::Error for AssetError {}

/// File each texture is loaded from
pub fn asset_path(id: TextureId) -> String {
    let file = match id {
        TextureId::Player => "scarfy.png",
        TextureId::Obstacle => "12_nebula_spritesheet.png",
        TextureId::FarLayer => "far-buildings.png",
        TextureId::MidLayer => "back-buildings.png",
        TextureId::NearLayer => "foreground.png",
    };
    format!("{}/{}", TEXTURES_DIR, file)
}

/// Every texture a run needs, alive until `release`
pub struct Assets {
    player: Texture2D,
    obstacle: Texture2D,
    far: Texture2D,
    mid: Texture2D,
    near: Texture2D,
}

impl Assets {
    /// Load all textures, stopping at the first failure
    pub async fn load() -> Result<Self, AssetError> {
        let assets = Self {
            player: load_one(TextureId::Player).await?,
            obstacle: load_one(TextureId::Obstacle).await?,
            far: load_one(TextureId::FarLayer).await?,
            mid: load_one(TextureId::MidLayer).await?,
            near: load_one(TextureId::NearLayer).await?,
        };
        log::info!("Loaded textures from {}/", TEXTURES_DIR);
        Ok(assets)
    }

    pub fn texture(&self, id: TextureId) -> &Texture2D {
        match id {
            TextureId::Player => &self.player,
            TextureId::Obstacle => &self.obstacle,
            TextureId::FarLayer => &self.far,
            TextureId::MidLayer => &self.mid,
            TextureId::NearLayer => &self.near,
        }
    }

    /// Pixel dimensions, for laying out the run without touching the GPU
    pub fn sizes(&self) -> SheetSizes {
        let size = |tex: &Texture2D| TextureSize::new(tex.width() as u32, tex.height() as u32);
        SheetSizes {
            player: size(&self.player),
            obstacle: size(&self.obstacle),
            far: size(&self.far),
            mid: size(&self.mid),
            near: size(&self.near),
        }
    }

    /// Give the textures back to the GPU
    pub fn release(self) {
        drop(self);
        log::info!("Released textures");
    }
}

async fn load_one(id: TextureId) -> Result<Texture2D, AssetError> {
    let path = asset_path(id);
    match load_texture(&path).await {
        Ok(tex) => {
            // Pixel art: keep edges hard when scaled
            tex.set_filter(FilterMode::Nearest);
            log::debug!("Loaded {} ({}x{})", path, tex.width(), tex.height());
            Ok(tex)
        }
        Err(e) => Err(AssetError::Load { path, reason: e.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_asset_paths_are_distinct() {
        let ids = [
            TextureId::Player,
            TextureId::Obstacle,
            TextureId::FarLayer,
            TextureId::MidLayer,
            TextureId::NearLayer,
        ];
        let paths: HashSet<String> = ids.iter().map(|id| asset_path(*id)).collect();
        assert_eq!(paths.len(), ids.len());
        assert!(paths.iter().all(|p| p.starts_with("textures/") && p.ends_with(".png")));
    }

    #[test]
    fn test_load_error_names_the_file() {
        let err = AssetError::Load {
            path: asset_path(TextureId::Player),
            reason: "file not found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to load textures/scarfy.png: file not found");
    }
}
