//! Texture assets
//!
//! The five images a run draws from, loaded once at startup and released on
//! exit. A load failure is fatal: the game never starts half-textured.
//!
//! ```text
//! textures/
//! ├── scarfy.png                  # player, 6 frames in one row
//! ├── 12_nebula_spritesheet.png   # obstacle, 8x8 grid
//! ├── far-buildings.png           # background layers, back to front
//! ├── back-buildings.png
//! └── foreground.png
//! ```

mod library;

pub use library::Assets;
