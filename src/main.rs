//! Dapper Dasher: a side-scrolling arcade game
//!
//! Jump the drifting nebulae while three building layers scroll past at
//! different speeds. Touch one and the run is over; let the last one pass far
//! enough behind you and you win.
//!
//! Controls: Space (or gamepad A) to jump, Escape (or Start) to quit.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod asset;
mod game;
mod input;

use std::path::Path;
use macroquad::prelude::*;
use asset::Assets;
use game::{execute, GameState, MacroquadCanvas, Tuning, TUNING_FILE};
use input::InputState;

fn window_conf() -> Conf {
    let tuning = Tuning::default();
    Conf {
        window_title: "Dapper Dasher".to_string(),
        window_width: tuning.window_width,
        window_height: tuning.window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Dapper Dasher v{}", VERSION);

    let tuning = Tuning::load_or_default(Path::new(TUNING_FILE));
    if (tuning.window_width, tuning.window_height) != (screen_width() as i32, screen_height() as i32) {
        request_new_screen_size(tuning.window_width as f32, tuning.window_height as f32);
    }

    let assets = match Assets::load().await {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("Fatal error: {}", e);
            #[cfg(not(target_arch = "wasm32"))]
            std::process::exit(1);
            #[cfg(target_arch = "wasm32")]
            return;
        }
    };

    // Route the window close button through `InputState::should_exit`
    prevent_quit();

    let mut input = InputState::new();
    let mut state = GameState::new(tuning, assets.sizes());
    let target_frame_time = tuning.frame_time();

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        input.poll();
        if input.should_exit() {
            break;
        }

        let commands = state.tick(get_frame_time(), input.frame());
        execute(&commands, &mut MacroquadCanvas::new(&assets));

        limit_fps(frame_start, target_frame_time);
        next_frame().await;
    }

    log::info!("Run ended: {:?}", state.outcome());
    assets.release();
}

/// Hold the frame until `target_frame_time` has passed since `frame_start`
fn limit_fps(frame_start: f64, target_frame_time: f64) {
    if target_frame_time - (get_time() - frame_start) <= 0.0 {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: just spin-wait (no thread::sleep available)
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {
            // Busy wait - browser will handle frame pacing
        }
    }
}
