//! Bee Catcher: click the bees, dodge the hornets
//!
//! Bees and hornets drift around a forest for sixty seconds:
//! - Bee: +1, fast bee +3
//! - Hornet: lightning flash, three of them end the round
//! - Click anywhere on the score screen to play again

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod game;
mod input;
mod logging;
mod render;

use macroquad::time::get_time;
use macroquad::window::{next_frame, Conf};
use rand::rngs::StdRng;
use rand::SeedableRng;
use app::AppState;
use assets::{AssetPaths, Assets};
use game::{SCREEN_HEIGHT, SCREEN_WIDTH};
use input::FrameInput;

fn window_conf() -> Conf {
    Conf {
        window_title: "Bee Catching Game".to_string(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    logging::init();

    let paths = AssetPaths::default();
    let assets = match Assets::load(&paths) {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let sizes = assets.sprite_sizes();
    log::info!("Loaded sprites: bee {:?}, hornet {:?}", sizes.bee, sizes.hornet);

    let mut app = AppState::new(assets, StdRng::from_entropy());

    log::info!("=== Bee Catcher v{} ===", VERSION);

    loop {
        let frame_start = get_time();

        let input = FrameInput::poll();
        app.update(&input);
        app.draw();

        app::wait_for_frame(frame_start);
        next_frame().await;
    }
}
