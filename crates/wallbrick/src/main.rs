use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use wallbrick_engine::device::GpuInit;
use wallbrick_engine::logging::{LoggingConfig, init_logging};
use wallbrick_engine::window::{Runtime, RuntimeConfig};

mod app;
mod config;
mod game;

use app::Wallbrick;
use config::GameConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let cfg = GameConfig::default();

    // WALLBRICK_SEED pins the brick spawn and the paddle-effect draws,
    // making a whole run reproducible.
    let rng = match std::env::var("WALLBRICK_SEED") {
        Ok(raw) => {
            let seed: u64 = raw.parse().context("WALLBRICK_SEED must be a u64")?;
            StdRng::seed_from_u64(seed)
        }
        Err(_) => StdRng::from_entropy(),
    };

    log::info!("starting wallbrick ({}x{})", cfg.width, cfg.height);

    let runtime = RuntimeConfig {
        title: "Wall".to_string(),
        initial_size: (cfg.width as u32, cfg.height as u32),
    };

    Runtime::run(runtime, GpuInit::default(), Wallbrick::new(cfg, rng))
}
