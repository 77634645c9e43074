//! Logger setup
//!
//! `env_logger` behind the `log` facade. `RUST_LOG` overrides the default
//! `info` filter, e.g. `RUST_LOG=bee_catcher=debug` to see every spawn.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Initializes the global logger.
pub fn init() {
    let env = Env::default().default_filter_or(DEFAULT_LEVEL.to_string());
    let mut builder = Builder::from_env(env);

    // `try_init` only fails if a logger was already set; tests may call this repeatedly.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        log::info!("logger initialized");
    }
}
