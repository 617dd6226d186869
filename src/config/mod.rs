//! Configuration loaded from `~/.config/tally/config.toml`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, CounterConfig, UiConfig, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS};
