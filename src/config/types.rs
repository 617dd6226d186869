use serde::{Deserialize, Serialize};

pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 10_000;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Counter settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Value the counter starts from (default: 0).
    #[serde(default)]
    pub initial: i64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How often the event loop wakes up to check for shutdown (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture mouse clicks on the buttons (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}
