//! Configuration settings for maxline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::grid::GridPolicy;
use crate::polling::DEFAULT_REFRESH_INTERVAL;
use crate::state::{Market, Timeframe};

/// Environment variable prefix for overrides, e.g. `MAXLINE_API__BASE_URL`.
pub const ENV_PREFIX: &str = "MAXLINE";

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// UI configuration.
    pub ui: UiConfig,
    /// Initial query parameters.
    pub dashboard: DashboardConfig,
    /// Key bindings.
    pub keybindings: KeyBindings,
    /// Theme configuration.
    pub theme: ThemeConfig,
}

impl Config {
    /// Load configuration from the default location.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from an optional TOML file, then apply
    /// `MAXLINE_<SECTION>__<KEY>` environment overrides.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(default_path);

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(config_path).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| crate::Error::config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| crate::Error::config(e.to_string()))
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<()> {
        let config_path = path.unwrap_or_else(default_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn default_path() -> PathBuf {
    super::config_dir()
        .map(|p| p.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("config.toml"))
}

/// Backend API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the ranking backend.
    pub base_url: String,
    /// Exchange override (backend default when unset).
    pub exchange: Option<String>,
    /// Quote currency override (backend default when unset).
    pub quote: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            exchange: None,
            quote: None,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Periodic refresh interval in seconds.
    pub refresh_interval_secs: u64,
    /// Approximate width of one terminal cell in pixels.
    pub cell_width_px: u16,
    /// Approximate height of one terminal cell in pixels.
    pub cell_height_px: u16,
    /// Minimum usable card width in pixels.
    pub min_card_width_px: f64,
    /// Minimum usable card height in pixels.
    pub min_card_height_px: f64,
    /// Show the controls bar.
    pub show_controls_bar: bool,
}

impl UiConfig {
    /// The grid policy described by this configuration.
    pub fn grid_policy(&self) -> GridPolicy {
        GridPolicy {
            min_card_width: self.min_card_width_px,
            min_card_height: self.min_card_height_px,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let policy = GridPolicy::default();
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL.as_secs(),
            cell_width_px: 10,
            cell_height_px: 20,
            min_card_width_px: policy.min_card_width,
            min_card_height_px: policy.min_card_height,
            show_controls_bar: true,
        }
    }
}

/// Query parameters the dashboard starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub market: Market,
    pub timeframe: Timeframe,
    pub candle_limit: u32,
    pub top_n: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            market: Market::Spot,
            timeframe: Timeframe::M1,
            candle_limit: 120,
            top_n: 12,
        }
    }
}

/// Key bindings configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Quit the application.
    pub quit: String,
    /// Show help.
    pub help: String,
    /// Force a refresh.
    pub refresh: String,
    /// Switch to the spot market.
    pub spot: String,
    /// Switch to the swap market.
    pub swap: String,
    /// Next longer timeframe.
    pub next_timeframe: String,
    /// Next shorter timeframe.
    pub prev_timeframe: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            help: "?".to_string(),
            refresh: "r".to_string(),
            spot: "1".to_string(),
            swap: "2".to_string(),
            next_timeframe: "t".to_string(),
            prev_timeframe: "Shift+t".to_string(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent color (hex).
    pub accent: String,
    /// Rising candles and positive changes (hex).
    pub up: String,
    /// Falling candles and negative changes (hex).
    pub down: String,
    /// Border color (hex).
    pub border: String,
    /// Secondary text color (hex).
    pub muted: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#58a6ff".to_string(),
            up: "#2ea043".to_string(),
            down: "#f85149".to_string(),
            border: "#30363d".to_string(),
            muted: "#8b949e".to_string(),
        }
    }
}
