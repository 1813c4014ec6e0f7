//! Application-level state.

use super::{Market, Query, Timeframe};
use crate::config::DashboardConfig;

/// Smallest candle limit selectable from the controls.
pub const MIN_CANDLE_LIMIT: u32 = 20;
/// Largest candle limit selectable from the controls.
pub const MAX_CANDLE_LIMIT: u32 = 300;
/// Candle limit step per key press.
pub const CANDLE_LIMIT_STEP: u32 = 10;
/// Largest top-N selectable from the controls.
pub const MAX_TOP_N: u32 = 24;

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Market currently displayed.
    pub market: Market,
    /// Candle interval.
    pub timeframe: Timeframe,
    /// Candles requested per item.
    pub candle_limit: u32,
    /// Number of ranked items requested.
    pub top_n: u32,
    /// Exchange override passed to the backend.
    pub exchange: Option<String>,
    /// Quote override passed to the backend.
    pub quote: Option<String>,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Create the initial state from the dashboard defaults.
    pub fn new(defaults: &DashboardConfig) -> Self {
        Self {
            market: defaults.market,
            timeframe: defaults.timeframe,
            candle_limit: defaults
                .candle_limit
                .clamp(MIN_CANDLE_LIMIT, MAX_CANDLE_LIMIT),
            top_n: defaults.top_n.clamp(1, MAX_TOP_N),
            ..Default::default()
        }
    }

    /// The query for the currently selected parameters.
    pub fn query(&self) -> Query {
        Query {
            market: self.market,
            timeframe: self.timeframe,
            candle_limit: self.candle_limit,
            top_n: self.top_n,
            exchange: self.exchange.clone(),
            quote: self.quote.clone(),
        }
    }

    /// Step the candle limit by `steps` increments, clamped.
    pub fn adjust_candle_limit(&mut self, steps: i32) {
        let next = self.candle_limit as i64 + steps as i64 * CANDLE_LIMIT_STEP as i64;
        self.candle_limit = next.clamp(MIN_CANDLE_LIMIT as i64, MAX_CANDLE_LIMIT as i64) as u32;
    }

    /// Step the top-N by `delta`, clamped.
    pub fn adjust_top_n(&mut self, delta: i32) {
        let next = self.top_n as i64 + delta as i64;
        self.top_n = next.clamp(1, MAX_TOP_N as i64) as u32;
    }
}
