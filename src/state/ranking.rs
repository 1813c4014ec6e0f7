//! Ranked instruments and their candle series.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Market;

/// One OHLCV sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Whether the candle closed at or above its open.
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// One instrument in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    /// Unique within a response.
    pub symbol: String,
    /// Exchange-native identifier, when the backend knows one.
    pub display_symbol: Option<String>,
    pub base: String,
    pub quote: String,
    pub last_price: Option<f64>,
    /// Signed percent change.
    pub change_percent: f64,
    /// Oldest first.
    pub candles: Vec<Candle>,
}

impl RankedItem {
    /// The name shown on the card.
    pub fn title(&self) -> &str {
        self.display_symbol.as_deref().unwrap_or(&self.symbol)
    }

    pub fn is_up(&self) -> bool {
        self.change_percent >= 0.0
    }

    /// Change percent with an explicit sign, e.g. `+3.25%`.
    pub fn formatted_change(&self) -> String {
        let sign = if self.is_up() { "+" } else { "" };
        format!("{}{:.2}%", sign, self.change_percent)
    }
}

/// Whether the backend served a result from its own cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Live,
    Cache,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live => write!(f, "live"),
            Self::Cache => write!(f, "cache"),
        }
    }
}

/// A ranking snapshot as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub exchange: String,
    pub market: Market,
    pub quote: String,
    pub timeframe: String,
    pub limit: u32,
    pub top: u32,
    pub updated_at: DateTime<Utc>,
    pub source: Source,
    /// Ranking order. Never re-sorted.
    pub items: Vec<RankedItem>,
}
