//! Wire types for the `/api/top-gainers` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Market, Source};

/// One ranked instrument as serialized by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopGainerItem {
    pub symbol: String,
    #[serde(default)]
    pub market_id: Option<String>,
    pub base: String,
    pub quote: String,
    #[serde(default)]
    pub last: Option<f64>,
    pub change_pct: f64,
    /// `[timestamp_ms, open, high, low, close, volume]` rows.
    #[serde(default)]
    pub ohlcv: Vec<Vec<f64>>,
}

/// Response body of `/api/top-gainers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopGainersResponse {
    pub exchange: String,
    #[serde(default)]
    pub market: Market,
    pub quote: String,
    pub timeframe: String,
    pub limit: u32,
    pub top: u32,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub source: Source,
    pub items: Vec<TopGainerItem>,
}
