//! Query parameters identifying a ranked data series.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Trading venue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    #[default]
    Spot,
    /// Perpetual futures.
    Swap,
}

impl Market {
    /// All market values, in display order.
    pub const ALL: [Market; 2] = [Market::Spot, Market::Swap];

    /// Wire name used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Swap => "swap",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Spot => "Spot",
            Self::Swap => "Swap",
        }
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Market {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spot" => Ok(Self::Spot),
            "swap" => Ok(Self::Swap),
            other => Err(Error::invalid_input(format!("unknown market: {other}"))),
        }
    }
}

/// Candle aggregation interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "1m")]
    M1,
    #[serde(rename = "5m")]
    M5,
    #[serde(rename = "15m")]
    M15,
    #[serde(rename = "1h")]
    H1,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "1d")]
    D1,
}

impl Timeframe {
    /// All timeframes, shortest first.
    pub const ALL: [Timeframe; 6] = [
        Timeframe::M1,
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::D1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::H1 => "1h",
            Self::H4 => "4h",
            Self::D1 => "1d",
        }
    }

    /// The next longer timeframe, wrapping around.
    pub fn next(&self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The next shorter timeframe, wrapping around.
    pub fn prev(&self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|tf| tf == self).unwrap_or(0)
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|tf| tf.as_str() == s)
            .copied()
            .ok_or_else(|| Error::invalid_input(format!("unknown timeframe: {s}")))
    }
}

/// Identifies a single logical data series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    pub market: Market,
    pub timeframe: Timeframe,
    /// Number of candles per item.
    pub candle_limit: u32,
    /// Number of ranked items requested.
    pub top_n: u32,
    /// Exchange override (backend default when absent).
    pub exchange: Option<String>,
    /// Quote currency override (backend default when absent).
    pub quote: Option<String>,
}

impl Query {
    pub fn new(market: Market, timeframe: Timeframe, candle_limit: u32, top_n: u32) -> Self {
        Self {
            market,
            timeframe,
            candle_limit,
            top_n,
            exchange: None,
            quote: None,
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new(Market::Spot, Timeframe::M1, 120, 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_cycles() {
        assert_eq!(Timeframe::M1.next(), Timeframe::M5);
        assert_eq!(Timeframe::D1.next(), Timeframe::M1);
        assert_eq!(Timeframe::M1.prev(), Timeframe::D1);
        assert_eq!(Timeframe::H4.prev(), Timeframe::H1);
    }

    #[test]
    fn test_timeframe_parse() {
        assert_eq!("15m".parse::<Timeframe>().unwrap(), Timeframe::M15);
        assert!("2m".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_market_serde_names() {
        assert_eq!(serde_json::to_string(&Market::Swap).unwrap(), "\"swap\"");
        assert_eq!("SPOT".parse::<Market>().unwrap(), Market::Spot);
    }
}
