//! Data conversion utilities for API responses.

use chrono::DateTime;

use super::wire::{TopGainerItem, TopGainersResponse};
use crate::state::{Candle, QueryResult, RankedItem};

/// Converts wire responses to internal state types.
pub struct DataConverter;

impl DataConverter {
    /// Convert a top-gainers response. Item order is preserved.
    pub fn convert_response(response: TopGainersResponse) -> QueryResult {
        QueryResult {
            exchange: response.exchange,
            market: response.market,
            quote: response.quote,
            timeframe: response.timeframe,
            limit: response.limit,
            top: response.top,
            updated_at: response.updated_at,
            source: response.source,
            items: response
                .items
                .into_iter()
                .map(Self::convert_item)
                .collect(),
        }
    }

    /// Convert a single ranked item.
    pub fn convert_item(item: TopGainerItem) -> RankedItem {
        let candles = item
            .ohlcv
            .iter()
            .filter_map(|row| {
                let candle = Self::convert_candle(row);
                if candle.is_none() {
                    tracing::warn!(symbol = %item.symbol, ?row, "skipping malformed OHLCV row");
                }
                candle
            })
            .collect();

        RankedItem {
            display_symbol: item.market_id,
            symbol: item.symbol,
            base: item.base,
            quote: item.quote,
            last_price: item.last,
            change_percent: item.change_pct,
            candles,
        }
    }

    /// Convert a `[timestamp_ms, open, high, low, close, volume]` row.
    pub fn convert_candle(row: &[f64]) -> Option<Candle> {
        let [ts, open, high, low, close, volume] = row.get(..6)? else {
            return None;
        };
        let timestamp = DateTime::from_timestamp_millis(*ts as i64)?;

        Some(Candle {
            timestamp,
            open: *open,
            high: *high,
            low: *low,
            close: *close,
            volume: *volume,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Market, Source};
    use pretty_assertions::assert_eq;

    const BODY: &str = r#"{
        "exchange": "binance",
        "market": "swap",
        "quote": "USDT",
        "timeframe": "1m",
        "limit": 120,
        "top": 12,
        "updated_at": "2024-05-01T12:00:00Z",
        "source": "cache",
        "items": [
            {
                "symbol": "PEPE/USDT:USDT",
                "market_id": "1000PEPEUSDT",
                "base": "PEPE",
                "quote": "USDT",
                "last": 0.0123,
                "change_pct": 4.5,
                "ohlcv": [[1714564800000, 1.0, 2.0, 0.5, 1.5, 100.0], [1714564860000, 1.5]],
                "meta": {"rank": 1}
            },
            {
                "symbol": "DOGE/USDT:USDT",
                "base": "DOGE",
                "quote": "USDT",
                "last": null,
                "change_pct": -0.25
            }
        ]
    }"#;

    #[test]
    fn test_convert_response() {
        let wire: TopGainersResponse = serde_json::from_str(BODY).unwrap();
        let result = DataConverter::convert_response(wire);

        assert_eq!(result.market, Market::Swap);
        assert_eq!(result.source, Source::Cache);
        assert_eq!(result.items.len(), 2);

        let first = &result.items[0];
        assert_eq!(first.symbol, "PEPE/USDT:USDT");
        assert_eq!(first.display_symbol.as_deref(), Some("1000PEPEUSDT"));
        assert_eq!(first.last_price, Some(0.0123));
        // the short row is dropped
        assert_eq!(first.candles.len(), 1);
        assert_eq!(first.candles[0].close, 1.5);
        assert_eq!(first.candles[0].timestamp.timestamp(), 1_714_564_800);

        let second = &result.items[1];
        assert_eq!(second.symbol, "DOGE/USDT:USDT");
        assert_eq!(second.display_symbol, None);
        assert_eq!(second.last_price, None);
        assert!(second.candles.is_empty());
    }

    #[test]
    fn test_market_id_is_kept_even_when_equal_to_symbol() {
        let item = TopGainerItem {
            symbol: "BTCUSDT".to_string(),
            market_id: Some("BTCUSDT".to_string()),
            base: "BTC".to_string(),
            quote: "USDT".to_string(),
            last: Some(1.0),
            change_pct: 1.0,
            ohlcv: Vec::new(),
        };
        assert_eq!(
            DataConverter::convert_item(item).display_symbol.as_deref(),
            Some("BTCUSDT")
        );
    }

    #[test]
    fn test_convert_candle_ignores_extra_fields() {
        let candle = DataConverter::convert_candle(&[0.0, 1.0, 2.0, 0.5, 1.5, 10.0, 99.0]).unwrap();
        assert_eq!(candle.volume, 10.0);
        assert!(candle.is_up());
    }
}
