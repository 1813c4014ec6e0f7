//! Per-market cached results.

use super::{Market, QueryResult};

/// Observable state for one market.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketFeed {
    /// Last successfully fetched result.
    pub data: Option<QueryResult>,
    /// Whether a fetch for this market is in flight.
    pub loading: bool,
    /// Message of the most recent failed fetch, cleared on success.
    pub error: Option<String>,
}

impl MarketFeed {
    /// Number of items in the cached result.
    pub fn item_count(&self) -> Option<usize> {
        self.data.as_ref().map(|d| d.items.len())
    }

    /// Loading with nothing to show yet.
    pub fn is_cold(&self) -> bool {
        self.loading && self.data.is_none()
    }
}

/// Exactly one feed per market. Entries never affect each other.
#[derive(Debug, Clone, Default)]
pub struct MarketCache {
    spot: MarketFeed,
    swap: MarketFeed,
}

impl MarketCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, market: Market) -> &MarketFeed {
        match market {
            Market::Spot => &self.spot,
            Market::Swap => &self.swap,
        }
    }

    pub fn get_mut(&mut self, market: Market) -> &mut MarketFeed {
        match market {
            Market::Spot => &mut self.spot,
            Market::Swap => &mut self.swap,
        }
    }

    /// Overwrite the market's slot with a fresh result and clear its error.
    pub fn apply_success(&mut self, market: Market, result: QueryResult) {
        let feed = self.get_mut(market);
        feed.data = Some(result);
        feed.error = None;
    }

    /// Record a failure. Existing data is kept.
    pub fn apply_failure(&mut self, market: Market, message: impl Into<String>) {
        self.get_mut(market).error = Some(message.into());
    }

    pub fn set_loading(&mut self, market: Market, loading: bool) {
        self.get_mut(market).loading = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Source;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn result(market: Market, exchange: &str) -> QueryResult {
        QueryResult {
            exchange: exchange.to_string(),
            market,
            quote: "USDT".to_string(),
            timeframe: "1m".to_string(),
            limit: 120,
            top: 12,
            updated_at: Utc::now(),
            source: Source::Live,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_markets_are_isolated() {
        let mut cache = MarketCache::new();
        let swap = result(Market::Swap, "okx");
        cache.apply_success(Market::Swap, swap.clone());
        cache.apply_success(Market::Spot, result(Market::Spot, "binance"));
        cache.apply_failure(Market::Spot, "boom");

        assert_eq!(cache.get(Market::Swap).data.as_ref(), Some(&swap));
        assert_eq!(cache.get(Market::Swap).error, None);
    }

    #[test]
    fn test_failure_keeps_data() {
        let mut cache = MarketCache::new();
        let spot = result(Market::Spot, "binance");
        cache.apply_success(Market::Spot, spot.clone());
        cache.apply_failure(Market::Spot, "503");

        let feed = cache.get(Market::Spot);
        assert_eq!(feed.data.as_ref(), Some(&spot));
        assert_eq!(feed.error.as_deref(), Some("503"));
    }

    #[test]
    fn test_success_clears_error() {
        let mut cache = MarketCache::new();
        cache.apply_failure(Market::Spot, "503");
        cache.apply_success(Market::Spot, result(Market::Spot, "binance"));
        assert_eq!(cache.get(Market::Spot).error, None);
    }

    #[test]
    fn test_cold_feed() {
        let mut cache = MarketCache::new();
        cache.set_loading(Market::Spot, true);
        assert!(cache.get(Market::Spot).is_cold());

        cache.apply_success(Market::Spot, result(Market::Spot, "binance"));
        assert!(!cache.get(Market::Spot).is_cold());
    }
}
