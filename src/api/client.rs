//! HTTP client for the ranking backend.

use async_trait::async_trait;
use reqwest::Client;

use super::wire::TopGainersResponse;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::state::{Query, QueryResult};

/// Issues one request per query. No retry, no caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataClient: Send + Sync {
    /// Fetch the ranking for `query`. `force` asks the backend to bypass its
    /// own cache.
    async fn fetch(&self, query: &Query, force: bool) -> Result<QueryResult>;
}

/// Builder for creating an HTTP data client.
pub struct HttpDataClientBuilder {
    config: ApiConfig,
    client: Option<Client>,
}

impl HttpDataClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
            client: None,
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a preconfigured reqwest client.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the data client.
    pub fn build(self) -> Result<HttpDataClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder().build()?,
        };
        Ok(HttpDataClient::with_client(self.config, client))
    }
}

impl Default for HttpDataClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// [`DataClient`] backed by `GET /api/top-gainers`.
pub struct HttpDataClient {
    base_url: String,
    client: Client,
}

impl HttpDataClient {
    /// Create a new client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        HttpDataClientBuilder::new().config(config).build()
    }

    fn with_client(config: ApiConfig, client: Client) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Endpoint URL.
    pub fn url(&self) -> String {
        format!("{}/api/top-gainers", self.base_url)
    }

    /// Query-string parameters for a request.
    pub fn query_params(query: &Query, force: bool) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("timeframe", query.timeframe.as_str().to_string()),
            ("limit", query.candle_limit.to_string()),
            ("top", query.top_n.to_string()),
        ];
        if let Some(exchange) = &query.exchange {
            params.push(("exchange", exchange.clone()));
        }
        params.push(("market", query.market.as_str().to_string()));
        if let Some(quote) = &query.quote {
            params.push(("quote", quote.clone()));
        }
        if force {
            params.push(("force", "true".to_string()));
        }
        params
    }
}

#[async_trait]
impl DataClient for HttpDataClient {
    async fn fetch(&self, query: &Query, force: bool) -> Result<QueryResult> {
        let resp = self
            .client
            .get(self.url())
            .query(&Self::query_params(query, force))
            .send()
            .await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::http(status.as_u16(), body));
        }

        let bytes = resp.bytes().await?;
        let wire: TopGainersResponse = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            market = %query.market,
            timeframe = %query.timeframe,
            items = wire.items.len(),
            source = %wire.source,
            "fetched top gainers"
        );

        Ok(super::DataConverter::convert_response(wire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Market, Timeframe};
    use pretty_assertions::assert_eq;

    fn params(query: &Query, force: bool) -> Vec<(&'static str, String)> {
        HttpDataClient::query_params(query, force)
    }

    #[test]
    fn test_default_params() {
        let query = Query::new(Market::Spot, Timeframe::M1, 120, 12);
        assert_eq!(
            params(&query, false),
            vec![
                ("timeframe", "1m".to_string()),
                ("limit", "120".to_string()),
                ("top", "12".to_string()),
                ("market", "spot".to_string()),
            ]
        );
    }

    #[test]
    fn test_overrides_and_force() {
        let mut query = Query::new(Market::Swap, Timeframe::H4, 60, 5);
        query.exchange = Some("okx".to_string());
        query.quote = Some("USDC".to_string());
        assert_eq!(
            params(&query, true),
            vec![
                ("timeframe", "4h".to_string()),
                ("limit", "60".to_string()),
                ("top", "5".to_string()),
                ("exchange", "okx".to_string()),
                ("market", "swap".to_string()),
                ("quote", "USDC".to_string()),
                ("force", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..ApiConfig::default()
        };
        let client = HttpDataClient::new(config).unwrap();
        assert_eq!(client.url(), "http://localhost:8000/api/top-gainers");
    }

    #[test]
    fn test_builder_accepts_preconfigured_client() {
        let config = ApiConfig {
            base_url: "http://backend:9000".to_string(),
            ..ApiConfig::default()
        };
        let client = HttpDataClientBuilder::new()
            .config(config)
            .client(Client::new())
            .build()
            .unwrap();
        assert_eq!(client.url(), "http://backend:9000/api/top-gainers");
    }

    #[test]
    fn test_http_errors_surface_the_body() {
        let mut mock = MockDataClient::new();
        mock.expect_fetch()
            .withf(|query, force| query.market == Market::Swap && *force)
            .returning(|_, _| Err(Error::http(502, "upstream exchange unavailable")));
        let client: std::sync::Arc<dyn DataClient> = std::sync::Arc::new(mock);

        let query = Query::new(Market::Swap, Timeframe::M5, 120, 12);
        let err = tokio_test::block_on(client.fetch(&query, true)).unwrap_err();
        assert_eq!(err.to_string(), "upstream exchange unavailable");
        assert!(err.is_recoverable());
    }
}
