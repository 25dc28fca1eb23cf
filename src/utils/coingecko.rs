use crate::config::{CoinGeckoConfig, ConfigError};
use crate::models::{
    AssetDetail, AssetSummary, CoinDetailResponse, MarketChartResponse, PricePoint,
};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client, StatusCode, Url,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub const VS_CURRENCY: &str = "usd";
pub const HISTORY_DAYS: u32 = 7;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },
    #[error("unexpected body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

#[derive(Clone)]
pub struct CoinGecko {
    client: Client,
    base_url: Url,
    per_page: u32,
}

impl CoinGecko {
    pub fn new(config: &CoinGeckoConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            headers.insert(
                "x-cg-demo-api-key",
                HeaderValue::from_str(key).map_err(|e| ConfigError::InvalidApiKey(e.to_string()))?,
            );
        }
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ConfigError::InvalidBaseUrl(config.base_url.clone()))?;

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            per_page: config.per_page,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Base URL plus `segments`, each percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        // checked in `new`: the base URL can carry path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.query_pairs_mut().extend_pairs(query);
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(%url, "fetching");
        let response = match self.client.get(url.clone()).send().await {
            Ok(resp) => resp,
            Err(source) => {
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    source,
                })
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode {
                url: url.to_string(),
                source,
            })
    }

    /// Top assets by market cap, in rank order.
    pub async fn fetch_asset_list(&self) -> Result<Vec<AssetSummary>, FetchError> {
        let per_page = self.per_page.to_string();
        let url = self.endpoint(
            &["coins", "markets"],
            &[
                ("vs_currency", VS_CURRENCY),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
                ("sparkline", "false"),
            ],
        );
        self.get_json(url).await
    }

    pub async fn fetch_asset_detail(&self, id: &str) -> Result<AssetDetail, FetchError> {
        let url = self.endpoint(
            &["coins", id],
            &[
                ("localization", "false"),
                ("tickers", "false"),
                ("market_data", "true"),
                ("community_data", "false"),
                ("developer_data", "false"),
                ("sparkline", "false"),
            ],
        );
        let resp: CoinDetailResponse = self.get_json(url).await?;
        Ok(resp.into())
    }

    /// Trailing seven days of prices for `id`.
    pub async fn fetch_price_history(&self, id: &str) -> Result<Vec<PricePoint>, FetchError> {
        let days = HISTORY_DAYS.to_string();
        let url = self.endpoint(
            &["coins", id, "market_chart"],
            &[("vs_currency", VS_CURRENCY), ("days", days.as_str())],
        );
        let resp: MarketChartResponse = self.get_json(url).await?;
        Ok(resp.prices)
    }
}
