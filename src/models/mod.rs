use serde::{Deserialize, Deserializer, Serialize};
pub mod market_chart;
pub mod views;

pub use market_chart::{ChartPoint, MarketChartResponse, PricePoint};

fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// One row of `/coins/markets`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AssetSummary {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub current_price: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub price_change_percentage_24h: f64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub market_cap: f64,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UsdValue {
    #[serde(default, deserialize_with = "zero_if_null")]
    pub usd: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CoinImage {
    #[serde(default)]
    pub large: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MarketData {
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    pub current_price: UsdValue,
    #[serde(default)]
    pub high_24h: UsdValue,
    #[serde(default)]
    pub low_24h: UsdValue,
    #[serde(default)]
    pub market_cap: UsdValue,
    #[serde(default)]
    pub total_volume: UsdValue,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub price_change_percentage_24h: f64,
}

/// Body of `/coins/{id}` with `market_data=true`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CoinDetailResponse {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub image: CoinImage,
    pub market_data: MarketData,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssetDetail {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub market_cap_rank: Option<u32>,
    pub current_price: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub market_cap: f64,
    pub total_volume: f64,
    pub price_change_percentage_24h: f64,
}

impl From<CoinDetailResponse> for AssetDetail {
    fn from(resp: CoinDetailResponse) -> Self {
        let market = resp.market_data;
        AssetDetail {
            id: resp.id,
            name: resp.name,
            symbol: resp.symbol,
            image: resp.image.large,
            market_cap_rank: market.market_cap_rank,
            current_price: market.current_price.usd,
            high_24h: market.high_24h.usd,
            low_24h: market.low_24h.usd,
            market_cap: market.market_cap.usd,
            total_volume: market.total_volume.usd,
            price_change_percentage_24h: market.price_change_percentage_24h,
        }
    }
}
