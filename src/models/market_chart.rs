use serde::{Deserialize, Serialize};

/// `[timestamp_ms, price]` pair as sent by `/coins/{id}/market_chart`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PricePoint(pub i64, pub f64);

impl PricePoint {
    pub fn timestamp_ms(&self) -> i64 {
        self.0
    }

    pub fn price(&self) -> f64 {
        self.1
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MarketChartResponse {
    pub prices: Vec<PricePoint>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub price: f64,
}
