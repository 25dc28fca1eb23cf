use serde::{Deserialize, Serialize};

use super::{AssetDetail, AssetSummary, ChartPoint};
use crate::utils::formatter::{
    display_symbol, format_market_cap, format_price, ChangeBadge,
};

/// Lifecycle every screen goes through.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ScreenState<T> {
    Loading,
    Empty,
    NotFound { back: String },
    Loaded(T),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
}

impl DisplayMode {
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some("list") => DisplayMode::List,
            _ => DisplayMode::Grid,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssetCard {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: Option<u32>,
    pub price: f64,
    pub price_display: String,
    pub market_cap_display: String,
    pub change: ChangeBadge,
    pub href: String,
}

impl From<&AssetSummary> for AssetCard {
    fn from(asset: &AssetSummary) -> Self {
        AssetCard {
            id: asset.id.clone(),
            name: asset.name.clone(),
            symbol: display_symbol(&asset.symbol),
            rank: asset.market_cap_rank,
            price: asset.current_price,
            price_display: format_price(asset.current_price),
            market_cap_display: format!("${}", format_market_cap(asset.market_cap)),
            change: ChangeBadge::from_change(asset.price_change_percentage_24h),
            href: coin_href(&asset.id),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ListView {
    pub search: String,
    pub sort: Option<&'static str>,
    pub mode: DisplayMode,
    pub total: usize,
    pub assets: Vec<AssetCard>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub rank: Option<u32>,
    pub price: f64,
    pub price_display: String,
    pub change: ChangeBadge,
    pub high_24h_display: String,
    pub low_24h_display: String,
    pub market_cap_display: String,
    pub volume_24h_display: String,
    pub chart: Vec<ChartPoint>,
    pub back: String,
}

impl DetailView {
    pub fn new(detail: AssetDetail, chart: Vec<ChartPoint>) -> Self {
        DetailView {
            symbol: display_symbol(&detail.symbol),
            rank: detail.market_cap_rank,
            price: detail.current_price,
            price_display: format_price(detail.current_price),
            change: ChangeBadge::from_change(detail.price_change_percentage_24h),
            high_24h_display: format_price(detail.high_24h),
            low_24h_display: format_price(detail.low_24h),
            market_cap_display: format!("${}", format_market_cap(detail.market_cap)),
            volume_24h_display: format!("${}", format_market_cap(detail.total_volume)),
            chart,
            back: LIST_HREF.to_string(),
            id: detail.id,
            name: detail.name,
            image: detail.image,
        }
    }
}

pub const LIST_HREF: &str = "/";

pub fn coin_href(id: &str) -> String {
    format!("/coin/{}", id)
}
