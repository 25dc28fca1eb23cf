//! Search, filter and sort over an asset snapshot.
//!
//! Everything here is a pure function of its inputs; the list handler calls
//! [`filter_and_sort`] on every request with the current query.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use crate::models::AssetSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Rank,
    Name,
    PriceAsc,
    PriceDesc,
    Change,
    MarketCap,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "market_cap_rank" | "rank" => Ok(SortKey::Rank),
            "name" => Ok(SortKey::Name),
            "price" | "price_asc" => Ok(SortKey::PriceAsc),
            "price_desc" => Ok(SortKey::PriceDesc),
            "change" => Ok(SortKey::Change),
            "market_cap" => Ok(SortKey::MarketCap),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rank => "market_cap_rank",
            SortKey::Name => "name",
            SortKey::PriceAsc => "price",
            SortKey::PriceDesc => "price_desc",
            SortKey::Change => "change",
            SortKey::MarketCap => "market_cap",
        }
    }

    /// Missing parameter means rank order; an unrecognized one means `None`
    /// (leave the filtered list in input order).
    pub fn from_param(param: Option<&str>) -> Option<SortKey> {
        match param {
            None => Some(SortKey::Rank),
            Some(value) if value.trim().is_empty() => Some(SortKey::Rank),
            Some(value) => value.parse().ok(),
        }
    }

    fn compare(&self, a: &AssetSummary, b: &AssetSummary) -> Ordering {
        match self {
            SortKey::Rank => rank_of(a).cmp(&rank_of(b)),
            SortKey::Name => lowercase_chars(&a.name).cmp(lowercase_chars(&b.name)),
            SortKey::PriceAsc => a.current_price.total_cmp(&b.current_price),
            SortKey::PriceDesc => b.current_price.total_cmp(&a.current_price),
            SortKey::Change => a
                .price_change_percentage_24h
                .total_cmp(&b.price_change_percentage_24h),
            SortKey::MarketCap => a.market_cap.total_cmp(&b.market_cap),
        }
    }
}

fn lowercase_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

// unranked assets go last
fn rank_of(asset: &AssetSummary) -> u32 {
    asset.market_cap_rank.unwrap_or(u32::MAX)
}

pub fn normalize_search(search: &str) -> String {
    search.trim().to_lowercase()
}

pub fn matches_search(asset: &AssetSummary, needle: &str) -> bool {
    needle.is_empty()
        || asset.name.to_lowercase().contains(needle)
        || asset.symbol.to_lowercase().contains(needle)
}

pub fn filter(assets: &[AssetSummary], search: &str) -> Vec<AssetSummary> {
    let needle = normalize_search(search);
    assets
        .iter()
        .filter(|asset| matches_search(asset, &needle))
        .cloned()
        .collect()
}

/// Stable sort of an owned list; `None` keeps the current order.
pub fn sort(mut assets: Vec<AssetSummary>, key: Option<SortKey>) -> Vec<AssetSummary> {
    if let Some(key) = key {
        assets.sort_by(|a, b| key.compare(a, b));
    }
    assets
}

pub fn filter_and_sort(
    assets: &[AssetSummary],
    search: &str,
    key: Option<SortKey>,
) -> Vec<AssetSummary> {
    sort(filter(assets, search), key)
}
