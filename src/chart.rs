use chrono::{DateTime, Utc};

use crate::models::{ChartPoint, PricePoint};
use crate::utils::round_to;

/// `"Nov 14"` style label; timestamps outside chrono's range get an empty label.
pub fn short_date_label(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_default()
}

pub fn project_point(point: &PricePoint) -> ChartPoint {
    ChartPoint {
        label: short_date_label(point.timestamp_ms()),
        price: round_to(point.price(), 2),
    }
}

pub fn project_price_history(points: &[PricePoint]) -> Vec<ChartPoint> {
    points.iter().map(project_point).collect()
}
