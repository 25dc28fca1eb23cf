use serde::Serialize;

use super::group_thousands;

pub fn format_price(price: f64) -> String {
    let sign = if price < 0.0 { "-" } else { "" };
    let abs = price.abs();

    let fixed = if abs > 0.0 && abs < 1.0 {
        // sub-dollar assets need more precision to be readable
        let mut s = format!("{:.6}", abs);
        while s.ends_with('0') && s.len() > "0.00".len() {
            s.pop();
        }
        s
    } else {
        format!("{:.2}", abs)
    };

    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

pub fn format_market_cap(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    // compare after rounding so 999_999.999 lands in M, not 1000.00K
    for (scale, suffix) in UNITS {
        let scaled = super::round_to(value / scale, 2);
        if scaled.abs() >= 1.0 {
            return format!("{:.2}{}", scaled, suffix);
        }
    }
    format!("{:.2}", value)
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ChangeBadge {
    pub direction: Direction,
    pub percent: f64,
}

impl ChangeBadge {
    pub fn from_change(change_24h: f64) -> Self {
        let direction = if change_24h >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        ChangeBadge {
            direction,
            percent: super::round_to(change_24h.abs(), 2),
        }
    }
}

pub fn display_symbol(symbol: &str) -> String {
    symbol.to_uppercase()
}
