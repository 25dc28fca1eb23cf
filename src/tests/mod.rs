
#[cfg(test)]
mod tests {
    use crate::config::{parse_value, CoinGeckoConfig, ConfigError};
    use crate::utils::coingecko::CoinGecko;
    use crate::utils::formatter::{
        display_symbol, format_market_cap, format_price, ChangeBadge, Direction,
    };
    use crate::utils::{group_thousands, round_to};

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(100.456, 2), 100.46);
        assert_eq!(round_to(101.2, 2), 101.2);
        assert_eq!(round_to(-1.005, 0), -1.0);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(50000.0), "$50,000.00");
        assert_eq!(format_price(1234567.891), "$1,234,567.89");
        assert_eq!(format_price(3000.5), "$3,000.50");
        assert_eq!(format_price(0.5), "$0.50");
        assert_eq!(format_price(0.000123), "$0.000123");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_market_cap() {
        assert_eq!(format_market_cap(1.23e12), "1.23T");
        assert_eq!(format_market_cap(2_500_000_000.0), "2.50B");
        assert_eq!(format_market_cap(12_300_000.0), "12.30M");
        assert_eq!(format_market_cap(950_000.0), "950.00K");
        assert_eq!(format_market_cap(12.5), "12.50");
        assert_eq!(format_market_cap(999_999.999), "1.00M");
        assert_eq!(format_market_cap(999.999), "1.00K");
        assert_eq!(format_market_cap(994_000_000.0), "994.00M");
    }

    #[test]
    fn test_change_badge() {
        let up = ChangeBadge::from_change(1.5);
        assert_eq!(up.direction, Direction::Up);
        assert_eq!(up.percent, 1.5);

        let down = ChangeBadge::from_change(-3.5);
        assert_eq!(down.direction, Direction::Down);
        assert_eq!(down.percent, 3.5);

        assert_eq!(ChangeBadge::from_change(0.0).direction, Direction::Up);
    }

    #[test]
    fn test_display_symbol() {
        assert_eq!(display_symbol("btc"), "BTC");
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u16>("PORT", " 8080 ").unwrap(), 8080);
        match parse_value::<u16>("PORT", "eighty") {
            Err(ConfigError::InvalidValue { key, value }) => {
                assert_eq!(key, "PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_base_url() {
        for base_url in ["not a url", "mailto:prices@example.test"] {
            match CoinGecko::new(&CoinGeckoConfig::with_base_url(base_url)) {
                Err(ConfigError::InvalidBaseUrl(value)) => assert_eq!(value, base_url),
                Err(other) => panic!("expected InvalidBaseUrl, got {:?}", other),
                Ok(_) => panic!("accepted {:?}", base_url),
            }
        }
    }
}
