//! Display formatting for venue prices.
//!
//! The dashboard renders every price with exactly two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a price for display with two decimal places, rounding half away
/// from zero (`105` → `"105.00"`, `107.505` → `"107.51"`).
pub fn format_price(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_pads_to_two_decimals() {
        assert_eq!(format_price(dec("105")), "105.00");
        assert_eq!(format_price(dec("107.5")), "107.50");
        assert_eq!(format_price(dec("0")), "0.00");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_price(dec("107.505")), "107.51");
        assert_eq!(format_price(dec("99.994")), "99.99");
        assert_eq!(format_price(dec("-1.005")), "-1.01");
    }
}
