//! Display formatting for catalog values

/// Currency symbol shown in front of every price
pub const CURRENCY_SYMBOL: &str = "$";

/// Formats a price with the fixed currency symbol and exactly two fraction digits
///
/// # Examples
///
/// ```
/// use frontend::shared::format::format_price;
/// assert_eq!(format_price(65.0), "$65.00");
/// ```
pub fn format_price(value: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(65.0), "$65.00");
        assert_eq!(format_price(210.0), "$210.00");
        assert_eq!(format_price(145.5), "$145.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_price_rounds_to_cents() {
        assert_eq!(format_price(19.999), "$20.00");
        assert_eq!(format_price(1234.567), "$1234.57");
    }
}
