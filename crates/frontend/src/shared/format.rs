//! Formatting helpers shared by the storefront screens.

/// Format a dollar amount: `format_price(2.99)` -> `"$2.99"`.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a distance in miles with one decimal: `format_distance(0.5)` -> `"0.5 mi"`.
pub fn format_distance(miles: f64) -> String {
    format!("{:.1} mi", miles)
}

/// Format a rating with one decimal: `format_rating(4.8)` -> `"4.8"`.
pub fn format_rating(value: f64) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2.99), "$2.99");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(13.0), "$13.00");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.5), "0.5 mi");
        assert_eq!(format_distance(2.15), "2.1 mi");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.8), "4.8");
        assert_eq!(format_rating(5.0), "5.0");
    }
}
