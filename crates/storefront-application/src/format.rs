//! Display formatting for prices and ratings.

use num_format::{Locale, ToFormattedString};
use storefront_core::product::MAX_RATING;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Formats a price with a currency glyph and thousands separators.
///
/// Up to three fractional digits are kept and trailing zeros dropped, so
/// `12500.0` becomes `₱12,500` and `1234.5` becomes `₱1,234.5`.
pub fn format_price(amount: f64, glyph: &str) -> String {
    format!("{}{}", glyph, format_number(amount))
}

/// Formats a number with thousands separators and at most three decimals.
pub fn format_number(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let grouped = match whole.parse::<u64>() {
        Ok(value) => value.to_formatted_string(&Locale::en),
        Err(_) => whole.to_string(),
    };

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Renders `filled` stars out of five, e.g. `★★★★☆`.
pub fn star_bar(filled: u8) -> String {
    let filled = filled.min(MAX_RATING);
    let mut bar = String::with_capacity(usize::from(MAX_RATING) * 3);
    bar.extend(std::iter::repeat_n(FILLED_STAR, usize::from(filled)));
    bar.extend(std::iter::repeat_n(EMPTY_STAR, usize::from(MAX_RATING - filled)));
    bar
}
