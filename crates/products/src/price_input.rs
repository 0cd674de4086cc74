//! Numeric form input coercion for the price bounds.

/// Turn raw text from a price field into an optional bound.
///
/// Blank, unparseable, NaN and infinite input all mean "no bound". Any other
/// number is returned as is, negatives included; the filter does not
/// validate bounds.
pub fn parse_price_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}
