//! Displayed-price parsing

use crate::{Error, Result};

/// Parse a displayed price into a number.
///
/// Strips every character that is not an ASCII digit or `.` and parses the
/// remainder, so "£259.99" and "259.99" both yield 259.99. An empty or
/// malformed remainder is a parse error carrying the raw text.
pub fn parse_price(raw: &str) -> Result<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return Err(Error::parse(format!("no numeric price in '{}'", raw)));
    }

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::parse(format!("malformed price '{}' in '{}'", cleaned, raw)))
}
