//! Raw input parsing.
//!
//! Width lists come in as comma-separated text. Malformed or non-positive
//! tokens are dropped silently; an empty result is the caller's validation
//! failure, not ours. Scalar fields (font size, gap) fall back to documented
//! defaults, while height is mandatory and fails hard.

use crate::spec::ValidationError;

/// Default label font size in points when the input is missing or invalid.
pub const DEFAULT_FONT_SIZE_PT: f64 = 12.0;

/// Default gap between the grid and its labels, in display units.
pub const DEFAULT_GAP: f64 = 10.0;

/// Parse a comma-separated width list into display-unit values.
///
/// Preserves input order. Tokens that are empty after trimming, fail to
/// parse, or are not strictly positive and finite are skipped. Never errors;
/// the result may be empty.
pub fn parse_widths(text: &str) -> Vec<f64> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value > 0.0)
        .collect()
}

/// Parse the mandatory height field.
pub fn parse_height(text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingHeight);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidHeight(trimmed.to_string())),
    }
}

/// Parse a label font size in points, falling back to the default.
pub fn parse_font_size(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => DEFAULT_FONT_SIZE_PT,
    }
}

/// Parse the label gap in display units, falling back to the default.
/// Zero and negative gaps are allowed.
pub fn parse_gap(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => DEFAULT_GAP,
    }
}
