//! Validated grid input and the errors that keep bad input out of it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parse;

/// Validated input to the layout engine. Immutable once built.
///
/// Widths and height are in display units; conversion to points happens
/// inside the engine. The font is an opaque name the host resolves (or
/// ignores if it no longer matches an installed font).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub widths: Vec<f64>,
    pub height: f64,
    pub font_size_pt: f64,
    pub gap_value: f64,
    pub font: Option<String>,
}

impl GridSpec {
    /// Build a spec from raw user input.
    ///
    /// Width and height problems are hard validation errors. Font size and
    /// gap fall back to their defaults instead of failing.
    pub fn from_input(
        width_text: &str,
        height_text: &str,
        font_size_text: &str,
        gap_text: &str,
        font: Option<String>,
    ) -> Result<Self, ValidationError> {
        let widths = parse::parse_widths(width_text);
        if widths.is_empty() {
            return Err(ValidationError::NoValidWidths);
        }
        let height = parse::parse_height(height_text)?;
        Ok(GridSpec {
            widths,
            height,
            font_size_pt: parse::parse_font_size(font_size_text),
            gap_value: parse::parse_gap(gap_text),
            font,
        })
    }
}

/// User-input validation failure. Reported once, before any layout or
/// persistence attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The width list contained no valid positive values.
    NoValidWidths,
    /// The height field was empty.
    MissingHeight,
    /// The height field did not parse to a positive number.
    InvalidHeight(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoValidWidths => {
                write!(f, "enter valid width values separated by commas")
            }
            ValidationError::MissingHeight => write!(f, "a height value is required"),
            ValidationError::InvalidHeight(text) => {
                write!(f, "not a valid height value: {:?}", text)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
