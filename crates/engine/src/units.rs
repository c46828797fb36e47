//! Display-unit conversion.
//!
//! All geometry is computed in points. User measurements arrive in whatever
//! unit the host document is set to; this module converts them linearly.
//! An unknown unit converts as identity (the value is taken to already be
//! in points) — that is a deliberate leniency, not an error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The measurement unit a host document displays to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    #[serde(rename = "pt")]
    Points,
    #[serde(rename = "pc")]
    Picas,
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "cm")]
    Centimeters,
    #[serde(rename = "px")]
    Pixels,
    /// Host could not report a unit. Converts as identity.
    Unknown,
}

impl DisplayUnit {
    /// Points per one unit of this kind.
    ///
    /// Pixels are treated as a 72-dpi alias for points.
    pub fn points_per_unit(self) -> f64 {
        match self {
            DisplayUnit::Points | DisplayUnit::Pixels | DisplayUnit::Unknown => 1.0,
            DisplayUnit::Picas => 12.0,
            DisplayUnit::Inches => 72.0,
            DisplayUnit::Millimeters => 72.0 / 25.4,
            DisplayUnit::Centimeters => 72.0 / 2.54,
        }
    }

    /// Convert a value in this unit to points.
    pub fn to_points(self, value: f64) -> f64 {
        value * self.points_per_unit()
    }

    /// Convert a value in points back to this unit. Inverse of `to_points`
    /// to within one ulp.
    pub fn from_points(self, value: f64) -> f64 {
        value / self.points_per_unit()
    }

    /// Abbreviation used on the wire and in CLI flags.
    pub fn abbrev(self) -> &'static str {
        match self {
            DisplayUnit::Points => "pt",
            DisplayUnit::Picas => "pc",
            DisplayUnit::Inches => "in",
            DisplayUnit::Millimeters => "mm",
            DisplayUnit::Centimeters => "cm",
            DisplayUnit::Pixels => "px",
            DisplayUnit::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

impl FromStr for DisplayUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" | "point" | "points" => Ok(DisplayUnit::Points),
            "pc" | "pica" | "picas" => Ok(DisplayUnit::Picas),
            "in" | "inch" | "inches" => Ok(DisplayUnit::Inches),
            "mm" | "millimeter" | "millimeters" => Ok(DisplayUnit::Millimeters),
            "cm" | "centimeter" | "centimeters" => Ok(DisplayUnit::Centimeters),
            "px" | "pixel" | "pixels" => Ok(DisplayUnit::Pixels),
            "unknown" => Ok(DisplayUnit::Unknown),
            other => Err(format!("unknown unit: {}", other)),
        }
    }
}
