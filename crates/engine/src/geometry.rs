//! Geometry primitives shared by the layout engine and host renderers.
//!
//! All coordinates are in points, y-up (host canvas convention: `top` is the
//! larger y value).

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top - self.height
    }
}

/// A text label and the anchor point the host should place it at.
///
/// The text is the display-unit magnitude the user typed, never the
/// converted canonical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Vertical segment indicating the grid height, drawn beside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionLine {
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// The rectangular area the grid is centered on (an artboard or canvas),
/// in points. Supplied by the host; the engine only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl BoundingRegion {
    /// Region used when the host cannot report one.
    pub const DEFAULT: BoundingRegion = BoundingRegion {
        left: 0.0,
        bottom: 0.0,
        right: 1000.0,
        top: 1000.0,
    };

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl Default for BoundingRegion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reference to one generated object, used to report the selection order
/// to the host. Downstream automation observes this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectRef {
    /// Column rectangle at this index.
    Rect { index: usize },
    DimensionLine,
    /// Width label for the column at this index.
    WidthLabel { index: usize },
    HeightLabel,
}
