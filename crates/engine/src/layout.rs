//! The layout engine: turns a validated [`GridSpec`] and a bounding region
//! into exact positions for every rectangle, label, and the dimension line.
//!
//! Pure and deterministic: identical inputs always produce an identical
//! result. No I/O, no host state.

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingRegion, DimensionLine, Label, ObjectRef, Rect};
use crate::spec::GridSpec;
use crate::units::DisplayUnit;

/// Everything a host renderer needs to materialize one grid.
///
/// `width_labels[i]` annotates `rectangles[i]`. `selection_order` is the
/// order in which the host must report the created objects as selected:
/// rectangles first, then the dimension line if present, then width labels,
/// then the height label. Built once; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub rectangles: Vec<Rect>,
    pub width_labels: Vec<Label>,
    pub height_label: Label,
    pub dimension_line: Option<DimensionLine>,
    pub selection_order: Vec<ObjectRef>,
}

/// Compute the grid layout.
///
/// Widths, height, and gap in `spec` are display-unit values and are
/// converted to points with `unit`. Label text keeps the display-unit
/// magnitude the user typed. The grid is centered on `region` both ways;
/// all rectangles share one top edge and one height.
///
/// The caller must have rejected an empty width list already; that is a
/// programming error here, not a runtime condition.
pub fn layout(spec: &GridSpec, region: BoundingRegion, unit: DisplayUnit) -> LayoutResult {
    debug_assert!(!spec.widths.is_empty(), "width list validated upstream");

    let widths_pt: Vec<f64> = spec.widths.iter().map(|w| unit.to_points(*w)).collect();
    let height_pt = unit.to_points(spec.height);
    let gap_pt = unit.to_points(spec.gap_value);

    let total_width: f64 = widths_pt.iter().sum();
    let start_x = region.left + (region.width() - total_width) / 2.0;
    let center_y = (region.bottom + region.top) / 2.0;
    let rect_top = center_y + height_pt / 2.0;

    let mut rectangles = Vec::with_capacity(widths_pt.len());
    let mut width_labels = Vec::with_capacity(widths_pt.len());
    let mut current_x = start_x;
    for (display_width, width_pt) in spec.widths.iter().zip(&widths_pt) {
        rectangles.push(Rect {
            left: current_x,
            top: rect_top,
            width: *width_pt,
            height: height_pt,
        });
        width_labels.push(Label {
            text: format_magnitude(*display_width),
            x: current_x + width_pt / 2.0,
            y: rect_top + gap_pt,
        });
        current_x += width_pt;
    }

    let height_label = Label {
        text: format_magnitude(spec.height),
        x: start_x + total_width + gap_pt,
        y: center_y,
    };

    let dimension_line = dimension_line(start_x + total_width + gap_pt / 2.0, rect_top, height_pt);

    let mut selection_order = Vec::with_capacity(rectangles.len() * 2 + 2);
    selection_order.extend((0..rectangles.len()).map(|index| ObjectRef::Rect { index }));
    if dimension_line.is_some() {
        selection_order.push(ObjectRef::DimensionLine);
    }
    selection_order.extend((0..width_labels.len()).map(|index| ObjectRef::WidthLabel { index }));
    selection_order.push(ObjectRef::HeightLabel);

    LayoutResult {
        rectangles,
        width_labels,
        height_label,
        dimension_line,
        selection_order,
    }
}

/// The dimension line is a nicety: if its coordinates cannot be computed
/// (degenerate region arithmetic), it is omitted without failing the layout.
fn dimension_line(x: f64, rect_top: f64, height_pt: f64) -> Option<DimensionLine> {
    let y_top = rect_top;
    let y_bottom = rect_top - height_pt;
    if x.is_finite() && y_top.is_finite() && y_bottom.is_finite() {
        Some(DimensionLine { x, y_top, y_bottom })
    } else {
        None
    }
}

/// Label text for a display-unit magnitude: the shortest decimal form that
/// round-trips the value. Integral values print without a decimal point,
/// matching what the user typed.
fn format_magnitude(value: f64) -> String {
    value.to_string()
}
