//! SVG rendering of a layout result.
//!
//! This is the CLI's stand-in for a host canvas: white-filled rectangles
//! with a 1pt black stroke, black labels, and the dimension line, emitted in
//! selection order. Layout coordinates are y-up; SVG is y-down, so every y
//! is flipped against the region's top edge.

use goxgrid_engine::{BoundingRegion, LayoutResult, ObjectRef};

pub fn render(
    result: &LayoutResult,
    region: BoundingRegion,
    font: Option<&str>,
    font_size_pt: f64,
) -> String {
    let width = region.right - region.left;
    let height = region.top - region.bottom;
    let flip = |y: f64| region.top - y;
    let font_family = xml_escape(font.unwrap_or("sans-serif"));
    let font_size = font_size_pt;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}pt\" height=\"{height}pt\" \
         viewBox=\"{} {} {} {}\">\n",
        region.left,
        0.0,
        width,
        height,
    ));

    for object in &result.selection_order {
        match object {
            ObjectRef::Rect { index } => {
                let rect = &result.rectangles[*index];
                svg.push_str(&format!(
                    "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" \
                     fill=\"white\" stroke=\"black\" stroke-width=\"1\"/>\n",
                    rect.left,
                    flip(rect.top),
                    rect.width,
                    rect.height,
                ));
            }
            ObjectRef::DimensionLine => {
                if let Some(line) = &result.dimension_line {
                    svg.push_str(&format!(
                        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" \
                         stroke=\"black\" stroke-width=\"1\"/>\n",
                        line.x,
                        flip(line.y_top),
                        line.x,
                        flip(line.y_bottom),
                    ));
                }
            }
            ObjectRef::WidthLabel { index } => {
                let label = &result.width_labels[*index];
                svg.push_str(&format!(
                    "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"black\" \
                     font-family=\"{font_family}\" font-size=\"{font_size}\">{}</text>\n",
                    label.x,
                    flip(label.y),
                    xml_escape(&label.text),
                ));
            }
            ObjectRef::HeightLabel => {
                let label = &result.height_label;
                svg.push_str(&format!(
                    "  <text x=\"{}\" y=\"{}\" fill=\"black\" \
                     font-family=\"{font_family}\" font-size=\"{font_size}\">{}</text>\n",
                    label.x,
                    flip(label.y),
                    xml_escape(&label.text),
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
