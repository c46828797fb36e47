// Property-based tests for width parsing and grid layout.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;

use goxgrid_engine::{layout, parse, BoundingRegion, DisplayUnit, GridSpec};

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Arbitrary width-list token: mostly valid numbers, sometimes junk,
/// negatives, or empty.
fn arb_token() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => r" ?[0-9]{1,4}(\.[0-9]{1,3})? ?",
        1 => r"[a-zA-Z%]{0,8}",
        1 => r"-[0-9]{1,4}",
        1 => Just("0".to_string()),
        1 => Just("".to_string()),
    ]
}

fn arb_width_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_token(), 0..12).prop_map(|tokens| tokens.join(","))
}

fn arb_widths() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01..5000.0f64, 1..20)
}

fn arb_unit() -> impl Strategy<Value = DisplayUnit> {
    prop_oneof![
        Just(DisplayUnit::Points),
        Just(DisplayUnit::Picas),
        Just(DisplayUnit::Inches),
        Just(DisplayUnit::Millimeters),
        Just(DisplayUnit::Centimeters),
        Just(DisplayUnit::Pixels),
        Just(DisplayUnit::Unknown),
    ]
}

fn arb_region() -> impl Strategy<Value = BoundingRegion> {
    (-2000.0..2000.0f64, -2000.0..2000.0f64, 1.0..4000.0f64, 1.0..4000.0f64).prop_map(
        |(left, bottom, w, h)| BoundingRegion {
            left,
            bottom,
            right: left + w,
            top: bottom + h,
        },
    )
}

fn make_spec(widths: Vec<f64>, height: f64, gap: f64) -> GridSpec {
    GridSpec {
        widths,
        height,
        font_size_pt: 12.0,
        gap_value: gap,
        font: None,
    }
}

// ---------------------------------------------------------------------------
// Parser properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn parsed_widths_are_positive_and_finite(text in arb_width_text()) {
        for value in parse::parse_widths(&text) {
            prop_assert!(value > 0.0);
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn parsed_widths_preserve_order(widths in arb_widths()) {
        let text = widths
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(parse::parse_widths(&text), widths);
    }
}

// ---------------------------------------------------------------------------
// Layout properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn widths_sum_and_edges(
        widths in arb_widths(),
        height in 0.01..2000.0f64,
        gap in -100.0..100.0f64,
        unit in arb_unit(),
        region in arb_region(),
    ) {
        let result = layout(&make_spec(widths.clone(), height, gap), region, unit);

        let total_pt: f64 = widths.iter().map(|w| unit.to_points(*w)).sum();
        let sum: f64 = result.rectangles.iter().map(|r| r.width).sum();
        prop_assert!((sum - total_pt).abs() <= 1e-6 * total_pt.max(1.0));

        let start_x = region.left + (region.width() - total_pt) / 2.0;
        let first = result.rectangles.first().unwrap();
        let last = result.rectangles.last().unwrap();
        prop_assert!((first.left - start_x).abs() <= 1e-9 * start_x.abs().max(1.0));
        prop_assert!((last.right() - (start_x + total_pt)).abs() <= 1e-6 * total_pt.max(1.0));
    }

    #[test]
    fn shared_row_geometry(
        widths in arb_widths(),
        height in 0.01..2000.0f64,
        unit in arb_unit(),
        region in arb_region(),
    ) {
        let result = layout(&make_spec(widths, height, 10.0), region, unit);
        let first = result.rectangles[0];
        for rect in &result.rectangles {
            prop_assert_eq!(rect.top, first.top);
            prop_assert_eq!(rect.height, first.height);
        }
    }

    #[test]
    fn selection_order_counts(
        widths in arb_widths(),
        height in 0.01..2000.0f64,
        region in arb_region(),
    ) {
        let n = widths.len();
        let result = layout(&make_spec(widths, height, 10.0), region, DisplayUnit::Points);
        prop_assert_eq!(result.width_labels.len(), n);
        let expected = if result.dimension_line.is_some() { 2 * n + 2 } else { 2 * n + 1 };
        prop_assert_eq!(result.selection_order.len(), expected);
    }

    #[test]
    fn layout_is_pure(
        widths in arb_widths(),
        height in 0.01..2000.0f64,
        gap in -100.0..100.0f64,
        unit in arb_unit(),
        region in arb_region(),
    ) {
        let spec = make_spec(widths, height, gap);
        prop_assert_eq!(layout(&spec, region, unit), layout(&spec, region, unit));
    }
}
