//! Merging command-line flags with remembered settings.
//!
//! Flags win; absent flags fall back to whatever the last run saved, applied
//! field-by-field (a partial settings file fills in only the fields it has).

use goxgrid_config::SettingsRecord;
use goxgrid_engine::BoundingRegion;

/// Raw input strings after flag/settings resolution, ready for validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    pub width_text: String,
    pub height_text: String,
    pub font_size_text: String,
    pub gap_text: String,
    pub font: Option<String>,
}

pub fn resolve(
    widths: Option<String>,
    height: Option<String>,
    font_size: Option<String>,
    gap: Option<String>,
    font: Option<String>,
    saved: Option<&SettingsRecord>,
) -> ResolvedInput {
    let saved_text = |field: fn(&SettingsRecord) -> Option<String>| {
        saved.and_then(field).unwrap_or_default()
    };
    ResolvedInput {
        width_text: widths.unwrap_or_else(|| saved_text(|s| s.width_text.clone())),
        height_text: height.unwrap_or_else(|| saved_text(|s| s.height_text.clone())),
        font_size_text: font_size
            .unwrap_or_else(|| saved_text(|s| s.font_size_pt.map(|v| v.to_string()))),
        gap_text: gap.unwrap_or_else(|| saved_text(|s| s.gap_value.map(|v| v.to_string()))),
        font: font.or_else(|| saved.and_then(|s| s.font_name.clone())),
    }
}

/// Parse an `--artboard left,bottom,right,top` flag (points).
pub fn parse_artboard(text: &str) -> Result<BoundingRegion, String> {
    let edges: Vec<f64> = text
        .split(',')
        .map(|token| token.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("invalid artboard: {:?} (expected left,bottom,right,top)", text))?;
    match edges.as_slice() {
        [left, bottom, right, top] => Ok(BoundingRegion {
            left: *left,
            bottom: *bottom,
            right: *right,
            top: *top,
        }),
        _ => Err(format!(
            "invalid artboard: {:?} (expected 4 values, got {})",
            text,
            edges.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved() -> SettingsRecord {
        SettingsRecord {
            width_text: Some("20,30".to_string()),
            height_text: Some("15".to_string()),
            font_name: Some("Helvetica".to_string()),
            font_size_pt: Some(14.0),
            gap_value: Some(8.0),
        }
    }

    #[test]
    fn flags_win_over_saved_settings() {
        let resolved = resolve(
            Some("1,2".to_string()),
            Some("3".to_string()),
            None,
            None,
            None,
            Some(&saved()),
        );
        assert_eq!(resolved.width_text, "1,2");
        assert_eq!(resolved.height_text, "3");
        assert_eq!(resolved.font_size_text, "14");
        assert_eq!(resolved.gap_text, "8");
        assert_eq!(resolved.font.as_deref(), Some("Helvetica"));
    }

    #[test]
    fn partial_settings_fill_only_their_fields() {
        let partial = SettingsRecord {
            height_text: Some("9".to_string()),
            ..SettingsRecord::default()
        };
        let resolved = resolve(None, None, None, None, None, Some(&partial));
        assert_eq!(resolved.width_text, "");
        assert_eq!(resolved.height_text, "9");
        assert_eq!(resolved.font_size_text, "");
        assert_eq!(resolved.font, None);
    }

    #[test]
    fn no_settings_resolves_to_empty_input() {
        let resolved = resolve(None, None, None, None, None, None);
        assert_eq!(resolved.width_text, "");
        assert_eq!(resolved.height_text, "");
    }

    #[test]
    fn artboard_parses_four_edges() {
        let region = parse_artboard("0, 0, 1000, 1000").unwrap();
        assert_eq!(region, BoundingRegion::DEFAULT);
        assert!(parse_artboard("1,2,3").is_err());
        assert!(parse_artboard("a,b,c,d").is_err());
    }
}
