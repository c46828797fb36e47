// Last-used input settings
// Loaded from ~/.config/goxgrid/settings.json, with a fallback file next to
// the executable when no config directory is available.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "settings.json";
const FALLBACK_FILE: &str = "goxgrid_settings.json";

/// The raw input remembered between runs.
///
/// Persisted as flat JSON with exactly these camelCase keys, matching files
/// written by earlier versions of the tool. Every field is optional on load;
/// callers apply whatever is present field-by-field (a saved font name that
/// no longer matches an installed font is simply ignored).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    #[serde(rename = "widthText", skip_serializing_if = "Option::is_none")]
    pub width_text: Option<String>,

    #[serde(rename = "heightText", skip_serializing_if = "Option::is_none")]
    pub height_text: Option<String>,

    #[serde(rename = "fontName", skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,

    #[serde(rename = "fontSizePt", skip_serializing_if = "Option::is_none")]
    pub font_size_pt: Option<f64>,

    #[serde(rename = "gapValue", skip_serializing_if = "Option::is_none")]
    pub gap_value: Option<f64>,
}

impl SettingsRecord {
    pub fn is_empty(&self) -> bool {
        self.width_text.is_none()
            && self.height_text.is_none()
            && self.font_name.is_none()
            && self.font_size_pt.is_none()
            && self.gap_value.is_none()
    }
}

/// Decoders tried in order on load. The first one that produces a record
/// wins; if all fail, the file is treated as absent.
const DECODERS: &[fn(&str) -> Option<SettingsRecord>] =
    &[decode_strict, decode_relaxed, decode_key_value];

/// File-backed store for [`SettingsRecord`].
///
/// Persistence is best-effort by contract: `load` never errors (a missing or
/// corrupt file is `None`), and `save` reports failure in its return value
/// but callers are expected to ignore it — the grid workflow must never be
/// blocked by the settings file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    preferred: Option<PathBuf>,
    fallback: Option<PathBuf>,
}

impl SettingsStore {
    /// Store at the standard locations: the per-user config directory,
    /// falling back to a file beside the running executable.
    pub fn new() -> Self {
        let preferred = dirs::config_dir().map(|dir| dir.join("goxgrid").join(SETTINGS_FILE));
        let fallback = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(FALLBACK_FILE)));
        SettingsStore { preferred, fallback }
    }

    /// Store at explicit locations (used by tests).
    pub fn with_paths(preferred: Option<PathBuf>, fallback: Option<PathBuf>) -> Self {
        SettingsStore { preferred, fallback }
    }

    /// The path `load` would read: the preferred location if the file exists
    /// there, else the fallback if it exists there, else the preferred
    /// location (where the next save will land).
    pub fn active_path(&self) -> Option<PathBuf> {
        self.existing_path().or_else(|| self.preferred.clone()).or_else(|| self.fallback.clone())
    }

    fn existing_path(&self) -> Option<PathBuf> {
        [&self.preferred, &self.fallback]
            .into_iter()
            .flatten()
            .find(|path| path.exists())
            .cloned()
    }

    /// Load the last-saved record, if any survives decoding.
    pub fn load(&self) -> Option<SettingsRecord> {
        let path = self.existing_path()?;
        let content = fs::read_to_string(path).ok()?;
        DECODERS.iter().find_map(|decode| decode(&content))
    }

    /// Save the record, overwriting any previous file wholesale.
    ///
    /// Writes the preferred location first, trying the fallback only when
    /// that fails. Returns the path written; callers in the grid workflow
    /// ignore the error case by design.
    pub fn save(&self, record: &SettingsRecord) -> Result<PathBuf, String> {
        let json = serde_json::to_string_pretty(record).map_err(|e| e.to_string())?;

        let mut last_error = String::from("no writable settings location");
        for path in [&self.preferred, &self.fallback].into_iter().flatten() {
            match write_file(path, &json) {
                Ok(()) => return Ok(path.clone()),
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &PathBuf, content: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    fs::write(path, content).map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// Decoders
// ---------------------------------------------------------------------------

/// Tier (a): the format `save` writes. Unknown fields are ignored, so any
/// extras in an old file are dropped by the next save.
fn decode_strict(content: &str) -> Option<SettingsRecord> {
    serde_json::from_str(content).ok()
}

/// Tier (b): JSON with `//` comment lines and trailing commas, as left
/// behind by hand edits and older releases.
fn decode_relaxed(content: &str) -> Option<SettingsRecord> {
    let cleaned: String = content
        .lines()
        .filter(|line| !line.trim().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n");
    serde_json::from_str(&strip_trailing_commas(&cleaned)).ok()
}

/// Tier (c): one `key=value` per line, split on the first `=` only. Fails
/// unless at least one known key is present, so arbitrary garbage still
/// reads as absent.
fn decode_key_value(content: &str) -> Option<SettingsRecord> {
    let mut record = SettingsRecord::default();
    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "widthText" => record.width_text = Some(value.to_string()),
            "heightText" => record.height_text = Some(value.to_string()),
            "fontName" => record.font_name = Some(value.to_string()),
            "fontSizePt" => record.font_size_pt = value.parse().ok(),
            "gapValue" => record.gap_value = value.parse().ok(),
            _ => {}
        }
    }
    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}

/// Remove commas that directly precede a closing `}` or `]`, string
/// literals excepted.
fn strip_trailing_commas(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;
    let chars: Vec<char> = content.chars().collect();
    for (i, &ch) in chars.iter().enumerate() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            ',' => {
                let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
                if !matches!(next, Some('}') | Some(']')) {
                    out.push(ch);
                }
            }
            _ => out.push(ch),
        }
    }
    out
}
