use serde::{Deserialize, Serialize};
use crate::constants::DEFAULT_TEXT_COLOR;

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

/// Display record of a line as stored in a city's `lines.json`
///
/// Branches such as `7-villejuif` have no record of their own and share the
/// record of their base line (see [`base_line_id`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineInfo {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default)]
    pub terminals: Vec<String>,
}

/// Strip a branch suffix from a line id (`"7-villejuif"` -> `"7"`)
#[must_use]
pub fn base_line_id(line_id: &str) -> &str {
    line_id.split_once('-').map_or(line_id, |(base, _)| base)
}
