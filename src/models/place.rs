use serde::{Deserialize, Serialize};

/// A point of interest near a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    /// Category tag, e.g. `restaurant` or `musée`; keys into the city's place icons
    #[serde(rename = "type")]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
}
