use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Station record as stored in a city's `stations.json`, keyed by station id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStation {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Contents of `stations.json`: station records and the ordered station ids of every line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationsData {
    pub stations: IndexMap<String, RawStation>,
    pub lines: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub lines: Vec<String>,
    pub is_interchange: bool,
}

impl Station {
    #[must_use]
    pub fn from_raw(id: String, raw: RawStation) -> Self {
        let is_interchange = raw.lines.len() > 1;
        Self {
            id,
            name: raw.name,
            lat: raw.lat,
            lng: raw.lng,
            lines: raw.lines,
            is_interchange,
        }
    }
}
