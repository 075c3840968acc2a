use serde::{Deserialize, Serialize};
use super::city::CityId;
use crate::constants::SPIN_DURATION_MS;

fn default_spin_duration_ms() -> u32 {
    SPIN_DURATION_MS
}

/// Player settings that persist across games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default)]
    pub city: CityId,
    #[serde(default = "default_spin_duration_ms")]
    pub spin_duration_ms: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            city: CityId::default(),
            spin_duration_ms: SPIN_DURATION_MS,
        }
    }
}

impl GameSettings {
    /// Parse settings saved by [`GameSettings::to_json`]
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse settings: {e}"))
    }

    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize settings: {e}"))
    }

    #[must_use]
    pub fn with_city(self, city: CityId) -> Self {
        Self { city, ..self }
    }
}
