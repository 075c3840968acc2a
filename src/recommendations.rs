use std::collections::HashMap;
use crate::models::Place;

/// Looks up points of interest around an exit station
pub trait RecommendationSource {
    /// # Errors
    ///
    /// Returns an error if the lookup itself fails; an unknown station is not
    /// an error and yields an empty list.
    fn recommendations_for(&self, station_id: &str) -> Result<Vec<Place>, String>;
}

/// Recommendations read from a city's `station_recommendations.json`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationRecommendations {
    places: HashMap<String, Vec<Place>>,
}

impl StationRecommendations {
    #[must_use]
    pub fn new(places: HashMap<String, Vec<Place>>) -> Self {
        Self { places }
    }

    /// # Errors
    ///
    /// Returns an error if the JSON is not a map of station id to places
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|e| format!("Failed to parse recommendations: {e}"))
    }

    #[must_use]
    pub fn station_count(&self) -> usize {
        self.places.len()
    }
}

impl RecommendationSource for StationRecommendations {
    fn recommendations_for(&self, station_id: &str) -> Result<Vec<Place>, String> {
        Ok(self.places.get(station_id).cloned().unwrap_or_default())
    }
}
