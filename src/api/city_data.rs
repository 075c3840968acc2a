use std::rc::Rc;
use crate::constants::DATA_ROOT;
use crate::models::{CityId, LineInfo, StationsData};
use crate::network::MetroNetwork;
use crate::recommendations::StationRecommendations;

/// Everything loaded for one city
#[derive(Debug, Clone)]
pub struct CityData {
    pub city: CityId,
    pub network: Rc<MetroNetwork>,
    pub recommendations: Rc<StationRecommendations>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Ticket identifying one city load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Orders overlapping city loads so only the most recent request is applied
///
/// Earlier requests are not cancelled; their results are dropped on arrival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadGenerations {
    latest: u64,
}

impl LoadGenerations {
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Build a city's network from its JSON tables
///
/// A missing or malformed recommendations table degrades to an empty one.
///
/// # Errors
///
/// Returns an error if the station or line table cannot be parsed
pub fn parse_city_data(
    city: CityId,
    stations_json: &str,
    lines_json: &str,
    recommendations_json: Option<&str>,
) -> Result<CityData, String> {
    let stations: StationsData = serde_json::from_str(stations_json)
        .map_err(|e| format!("Failed to parse {city} stations: {e}"))?;
    let lines: Vec<LineInfo> = serde_json::from_str(lines_json)
        .map_err(|e| format!("Failed to parse {city} lines: {e}"))?;

    let recommendations = match recommendations_json.map(StationRecommendations::from_json) {
        Some(Ok(recommendations)) => recommendations,
        Some(Err(e)) => {
            leptos::logging::warn!("{city}: {e}");
            StationRecommendations::default()
        }
        None => StationRecommendations::default(),
    };

    Ok(CityData {
        city,
        network: Rc::new(MetroNetwork::new(stations, lines)),
        recommendations: Rc::new(recommendations),
    })
}

#[cfg(target_arch = "wasm32")]
fn site_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn site_origin() -> String {
    std::env::var("METRO_ROULETTE_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

fn data_url(origin: &str, city: CityId, file: &str) -> String {
    format!("{origin}{DATA_ROOT}/{city}/{file}")
}

async fn fetch_text(url: &str) -> Result<String, String> {
    reqwest::get(url)
        .await
        .map_err(|e| format!("Request failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("Bad response for {url}: {e}"))?
        .text()
        .await
        .map_err(|e| format!("Failed to read {url}: {e}"))
}

/// Download and parse a city's data tables
///
/// # Errors
///
/// Returns an error if:
/// - The station or line table cannot be downloaded
/// - Either table cannot be deserialized
pub async fn fetch_city_data(city: CityId) -> Result<CityData, String> {
    let origin = site_origin();
    let stations = fetch_text(&data_url(&origin, city, "stations.json")).await?;
    let lines = fetch_text(&data_url(&origin, city, "lines.json")).await?;
    let recommendations = match fetch_text(&data_url(&origin, city, "station_recommendations.json")).await {
        Ok(json) => Some(json),
        Err(e) => {
            leptos::logging::warn!("Recommendations for {city} unavailable: {e}");
            None
        }
    };

    let data = parse_city_data(city, &stations, &lines, recommendations.as_deref())?;
    log!(
        "Loaded {city}: {} stations, {} stations with recommendations",
        data.network.station_count(),
        data.recommendations.station_count()
    );
    Ok(data)
}
