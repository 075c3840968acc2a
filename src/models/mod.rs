mod city;
mod game_settings;
mod journey;
mod line;
mod place;
mod station;

pub use city::{CityConfig, CityId, CityText, Language, FALLBACK_PLACE_ICON};
pub use game_settings::GameSettings;
pub use journey::{Direction, GameMessage, GameState, HistoryEntry, JourneyAction};
pub use line::{base_line_id, LineInfo};
pub use place::Place;
pub use station::{RawStation, Station, StationsData};
