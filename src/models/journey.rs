use serde::{Deserialize, Serialize};
use super::city::CityText;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    SelectStation,
    SelectLine,
    SelectDirection,
    Playing,
    ConfirmExit,
    Won,
}

impl GameState {
    /// States in which picking a (new) starting station is allowed
    #[must_use]
    pub fn allows_station_selection(self) -> bool {
        matches!(self, GameState::SelectStation | GameState::SelectLine | GameState::SelectDirection)
    }
}

/// Travel direction along a line's ordered station sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Towards the last station of the sequence (+1)
    #[default]
    Forward,
    /// Towards the first station of the sequence (-1)
    Backward,
}

impl Direction {
    #[must_use]
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyAction {
    Start,
    Move,
    Change,
    Reverse,
    Exit,
}

impl JourneyAction {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            JourneyAction::Start => "🚉",
            JourneyAction::Move => "●",
            JourneyAction::Change => "🔄",
            JourneyAction::Reverse => "↩️",
            JourneyAction::Exit => "🚪",
        }
    }
}

/// One step of the journey log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub station_id: String,
    pub action: JourneyAction,
    /// Line travelled to reach this entry (`move`) or newly boarded (`change`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(station_id: impl Into<String>, action: JourneyAction, line: Option<String>) -> Self {
        Self {
            station_id: station_id.into(),
            action,
            line,
        }
    }
}

/// Status line shown to the player, rendered in the city's language
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameMessage {
    #[default]
    SelectStation,
    SelectLine,
    SelectDirection,
    SpinRoulette,
    AdvancedTo { station_id: String, station_name: String },
    EndOfLine,
    ChangedLine { line_id: String, line_name: String },
    NoLineChange,
    ConfirmExit { station_id: String, station_name: String },
    ExitConfirmed { station_id: String, station_name: String },
    StayInMetro,
}

impl GameMessage {
    #[must_use]
    pub fn render(&self, text: &CityText) -> String {
        match self {
            GameMessage::SelectStation => text.select_station.to_string(),
            GameMessage::SelectLine => text.select_line.to_string(),
            GameMessage::SelectDirection => text.select_direction.to_string(),
            GameMessage::SpinRoulette => text.spin_roulette.to_string(),
            GameMessage::AdvancedTo { station_name, .. } => {
                format!("{} {station_name}. {}", text.advance_to, text.relaunch)
            }
            GameMessage::EndOfLine => format!("{} {}", text.end_of_line, text.relaunch),
            GameMessage::ChangedLine { line_name, .. } => {
                format!("{} {line_name}. {}", text.change_line, text.relaunch)
            }
            GameMessage::NoLineChange => format!("{} {}", text.no_change, text.relaunch),
            GameMessage::ConfirmExit { station_name, .. } => {
                format!("🚪 {} ({station_name})", text.confirm_exit)
            }
            GameMessage::ExitConfirmed { station_name, .. } => {
                format!("🎉 {} {station_name} !", text.exit_confirmed)
            }
            GameMessage::StayInMetro => text.stay_in_metro.to_string(),
        }
    }
}
