use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityId {
    #[default]
    Paris,
    London,
    Singapore,
}

impl CityId {
    pub const ALL: [CityId; 3] = [CityId::Paris, CityId::London, CityId::Singapore];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CityId::Paris => "paris",
            CityId::London => "london",
            CityId::Singapore => "singapore",
        }
    }

    #[must_use]
    pub fn config(self) -> &'static CityConfig {
        match self {
            CityId::Paris => &PARIS,
            CityId::London => &LONDON,
            CityId::Singapore => &SINGAPORE,
        }
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CityId::ALL
            .into_iter()
            .find(|city| city.as_str() == s)
            .ok_or_else(|| format!("No data available for city: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    French,
    English,
}

impl Language {
    /// BCP 47 tag for the document `lang` attribute
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
        }
    }
}

/// Localized UI strings of a city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityText {
    pub select_station: &'static str,
    pub select_line: &'static str,
    pub select_direction: &'static str,
    pub spin_roulette: &'static str,
    pub confirm_exit: &'static str,
    pub exit_confirmed: &'static str,
    pub stay_in_metro: &'static str,
    pub advance_to: &'static str,
    pub relaunch: &'static str,
    pub end_of_line: &'static str,
    pub change_line: &'static str,
    pub no_change: &'static str,
    pub explore_nearby: &'static str,
    pub no_places: &'static str,
    pub forward: &'static str,
    pub backward: &'static str,
    pub validate_exit: &'static str,
    pub keep_travelling: &'static str,
    pub new_game: &'static str,
    pub stations_travelled: &'static str,
    pub line_changes: &'static str,
    pub search_station: &'static str,
}

/// Static configuration of a playable city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityConfig {
    pub id: CityId,
    pub name: &'static str,
    pub country: &'static str,
    pub flag: &'static str,
    pub system_name: &'static str,
    pub language: Language,
    pub text: CityText,
    /// Icon for each place category; unknown categories use [`FALLBACK_PLACE_ICON`]
    pub place_types: &'static [(&'static str, &'static str)],
}

pub const FALLBACK_PLACE_ICON: &str = "📌";

impl CityConfig {
    #[must_use]
    pub fn place_icon(&self, category: &str) -> &'static str {
        self.place_types
            .iter()
            .find(|(name, _)| *name == category)
            .map_or(FALLBACK_PLACE_ICON, |(_, icon)| icon)
    }
}

const ENGLISH_TEXT: CityText = CityText {
    select_station: "Select a starting station",
    select_line: "Choose a line",
    select_direction: "Choose a direction",
    spin_roulette: "Spin the roulette!",
    confirm_exit: "Exit! Do you confirm this destination?",
    exit_confirmed: "You exit at",
    stay_in_metro: "You stay on board! Spin again!",
    advance_to: "You advance to",
    relaunch: "Spin the roulette!",
    end_of_line: "End of the line! You turn around.",
    change_line: "Change! You take the",
    no_change: "No other line here.",
    explore_nearby: "Explore around",
    no_places: "No recommendations for this station yet.",
    forward: "Direction 1",
    backward: "Direction 2",
    validate_exit: "✓ Confirm exit",
    keep_travelling: "→ Keep travelling",
    new_game: "🔄 New game",
    stations_travelled: "stations travelled",
    line_changes: "line changes",
    search_station: "Search a station...",
};

static PARIS: CityConfig = CityConfig {
    id: CityId::Paris,
    name: "Paris",
    country: "France",
    flag: "🇫🇷",
    system_name: "Métro",
    language: Language::French,
    text: CityText {
        select_station: "Sélectionnez une station de départ",
        select_line: "Choisissez une ligne",
        select_direction: "Choisissez une direction",
        spin_roulette: "Faites tourner la roulette !",
        confirm_exit: "Sortie ! Validez-vous cette destination ?",
        exit_confirmed: "Vous sortez à",
        stay_in_metro: "Vous restez dans le métro ! Relancez la roulette !",
        advance_to: "Vous avancez à",
        relaunch: "Relancez la roulette !",
        end_of_line: "Fin de ligne ! Vous faites demi-tour.",
        change_line: "Changement ! Vous prenez la",
        no_change: "Aucune autre ligne ici.",
        explore_nearby: "Explorez les alentours de",
        no_places: "Pas encore de recommandations pour cette station.",
        forward: "Direction 1",
        backward: "Direction 2",
        validate_exit: "✓ Valider la sortie",
        keep_travelling: "→ Continuer le voyage",
        new_game: "🔄 Nouvelle partie",
        stations_travelled: "stations parcourues",
        line_changes: "changements",
        search_station: "Rechercher une station...",
    },
    place_types: &[
        ("restaurant", "🍽️"),
        ("monument", "🏛️"),
        ("musée", "🎨"),
        ("parc", "🌳"),
        ("shopping", "🛍️"),
        ("café", "☕"),
        ("bar", "🍸"),
        ("autre", "📌"),
    ],
};

static LONDON: CityConfig = CityConfig {
    id: CityId::London,
    name: "London",
    country: "United Kingdom",
    flag: "🇬🇧",
    system_name: "Tube",
    language: Language::English,
    text: CityText {
        stay_in_metro: "You stay on the tube! Spin again!",
        ..ENGLISH_TEXT
    },
    place_types: &[
        ("restaurant", "🍽️"),
        ("monument", "🏛️"),
        ("museum", "🎨"),
        ("park", "🌳"),
        ("shopping", "🛍️"),
        ("café", "☕"),
        ("pub", "🍺"),
        ("other", "📌"),
    ],
};

static SINGAPORE: CityConfig = CityConfig {
    id: CityId::Singapore,
    name: "Singapore",
    country: "Singapore",
    flag: "🇸🇬",
    system_name: "MRT",
    language: Language::English,
    text: CityText {
        stay_in_metro: "You stay on the MRT! Spin again!",
        ..ENGLISH_TEXT
    },
    place_types: &[
        ("restaurant", "🍽️"),
        ("monument", "🏛️"),
        ("museum", "🎨"),
        ("park", "🌳"),
        ("shopping", "🛍️"),
        ("café", "☕"),
        ("hawker", "🍜"),
        ("other", "📌"),
    ],
};
