/// Delay between a spin and the reveal of its outcome, in milliseconds
pub const SPIN_DURATION_MS: u32 = 3000;

/// Full wheel turns added on top of the landing offset (inclusive range)
pub const MIN_FULL_ROTATIONS: u32 = 3;
pub const MAX_FULL_ROTATIONS: u32 = 5;

/// Color used when a line id has no matching line record
pub const DEFAULT_LINE_COLOR: &str = "#ffffff";

/// Text color used when a line record does not specify one
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Label shown for a terminus whose station record is missing
pub const UNKNOWN_TERMINUS: &str = "Terminus";

/// Root path of the per-city data tables, relative to the site origin
pub const DATA_ROOT: &str = "/data";

/// `localStorage` key holding the serialized game settings
pub const SETTINGS_STORAGE_KEY: &str = "metro_roulette_settings";
