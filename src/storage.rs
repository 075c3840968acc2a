use crate::constants::SETTINGS_STORAGE_KEY;
use crate::models::GameSettings;

fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or("No window")?;
    window
        .local_storage()
        .map_err(|_| "localStorage not supported")?
        .ok_or_else(|| "localStorage not available".to_string())
}

/// Load settings from `localStorage`
///
/// Returns the defaults when nothing has been saved yet.
///
/// # Errors
///
/// Returns an error if storage is unavailable or the saved settings are corrupt
pub fn load_settings() -> Result<GameSettings, String> {
    let storage = local_storage()?;
    let saved = storage
        .get_item(SETTINGS_STORAGE_KEY)
        .map_err(|_| "Failed to read settings")?;

    match saved {
        Some(json) => GameSettings::from_json(&json),
        None => Ok(GameSettings::default()),
    }
}

/// Save settings to `localStorage`
///
/// # Errors
///
/// Returns an error if storage is unavailable or the write is rejected
pub fn save_settings(settings: &GameSettings) -> Result<(), String> {
    let storage = local_storage()?;
    let json = settings.to_json()?;
    storage
        .set_item(SETTINGS_STORAGE_KEY, &json)
        .map_err(|_| "Failed to save settings".to_string())
}
