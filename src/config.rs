// third-party imports
use once_cell::sync::{Lazy, OnceCell};

// local imports
use crate::appdirs::AppDirs;
use crate::settings::Settings;

// ---

pub const APP_NAME: &str = "wf";

static CONFIG: OnceCell<Settings> = OnceCell::new();
static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Stores the loaded settings as the global configuration.
///
/// Settings given to subsequent calls are discarded.
pub fn initialize(settings: Settings) {
    _ = CONFIG.set(settings);
}

/// Returns the global configuration, or the embedded defaults if
/// [`initialize`] has not been called.
pub fn get() -> &'static Settings {
    CONFIG.get().unwrap_or_else(|| default())
}

pub fn default() -> &'static Settings {
    &DEFAULT
}

pub fn app_dirs() -> Option<AppDirs> {
    AppDirs::new(APP_NAME)
}
