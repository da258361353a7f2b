// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::appdirs::AppDirs;
use crate::error::Error;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

pub const ENV_CONFIG: &str = "WF_CONFIG";

// ---

/// Application settings loaded from the embedded defaults overlaid with the
/// optional user configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub wordlist: Option<PathBuf>,
    pub theme: String,
}

impl Settings {
    pub fn load(app_dirs: &AppDirs) -> Result<Self, Error> {
        let filename = std::env::var(ENV_CONFIG)
            .unwrap_or_else(|_| app_dirs.config_dir.join("config.yaml").to_string_lossy().to_string());

        Ok(Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .add_source(File::with_name(&filename).required(false))
            .build()?
            .try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}

// ---
