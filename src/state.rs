// std imports
use std::{fs, path::PathBuf};

// third-party imports
use serde::{Deserialize, Serialize};

// local imports
use crate::{appdirs::AppDirs, error::Result};

// ---

pub const STATE_FILE: &str = "state.yaml";

// ---

/// UI state persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl State {
    /// Loads the persisted state, falling back to defaults.
    pub fn load(app_dirs: &AppDirs) -> Self {
        match Self::try_load(app_dirs) {
            Ok(state) => state,
            Err(e) => {
                log::debug!("no persisted state loaded: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, app_dirs: &AppDirs) -> Result<()> {
        let path = Self::path(app_dirs);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    fn try_load(app_dirs: &AppDirs) -> Result<Self> {
        let data = fs::read_to_string(Self::path(app_dirs))?;
        Ok(serde_yaml::from_str(&data)?)
    }

    fn path(app_dirs: &AppDirs) -> PathBuf {
        app_dirs.state_dir.join(STATE_FILE)
    }
}

// ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let state = State {
            theme: Some("dark".into()),
        };
        let text = serde_yaml::to_string(&state).unwrap();
        assert_eq!(text, "theme: dark\n");
        let back: State = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_load_missing() {
        let root = std::env::temp_dir().join(format!("wf-state-tests-{}", std::process::id()));
        let app_dirs = AppDirs {
            cache_dir: root.join("cache"),
            config_dir: root.join("config"),
            state_dir: root.join("state"),
        };
        assert_eq!(State::load(&app_dirs), State::default());
    }
}
