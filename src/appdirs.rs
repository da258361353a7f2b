// std imports
use std::path::PathBuf;

/// Per-application directories resolved according to platform conventions.
#[derive(Debug, Clone)]
pub struct AppDirs {
    pub cache_dir: PathBuf,
    pub config_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl AppDirs {
    pub fn new(name: &str) -> Option<Self> {
        let cache_dir = sys::cache_dir()?.join(name);
        let config_dir = sys::config_dir()?.join(name);
        let state_dir = sys::state_dir()?.join(name);
        Some(Self {
            cache_dir,
            config_dir,
            state_dir,
        })
    }
}

#[cfg(target_os = "macos")]
mod sys {
    use super::*;
    use std::env;

    pub(crate) fn config_dir() -> Option<PathBuf> {
        env::var_os("XDG_CONFIG_HOME")
            .and_then(dirs_sys::is_absolute_path)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
    }

    pub(crate) fn cache_dir() -> Option<PathBuf> {
        env::var_os("XDG_CACHE_HOME")
            .and_then(dirs_sys::is_absolute_path)
            .or_else(|| dirs::home_dir().map(|h| h.join(".cache")))
    }

    pub(crate) fn state_dir() -> Option<PathBuf> {
        env::var_os("XDG_STATE_HOME")
            .and_then(dirs_sys::is_absolute_path)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("state")))
    }
}

#[cfg(not(target_os = "macos"))]
mod sys {
    use super::*;

    pub(crate) fn config_dir() -> Option<PathBuf> {
        dirs::config_dir()
    }

    pub(crate) fn cache_dir() -> Option<PathBuf> {
        dirs::cache_dir()
    }

    pub(crate) fn state_dir() -> Option<PathBuf> {
        // not defined on all platforms, fall back to the cache location
        dirs::state_dir().or_else(dirs::cache_dir)
    }
}
