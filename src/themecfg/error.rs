// std imports
use std::{io, path::Path, str, sync::Arc};

// third-party imports
use thiserror::Error;

// local imports
use crate::xerr::{HighlightQuoted, Suggestions};

/// Error returned by theme operations.
///
/// Variants carry the theme name involved, and `ThemeNotFound` additionally
/// carries suggestions for similar known names so the caller can offer a
/// correction.
#[derive(Error, Debug)]
pub enum Error {
    /// Theme file not found, neither custom nor embedded.
    #[error("theme {name} not found", name=.name.hlq())]
    ThemeNotFound { name: Arc<str>, suggestions: Suggestions },

    /// Failed to load a theme built into the binary.
    #[error("failed to load theme {name}: {source}", name=.name.hlq())]
    FailedToLoadEmbeddedTheme { name: Arc<str>, source: ExternalError },

    /// Failed to load a theme file from the custom themes directory.
    #[error("failed to load theme {name} from {path}: {source}", name=.name.hlq(), path=.path.hlq())]
    FailedToLoadCustomTheme {
        name: Arc<str>,
        path: Arc<Path>,
        source: ExternalError,
    },

    /// Failed to list the custom themes directory.
    #[error("failed to list custom themes: {0}")]
    FailedToListCustomThemes(#[from] io::Error),
}

/// External errors from I/O and parsing operations.
#[derive(Error, Debug)]
pub enum ExternalError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("failed to parse yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse utf-8 string: {0}")]
    Utf8(#[from] str::Utf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
