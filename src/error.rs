// std imports
use std::{
    borrow::Cow,
    fmt,
    io::{self, Write},
};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// local imports
use crate::themecfg;
use crate::xerr::{Highlight, HighlightQuoted};

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(Box<ConfigError>),
    #[error(transparent)]
    Theme(#[from] themecfg::Error),
    #[error("failed to parse yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to locate application directories")]
    AppDirs,
    #[error("page {page} is out of range, last page is {total}", page=.page.hl(), total=.total.hl())]
    PageOutOfRange { page: usize, total: usize },
    #[error("cannot read word list from stdin in interactive mode")]
    WordlistFromStdin,
}

impl Error {
    /// Logs the error to stderr along with a tip when one is known.
    pub fn log(&self, app: &impl AppInfoProvider) {
        let mut stderr = anstream::AutoStream::auto(io::stderr());
        _ = self.log_to(&mut stderr, app);
    }

    pub fn log_to(&self, target: &mut impl Write, app: &impl AppInfoProvider) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)?;
        write!(target, "{}", self.tips(app))
    }

    /// Returns displayable tips for the error, may render to nothing.
    pub fn tips<'a, A>(&'a self, app: &'a A) -> Tips<'a, A>
    where
        A: AppInfoProvider,
    {
        Tips { err: self, app }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

// ---

/// Provides application information for error reporting.
pub trait AppInfoProvider {
    fn app_name(&self) -> Cow<'static, str> {
        crate::config::APP_NAME.into()
    }

    fn usage_suggestion(&self, request: UsageRequest) -> Option<UsageResponse> {
        _ = request;
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageRequest {
    ListThemes,
}

pub type UsageResponse = (Cow<'static, str>, Cow<'static, str>);

/// Renders a highlighted usage line for the requested action if the
/// application suggests one.
pub fn usage(app: &impl AppInfoProvider, request: UsageRequest) -> Option<String> {
    let (command, args) = app.usage_suggestion(request)?;
    let command = format!("{} {}", app.app_name(), command);
    if args.is_empty() {
        Some(format!("{}", command.bold()))
    } else {
        Some(format!("{} {}", command.bold(), args))
    }
}

// ---

pub struct Tips<'a, A> {
    err: &'a Error,
    app: &'a A,
}

impl<A: AppInfoProvider> fmt::Display for Tips<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.err {
            Error::Theme(themecfg::Error::ThemeNotFound { suggestions, .. }) => {
                if !suggestions.is_empty() {
                    write!(f, "{} did you mean ", "  tip:".green().bold())?;
                    for (i, suggestion) in suggestions.iter().take(2).enumerate() {
                        if i > 0 {
                            write!(f, " or ")?;
                        }
                        write!(f, "{}", suggestion.hlq())?;
                    }
                    writeln!(f, "?")
                } else if let Some(usage) = usage(self.app, UsageRequest::ListThemes) {
                    writeln!(f, "{} run {} to list available themes", "  tip:".green().bold(), usage)
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
