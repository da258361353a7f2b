// std imports
use std::{num::NonZeroUsize, path::PathBuf};

// third-party imports
use clap::{Parser, ValueEnum};

// ---

/// Wildcard word search over plain text word lists.
#[derive(Parser)]
#[clap(version)]
pub struct Opt {
    /// Word pattern to search for, enters interactive mode when omitted.
    #[arg(name = "PATTERN")]
    pub pattern: Option<String>,

    /// Match words containing the pattern instead of whole-word matching.
    #[arg(short, long, env = "WF_CONTAINS", overrides_with = "contains")]
    pub contains: bool,

    /// Word list file, '-' for stdin.
    #[arg(short, long, env = "WF_WORDLIST", overrides_with = "wordlist")]
    pub wordlist: Option<PathBuf>,

    /// Color theme.
    #[arg(long, env = "WF_THEME", overrides_with = "theme")]
    pub theme: Option<String>,

    /// Color output options.
    #[arg(long, default_value = "auto", env = "WF_COLOR", overrides_with = "color")]
    #[arg(value_enum)]
    pub color: ColorOption,

    /// Page of results to show.
    #[arg(long, overrides_with = "page")]
    pub page: Option<NonZeroUsize>,

    /// Show all results at once, overrides --page option.
    #[arg(short, long, overrides_with = "all")]
    pub all: bool,

    /// List available themes and exit.
    #[arg(long)]
    pub list_themes: bool,
}

// ---

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}

// ---
