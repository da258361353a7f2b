// public modules
pub mod app;
pub mod appdirs;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod paging;
pub mod render;
pub mod search;
pub mod settings;
pub mod state;
pub mod theme;
pub mod themecfg;
pub mod wordlist;
pub mod xerr;

// private modules
mod console;
mod eseq;

// public uses
pub use app::{App, AppInfo, Options};
pub use error::{Error, Result};
pub use paging::{PAGE_SIZE, SINGLE_PAGE_LIMIT};
pub use search::SearchMode;
pub use settings::Settings;
pub use theme::Theme;
pub use wordlist::Wordlist;

// public uses (platform-specific)
pub use console::enable_ansi_support;
