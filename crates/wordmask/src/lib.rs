// private modules
mod pattern;
mod utf8;

// public uses
pub use pattern::{Pattern, has_wildcards};
