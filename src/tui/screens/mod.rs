//! TUI screen implementations.

pub mod configure;
pub mod help;

pub use configure::{ConfigureState, Focus, draw_configure};
pub use help::{HelpState, draw_help};
