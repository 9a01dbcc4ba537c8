//! Output layer.
//!
//! - `view_models`: serializable results of the non-interactive commands
//! - `renderers`: console output (plain or JSON) and the interactive TUI
//! - `views`: ratatui widgets for the TUI panes

pub mod renderers;
pub mod view_models;
pub mod views;
