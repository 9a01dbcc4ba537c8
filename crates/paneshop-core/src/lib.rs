//! State machine behind the paneshop browser.
//!
//! Everything here is a pure function of `(orientation, selection)` plus the
//! injected catalog, so it can be exercised without a terminal.

pub mod config;
pub mod error;
pub mod navigation;
pub mod presentation;
pub mod saved_state;
pub mod selection;
pub mod session;
pub mod view_models;

pub use config::{Config, LayoutConfig, ThemeConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use navigation::{NavigationController, Screen, Transition};
pub use presentation::{Presentation, Strategy};
pub use saved_state::{FileStateStore, MemoryStateStore, SavedState, StateStore};
pub use selection::{Change, SelectionState};
pub use session::{Intent, ShoppingSession};
pub use view_models::{
    BACK_LABEL, DetailViewModel, ListRowViewModel, ListViewModel, PLACEHOLDER_MESSAGE,
    ScreenViewModel,
};
