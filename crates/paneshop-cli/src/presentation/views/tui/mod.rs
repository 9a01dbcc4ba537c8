//! TUI View Components
//!
//! Ratatui widgets for the browser panes. Each view borrows a view model
//! from `paneshop-core` and only maps it to cells; selection and layout
//! decisions are made before a view is constructed.

pub mod product_detail;
pub mod product_list;
pub mod status_bar;

pub use product_detail::ProductDetailView;
pub use product_list::ProductListView;
pub use status_bar::StatusBarView;

use paneshop_core::ThemeConfig;
use ratatui::style::Color;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Colour of the selected list row and the back control
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self { accent: Color::Cyan }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        match Color::from_str(&config.accent) {
            Ok(accent) => Self { accent },
            Err(_) => {
                tracing::warn!(accent = %config.accent, "unknown accent colour, using cyan");
                Self::default()
            }
        }
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub(crate) fn wrap_words(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.len()
        } else {
            current.chars().count() + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
