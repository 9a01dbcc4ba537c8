//! Product List View Component
//!
//! Renders one row per catalog product. The selected product is drawn in
//! the accent colour; the keyboard cursor is drawn with a `>` marker.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use paneshop_core::ListViewModel;

use super::Theme;

pub const LIST_TITLE: &str = " Products ";
pub const CURSOR_SYMBOL: &str = "> ";

pub struct ProductListView<'a> {
    model: &'a ListViewModel,
    theme: Theme,
}

impl<'a> ProductListView<'a> {
    pub fn new(model: &'a ListViewModel, theme: Theme) -> Self {
        Self { model, theme }
    }

    fn block() -> Block<'static> {
        Block::default().title(LIST_TITLE).borders(Borders::ALL)
    }

    /// Area the rows are drawn into, used for mouse hit-testing
    pub fn rows_area(area: Rect) -> Rect {
        Self::block().inner(area)
    }

    /// Build a List widget for stateful rendering with the cursor state
    pub fn build_list(self) -> List<'a> {
        let selected_style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);

        let items: Vec<ListItem<'a>> = self
            .model
            .rows
            .iter()
            .map(|row| {
                let style = if row.selected {
                    selected_style
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(row.name.as_str(), style)))
            })
            .collect();

        List::new(items)
            .block(Self::block())
            .highlight_symbol(CURSOR_SYMBOL)
    }
}
