//! Status Bar View Component
//!
//! Renders the active layout, the current selection and the key bindings
//! that apply to the mounted panes.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use paneshop_core::Presentation;

use super::Theme;

pub struct StatusBarView<'a> {
    presentation: Presentation,
    selected_name: Option<&'a str>,
    theme: Theme,
}

impl<'a> StatusBarView<'a> {
    pub fn new(presentation: Presentation, selected_name: Option<&'a str>, theme: Theme) -> Self {
        Self {
            presentation,
            selected_name,
            theme,
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("[q]", "uit ")];
        if self.presentation.mounts_list() {
            hints.push(("[j/k]", "move "));
            hints.push(("[enter]", "open "));
        }
        if self.selected_name.is_some() {
            hints.push(("[b]", "ack"));
        }
        hints
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        let selected = match self.selected_name {
            Some(name) => Span::styled(
                name,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("none", Style::default().add_modifier(Modifier::DIM)),
        };

        let status_line = Line::from(vec![
            Span::raw(format!("Layout: {} ", self.presentation)),
            Span::raw("| "),
            Span::raw("Selected: "),
            selected,
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let help: Vec<Span> = self
            .key_hints()
            .into_iter()
            .flat_map(|(key, rest)| {
                [
                    Span::styled(key, Style::default().fg(Color::Yellow)),
                    Span::raw(rest),
                ]
            })
            .collect();
        Paragraph::new(Line::from(help)).render(chunks[1], buf);
    }
}
