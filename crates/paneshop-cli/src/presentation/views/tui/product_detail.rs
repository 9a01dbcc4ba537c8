//! Product Detail View Component
//!
//! Renders the selected product's name, price and description with a
//! `[ Back ]` control, or the placeholder prompt when nothing is selected.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use paneshop_core::DetailViewModel;

use super::{Theme, wrap_words};

pub const DETAIL_TITLE: &str = " Details ";

pub struct ProductDetailView<'a> {
    model: &'a DetailViewModel,
    theme: Theme,
}

impl<'a> ProductDetailView<'a> {
    pub fn new(model: &'a DetailViewModel, theme: Theme) -> Self {
        Self { model, theme }
    }

    fn block() -> Block<'static> {
        Block::default().title(DETAIL_TITLE).borders(Borders::ALL)
    }

    fn content_area(area: Rect) -> Rect {
        Self::block().inner(area).inner(Margin {
            horizontal: 1,
            vertical: 1,
        })
    }

    fn button_text(back_label: &str) -> String {
        format!("[ {} ]", back_label)
    }

    /// Product layout: title, gap, price, gap, wrapped description, gap, button
    fn product_lines(
        &self,
        title: &str,
        price: &str,
        description: &str,
        back_label: &str,
        width: u16,
    ) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(price.to_string()),
            Line::default(),
        ];
        lines.extend(wrap_words(description, width).into_iter().map(Line::from));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            Self::button_text(back_label),
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines
    }

    /// Screen cells of the back control, if the model has one and it fits
    pub fn back_button_area(&self, area: Rect) -> Option<Rect> {
        let DetailViewModel::Product {
            description,
            back_label,
            ..
        } = self.model
        else {
            return None;
        };

        let content = Self::content_area(area);
        let description_height = wrap_words(description, content.width).len() as u16;
        let row = 4 + description_height + 1;
        if row >= content.height {
            return None;
        }

        let width = (Self::button_text(back_label).chars().count() as u16).min(content.width);
        Some(Rect::new(content.x, content.y + row, width, 1))
    }
}

impl<'a> Widget for ProductDetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Self::block().render(area, buf);
        let content = Self::content_area(area);
        if content.is_empty() {
            return;
        }

        match self.model {
            DetailViewModel::Product {
                title,
                price,
                description,
                back_label,
                ..
            } => {
                let lines = self.product_lines(title, price, description, back_label, content.width);
                Paragraph::new(lines).render(content, buf);
            }
            DetailViewModel::Placeholder { message } => {
                let lines: Vec<Line> = wrap_words(message, content.width)
                    .into_iter()
                    .map(Line::from)
                    .collect();
                let height = (lines.len() as u16).min(content.height);
                let top = content.y + (content.height - height) / 2;
                let centered = Rect::new(content.x, top, content.width, height);

                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(centered, buf);
            }
        }
    }
}
