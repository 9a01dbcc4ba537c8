use serde::Serialize;
use std::fmt;

use paneshop_core::{Presentation, Screen, Strategy};
use paneshop_types::{Orientation, ProductId};

/// Headless answer to "what would the browser show at this size"
#[derive(Debug, Serialize)]
pub struct LayoutViewModel {
    pub width: u16,
    pub height: u16,
    pub orientation: Orientation,
    pub strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<Screen>,
    pub panes: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<ProductId>,
}

impl LayoutViewModel {
    pub fn new(
        width: u16,
        height: u16,
        orientation: Orientation,
        presentation: Presentation,
        selected: Option<ProductId>,
    ) -> Self {
        let mut panes = Vec::new();
        if presentation.mounts_list() {
            panes.push("list");
        }
        if presentation.mounts_detail() {
            panes.push("detail");
        }

        Self {
            width,
            height,
            orientation,
            strategy: presentation.strategy(),
            screen: presentation.screen(),
            panes,
            selected,
        }
    }
}

impl fmt::Display for LayoutViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Terminal:    {}x{}", self.width, self.height)?;
        writeln!(f, "Orientation: {}", self.orientation)?;
        writeln!(f, "Strategy:    {}", self.strategy)?;
        if let Some(screen) = self.screen {
            writeln!(f, "Screen:      {}", screen.name())?;
        }
        writeln!(f, "Panes:       {}", self.panes.join(" | "))
    }
}
