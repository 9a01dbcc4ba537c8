use crate::navigation::Screen;
use crate::selection::SelectionState;
use paneshop_types::Orientation;
use serde::Serialize;
use std::fmt;

/// Which render strategy is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// List and detail side by side, equal widths
    Split,
    /// One screen at a time, list or detail
    Navigated,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Split => write!(f, "split"),
            Strategy::Navigated => write!(f, "navigated"),
        }
    }
}

/// Active presentation for one `(orientation, selection)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum Presentation {
    Split,
    Navigated { screen: Screen },
}

impl Presentation {
    /// Pure selector: landscape splits, anything else navigates
    pub fn select(orientation: Orientation, selection: &SelectionState) -> Self {
        if orientation.is_landscape() {
            Presentation::Split
        } else {
            Presentation::Navigated {
                screen: Screen::for_selection(selection),
            }
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Presentation::Split => Strategy::Split,
            Presentation::Navigated { .. } => Strategy::Navigated,
        }
    }

    pub fn screen(&self) -> Option<Screen> {
        match self {
            Presentation::Split => None,
            Presentation::Navigated { screen } => Some(*screen),
        }
    }

    pub fn mounts_list(&self) -> bool {
        matches!(
            self,
            Presentation::Split
                | Presentation::Navigated {
                    screen: Screen::List
                }
        )
    }

    pub fn mounts_detail(&self) -> bool {
        matches!(
            self,
            Presentation::Split
                | Presentation::Navigated {
                    screen: Screen::Detail(_)
                }
        )
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Presentation::Split => write!(f, "split"),
            Presentation::Navigated { screen } => write!(f, "navigated:{}", screen),
        }
    }
}
