//! Two-screen navigation used when only one pane fits.
//!
//! The current screen is never stored. It is computed from the selection
//! on every call, so the stack can't show the detail screen while the
//! selection is empty (or the other way around).

use crate::selection::SelectionState;
use paneshop_types::{Product, ProductId};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "screen", content = "product", rename_all = "lowercase")]
pub enum Screen {
    List,
    Detail(ProductId),
}

impl Screen {
    pub fn for_selection(selection: &SelectionState) -> Self {
        match selection.selected_id() {
            Some(id) => Screen::Detail(id),
            None => Screen::List,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Screen::List => "list",
            Screen::Detail(_) => "detail",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::List => write!(f, "list"),
            Screen::Detail(id) => write!(f, "detail({})", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

impl Transition {
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// List/detail state machine. Holds no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationController;

impl NavigationController {
    /// Screen shown when the stack is (re)built
    pub fn start_screen(selection: &SelectionState) -> Screen {
        Screen::for_selection(selection)
    }

    /// `List -> Detail`: selects the product and shows its details.
    ///
    /// Only valid from the list screen; on the detail screen the list is
    /// not mounted, so the request is ignored.
    pub fn open(selection: &mut SelectionState, product: Product) -> Transition {
        let from = Screen::for_selection(selection);
        if from != Screen::List {
            tracing::debug!(%from, product = %product.id, "open ignored outside list screen");
            return Transition { from, to: from };
        }

        selection.select(product);
        let to = Screen::for_selection(selection);
        tracing::debug!(%from, %to, "navigate");
        Transition { from, to }
    }

    /// `Detail -> List`: clears the selection and pops the detail screen
    pub fn back(selection: &mut SelectionState) -> Transition {
        let from = Screen::for_selection(selection);
        selection.clear();
        let to = Screen::for_selection(selection);
        if from != to {
            tracing::debug!(%from, %to, "navigate back");
        }
        Transition { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paneshop_types::{BuiltinCatalog, CatalogSource};

    fn milk(id: u32) -> Product {
        BuiltinCatalog
            .load()
            .get(ProductId::new(id))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_start_screen_follows_selection() {
        let mut selection = SelectionState::new();
        assert_eq!(NavigationController::start_screen(&selection), Screen::List);

        selection.select(milk(1));
        assert_eq!(
            NavigationController::start_screen(&selection),
            Screen::Detail(ProductId::new(1))
        );
    }

    #[test]
    fn test_open_moves_to_detail_and_selects() {
        let mut selection = SelectionState::new();

        let transition = NavigationController::open(&mut selection, milk(2));

        assert_eq!(transition.from, Screen::List);
        assert_eq!(transition.to, Screen::Detail(ProductId::new(2)));
        assert_eq!(selection.selected_id(), Some(ProductId::new(2)));
    }

    #[test]
    fn test_back_moves_to_list_and_clears() {
        let mut selection = SelectionState::new();
        NavigationController::open(&mut selection, milk(2));

        let transition = NavigationController::back(&mut selection);

        assert_eq!(transition.from, Screen::Detail(ProductId::new(2)));
        assert_eq!(transition.to, Screen::List);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_back_on_list_is_noop() {
        let mut selection = SelectionState::new();
        let transition = NavigationController::back(&mut selection);
        assert!(!transition.moved());
        assert_eq!(selection.revision(), 0);
    }

    #[test]
    fn test_open_on_detail_is_ignored() {
        let mut selection = SelectionState::new();
        NavigationController::open(&mut selection, milk(1));

        let transition = NavigationController::open(&mut selection, milk(3));

        assert!(!transition.moved());
        assert_eq!(selection.selected_id(), Some(ProductId::new(1)));
    }

    #[test]
    fn test_screen_serializes_with_tag() {
        let json = serde_json::to_value(Screen::Detail(ProductId::new(2))).unwrap();
        assert_eq!(json["screen"], "detail");
        assert_eq!(json["product"], 2);
    }
}
