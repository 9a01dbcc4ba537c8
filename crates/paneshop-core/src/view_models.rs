//! Render-ready data for the list and detail panes.
//!
//! These are plain values computed from the catalog and selection. Widgets
//! map them to terminal cells without making decisions of their own.

use crate::navigation::Screen;
use crate::presentation::Presentation;
use crate::selection::SelectionState;
use paneshop_types::{Catalog, Product, ProductId};
use serde::Serialize;

pub const PLACEHOLDER_MESSAGE: &str = "Select a product to view details.";
pub const BACK_LABEL: &str = "Back";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRowViewModel {
    pub id: ProductId,
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListViewModel {
    pub rows: Vec<ListRowViewModel>,
}

impl ListViewModel {
    /// One row per product in catalog order; highlight matches by id
    pub fn build(catalog: &Catalog, selection: &SelectionState) -> Self {
        let rows = catalog
            .iter()
            .map(|product| ListRowViewModel {
                id: product.id,
                name: product.name.clone(),
                selected: selection.is_selected(product.id),
            })
            .collect();
        Self { rows }
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.selected)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DetailViewModel {
    Product {
        id: ProductId,
        title: String,
        price: String,
        description: String,
        back_label: String,
    },
    Placeholder {
        message: String,
    },
}

impl DetailViewModel {
    /// Total over the optional product: `None` renders the placeholder
    pub fn build(product: Option<&Product>) -> Self {
        match product {
            Some(product) => DetailViewModel::Product {
                id: product.id,
                title: product.name.clone(),
                price: product.price_label(),
                description: product.description.clone(),
                back_label: BACK_LABEL.to_string(),
            },
            None => DetailViewModel::Placeholder {
                message: PLACEHOLDER_MESSAGE.to_string(),
            },
        }
    }

    pub fn has_back_control(&self) -> bool {
        matches!(self, DetailViewModel::Product { .. })
    }

    /// Text lines in display order, without the back control
    pub fn text_lines(&self) -> Vec<&str> {
        match self {
            DetailViewModel::Product {
                title,
                price,
                description,
                ..
            } => vec![title.as_str(), price.as_str(), description.as_str()],
            DetailViewModel::Placeholder { message } => vec![message.as_str()],
        }
    }
}

/// Everything that should be on screen for one presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum ScreenViewModel {
    Split {
        list: ListViewModel,
        detail: DetailViewModel,
    },
    List {
        list: ListViewModel,
    },
    Detail {
        detail: DetailViewModel,
    },
}

impl ScreenViewModel {
    pub fn build(
        presentation: Presentation,
        catalog: &Catalog,
        selection: &SelectionState,
    ) -> Self {
        match presentation {
            Presentation::Split => ScreenViewModel::Split {
                list: ListViewModel::build(catalog, selection),
                detail: DetailViewModel::build(selection.current()),
            },
            Presentation::Navigated {
                screen: Screen::List,
            } => ScreenViewModel::List {
                list: ListViewModel::build(catalog, selection),
            },
            Presentation::Navigated {
                screen: Screen::Detail(_),
            } => ScreenViewModel::Detail {
                detail: DetailViewModel::build(selection.current()),
            },
        }
    }

    pub fn list(&self) -> Option<&ListViewModel> {
        match self {
            ScreenViewModel::Split { list, .. } | ScreenViewModel::List { list } => Some(list),
            ScreenViewModel::Detail { .. } => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailViewModel> {
        match self {
            ScreenViewModel::Split { detail, .. } | ScreenViewModel::Detail { detail } => {
                Some(detail)
            }
            ScreenViewModel::List { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paneshop_types::{BuiltinCatalog, CatalogSource, ProductEntry};

    #[test]
    fn test_list_rows_follow_catalog_order_unhighlighted() {
        let catalog = BuiltinCatalog.load();
        let list = ListViewModel::build(&catalog, &SelectionState::new());

        let names: Vec<&str> = list.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Whole Milk", "Fat Free Lactaid", "Fat Free Fairlife"]);
        assert!(list.rows.iter().all(|r| !r.selected));
        assert_eq!(list.selected_row(), None);
    }

    #[test]
    fn test_duplicate_entries_highlight_only_selected_id() {
        let entry = ProductEntry::new("Whole Milk", "$5", "This milk is decent.");
        let catalog = Catalog::from_entries([entry.clone(), entry]);
        let mut selection = SelectionState::new();
        selection.select(catalog.products()[1].clone());

        let list = ListViewModel::build(&catalog, &selection);

        let flags: Vec<bool> = list.rows.iter().map(|r| r.selected).collect();
        assert_eq!(flags, [false, true]);
    }

    #[test]
    fn test_detail_for_product() {
        let catalog = BuiltinCatalog.load();
        let detail = DetailViewModel::build(catalog.get(ProductId::new(2)));

        assert_eq!(
            detail.text_lines(),
            ["Fat Free Lactaid", "Price: $5.50", "This milk is the best."]
        );
        assert!(detail.has_back_control());
    }

    #[test]
    fn test_detail_placeholder_has_no_controls() {
        let detail = DetailViewModel::build(None);

        assert_eq!(detail.text_lines(), [PLACEHOLDER_MESSAGE]);
        assert!(!detail.has_back_control());
    }

    #[test]
    fn test_screen_for_each_presentation() {
        let catalog = BuiltinCatalog.load();
        let mut selection = SelectionState::new();

        let split = ScreenViewModel::build(Presentation::Split, &catalog, &selection);
        assert!(split.list().is_some());
        assert!(split.detail().is_some());

        let list = ScreenViewModel::build(
            Presentation::Navigated {
                screen: Screen::List,
            },
            &catalog,
            &selection,
        );
        assert!(list.list().is_some());
        assert!(list.detail().is_none());

        selection.select(catalog.products()[0].clone());
        let detail = ScreenViewModel::build(
            Presentation::Navigated {
                screen: Screen::Detail(ProductId::new(1)),
            },
            &catalog,
            &selection,
        );
        assert!(detail.list().is_none());
        assert_eq!(
            detail.detail().map(|d| d.text_lines()[0]),
            Some("Whole Milk")
        );
    }
}
