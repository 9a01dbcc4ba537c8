use crate::navigation::NavigationController;
use crate::presentation::Presentation;
use crate::saved_state::SavedState;
use crate::selection::SelectionState;
use crate::view_models::{DetailViewModel, ListViewModel, ScreenViewModel};
use crate::{Error, Result};
use paneshop_types::{Catalog, Orientation, ProductId};
use std::sync::Arc;

/// User or host input handled by [`ShoppingSession::dispatch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// A list row was activated
    Select(ProductId),
    /// The detail pane's back control was activated
    Back,
    /// Configuration change: the host reported a new orientation
    Orient(Orientation),
}

/// One browsing session: injected catalog, selection, and the latest
/// orientation signal.
#[derive(Debug, Clone)]
pub struct ShoppingSession {
    catalog: Arc<Catalog>,
    selection: SelectionState,
    orientation: Orientation,
}

impl ShoppingSession {
    pub fn new(catalog: Arc<Catalog>, orientation: Orientation) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(),
            orientation,
        }
    }

    /// Start from a previously saved selection.
    ///
    /// Ids that are no longer in the catalog are discarded.
    pub fn restore(catalog: Arc<Catalog>, orientation: Orientation, saved: SavedState) -> Self {
        let mut session = Self::new(catalog, orientation);
        let saved = saved.validated(&session.catalog);
        if let Some(product) = saved.selected.and_then(|id| session.catalog.get(id)) {
            tracing::info!(product = %product.id, "restored selection");
            session.selection.select(product.clone());
        }
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::select(self.orientation, &self.selection)
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<Presentation> {
        match intent {
            Intent::Select(id) => {
                let product = self
                    .catalog
                    .get(id)
                    .cloned()
                    .ok_or_else(|| Error::unknown_product(id))?;

                match self.presentation() {
                    Presentation::Split => {
                        self.selection.select(product);
                    }
                    Presentation::Navigated { .. } => {
                        NavigationController::open(&mut self.selection, product);
                    }
                }
            }
            Intent::Back => match self.presentation() {
                Presentation::Split => {
                    self.selection.clear();
                }
                Presentation::Navigated { .. } => {
                    NavigationController::back(&mut self.selection);
                }
            },
            Intent::Orient(orientation) => {
                if orientation != self.orientation {
                    tracing::info!(from = %self.orientation, to = %orientation, "orientation changed");
                    self.orientation = orientation;
                }
            }
        }

        Ok(self.presentation())
    }

    pub fn screen(&self) -> ScreenViewModel {
        ScreenViewModel::build(self.presentation(), &self.catalog, &self.selection)
    }

    pub fn list(&self) -> ListViewModel {
        ListViewModel::build(&self.catalog, &self.selection)
    }

    pub fn detail(&self) -> DetailViewModel {
        DetailViewModel::build(self.selection.current())
    }

    pub fn saved_state(&self) -> SavedState {
        SavedState {
            selected: self.selection.selected_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Screen;
    use paneshop_types::{BuiltinCatalog, CatalogSource};

    fn session(orientation: Orientation) -> ShoppingSession {
        ShoppingSession::new(Arc::new(BuiltinCatalog.load()), orientation)
    }

    #[test]
    fn test_select_unknown_id_is_error() {
        let mut session = session(Orientation::Landscape);

        let err = session.dispatch(Intent::Select(ProductId::new(9))).unwrap_err();

        assert!(matches!(err, Error::Catalog(_)));
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_split_back_clears_selection() {
        let mut session = session(Orientation::Landscape);
        session.dispatch(Intent::Select(ProductId::new(1))).unwrap();

        let presentation = session.dispatch(Intent::Back).unwrap();

        assert_eq!(presentation, Presentation::Split);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_rotation_keeps_selection() {
        let mut session = session(Orientation::Landscape);
        session.dispatch(Intent::Select(ProductId::new(3))).unwrap();

        let presentation = session
            .dispatch(Intent::Orient(Orientation::Portrait))
            .unwrap();
        assert_eq!(
            presentation.screen(),
            Some(Screen::Detail(ProductId::new(3)))
        );

        let presentation = session
            .dispatch(Intent::Orient(Orientation::Landscape))
            .unwrap();
        assert_eq!(presentation, Presentation::Split);
        assert_eq!(session.selection().selected_id(), Some(ProductId::new(3)));
    }

    #[test]
    fn test_restore_selects_saved_product() {
        let saved = SavedState {
            selected: Some(ProductId::new(2)),
        };
        let session = ShoppingSession::restore(
            Arc::new(BuiltinCatalog.load()),
            Orientation::Portrait,
            saved,
        );

        assert_eq!(
            session.presentation().screen(),
            Some(Screen::Detail(ProductId::new(2)))
        );
        assert_eq!(session.saved_state(), saved);
    }

    #[test]
    fn test_restore_ignores_foreign_product() {
        let session = ShoppingSession::restore(
            Arc::new(BuiltinCatalog.load()),
            Orientation::Portrait,
            SavedState {
                selected: Some(ProductId::new(77)),
            },
        );

        assert_eq!(session.presentation().screen(), Some(Screen::List));
    }
}
