use paneshop_types::{Product, ProductId};

/// Outcome of a selection mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Changed,
    Unchanged,
}

impl Change {
    pub fn is_changed(self) -> bool {
        matches!(self, Change::Changed)
    }
}

/// At most one selected product.
///
/// Callers are trusted to pass catalog products; no membership check is
/// done here. Every effective change bumps `revision` so observers know
/// to re-evaluate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<Product>,
    revision: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Product> {
        self.current.as_ref()
    }

    pub fn selected_id(&self) -> Option<ProductId> {
        self.current.as_ref().map(|p| p.id)
    }

    pub fn is_selected(&self, id: ProductId) -> bool {
        self.selected_id() == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn select(&mut self, product: Product) -> Change {
        if self
            .current
            .as_ref()
            .is_some_and(|current| current.same_as(&product))
        {
            return Change::Unchanged;
        }

        tracing::debug!(product = %product.id, name = %product.name, "select");
        self.current = Some(product);
        self.revision += 1;
        Change::Changed
    }

    pub fn clear(&mut self) -> Change {
        match self.current.take() {
            Some(previous) => {
                tracing::debug!(product = %previous.id, "clear selection");
                self.revision += 1;
                Change::Changed
            }
            None => Change::Unchanged,
        }
    }
}
