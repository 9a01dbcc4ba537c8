use crate::Result;
use paneshop_types::{Catalog, ProductId};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Selection snapshot that outlives a single process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    #[serde(default)]
    pub selected: Option<ProductId>,
}

impl SavedState {
    /// Drop a selection that does not belong to `catalog`
    pub fn validated(self, catalog: &Catalog) -> Self {
        match self.selected {
            Some(id) if !catalog.contains(id) => {
                tracing::warn!(product = %id, "discarding saved selection not in catalog");
                SavedState { selected: None }
            }
            _ => self,
        }
    }
}

pub trait StateStore {
    fn load(&self) -> Result<SavedState>;
    fn save(&self, state: &SavedState) -> Result<()>;
}

/// Keeps the snapshot in memory; backs `browse --no-save` runs
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    state: RefCell<SavedState>,
}

impl MemoryStateStore {
    pub fn new(state: SavedState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Result<SavedState> {
        Ok(*self.state.borrow())
    }

    fn save(&self, state: &SavedState) -> Result<()> {
        *self.state.borrow_mut() = *state;
        Ok(())
    }
}

/// JSON file in the data directory
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub const FILE_NAME: &'static str = "state.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<SavedState> {
        if !self.path.exists() {
            return Ok(SavedState::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let state = serde_json::from_str(&content)?;
        Ok(state)
    }

    fn save(&self, state: &SavedState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), "saved state written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use paneshop_types::{BuiltinCatalog, CatalogSource};
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_file_is_empty() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStateStore::in_dir(temp_dir.path());

        assert_eq!(store.load()?, SavedState::default());
        Ok(())
    }

    #[test]
    fn test_file_store_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStateStore::in_dir(&temp_dir.path().join("data"));

        let state = SavedState {
            selected: Some(ProductId::new(2)),
        };
        store.save(&state)?;

        assert!(store.path().exists());
        assert_eq!(store.load()?, state);
        Ok(())
    }

    #[test]
    fn test_file_store_corrupt_file_is_state_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStateStore::in_dir(temp_dir.path());
        std::fs::write(store.path(), "{ not json")?;

        let err = store.load().unwrap_err();
        assert!(matches!(err, Error::State(_)));
        Ok(())
    }

    #[test]
    fn test_validated_drops_foreign_selection() {
        let catalog = BuiltinCatalog.load();

        let foreign = SavedState {
            selected: Some(ProductId::new(42)),
        };
        assert_eq!(foreign.validated(&catalog).selected, None);

        let known = SavedState {
            selected: Some(ProductId::new(3)),
        };
        assert_eq!(known.validated(&catalog), known);
    }

    #[test]
    fn test_memory_store_keeps_last_save() -> Result<()> {
        let store = MemoryStateStore::default();
        assert_eq!(store.load()?.selected, None);

        store.save(&SavedState {
            selected: Some(ProductId::new(1)),
        })?;
        assert_eq!(store.load()?.selected, Some(ProductId::new(1)));
        Ok(())
    }
}
