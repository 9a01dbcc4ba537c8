use crate::types::OutputFormat;
use anyhow::Result;
use once_cell::sync::OnceCell;
use paneshop_core::{Config, FileStateStore};
use paneshop_types::{BuiltinCatalog, Catalog, CatalogSource, OrientationMode};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    catalog: OnceCell<Arc<Catalog>>,
    pub orientation_override: Option<OrientationMode>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(
        data_dir: PathBuf,
        orientation_override: Option<OrientationMode>,
        format: OutputFormat,
    ) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            catalog: OnceCell::new(),
            orientation_override,
            format,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Ok(Config::load_from(&self.config_path())?))
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog
            .get_or_init(|| Arc::new(BuiltinCatalog.load()))
            .clone()
    }

    pub fn state_store(&self) -> FileStateStore {
        FileStateStore::in_dir(&self.data_dir)
    }

    pub fn json_output(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_test_context(config_content: Option<&str>) -> (TempDir, ExecutionContext) {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().to_path_buf();

        if let Some(content) = config_content {
            fs::write(data_dir.join("config.toml"), content).unwrap();
        }

        let ctx = ExecutionContext::new(data_dir, None, OutputFormat::Plain);
        (temp_dir, ctx)
    }

    #[test]
    fn test_config_lazy_loading() {
        let (_temp_dir, ctx) = setup_test_context(Some("[theme]\naccent = \"yellow\"\n"));

        assert!(ctx.config.get().is_none(), "Config should not be loaded initially");

        let config = ctx.config().unwrap();
        assert_eq!(config.theme.accent, "yellow");
        assert!(ctx.config.get().is_some(), "Config should be cached after access");
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let (_temp_dir, ctx) = setup_test_context(None);

        let config = ctx.config().unwrap();
        assert_eq!(config.layout.orientation, OrientationMode::Auto);
    }

    #[test]
    fn test_invalid_config_surfaces_error() {
        let (_temp_dir, ctx) = setup_test_context(Some("[layout]\norientation = \"sideways\"\n"));

        let err = ctx.config().unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_catalog_is_shared() {
        let (_temp_dir, ctx) = setup_test_context(None);

        let first = ctx.catalog();
        let second = ctx.catalog();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_state_store_lives_in_data_dir() {
        let (temp_dir, ctx) = setup_test_context(None);
        assert_eq!(ctx.state_store().path(), temp_dir.path().join("state.json"));
    }
}
