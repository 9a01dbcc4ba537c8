use crate::{Error, Result};
use paneshop_types::{DEFAULT_LANDSCAPE_RATIO, Orientation, OrientationMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PANESHOP_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.paneshop (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PANESHOP_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("paneshop"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".paneshop"));
    }

    Err(Error::Config(
        "Could not determine data path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub orientation: OrientationMode,
    /// Landscape when `columns >= rows * landscape_ratio`
    #[serde(default = "default_landscape_ratio")]
    pub landscape_ratio: f32,
}

fn default_landscape_ratio() -> f32 {
    DEFAULT_LANDSCAPE_RATIO
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationMode::Auto,
            landscape_ratio: DEFAULT_LANDSCAPE_RATIO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Colour name used to highlight the selected row
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_accent() -> String {
    "cyan".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: default_accent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let ratio = self.layout.landscape_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(Error::Config(format!(
                "layout.landscape_ratio must be a positive number, got {}",
                ratio
            )));
        }
        Ok(())
    }

    /// Orientation for a terminal of the given size.
    ///
    /// A CLI override takes precedence over the configured mode.
    pub fn orientation_for(
        &self,
        cols: u16,
        rows: u16,
        override_mode: Option<OrientationMode>,
    ) -> Orientation {
        override_mode
            .unwrap_or(self.layout.orientation)
            .resolve(cols, rows, self.layout.landscape_ratio)
    }
}
