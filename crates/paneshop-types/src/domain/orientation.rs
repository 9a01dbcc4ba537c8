use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal cells are roughly twice as tall as they are wide, so a
/// physically square window has about twice as many columns as rows.
pub const DEFAULT_LANDSCAPE_RATIO: f32 = 2.0;

/// Host orientation signal. `Portrait` covers every non-landscape state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Derive orientation from a terminal size in cells.
    ///
    /// Landscape when `cols >= rows * ratio`.
    pub fn from_dimensions(cols: u16, rows: u16, ratio: f32) -> Self {
        if f32::from(cols) >= f32::from(rows) * ratio {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Landscape => write!(f, "landscape"),
            Orientation::Portrait => write!(f, "portrait"),
        }
    }
}

/// How the orientation signal is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationMode {
    /// Follow the terminal size
    #[default]
    Auto,
    Landscape,
    Portrait,
}

impl OrientationMode {
    pub fn resolve(self, cols: u16, rows: u16, ratio: f32) -> Orientation {
        match self {
            OrientationMode::Auto => Orientation::from_dimensions(cols, rows, ratio),
            OrientationMode::Landscape => Orientation::Landscape,
            OrientationMode::Portrait => Orientation::Portrait,
        }
    }
}

impl fmt::Display for OrientationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrientationMode::Auto => write!(f, "auto"),
            OrientationMode::Landscape => write!(f, "landscape"),
            OrientationMode::Portrait => write!(f, "portrait"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_terminal_is_landscape() {
        assert_eq!(
            Orientation::from_dimensions(80, 24, DEFAULT_LANDSCAPE_RATIO),
            Orientation::Landscape
        );
    }

    #[test]
    fn test_tall_split_pane_is_portrait() {
        assert_eq!(
            Orientation::from_dimensions(60, 50, DEFAULT_LANDSCAPE_RATIO),
            Orientation::Portrait
        );
    }

    #[test]
    fn test_ratio_boundary_counts_as_landscape() {
        assert_eq!(
            Orientation::from_dimensions(100, 50, 2.0),
            Orientation::Landscape
        );
        assert_eq!(
            Orientation::from_dimensions(99, 50, 2.0),
            Orientation::Portrait
        );
    }

    #[test]
    fn test_forced_modes_ignore_dimensions() {
        assert_eq!(
            OrientationMode::Portrait.resolve(200, 10, 2.0),
            Orientation::Portrait
        );
        assert_eq!(
            OrientationMode::Landscape.resolve(20, 80, 2.0),
            Orientation::Landscape
        );
        assert_eq!(
            OrientationMode::Auto.resolve(20, 80, 2.0),
            Orientation::Portrait
        );
    }
}
