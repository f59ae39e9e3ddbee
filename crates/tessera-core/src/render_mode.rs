#![forbid(unsafe_code)]

//! Render mode for full-size versus scaled-down preview grids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a grid is being rendered.
///
/// `Preview` is the thumbnail variant shown inside gallery cards: tighter
/// gaps, shorter rows, and a row height that is usually measured from the
/// fixed-height container instead of taken from the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Full-size page rendering.
    #[default]
    Full,
    /// Scaled-down preview that must fit its container without overflow.
    Preview,
}

impl RenderMode {
    /// Whether row heights should come from container measurement.
    #[inline]
    #[must_use]
    pub const fn measures_rows(self) -> bool {
        matches!(self, Self::Preview)
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Preview => "preview",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_full() {
        assert_eq!(RenderMode::default(), RenderMode::Full);
        assert!(!RenderMode::Full.measures_rows());
        assert!(RenderMode::Preview.measures_rows());
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&RenderMode::Preview).unwrap();
        assert_eq!(json, "\"preview\"");
        assert_eq!(RenderMode::Preview.to_string(), "preview");
    }
}
