#![forbid(unsafe_code)]

//! Container-level CSS for a placed grid.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tessera_core::{Length, RenderMode};

/// Container styling: column template, auto-row sizing and gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    /// Number of equal-width columns.
    pub columns: u16,
    /// Minimum height of each auto row.
    pub min_row_height: Length,
    /// Gap between rows and columns.
    pub gap: Length,
    /// Measured row height that replaces `min_row_height` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_height_px: Option<f64>,
}

impl GridStyle {
    /// Style with explicit values.
    #[must_use]
    pub const fn new(columns: u16, min_row_height: Length, gap: Length) -> Self {
        Self {
            columns,
            min_row_height,
            gap,
            row_height_px: None,
        }
    }

    /// Stock style for a render mode.
    ///
    /// | Mode      | Gap      | Min row height |
    /// |-----------|----------|----------------|
    /// | `Full`    | 1.5rem   | 180px          |
    /// | `Preview` | 0.5rem   | 36px           |
    #[must_use]
    pub const fn for_mode(mode: RenderMode, columns: u16) -> Self {
        match mode {
            RenderMode::Full => Self::new(columns, Length::Px(180.0), Length::Rem(1.5)),
            RenderMode::Preview => Self::new(columns, Length::Px(36.0), Length::Rem(0.5)),
        }
    }

    /// Use a measured row height (from the row-height estimator).
    ///
    /// `None` keeps the stylesheet minimum.
    #[must_use]
    pub const fn with_row_height(mut self, px: Option<f64>) -> Self {
        self.row_height_px = px;
        self
    }

    /// Value for `grid-template-columns`.
    #[must_use]
    pub fn template_columns(&self) -> String {
        format!("repeat({}, minmax(0, 1fr))", self.columns.max(1))
    }

    /// Value for `grid-auto-rows`.
    #[must_use]
    pub fn auto_rows(&self) -> String {
        match self.row_height_px {
            Some(px) => format!("{px}px"),
            None => format!("minmax({}, auto)", self.min_row_height),
        }
    }

    /// Container declarations.
    #[must_use]
    pub fn css(&self) -> String {
        let mut out = String::with_capacity(96);
        let _ = write!(
            out,
            "display: grid; grid-template-columns: {}; grid-auto-rows: {}; gap: {};",
            self.template_columns(),
            self.auto_rows(),
            self.gap
        );
        out
    }
}

impl Default for GridStyle {
    fn default() -> Self {
        Self::for_mode(RenderMode::Full, crate::spec::DEFAULT_COLUMNS)
    }
}
