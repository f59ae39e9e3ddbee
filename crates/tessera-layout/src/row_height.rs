#![forbid(unsafe_code)]

//! Row-height estimation for preview grids.
//!
//! A preview grid must fit a fixed-height container, so its row height is
//! derived from the measured container instead of the stylesheet:
//!
//! ```text
//! row_height = (inner_height - gap * (rows - 1)) / rows
//! ```
//!
//! Before first paint the container has no height. That is "not yet
//! measurable", reported as `None`, and callers render with a fallback.

use serde::{Deserialize, Serialize};

/// Compute the per-row height, or `None` if it cannot be measured yet.
///
/// Returns `None` when the container height is not a positive finite
/// number, when `row_count` is 0, or when the gaps leave no room for rows.
#[must_use]
pub fn estimate_row_height(container_height: f64, gap: f64, row_count: usize) -> Option<f64> {
    if row_count == 0 || !container_height.is_finite() || container_height <= 0.0 {
        return None;
    }
    let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
    let rows = row_count as f64;
    let available = container_height - gap * (rows - 1.0);
    if available <= 0.0 {
        return None;
    }
    Some(available / rows)
}

/// Measured container box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContainerMetrics {
    /// Client height including padding.
    pub client_height: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    /// Gap between grid rows.
    pub row_gap: f64,
}

impl ContainerMetrics {
    /// Metrics with no padding or gap.
    #[must_use]
    pub const fn new(client_height: f64) -> Self {
        Self {
            client_height,
            padding_top: 0.0,
            padding_bottom: 0.0,
            row_gap: 0.0,
        }
    }

    /// Set vertical padding.
    #[must_use]
    pub const fn with_padding(mut self, top: f64, bottom: f64) -> Self {
        self.padding_top = top;
        self.padding_bottom = bottom;
        self
    }

    /// Set the row gap.
    #[must_use]
    pub const fn with_row_gap(mut self, gap: f64) -> Self {
        self.row_gap = gap;
        self
    }

    /// Height available to the grid.
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        self.client_height - self.padding_top.max(0.0) - self.padding_bottom.max(0.0)
    }

    /// Row height for `row_count` rows in this container.
    #[must_use]
    pub fn row_height(&self, row_count: usize) -> Option<f64> {
        estimate_row_height(self.inner_height(), self.row_gap, row_count)
    }
}

/// Measurement state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "px", rename_all = "snake_case")]
pub enum RowHeight {
    #[default]
    Unmeasured,
    Measured(f64),
}

impl RowHeight {
    /// The measured value, if any.
    #[must_use]
    pub const fn px(self) -> Option<f64> {
        match self {
            Self::Unmeasured => None,
            Self::Measured(px) => Some(px),
        }
    }
}

/// Holds the latest row height for one grid.
///
/// Every measurable observation moves the tracker to `Measured`. An
/// unmeasurable observation (zero height during a transient relayout)
/// keeps the previous value. Changing the row count forgets the value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowHeightTracker {
    row_count: usize,
    state: RowHeight,
    observations: u64,
}

impl RowHeightTracker {
    /// Tracker for a grid with `row_count` rows.
    #[must_use]
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            state: RowHeight::Unmeasured,
            observations: 0,
        }
    }

    /// Current row count.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Update the row count. Returns true if it changed.
    pub fn set_row_count(&mut self, row_count: usize) -> bool {
        if self.row_count == row_count {
            return false;
        }
        self.row_count = row_count;
        self.state = RowHeight::Unmeasured;
        true
    }

    /// Feed a container measurement; returns the resulting state.
    pub fn observe(&mut self, metrics: ContainerMetrics) -> RowHeight {
        self.observations += 1;
        if let Some(px) = metrics.row_height(self.row_count) {
            self.state = RowHeight::Measured(px);
        } else {
            tessera_core::trace!(
                client_height = metrics.client_height,
                rows = self.row_count,
                "container not measurable"
            );
        }
        self.state
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> RowHeight {
        self.state
    }

    /// Latest measured value, or `fallback` before the first measurement.
    #[must_use]
    pub fn row_height_or(&self, fallback: f64) -> f64 {
        self.state.px().unwrap_or(fallback)
    }

    /// Number of observations fed so far.
    #[inline]
    #[must_use]
    pub fn observations(&self) -> u64 {
        self.observations
    }
}
