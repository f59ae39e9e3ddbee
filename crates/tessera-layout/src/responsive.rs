#![forbid(unsafe_code)]

//! Breakpoint-aware grid: resolve, normalize, allocate.
//!
//! [`ResponsiveGrid`] owns the static configuration of one layout instance
//! (breakpoint table, grid spec, fallback policy) and turns a viewport width
//! plus an item count into a [`GridLayout`].
//!
//! ```
//! use tessera_layout::{BreakpointTable, GridSpec, ResponsiveGrid};
//!
//! let spec = GridSpec::builder(6)
//!     .default_rows([[6]])
//!     .breakpoint("md", [[2, 2, 2]])
//!     .build()
//!     .unwrap();
//! let grid = ResponsiveGrid::new(BreakpointTable::tailwind(), spec).unwrap();
//!
//! let layout = grid.layout(900, 3);
//! assert_eq!(layout.breakpoint(), "md");
//! assert_eq!(layout.placements()[2].grid_column(), "5 / span 2");
//! ```

use crate::allocate::{Placement, allocate};
use crate::breakpoint::{BreakpointError, BreakpointTable};
use crate::spec::{FallbackPolicy, GridSpec, GridSpecError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors raised while assembling a [`ResponsiveGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The breakpoint table was invalid.
    Breakpoints(BreakpointError),
    /// The grid spec was invalid.
    Spec(GridSpecError),
    /// The spec names a breakpoint the table does not know.
    UnknownBreakpoint { name: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breakpoints(e) => write!(f, "invalid breakpoint table: {e}"),
            Self::Spec(e) => write!(f, "invalid grid spec: {e}"),
            Self::UnknownBreakpoint { name } => {
                write!(f, "grid spec names unknown breakpoint {name:?}")
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Breakpoints(e) => Some(e),
            Self::Spec(e) => Some(e),
            Self::UnknownBreakpoint { .. } => None,
        }
    }
}

impl From<BreakpointError> for LayoutError {
    fn from(e: BreakpointError) -> Self {
        Self::Breakpoints(e)
    }
}

impl From<GridSpecError> for LayoutError {
    fn from(e: GridSpecError) -> Self {
        Self::Spec(e)
    }
}

/// Serializable configuration for one responsive grid.
///
/// ```json
/// {
///   "breakpoints": { "md": "768px", "lg": 1024 },
///   "policy": "exact_or_default",
///   "grid": { "columns": 6, "rows": { "default": [[6]], "md": [[3, 3]] } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Defaults to the Tailwind table.
    #[serde(default)]
    pub breakpoints: BreakpointTable,
    #[serde(default)]
    pub policy: FallbackPolicy,
    pub grid: GridSpec,
}

/// Placements for one breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    breakpoint: String,
    source: String,
    columns: u16,
    declared_rows: usize,
    placements: Vec<Placement>,
}

impl GridLayout {
    /// Active breakpoint name.
    #[must_use]
    pub fn breakpoint(&self) -> &str {
        &self.breakpoint
    }

    /// Spec entry that supplied the rows (differs from `breakpoint` on fallback).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Column count for this layout.
    #[inline]
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Rows declared by the spec entry.
    #[inline]
    #[must_use]
    pub fn declared_rows(&self) -> usize {
        self.declared_rows
    }

    /// Rows actually occupied, including auto-flow rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.placements.iter().map(|p| p.row + 1).max().unwrap_or(0)
    }

    /// One placement per item, in item order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement of item `index`.
    #[must_use]
    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    /// Number of placed items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether no items were placed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Static configuration for one responsive grid instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsiveGrid {
    table: BreakpointTable,
    spec: GridSpec,
    policy: FallbackPolicy,
}

impl ResponsiveGrid {
    /// Validate that every breakpoint in `spec` exists in `table`.
    pub fn new(table: BreakpointTable, spec: GridSpec) -> Result<Self, LayoutError> {
        if let Some(name) = spec.named_breakpoints().find(|name| !table.contains(name)) {
            tessera_core::warn!(breakpoint = name, "grid spec names unknown breakpoint");
            return Err(LayoutError::UnknownBreakpoint {
                name: name.to_string(),
            });
        }
        Ok(Self {
            table,
            spec,
            policy: FallbackPolicy::default(),
        })
    }

    /// Build from a deserialized [`GridConfig`].
    pub fn from_config(config: GridConfig) -> Result<Self, LayoutError> {
        Ok(Self::new(config.breakpoints, config.grid)?.with_policy(config.policy))
    }

    /// Set the fallback policy for unset breakpoints.
    #[must_use]
    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fallback policy in use.
    #[inline]
    #[must_use]
    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Breakpoint table.
    #[must_use]
    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    /// Grid spec.
    #[must_use]
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Resolve a viewport width to a breakpoint name.
    #[must_use]
    pub fn resolve(&self, width: u32) -> &str {
        self.table.resolve(width)
    }

    /// Layout `item_count` items at viewport `width`.
    #[must_use]
    pub fn layout(&self, width: u32, item_count: usize) -> GridLayout {
        self.layout_for(self.table.resolve(width), item_count)
    }

    /// Layout `item_count` items for a named breakpoint.
    #[must_use]
    pub fn layout_for(&self, breakpoint: &str, item_count: usize) -> GridLayout {
        let source = self.spec.source_key(&self.table, breakpoint, self.policy);
        let rows = self.spec.rows_for_with(&self.table, breakpoint, self.policy);
        let columns = self.spec.columns_for_with(&self.table, breakpoint, self.policy);
        let placements = allocate(rows, columns, item_count);
        tessera_core::debug!(
            breakpoint,
            source,
            columns,
            items = item_count,
            "grid layout computed"
        );
        GridLayout {
            breakpoint: breakpoint.to_string(),
            source: source.to_string(),
            columns,
            declared_rows: rows.len(),
            placements,
        }
    }
}
