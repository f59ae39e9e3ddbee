#![forbid(unsafe_code)]

//! Responsive grid layout.
//!
//! This crate turns a breakpoint table, a per-breakpoint table of column
//! spans and a flat list of items into grid placements:
//!
//! - [`BreakpointTable`] - viewport width to breakpoint name
//! - [`GridSpec`] - validated rows of spans per breakpoint, with fallback
//! - [`allocate`] - item placements, auto-flowing any overflow
//! - [`row_height`] - row-height estimation for preview grids
//! - [`GridStyle`] - container CSS per [`RenderMode`]
//! - [`ResponsiveGrid`] - all of the above for one layout instance
//!
//! Everything here is pure: the same inputs always give the same layout.
//! Resize listeners and measurement live with the caller.
//!
//! ```
//! use tessera_layout::presets;
//!
//! let grid = presets::dashboard_grid().unwrap();
//! let layout = grid.layout(1100, 4);
//! assert_eq!(layout.breakpoint(), "lg");
//! assert_eq!(layout.placements()[3].css(), "grid-column: 1 / span 1; grid-row: 2;");
//! ```

pub mod allocate;
pub mod breakpoint;
pub mod presets;
pub mod responsive;
pub mod row_height;
pub mod spec;
pub mod style;

pub use allocate::{Placement, PlacementOrigin, allocate, allocate_items, slot_count};
pub use breakpoint::{BreakpointEntry, BreakpointError, BreakpointTable, DEFAULT_BREAKPOINT};
pub use presets::{ItemSize, ItemSpan, item_span};
pub use responsive::{GridConfig, GridLayout, LayoutError, ResponsiveGrid};
pub use row_height::{ContainerMetrics, RowHeight, RowHeightTracker, estimate_row_height};
pub use spec::{FallbackPolicy, GridSpec, GridSpecBuilder, GridSpecError, SpanError, SpanRow};
pub use style::GridStyle;
pub use tessera_core::{Length, RenderMode};
