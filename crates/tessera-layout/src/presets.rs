#![forbid(unsafe_code)]

//! Stock layouts shipped with the site templates.

use crate::breakpoint::BreakpointTable;
use crate::responsive::{LayoutError, ResponsiveGrid};
use crate::spec::{FallbackPolicy, GridSpec, GridSpecError};
use serde::{Deserialize, Serialize};

/// Responsive bento grid: hero, main, sidebar, info, and two tall cards.
///
/// One column on phones, three from `md`, six from `lg`.
pub fn bento() -> Result<GridSpec, GridSpecError> {
    GridSpec::builder(1)
        .default_rows(vec![vec![1]; 6])
        .breakpoint("md", vec![vec![1, 2], vec![1, 1], vec![2, 1]])
        .breakpoint_columns("md", 3)
        .breakpoint("lg", vec![vec![2, 4], vec![2, 2], vec![4, 2]])
        .breakpoint_columns("lg", 6)
        .build()
}

/// Six-column bento thumbnail used by preview cards at every width.
pub fn bento_preview() -> Result<GridSpec, GridSpecError> {
    GridSpec::builder(6)
        .default_rows(vec![vec![2, 4], vec![2, 2], vec![4, 2]])
        .build()
}

/// Twelve-card dashboard demo on six columns.
pub fn dashboard() -> Result<GridSpec, GridSpecError> {
    GridSpec::builder(6)
        .default_rows(vec![vec![6], vec![6], vec![6], vec![6], vec![3, 3]])
        .breakpoint("md", vec![vec![3, 3], vec![2, 2, 2], vec![6]])
        .breakpoint("lg", vec![vec![2, 2, 2], vec![1, 4, 1], vec![6]])
        .build()
}

/// Bento grid on Tailwind breakpoints.
///
/// The bento classes are min-width utilities, so `xl` and wider keep the
/// `lg` layout: this grid uses [`FallbackPolicy::Cascade`].
pub fn bento_grid() -> Result<ResponsiveGrid, LayoutError> {
    Ok(ResponsiveGrid::new(BreakpointTable::tailwind(), bento()?)?
        .with_policy(FallbackPolicy::Cascade))
}

/// Dashboard demo on Tailwind breakpoints with exact-or-default lookup.
pub fn dashboard_grid() -> Result<ResponsiveGrid, LayoutError> {
    ResponsiveGrid::new(BreakpointTable::tailwind(), dashboard()?)
}

/// Column and row span of a free-standing grid item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemSpan {
    pub columns: u16,
    pub rows: u16,
}

impl ItemSpan {
    /// Span for an item whose size name is not recognized.
    pub const FALLBACK: Self = Self::new(2, 2);

    #[must_use]
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Inline style declarations, e.g. `grid-column: span 3 / span 3; ...`.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "grid-column: span {c} / span {c}; grid-row: span {r} / span {r};",
            c = self.columns,
            r = self.rows
        )
    }
}

/// Named item sizes for cards placed without a span table.
///
/// | Size          | Columns | Rows |
/// |---------------|---------|------|
/// | `small`       | 2       | 1    |
/// | `medium`      | 3       | 3    |
/// | `large`       | 4       | 3    |
/// | `extra-large` | 6       | 3    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemSize {
    #[default]
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl ItemSize {
    pub const ALL: [ItemSize; 4] = [
        ItemSize::Small,
        ItemSize::Medium,
        ItemSize::Large,
        ItemSize::ExtraLarge,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extra-large",
        }
    }

    #[must_use]
    pub const fn span(self) -> ItemSpan {
        match self {
            Self::Small => ItemSpan::new(2, 1),
            Self::Medium => ItemSpan::new(3, 3),
            Self::Large => ItemSpan::new(4, 3),
            Self::ExtraLarge => ItemSpan::new(6, 3),
        }
    }

    /// Look up a size by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.name() == name)
    }
}

/// Span for a size name; unknown names get [`ItemSpan::FALLBACK`].
#[must_use]
pub fn item_span(name: &str) -> ItemSpan {
    ItemSize::from_name(name).map_or(ItemSpan::FALLBACK, ItemSize::span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocate::slot_count;

    #[test]
    fn presets_validate() {
        bento().unwrap();
        bento_preview().unwrap();
        dashboard().unwrap();
    }

    #[test]
    fn bento_has_six_slots_everywhere() {
        let spec = bento().unwrap();
        for bp in ["default", "sm", "md", "lg", "xl"] {
            assert_eq!(slot_count(spec.rows_for(bp)), 6, "breakpoint {bp}");
        }
        assert_eq!(spec.columns_for("md"), 3);
        assert_eq!(spec.columns_for("lg"), 6);
        assert_eq!(spec.columns_for("sm"), 1);
    }

    #[test]
    fn bento_grid_keeps_lg_layout_when_wider() {
        let grid = bento_grid().unwrap();
        let layout = grid.layout(1600, 6);
        assert_eq!(layout.breakpoint(), "2xl");
        assert_eq!(layout.source(), "lg");
        assert_eq!(layout.columns(), 6);
        assert_eq!(layout.placements()[1].grid_column(), "3 / span 4");

        let phone = grid.layout(390, 6);
        assert_eq!(phone.columns(), 1);
        assert_eq!(phone.row_count(), 6);
    }

    #[test]
    fn dashboard_slot_counts() {
        let spec = dashboard().unwrap();
        assert_eq!(slot_count(spec.rows_for("default")), 6);
        assert_eq!(slot_count(spec.rows_for("md")), 6);
        assert_eq!(slot_count(spec.rows_for("lg")), 7);
    }

    #[test]
    fn item_sizes() {
        assert_eq!(ItemSize::default().span(), ItemSpan::new(2, 1));
        assert_eq!(item_span("large"), ItemSpan::new(4, 3));
        assert_eq!(item_span("extra-large").columns, 6);
        assert_eq!(item_span("huge"), ItemSpan::FALLBACK);
        assert_eq!(
            item_span("medium").css(),
            "grid-column: span 3 / span 3; grid-row: span 3 / span 3;"
        );
        let parsed: ItemSize = serde_json::from_str(r#""extra-large""#).unwrap();
        assert_eq!(parsed, ItemSize::ExtraLarge);
    }
}
