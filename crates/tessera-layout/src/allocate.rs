#![forbid(unsafe_code)]

//! Grid allocator: assigns each item a row, start column and span.
//!
//! Rows are consumed top to bottom and, within a row, left to right. Each
//! integer in a [`SpanRow`] is one slot regardless of its value. Items past
//! the last declared slot auto-flow: they begin on the row after the last
//! declared row, take one column each, and wrap every `columns` items.
//!
//! # Invariants
//!
//! 1. `allocate(rows, columns, n).len() == n` for every `n`.
//! 2. `column_start` is 1-based: `1 + sum(previous spans in the row)`.
//! 3. Within a row, `[column_start, column_end)` ranges never overlap and
//!    start positions strictly increase.
//! 4. `row` increments once per declared row boundary; declared rows with no
//!    remaining items are simply unused.

use crate::spec::SpanRow;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Whether a placement came from a declared slot or from auto-flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementOrigin {
    Declared,
    AutoFlow,
}

/// Computed position for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the item in the input order.
    pub item: usize,
    /// 0-based row index.
    pub row: usize,
    /// 1-based start column.
    pub column_start: u16,
    /// Columns occupied.
    pub column_span: u16,
    pub origin: PlacementOrigin,
}

impl Placement {
    /// Exclusive 1-based end column (the CSS grid line after the item).
    #[inline]
    #[must_use]
    pub fn column_end(&self) -> u16 {
        self.column_start.saturating_add(self.column_span)
    }

    /// Value for the CSS `grid-column` property, e.g. `"3 / span 2"`.
    #[must_use]
    pub fn grid_column(&self) -> String {
        format!("{} / span {}", self.column_start, self.column_span)
    }

    /// Value for the CSS `grid-row` property (1-based line).
    #[must_use]
    pub fn grid_row(&self) -> String {
        (self.row + 1).to_string()
    }

    /// Inline style declarations for this placement.
    #[must_use]
    pub fn css(&self) -> String {
        let mut out = String::with_capacity(40);
        let _ = write!(
            out,
            "grid-column: {}; grid-row: {};",
            self.grid_column(),
            self.grid_row()
        );
        out
    }
}

/// Assign placements to `item_count` items.
///
/// Every row must fit in `columns`, as rows from [`GridSpec`] always do.
/// Rows that do not fit yield overlapping placements; debug builds panic.
/// For auto-flowed items a `columns` of 0 is treated as 1.
///
/// [`GridSpec`]: crate::spec::GridSpec
#[must_use]
pub fn allocate(rows: &[SpanRow], columns: u16, item_count: usize) -> Vec<Placement> {
    debug_assert!(
        rows.iter().all(|row| row.total() <= u32::from(columns)),
        "span rows must fit in {columns} columns"
    );
    let mut placements = Vec::with_capacity(item_count);

    'rows: for (row_idx, row) in rows.iter().enumerate() {
        let mut column_start: u16 = 1;
        for span in row.iter() {
            if placements.len() == item_count {
                break 'rows;
            }
            placements.push(Placement {
                item: placements.len(),
                row: row_idx,
                column_start,
                column_span: span,
                origin: PlacementOrigin::Declared,
            });
            column_start = column_start.saturating_add(span);
        }
    }

    let declared = placements.len();
    if declared < item_count {
        let flow_columns = usize::from(columns.max(1));
        let first_flow_row = rows.len();
        tessera_core::trace!(
            declared,
            overflow = item_count - declared,
            first_flow_row,
            "auto-flowing items past declared slots"
        );
        for k in 0..item_count - declared {
            placements.push(Placement {
                item: declared + k,
                row: first_flow_row + k / flow_columns,
                // k % flow_columns < columns, so the cast is lossless.
                column_start: 1 + (k % flow_columns) as u16,
                column_span: 1,
                origin: PlacementOrigin::AutoFlow,
            });
        }
    }

    placements
}

/// Allocate and pair each placement with its item.
#[must_use]
pub fn allocate_items<'a, T>(
    rows: &[SpanRow],
    columns: u16,
    items: &'a [T],
) -> Vec<(Placement, &'a T)> {
    allocate(rows, columns, items.len())
        .into_iter()
        .zip(items)
        .collect()
}

/// Number of declared slots across all rows.
#[must_use]
pub fn slot_count(rows: &[SpanRow]) -> usize {
    rows.iter().map(SpanRow::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[u16]]) -> Vec<SpanRow> {
        raw.iter()
            .map(|r| SpanRow::new(r.iter().copied()).unwrap())
            .collect()
    }

    fn starts_spans(p: &[Placement]) -> Vec<(usize, u16, u16)> {
        p.iter()
            .map(|p| (p.row, p.column_start, p.column_span))
            .collect()
    }

    #[test]
    fn single_row_accumulates_starts() {
        let placements = allocate(&rows(&[&[2, 2, 2]]), 6, 3);
        assert_eq!(
            starts_spans(&placements),
            [(0, 1, 2), (0, 3, 2), (0, 5, 2)]
        );
    }

    #[test]
    fn start_resets_each_row() {
        let placements = allocate(&rows(&[&[2, 2, 2], &[1, 4, 1], &[6]]), 6, 7);
        assert_eq!(
            starts_spans(&placements),
            [
                (0, 1, 2),
                (0, 3, 2),
                (0, 5, 2),
                (1, 1, 1),
                (1, 2, 4),
                (1, 6, 1),
                (2, 1, 6),
            ]
        );
    }

    #[test]
    fn overflow_items_flow_to_next_row() {
        // Five declared slots, seven items.
        let spec_rows = rows(&[&[3, 3], &[2, 2, 2]]);
        assert_eq!(slot_count(&spec_rows), 5);
        let placements = allocate(&spec_rows, 6, 7);
        assert_eq!(placements.len(), 7);
        assert_eq!(placements[5].row, 2);
        assert_eq!(placements[5].column_span, 1);
        assert_eq!(placements[5].column_start, 1);
        assert_eq!(placements[6].row, 2);
        assert_eq!(placements[6].column_start, 2);
        assert_eq!(placements[6].origin, PlacementOrigin::AutoFlow);
        assert!(
            placements[..5]
                .iter()
                .all(|p| p.origin == PlacementOrigin::Declared)
        );
    }

    #[test]
    fn overflow_wraps_at_column_count() {
        let placements = allocate(&rows(&[&[2]]), 2, 6);
        let flowed: Vec<_> = placements[1..]
            .iter()
            .map(|p| (p.row, p.column_start))
            .collect();
        assert_eq!(flowed, [(1, 1), (1, 2), (2, 1), (2, 2), (3, 1)]);
    }

    #[test]
    fn fewer_items_than_slots_leaves_slots_unused() {
        let placements = allocate(&rows(&[&[3, 3], &[6]]), 6, 1);
        assert_eq!(starts_spans(&placements), [(0, 1, 3)]);
        assert!(allocate(&rows(&[&[6]]), 6, 0).is_empty());
    }

    #[test]
    fn no_rows_is_pure_auto_flow() {
        let placements = allocate(&[], 0, 3);
        assert_eq!(starts_spans(&placements), [(0, 1, 1), (1, 1, 1), (2, 1, 1)]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "span rows must fit in 6 columns")]
    fn unvalidated_wide_row_panics_in_debug() {
        let _ = allocate(&rows(&[&[65535, 65535]]), 6, 2);
    }

    #[test]
    fn item_indices_follow_input_order() {
        let placements = allocate(&rows(&[&[1, 1], &[2]]), 2, 5);
        let items: Vec<_> = placements.iter().map(|p| p.item).collect();
        assert_eq!(items, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn allocate_items_pairs_references() {
        let cards = ["hero", "main", "side"];
        let paired = allocate_items(&rows(&[&[2, 4], &[6]]), 6, &cards);
        assert_eq!(paired.len(), 3);
        assert_eq!(*paired[1].1, "main");
        assert_eq!(paired[1].0.column_start, 3);
        assert_eq!(paired[2].0.row, 1);
    }

    #[test]
    fn css_emission() {
        let p = Placement {
            item: 0,
            row: 1,
            column_start: 3,
            column_span: 2,
            origin: PlacementOrigin::Declared,
        };
        assert_eq!(p.grid_column(), "3 / span 2");
        assert_eq!(p.grid_row(), "2");
        assert_eq!(p.column_end(), 5);
        assert_eq!(p.css(), "grid-column: 3 / span 2; grid-row: 2;");
    }
}
