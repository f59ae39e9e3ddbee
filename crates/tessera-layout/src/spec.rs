#![forbid(unsafe_code)]

//! Grid specifications: per-breakpoint rows of column spans.
//!
//! A [`GridSpec`] maps breakpoint names to an ordered list of [`SpanRow`]s.
//! Each integer in a row is one item slot; its value is how many columns the
//! item occupies. The `default` entry is mandatory.
//!
//! ```
//! use tessera_layout::spec::GridSpec;
//!
//! let spec = GridSpec::builder(6)
//!     .default_rows(vec![vec![6], vec![3, 3]])
//!     .breakpoint("lg", vec![vec![2, 2, 2], vec![1, 4, 1]])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(spec.rows_for("lg").len(), 2);
//! // `md` is not defined: exact-or-default falls straight to `default`.
//! assert_eq!(spec.rows_for("md")[1].spans(), &[3, 3]);
//! ```
//!
//! # Fallback policy
//!
//! [`FallbackPolicy::ExactOrDefault`] (the default) treats every named
//! breakpoint independently: an unset breakpoint uses `default`, never an
//! intermediate breakpoint. [`FallbackPolicy::Cascade`] instead walks the
//! breakpoint table downward from the requested breakpoint and takes the
//! first defined entry.
//!
//! # Failure Modes
//!
//! | Condition                         | Error                          |
//! |-----------------------------------|--------------------------------|
//! | No `default` rows                 | [`GridSpecError::MissingDefault`] |
//! | Column count of 0                 | [`GridSpecError::ZeroColumns`] |
//! | Empty row or span of 0 / negative | [`GridSpecError::InvalidRow`]  |
//! | Row sum exceeds column count      | [`GridSpecError::RowOverflow`] |
//! | Column override with no rows      | [`GridSpecError::ColumnsWithoutRows`] |

use crate::breakpoint::{BreakpointTable, DEFAULT_BREAKPOINT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Column count used when none is given and none can be inferred.
pub const DEFAULT_COLUMNS: u16 = 6;

/// How to pick rows for a breakpoint with no entry of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Use the exact entry, else `default`.
    #[default]
    ExactOrDefault,
    /// Walk narrower breakpoints in descending width order, ending at `default`.
    Cascade,
}

/// Errors for a single row of spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// The row has no slots.
    EmptyRow,
    /// A span was zero or negative.
    NonPositiveSpan { index: usize, value: i64 },
    /// A span does not fit in `u16`.
    SpanTooLarge { index: usize, value: i64 },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRow => f.write_str("row has no spans"),
            Self::NonPositiveSpan { index, value } => {
                write!(f, "span #{index} is {value}; spans must be > 0")
            }
            Self::SpanTooLarge { index, value } => {
                write!(f, "span #{index} is {value}; spans must fit in 16 bits")
            }
        }
    }
}

impl std::error::Error for SpanError {}

/// Errors raised while building a [`GridSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSpecError {
    /// No rows were given for `default`.
    MissingDefault,
    /// A column count of zero.
    ZeroColumns { breakpoint: String },
    /// A breakpoint name was empty.
    EmptyBreakpointName,
    /// A row failed validation.
    InvalidRow {
        breakpoint: String,
        row: usize,
        source: SpanError,
    },
    /// A row's spans add up to more than the available columns.
    RowOverflow {
        breakpoint: String,
        row: usize,
        sum: u32,
        columns: u16,
    },
    /// A column override names a breakpoint that has no rows.
    ColumnsWithoutRows { breakpoint: String },
    /// Two entries name the same breakpoint once whitespace is trimmed.
    DuplicateBreakpoint { name: String },
}

impl fmt::Display for GridSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDefault => {
                write!(f, "grid spec must define {DEFAULT_BREAKPOINT:?} rows")
            }
            Self::ZeroColumns { breakpoint } => {
                write!(f, "breakpoint {breakpoint:?} has a column count of 0")
            }
            Self::EmptyBreakpointName => f.write_str("breakpoint name must not be empty"),
            Self::InvalidRow {
                breakpoint,
                row,
                source,
            } => write!(f, "breakpoint {breakpoint:?} row {row}: {source}"),
            Self::RowOverflow {
                breakpoint,
                row,
                sum,
                columns,
            } => write!(
                f,
                "breakpoint {breakpoint:?} row {row}: spans sum to {sum} but only {columns} columns exist"
            ),
            Self::ColumnsWithoutRows { breakpoint } => write!(
                f,
                "breakpoint {breakpoint:?} overrides the column count but defines no rows"
            ),
            Self::DuplicateBreakpoint { name } => {
                write!(f, "breakpoint {name:?} is defined more than once")
            }
        }
    }
}

impl std::error::Error for GridSpecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRow { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// One visual row: the column span of each slot, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u16>")]
pub struct SpanRow(Vec<u16>);

impl SpanRow {
    /// Create a row, rejecting empty rows and zero spans.
    pub fn new(spans: impl IntoIterator<Item = u16>) -> Result<Self, SpanError> {
        let spans: Vec<u16> = spans.into_iter().collect();
        if spans.is_empty() {
            return Err(SpanError::EmptyRow);
        }
        if let Some(index) = spans.iter().position(|&s| s == 0) {
            return Err(SpanError::NonPositiveSpan { index, value: 0 });
        }
        Ok(Self(spans))
    }

    /// Spans in slot order.
    #[inline]
    #[must_use]
    pub fn spans(&self) -> &[u16] {
        &self.0
    }

    /// Number of item slots in this row.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed row.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total columns consumed.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&s| u32::from(s)).sum()
    }

    /// Iterate spans.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<i64>> for SpanRow {
    type Error = SpanError;

    fn try_from(raw: Vec<i64>) -> Result<Self, Self::Error> {
        let mut spans = Vec::with_capacity(raw.len());
        for (index, value) in raw.into_iter().enumerate() {
            if value <= 0 {
                return Err(SpanError::NonPositiveSpan { index, value });
            }
            let span = u16::try_from(value).map_err(|_| SpanError::SpanTooLarge { index, value })?;
            spans.push(span);
        }
        Self::new(spans)
    }
}

impl From<SpanRow> for Vec<u16> {
    fn from(row: SpanRow) -> Self {
        row.0
    }
}

/// Validated per-breakpoint row tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridSpecDef", into = "GridSpecDef")]
pub struct GridSpec {
    columns: u16,
    default_rows: Vec<SpanRow>,
    overrides: BTreeMap<String, Vec<SpanRow>>,
    column_overrides: BTreeMap<String, u16>,
}

impl GridSpec {
    /// Start building a spec whose rows span at most `columns` columns.
    #[must_use]
    pub fn builder(columns: u16) -> GridSpecBuilder {
        GridSpecBuilder {
            columns: Some(columns),
            rows: BTreeMap::new(),
            column_overrides: BTreeMap::new(),
        }
    }

    /// Start building a spec that infers column counts from the rows.
    ///
    /// Each entry without an explicit count gets the sum of its first row;
    /// an entry with no rows falls back to [`DEFAULT_COLUMNS`].
    #[must_use]
    pub fn builder_inferred() -> GridSpecBuilder {
        GridSpecBuilder {
            columns: None,
            rows: BTreeMap::new(),
            column_overrides: BTreeMap::new(),
        }
    }

    /// Base column count (used by `default`).
    #[inline]
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Rows used for `default`.
    #[must_use]
    pub fn default_rows(&self) -> &[SpanRow] {
        &self.default_rows
    }

    /// Names with an explicit entry, excluding `default`.
    pub fn named_breakpoints(&self) -> impl Iterator<Item = &str> {
        self.overrides.keys().map(String::as_str)
    }

    /// Whether `name` has its own row list.
    #[must_use]
    pub fn defines(&self, name: &str) -> bool {
        name == DEFAULT_BREAKPOINT || self.overrides.contains_key(name)
    }

    /// Rows for `breakpoint` using exact-or-default lookup.
    #[must_use]
    pub fn rows_for(&self, breakpoint: &str) -> &[SpanRow] {
        self.rows_of_key(self.key_exact_or_default(breakpoint))
    }

    /// Column count for `breakpoint` using exact-or-default lookup.
    #[must_use]
    pub fn columns_for(&self, breakpoint: &str) -> u16 {
        self.columns_of_key(self.key_exact_or_default(breakpoint))
    }

    /// Rows for `breakpoint` under an explicit policy.
    #[must_use]
    pub fn rows_for_with(
        &self,
        table: &BreakpointTable,
        breakpoint: &str,
        policy: FallbackPolicy,
    ) -> &[SpanRow] {
        self.rows_of_key(self.source_key(table, breakpoint, policy))
    }

    /// Column count for `breakpoint` under an explicit policy.
    ///
    /// Always the count belonging to the entry that supplied the rows.
    #[must_use]
    pub fn columns_for_with(
        &self,
        table: &BreakpointTable,
        breakpoint: &str,
        policy: FallbackPolicy,
    ) -> u16 {
        self.columns_of_key(self.source_key(table, breakpoint, policy))
    }

    /// Name of the entry whose rows serve `breakpoint`.
    #[must_use]
    pub fn source_key<'a>(
        &'a self,
        table: &BreakpointTable,
        breakpoint: &str,
        policy: FallbackPolicy,
    ) -> &'a str {
        match policy {
            FallbackPolicy::ExactOrDefault => self.key_exact_or_default(breakpoint),
            FallbackPolicy::Cascade => table
                .descending_from(breakpoint)
                .find_map(|name| self.overrides.get_key_value(name))
                .map_or(DEFAULT_BREAKPOINT, |(key, _)| key.as_str()),
        }
    }

    fn key_exact_or_default<'a>(&'a self, breakpoint: &str) -> &'a str {
        self.overrides
            .get_key_value(breakpoint)
            .map_or(DEFAULT_BREAKPOINT, |(key, _)| key.as_str())
    }

    fn rows_of_key(&self, key: &str) -> &[SpanRow] {
        self.overrides.get(key).map_or(&self.default_rows, Vec::as_slice)
    }

    fn columns_of_key(&self, key: &str) -> u16 {
        self.column_overrides
            .get(key)
            .copied()
            .unwrap_or(self.columns)
    }
}

/// Builder for [`GridSpec`]; validation happens in [`GridSpecBuilder::build`].
#[derive(Debug, Clone)]
#[must_use]
pub struct GridSpecBuilder {
    columns: Option<u16>,
    rows: BTreeMap<String, Vec<Vec<u16>>>,
    column_overrides: BTreeMap<String, u16>,
}

impl GridSpecBuilder {
    /// Rows for `default`.
    pub fn default_rows<R: AsRef<[u16]>>(self, rows: impl IntoIterator<Item = R>) -> Self {
        self.breakpoint(DEFAULT_BREAKPOINT, rows)
    }

    /// Rows for a named breakpoint. Later calls replace earlier ones.
    pub fn breakpoint<R: AsRef<[u16]>>(
        mut self,
        name: impl Into<String>,
        rows: impl IntoIterator<Item = R>,
    ) -> Self {
        let rows = rows.into_iter().map(|r| r.as_ref().to_vec()).collect();
        self.rows.insert(name.into(), rows);
        self
    }

    /// Override the column count for one breakpoint.
    ///
    /// Naming `default` replaces the base count.
    pub fn breakpoint_columns(mut self, name: impl Into<String>, columns: u16) -> Self {
        self.column_overrides.insert(name.into(), columns);
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<GridSpec, GridSpecError> {
        let inferring = self.columns.is_none();
        let mut base_columns = self.columns;
        let mut column_overrides = BTreeMap::new();
        let mut default_columns_seen = false;
        for (name, columns) in self.column_overrides {
            let name = normalize_name(&name)?;
            if columns == 0 {
                return Err(GridSpecError::ZeroColumns { breakpoint: name });
            }
            if name == DEFAULT_BREAKPOINT {
                if default_columns_seen {
                    return Err(GridSpecError::DuplicateBreakpoint { name });
                }
                default_columns_seen = true;
                base_columns = Some(columns);
            } else if column_overrides.insert(name.clone(), columns).is_some() {
                return Err(GridSpecError::DuplicateBreakpoint { name });
            }
        }

        let mut named_rows: BTreeMap<String, Vec<Vec<u16>>> = BTreeMap::new();
        for (name, raw_rows) in self.rows {
            let name = normalize_name(&name)?;
            if named_rows.contains_key(&name) {
                return Err(GridSpecError::DuplicateBreakpoint { name });
            }
            named_rows.insert(name, raw_rows);
        }

        let base_columns = base_columns.unwrap_or_else(|| {
            named_rows
                .get(DEFAULT_BREAKPOINT)
                .and_then(|rows| infer_columns(rows))
                .unwrap_or(DEFAULT_COLUMNS)
        });
        if base_columns == 0 {
            return Err(GridSpecError::ZeroColumns {
                breakpoint: DEFAULT_BREAKPOINT.to_string(),
            });
        }
        if inferring {
            for (name, raw_rows) in &named_rows {
                if name == DEFAULT_BREAKPOINT || column_overrides.contains_key(name) {
                    continue;
                }
                if let Some(columns) = infer_columns(raw_rows).filter(|&c| c != base_columns) {
                    column_overrides.insert(name.clone(), columns);
                }
            }
        }

        let mut default_rows = None;
        let mut overrides = BTreeMap::new();
        for (name, raw_rows) in named_rows {
            let columns = column_overrides.get(&name).copied().unwrap_or(base_columns);
            let rows = validate_rows(&name, raw_rows, columns)?;
            if name == DEFAULT_BREAKPOINT {
                default_rows = Some(rows);
            } else {
                overrides.insert(name, rows);
            }
        }

        if let Some(orphan) = column_overrides.keys().find(|k| !overrides.contains_key(*k)) {
            return Err(GridSpecError::ColumnsWithoutRows {
                breakpoint: orphan.clone(),
            });
        }

        let default_rows = default_rows.ok_or(GridSpecError::MissingDefault)?;
        tessera_core::trace!(
            columns = base_columns,
            breakpoints = overrides.len(),
            inferred = inferring,
            "grid spec built"
        );
        Ok(GridSpec {
            columns: base_columns,
            default_rows,
            overrides,
            column_overrides,
        })
    }
}

/// Sum of the first row, or `None` when there is nothing to infer from.
fn infer_columns(rows: &[Vec<u16>]) -> Option<u16> {
    let sum: u32 = rows.first()?.iter().map(|&s| u32::from(s)).sum();
    if sum == 0 {
        return None;
    }
    // Too wide for u16: the row then fails the overflow check.
    Some(u16::try_from(sum).unwrap_or(u16::MAX))
}

fn normalize_name(name: &str) -> Result<String, GridSpecError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GridSpecError::EmptyBreakpointName);
    }
    Ok(trimmed.to_string())
}

fn validate_rows(
    breakpoint: &str,
    raw_rows: Vec<Vec<u16>>,
    columns: u16,
) -> Result<Vec<SpanRow>, GridSpecError> {
    raw_rows
        .into_iter()
        .enumerate()
        .map(|(row, spans)| {
            let span_row = SpanRow::new(spans).map_err(|source| GridSpecError::InvalidRow {
                breakpoint: breakpoint.to_string(),
                row,
                source,
            })?;
            check_fits(breakpoint, row, &span_row, columns)?;
            Ok(span_row)
        })
        .collect()
}

fn check_fits(
    breakpoint: &str,
    row: usize,
    span_row: &SpanRow,
    columns: u16,
) -> Result<(), GridSpecError> {
    let sum = span_row.total();
    if sum > u32::from(columns) {
        tessera_core::warn!(breakpoint, row, sum, columns, "row overflows grid columns");
        return Err(GridSpecError::RowOverflow {
            breakpoint: breakpoint.to_string(),
            row,
            sum,
            columns,
        });
    }
    Ok(())
}

/// Serialized form of [`GridSpec`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[doc(hidden)]
pub struct GridSpecDef {
    /// Absent means "infer from each entry's first row".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub breakpoint_columns: BTreeMap<String, u16>,
    pub rows: BTreeMap<String, Vec<SpanRow>>,
}

impl TryFrom<GridSpecDef> for GridSpec {
    type Error = GridSpecError;

    fn try_from(def: GridSpecDef) -> Result<Self, Self::Error> {
        let mut builder = match def.columns {
            Some(columns) => GridSpec::builder(columns),
            None => GridSpec::builder_inferred(),
        };
        for (name, columns) in def.breakpoint_columns {
            builder = builder.breakpoint_columns(name, columns);
        }
        for (name, rows) in def.rows {
            builder = builder.breakpoint(name, rows.iter().map(SpanRow::spans));
        }
        builder.build()
    }
}

impl From<GridSpec> for GridSpecDef {
    fn from(spec: GridSpec) -> Self {
        let mut rows = spec.overrides;
        rows.insert(DEFAULT_BREAKPOINT.to_string(), spec.default_rows);
        Self {
            columns: Some(spec.columns),
            breakpoint_columns: spec.column_overrides,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GridSpec {
        GridSpec::builder(6)
            .default_rows(vec![vec![6], vec![6], vec![3, 3]])
            .breakpoint("md", vec![vec![3, 3], vec![2, 2, 2]])
            .breakpoint("xl", vec![vec![1, 4, 1]])
            .build()
            .unwrap()
    }

    #[test]
    fn default_only_spec_falls_through() {
        let spec = GridSpec::builder(6).default_rows([[6]]).build().unwrap();
        let rows = spec.rows_for("lg");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].spans(), &[6]);
    }

    #[test]
    fn exact_match_wins() {
        let spec = sample();
        assert_eq!(spec.rows_for("md")[1].spans(), &[2, 2, 2]);
        assert_eq!(spec.rows_for("xl")[0].spans(), &[1, 4, 1]);
    }

    #[test]
    fn unset_breakpoint_skips_intermediate_entries() {
        let spec = sample();
        // `lg` sits between `md` and `xl` but inherits neither.
        assert_eq!(spec.rows_for("lg"), spec.default_rows());
    }

    #[test]
    fn cascade_inherits_nearest_narrower() {
        let spec = sample();
        let table = BreakpointTable::tailwind();
        let rows = spec.rows_for_with(&table, "lg", FallbackPolicy::Cascade);
        assert_eq!(rows[1].spans(), &[2, 2, 2]);
        assert_eq!(spec.source_key(&table, "lg", FallbackPolicy::Cascade), "md");
        assert_eq!(spec.source_key(&table, "sm", FallbackPolicy::Cascade), "default");
        assert_eq!(spec.source_key(&table, "2xl", FallbackPolicy::Cascade), "xl");
    }

    #[test]
    fn normalizer_is_idempotent() {
        let spec = sample();
        let table = BreakpointTable::tailwind();
        for name in table.names() {
            assert_eq!(spec.rows_for(name), spec.rows_for(name));
            assert_eq!(
                spec.rows_for_with(&table, name, FallbackPolicy::Cascade),
                spec.rows_for_with(&table, name, FallbackPolicy::Cascade)
            );
        }
    }

    #[test]
    fn missing_default_is_rejected() {
        let err = GridSpec::builder(6)
            .breakpoint("md", [[6]])
            .build()
            .unwrap_err();
        assert_eq!(err, GridSpecError::MissingDefault);
    }

    #[test]
    fn zero_span_and_empty_row_rejected() {
        let err = GridSpec::builder(6)
            .default_rows(vec![vec![3, 0]])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GridSpecError::InvalidRow {
                breakpoint: "default".into(),
                row: 0,
                source: SpanError::NonPositiveSpan { index: 1, value: 0 },
            }
        );
        assert!(std::error::Error::source(&err).is_some());

        let err = GridSpec::builder(6)
            .default_rows(vec![vec![6], vec![]])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            GridSpecError::InvalidRow {
                row: 1,
                source: SpanError::EmptyRow,
                ..
            }
        ));
    }

    #[test]
    fn overflowing_row_rejected_not_clamped() {
        let err = GridSpec::builder(6)
            .default_rows(vec![vec![4, 3]])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GridSpecError::RowOverflow {
                breakpoint: "default".into(),
                row: 0,
                sum: 7,
                columns: 6,
            }
        );
    }

    #[test]
    fn column_overrides_follow_source_entry() {
        let spec = GridSpec::builder(6)
            .default_rows([[1]])
            .breakpoint_columns("default", 6)
            .breakpoint("md", [[1, 2]])
            .breakpoint_columns("md", 3)
            .build()
            .unwrap();
        assert_eq!(spec.columns_for("md"), 3);
        assert_eq!(spec.columns_for("lg"), 6);

        let err = GridSpec::builder(6)
            .default_rows([[6]])
            .breakpoint_columns("lg", 12)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GridSpecError::ColumnsWithoutRows {
                breakpoint: "lg".into()
            }
        );
    }

    #[test]
    fn override_row_checked_against_its_own_columns() {
        let err = GridSpec::builder(6)
            .default_rows([[6]])
            .breakpoint("md", [[2, 2]])
            .breakpoint_columns("md", 3)
            .build()
            .unwrap_err();
        assert!(matches!(err, GridSpecError::RowOverflow { sum: 4, columns: 3, .. }));
    }

    #[test]
    fn zero_columns_rejected() {
        assert!(matches!(
            GridSpec::builder(0).default_rows([[1]]).build(),
            Err(GridSpecError::ZeroColumns { .. })
        ));
    }

    #[test]
    fn span_row_from_signed_rejects_negative() {
        assert_eq!(
            SpanRow::try_from(vec![2, -1]),
            Err(SpanError::NonPositiveSpan {
                index: 1,
                value: -1
            })
        );
        assert_eq!(
            SpanRow::try_from(vec![70_000]),
            Err(SpanError::SpanTooLarge {
                index: 0,
                value: 70_000
            })
        );
        let row = SpanRow::try_from(vec![1, 4, 1]).unwrap();
        assert_eq!(row.total(), 6);
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn inferred_columns_follow_each_first_row() {
        let spec = GridSpec::builder_inferred()
            .default_rows([[1]])
            .breakpoint("md", [[1, 2], [1, 1]])
            .breakpoint("lg", [[2, 4], [2, 2]])
            .build()
            .unwrap();
        assert_eq!(spec.columns(), 1);
        assert_eq!(spec.columns_for("md"), 3);
        assert_eq!(spec.columns_for("lg"), 6);
        assert_eq!(spec.columns_for("xl"), 1);
    }

    #[test]
    fn inferred_columns_keep_explicit_overrides() {
        let spec = GridSpec::builder_inferred()
            .default_rows([[12]])
            .breakpoint("md", [[4, 4]])
            .breakpoint_columns("md", 12)
            .build()
            .unwrap();
        assert_eq!(spec.columns(), 12);
        assert_eq!(spec.columns_for("md"), 12);
    }

    #[test]
    fn inferred_columns_still_reject_wider_rows() {
        let err = GridSpec::builder_inferred()
            .default_rows([vec![3, 3], vec![4, 4]])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GridSpecError::RowOverflow {
                breakpoint: "default".into(),
                row: 1,
                sum: 8,
                columns: 6,
            }
        );
    }

    #[test]
    fn inferred_columns_without_rows_fall_back() {
        let spec = GridSpec::builder_inferred()
            .default_rows(Vec::<Vec<u16>>::new())
            .build()
            .unwrap();
        assert_eq!(spec.columns(), DEFAULT_COLUMNS);
    }

    #[test]
    fn names_equal_after_trimming_are_duplicates() {
        let err = GridSpec::builder(6)
            .default_rows([[6]])
            .breakpoint("md", [[3, 3]])
            .breakpoint(" md", [[2, 2, 2]])
            .build()
            .unwrap_err();
        assert_eq!(err, GridSpecError::DuplicateBreakpoint { name: "md".into() });

        let err = GridSpec::builder(6)
            .default_rows([[6]])
            .breakpoint("md", [[3, 3]])
            .breakpoint_columns("md", 6)
            .breakpoint_columns("md ", 6)
            .build()
            .unwrap_err();
        assert_eq!(err, GridSpecError::DuplicateBreakpoint { name: "md".into() });

        let err = GridSpec::builder(6)
            .default_rows([[6]])
            .breakpoint(" default", [[3, 3]])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GridSpecError::DuplicateBreakpoint {
                name: "default".into()
            }
        );
    }
}
