#![forbid(unsafe_code)]

//! Named viewport breakpoints and the width resolver.
//!
//! A [`BreakpointTable`] is a set of `(name, min_width_px)` pairs kept sorted
//! by descending width. The implicit [`DEFAULT_BREAKPOINT`] covers every width
//! below the smallest entry and is never stored.
//!
//! | Breakpoint | Stock Min Width |
//! |-----------|-----------------|
//! | `default` | 0 (implicit)    |
//! | `sm`      | 640px           |
//! | `md`      | 768px           |
//! | `lg`      | 1024px          |
//! | `xl`      | 1280px          |
//! | `2xl`     | 1536px          |
//!
//! # Invariants
//!
//! 1. Entries are sorted strictly descending by width.
//! 2. Names are unique, non-empty and never `default`.
//! 3. Widths are unique and non-zero (a zero width would shadow `default`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the implicit breakpoint that starts at width 0.
pub const DEFAULT_BREAKPOINT: &str = "default";

/// One named threshold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreakpointEntry {
    /// Breakpoint name (`md`, `lg`, ...).
    pub name: String,
    /// Minimum viewport width in CSS pixels.
    pub min_width: u32,
}

/// Errors raised while building a [`BreakpointTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakpointError {
    /// A breakpoint name was empty or whitespace.
    EmptyName,
    /// `default` was listed explicitly.
    ReservedName,
    /// The same name appeared twice.
    DuplicateName { name: String },
    /// Two names share one width.
    DuplicateWidth {
        first: String,
        second: String,
        width: u32,
    },
    /// A named breakpoint started at width 0.
    ZeroWidth { name: String },
    /// A width was negative.
    NegativeWidth { name: String, width: i64 },
    /// A width string could not be parsed as pixels.
    InvalidWidth { name: String, raw: String },
}

impl fmt::Display for BreakpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("breakpoint name must not be empty"),
            Self::ReservedName => write!(
                f,
                "breakpoint {DEFAULT_BREAKPOINT:?} is implicit and must not be listed"
            ),
            Self::DuplicateName { name } => write!(f, "duplicate breakpoint name {name:?}"),
            Self::DuplicateWidth {
                first,
                second,
                width,
            } => write!(
                f,
                "breakpoints {first:?} and {second:?} share min width {width}px"
            ),
            Self::ZeroWidth { name } => write!(
                f,
                "breakpoint {name:?} has min width 0, which would shadow {DEFAULT_BREAKPOINT:?}"
            ),
            Self::NegativeWidth { name, width } => {
                write!(f, "breakpoint {name:?} has negative min width {width}")
            }
            Self::InvalidWidth { name, raw } => {
                write!(f, "breakpoint {name:?} has unparseable width {raw:?}")
            }
        }
    }
}

impl std::error::Error for BreakpointError {}

/// Breakpoint thresholds sorted by descending minimum width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, RawWidth>",
    into = "BTreeMap<String, u32>"
)]
pub struct BreakpointTable {
    entries: Vec<BreakpointEntry>,
}

impl BreakpointTable {
    /// Build a table from `(name, min_width)` pairs in any order.
    pub fn new<N: Into<String>>(
        pairs: impl IntoIterator<Item = (N, u32)>,
    ) -> Result<Self, BreakpointError> {
        let mut entries: Vec<BreakpointEntry> = Vec::new();
        for (name, min_width) in pairs {
            let name = name.into();
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(BreakpointError::EmptyName);
            }
            if trimmed == DEFAULT_BREAKPOINT {
                return Err(BreakpointError::ReservedName);
            }
            if min_width == 0 {
                return Err(BreakpointError::ZeroWidth {
                    name: trimmed.to_string(),
                });
            }
            if entries.iter().any(|e| e.name == trimmed) {
                return Err(BreakpointError::DuplicateName {
                    name: trimmed.to_string(),
                });
            }
            if let Some(existing) = entries.iter().find(|e| e.min_width == min_width) {
                return Err(BreakpointError::DuplicateWidth {
                    first: existing.name.clone(),
                    second: trimmed.to_string(),
                    width: min_width,
                });
            }
            entries.push(BreakpointEntry {
                name: trimmed.to_string(),
                min_width,
            });
        }
        entries.sort_by(|a, b| b.min_width.cmp(&a.min_width));
        Ok(Self { entries })
    }

    /// A table with no named breakpoints; every width resolves to `default`.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stock Tailwind breakpoints: 640 / 768 / 1024 / 1280 / 1536.
    #[must_use]
    pub fn tailwind() -> Self {
        let entries = [("2xl", 1536), ("xl", 1280), ("lg", 1024), ("md", 768), ("sm", 640)]
            .into_iter()
            .map(|(name, min_width)| BreakpointEntry {
                name: name.to_string(),
                min_width,
            })
            .collect();
        Self { entries }
    }

    /// Name of the largest breakpoint whose min width is `<= width`, or
    /// `default` if none qualifies.
    #[must_use]
    pub fn resolve(&self, width: u32) -> &str {
        self.entries
            .iter()
            .find(|e| e.min_width <= width)
            .map_or(DEFAULT_BREAKPOINT, |e| e.name.as_str())
    }

    /// Minimum width of a breakpoint; `Some(0)` for `default`.
    #[must_use]
    pub fn min_width(&self, name: &str) -> Option<u32> {
        if name == DEFAULT_BREAKPOINT {
            return Some(0);
        }
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.min_width)
    }

    /// Whether `name` is `default` or a listed breakpoint.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.min_width(name).is_some()
    }

    /// Check if `width` falls at or above breakpoint `name`.
    ///
    /// Unknown names never match.
    #[must_use]
    pub fn at_least(&self, width: u32, name: &str) -> bool {
        self.min_width(name).is_some_and(|min| width >= min)
    }

    /// Entries in descending width order (excluding `default`).
    pub fn iter(&self) -> impl Iterator<Item = &BreakpointEntry> {
        self.entries.iter()
    }

    /// Names in descending width order, ending with `default`.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|e| e.name.as_str())
            .chain(std::iter::once(DEFAULT_BREAKPOINT))
    }

    /// Names at or below `name`, widest first, ending with `default`.
    ///
    /// Empty for unknown names.
    pub fn descending_from<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        let ceiling = self.min_width(name);
        self.names().filter(move |candidate| {
            ceiling.is_some_and(|max| self.min_width(candidate).is_some_and(|w| w <= max))
        })
    }

    /// Number of named breakpoints (excluding `default`).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no named breakpoints.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::tailwind()
    }
}

/// Width as written in configuration: a number or a `"768px"` string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[doc(hidden)]
pub enum RawWidth {
    Number(i64),
    Text(String),
}

fn parse_width(name: &str, raw: RawWidth) -> Result<u32, BreakpointError> {
    let value = match raw {
        RawWidth::Number(n) => n,
        RawWidth::Text(text) => {
            let trimmed = text.trim();
            let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
            digits
                .parse::<i64>()
                .map_err(|_| BreakpointError::InvalidWidth {
                    name: name.to_string(),
                    raw: text.clone(),
                })?
        }
    };
    if value < 0 {
        return Err(BreakpointError::NegativeWidth {
            name: name.to_string(),
            width: value,
        });
    }
    u32::try_from(value).map_err(|_| BreakpointError::InvalidWidth {
        name: name.to_string(),
        raw: value.to_string(),
    })
}

impl TryFrom<BTreeMap<String, RawWidth>> for BreakpointTable {
    type Error = BreakpointError;

    fn try_from(raw: BTreeMap<String, RawWidth>) -> Result<Self, Self::Error> {
        let mut pairs = Vec::with_capacity(raw.len());
        for (name, width) in raw {
            let px = parse_width(&name, width)?;
            pairs.push((name, px));
        }
        Self::new(pairs)
    }
}

impl From<BreakpointTable> for BTreeMap<String, u32> {
    fn from(table: BreakpointTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|e| (e.name, e.min_width))
            .collect()
    }
}
