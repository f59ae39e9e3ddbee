#![forbid(unsafe_code)]

//! Geometric primitives in CSS pixel space.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Viewport dimensions in CSS pixels.
///
/// Only the width drives breakpoint resolution; the height is carried so
/// bindings can forward a single resize observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: u32,
    /// Height in CSS pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a new viewport size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport with only a known width.
    #[inline]
    pub const fn from_width(width: u32) -> Self {
        Self { width, height: 0 }
    }

    /// Check if the viewport has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A CSS length used for gaps and row heights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Length {
    /// Absolute CSS pixels.
    Px(f32),
    /// Multiples of the root font size.
    Rem(f32),
}

impl Length {
    /// Zero pixels.
    pub const ZERO: Self = Self::Px(0.0);

    /// Resolve to pixels given the root font size in pixels.
    #[must_use]
    pub fn to_px(self, root_font_px: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Rem(rem) => rem * root_font_px,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Rem(v) => write!(f, "{v}rem"),
        }
    }
}
