#![forbid(unsafe_code)]

//! Core: pixel geometry, render modes, theme values, and the logging facade.

pub mod geometry;
pub mod logging;
pub mod render_mode;
pub mod theme;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

pub use geometry::{Length, Viewport};
pub use render_mode::RenderMode;
pub use theme::{AccentColor, ThemeMode, ThemeState};
