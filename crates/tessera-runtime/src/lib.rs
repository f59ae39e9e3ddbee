#![forbid(unsafe_code)]

//! Runtime glue for Tessera grids.
//!
//! `tessera-layout` is pure; this crate holds the state that changes over
//! time:
//!
//! - [`Observable`] / [`Subscription`] - versioned values with RAII listeners
//! - [`GridBinding`] - a responsive grid following a viewport observable
//! - [`ThemeContext`] - light/dark mode and accent, persisted via [`ThemeStorage`]
//!
//! Everything here is single-threaded (`Rc`-based), matching a UI event
//! loop. Storage backends are `Send + Sync` so they can be shared with
//! background work.
//!
//! ```
//! use tessera_core::{RenderMode, Viewport};
//! use tessera_layout::presets;
//! use tessera_runtime::{GridBinding, Observable};
//!
//! let viewport = Observable::new(Viewport::new(800, 600));
//! let binding = GridBinding::mount(
//!     presets::bento_grid().unwrap(),
//!     &viewport,
//!     6,
//!     RenderMode::Full,
//! );
//! assert_eq!(binding.layout().columns(), 3);
//!
//! viewport.set(Viewport::new(1440, 900));
//! assert_eq!(binding.breakpoint(), "xl");
//! assert_eq!(binding.layout().columns(), 6);
//! ```

pub mod grid_binding;
pub mod reactive;
pub mod theme;
pub mod theme_storage;

pub use grid_binding::GridBinding;
pub use reactive::{Observable, Subscription};
pub use theme::ThemeContext;
#[cfg(feature = "theme-persistence")]
pub use theme_storage::FileThemeStorage;
pub use theme_storage::{
    DEFAULT_THEME_KEY, MemoryThemeStorage, StorageError, StorageResult, ThemeStorage,
};
