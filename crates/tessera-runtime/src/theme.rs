#![forbid(unsafe_code)]

//! Theme context: the current mode and accent, observable and persisted.
//!
//! The context is passed explicitly to whatever renders themed output. Every
//! change is written through to the [`ThemeStorage`] backend; a failing
//! backend is logged and otherwise ignored, so the in-memory theme always
//! reflects the latest call.
//!
//! ```
//! use std::sync::Arc;
//! use tessera_core::{AccentColor, ThemeMode};
//! use tessera_runtime::{MemoryThemeStorage, ThemeContext};
//!
//! let storage = Arc::new(MemoryThemeStorage::new());
//! let theme = ThemeContext::with_storage(storage.clone());
//! theme.toggle_mode();
//! theme.set_accent(AccentColor::Blue);
//!
//! let reopened = ThemeContext::with_storage(storage);
//! assert_eq!(reopened.mode(), ThemeMode::Dark);
//! assert_eq!(reopened.root_attributes(), [("class", "dark"), ("data-accent", "blue")]);
//! ```

use std::fmt;
use std::sync::Arc;

use tessera_core::{AccentColor, ThemeMode, ThemeState};

use crate::reactive::{Observable, Subscription};
use crate::theme_storage::{DEFAULT_THEME_KEY, MemoryThemeStorage, ThemeStorage};

/// Observable theme state with write-through persistence.
#[derive(Clone)]
pub struct ThemeContext {
    state: Observable<ThemeState>,
    storage: Arc<dyn ThemeStorage>,
    key: String,
}

impl ThemeContext {
    /// Context starting from `initial`, backed by in-memory storage.
    #[must_use]
    pub fn new(initial: ThemeState) -> Self {
        Self {
            state: Observable::new(initial),
            storage: Arc::new(MemoryThemeStorage::new()),
            key: DEFAULT_THEME_KEY.to_string(),
        }
    }

    /// Context restored from `storage` under the default key.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn ThemeStorage>) -> Self {
        Self::with_storage_key(storage, DEFAULT_THEME_KEY)
    }

    /// Context restored from `storage` under `key`.
    ///
    /// A missing or unreadable entry starts from [`ThemeState::default`].
    #[must_use]
    pub fn with_storage_key(storage: Arc<dyn ThemeStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let initial = match storage.load(&key) {
            Ok(Some(state)) => {
                tracing::debug!(
                    backend = storage.name(),
                    key = %key,
                    mode = %state.mode,
                    accent = %state.accent,
                    "restored theme"
                );
                state
            }
            Ok(None) => ThemeState::default(),
            Err(e) => {
                tracing::warn!(
                    backend = storage.name(),
                    key = %key,
                    error = %e,
                    "failed to load theme, using default"
                );
                ThemeState::default()
            }
        };
        Self {
            state: Observable::new(initial),
            storage,
            key,
        }
    }

    /// Current theme.
    #[must_use]
    pub fn current(&self) -> ThemeState {
        self.state.get()
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.state.with(|s| s.mode)
    }

    #[must_use]
    pub fn accent(&self) -> AccentColor {
        self.state.with(|s| s.accent)
    }

    /// Storage key this context persists under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the whole theme. Returns true if it changed.
    pub fn set(&self, theme: ThemeState) -> bool {
        let changed = self.state.set(theme);
        if changed {
            self.persist();
        }
        changed
    }

    /// Returns true if the mode changed.
    pub fn set_mode(&self, mode: ThemeMode) -> bool {
        let accent = self.accent();
        self.set(ThemeState::new(mode, accent))
    }

    /// Flip light/dark; returns the new mode.
    pub fn toggle_mode(&self) -> ThemeMode {
        let next = self.mode().toggled();
        self.set_mode(next);
        next
    }

    /// Returns true if the accent changed.
    pub fn set_accent(&self, accent: AccentColor) -> bool {
        let mode = self.mode();
        self.set(ThemeState::new(mode, accent))
    }

    /// Advance to the next accent in selector order; returns it.
    pub fn cycle_accent(&self) -> AccentColor {
        let next = self.accent().next();
        self.set_accent(next);
        next
    }

    /// Listen for theme changes. Drop the guard to stop listening.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&ThemeState) + 'static) -> Subscription {
        self.state.subscribe(listener)
    }

    /// Increments on every change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.state.version()
    }

    /// Write the current theme to storage. Returns false if the backend failed.
    pub fn persist(&self) -> bool {
        let state = self.current();
        match self.storage.save(&self.key, state) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    backend = self.storage.name(),
                    key = %self.key,
                    error = %e,
                    "failed to persist theme"
                );
                false
            }
        }
    }

    /// Attributes for the document root element.
    #[must_use]
    pub fn root_attributes(&self) -> [(&'static str, &'static str); 2] {
        let ThemeState { mode, accent } = self.current();
        [("class", mode.class_name()), ("data-accent", accent.label())]
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(ThemeState::default())
    }
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("state", &self.current())
            .field("backend", &self.storage.name())
            .field("key", &self.key)
            .finish()
    }
}
