//! Persistence backends for the theme selection.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                ThemeContext                  │
//! │   - Observable<ThemeState>                   │
//! │   - writes through on every change           │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │                ThemeStorage                  │
//! │   - MemoryThemeStorage: ephemeral            │
//! │   - FileThemeStorage: JSON (feature-gated)   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Failure Modes
//!
//! | Failure                          | Behavior                          |
//! |----------------------------------|-----------------------------------|
//! | `StorageError::Io`               | Returned; in-memory theme kept    |
//! | `StorageError::Serialization`    | Returned; caller uses its default |
//! | Format version mismatch          | Treated as empty, logged          |
//!
//! # Feature Gates
//!
//! - `theme-persistence`: enables [`FileThemeStorage`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::RwLock;

use tessera_core::ThemeState;

/// Key the site templates store the theme under.
pub const DEFAULT_THEME_KEY: &str = "ui-theme";

/// Errors from theme storage backends.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error during file operations.
    Io(std::io::Error),
    /// JSON encode/decode failure.
    #[cfg(feature = "theme-persistence")]
    Serialization(String),
    /// Internal state is unusable (e.g. a poisoned lock).
    Corruption(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "theme-persistence")]
            StorageError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            StorageError::Corruption(msg) => write!(f, "storage corruption: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            #[cfg(feature = "theme-persistence")]
            StorageError::Serialization(_) => None,
            StorageError::Corruption(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A place to keep theme selections between sessions.
pub trait ThemeStorage: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Stored theme for `key`, or `None` on first run.
    fn load(&self, key: &str) -> StorageResult<Option<ThemeState>>;

    /// Store `theme` under `key`.
    fn save(&self, key: &str, theme: ThemeState) -> StorageResult<()>;

    /// Forget `key`.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory backend; state is lost when the process exits.
#[derive(Default)]
pub struct MemoryThemeStorage {
    entries: RwLock<BTreeMap<String, ThemeState>>,
}

impl MemoryThemeStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, theme: ThemeState) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.into(), theme);
        Self {
            entries: RwLock::new(entries),
        }
    }
}

fn poisoned<T>(_: T) -> StorageError {
    StorageError::Corruption("lock poisoned".into())
}

impl ThemeStorage for MemoryThemeStorage {
    fn name(&self) -> &str {
        "MemoryThemeStorage"
    }

    fn load(&self, key: &str) -> StorageResult<Option<ThemeState>> {
        let guard = self.entries.read().map_err(poisoned)?;
        Ok(guard.get(key).copied())
    }

    fn save(&self, key: &str, theme: ThemeState) -> StorageResult<()> {
        let mut guard = self.entries.write().map_err(poisoned)?;
        guard.insert(key.to_string(), theme);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut guard = self.entries.write().map_err(poisoned)?;
        guard.remove(key);
        Ok(())
    }
}

impl fmt::Debug for MemoryThemeStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.entries.read().map(|g| g.len()).unwrap_or(0);
        f.debug_struct("MemoryThemeStorage")
            .field("entries", &count)
            .finish()
    }
}

#[cfg(feature = "theme-persistence")]
mod file_storage {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::fs::{self, File};
    use std::io::{BufReader, BufWriter, Write};
    use std::path::{Path, PathBuf};

    #[derive(Serialize, Deserialize)]
    struct ThemeFile {
        format_version: u32,
        entries: BTreeMap<String, ThemeState>,
    }

    impl ThemeFile {
        const FORMAT_VERSION: u32 = 1;

        fn empty() -> Self {
            Self {
                format_version: Self::FORMAT_VERSION,
                entries: BTreeMap::new(),
            }
        }
    }

    /// JSON file backend.
    ///
    /// ```json
    /// { "format_version": 1, "entries": { "ui-theme": { "mode": "dark", "accent": "blue" } } }
    /// ```
    ///
    /// Writes go to `{path}.tmp` first and are renamed into place.
    pub struct FileThemeStorage {
        path: PathBuf,
    }

    impl FileThemeStorage {
        /// Storage at `path`; the file is created on first save.
        #[must_use]
        pub fn new(path: impl AsRef<Path>) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
            }
        }

        /// Path of the backing file.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn temp_path(&self) -> PathBuf {
            let mut tmp = self.path.clone();
            tmp.set_extension("json.tmp");
            tmp
        }

        fn read_file(&self) -> StorageResult<ThemeFile> {
            if !self.path.exists() {
                return Ok(ThemeFile::empty());
            }
            let reader = BufReader::new(File::open(&self.path)?);
            let file: ThemeFile = serde_json::from_reader(reader).map_err(|e| {
                StorageError::Serialization(format!("failed to parse theme file: {e}"))
            })?;
            if file.format_version != ThemeFile::FORMAT_VERSION {
                tracing::warn!(
                    stored = file.format_version,
                    expected = ThemeFile::FORMAT_VERSION,
                    "theme file format version mismatch, ignoring stored themes"
                );
                return Ok(ThemeFile::empty());
            }
            Ok(file)
        }

        fn write_file(&self, file: &ThemeFile) -> StorageResult<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let tmp_path = self.temp_path();
            {
                let mut writer = BufWriter::new(File::create(&tmp_path)?);
                serde_json::to_writer_pretty(&mut writer, file).map_err(|e| {
                    StorageError::Serialization(format!("failed to serialize themes: {e}"))
                })?;
                writer.flush()?;
                writer.get_ref().sync_all()?;
            }
            fs::rename(&tmp_path, &self.path)?;
            tracing::debug!(
                path = %self.path.display(),
                entries = file.entries.len(),
                "saved theme file"
            );
            Ok(())
        }
    }

    impl ThemeStorage for FileThemeStorage {
        fn name(&self) -> &str {
            "FileThemeStorage"
        }

        fn load(&self, key: &str) -> StorageResult<Option<ThemeState>> {
            Ok(self.read_file()?.entries.get(key).copied())
        }

        fn save(&self, key: &str, theme: ThemeState) -> StorageResult<()> {
            // A corrupt file is replaced rather than blocking the save.
            let mut file = self.read_file().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "discarding unreadable theme file");
                ThemeFile::empty()
            });
            file.entries.insert(key.to_string(), theme);
            self.write_file(&file)
        }

        fn remove(&self, key: &str) -> StorageResult<()> {
            let mut file = self.read_file()?;
            if file.entries.remove(key).is_some() {
                self.write_file(&file)?;
            }
            Ok(())
        }
    }

    impl fmt::Debug for FileThemeStorage {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("FileThemeStorage")
                .field("path", &self.path)
                .finish()
        }
    }
}

#[cfg(feature = "theme-persistence")]
pub use file_storage::FileThemeStorage;

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{AccentColor, ThemeMode};

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryThemeStorage::new();
        assert_eq!(storage.load(DEFAULT_THEME_KEY).unwrap(), None);
        let theme = ThemeState::new(ThemeMode::Dark, AccentColor::Blue);
        storage.save(DEFAULT_THEME_KEY, theme).unwrap();
        assert_eq!(storage.load(DEFAULT_THEME_KEY).unwrap(), Some(theme));
        storage.remove(DEFAULT_THEME_KEY).unwrap();
        assert_eq!(storage.load(DEFAULT_THEME_KEY).unwrap(), None);
    }

    #[test]
    fn memory_storage_keys_are_independent() {
        let dark = ThemeState::new(ThemeMode::Dark, AccentColor::Teal);
        let storage = MemoryThemeStorage::with_entry("docs-theme", dark);
        assert_eq!(storage.load("ui-theme").unwrap(), None);
        assert_eq!(storage.load("docs-theme").unwrap(), Some(dark));
        assert_eq!(format!("{storage:?}"), "MemoryThemeStorage { entries: 1 }");
    }

    #[cfg(feature = "theme-persistence")]
    mod file {
        use super::*;

        #[test]
        fn file_storage_round_trip() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested").join("theme.json");
            let storage = FileThemeStorage::new(&path);
            assert_eq!(storage.load(DEFAULT_THEME_KEY).unwrap(), None);

            let theme = ThemeState::new(ThemeMode::Dark, AccentColor::Purple);
            storage.save(DEFAULT_THEME_KEY, theme).unwrap();
            assert!(path.exists());

            let reopened = FileThemeStorage::new(&path);
            assert_eq!(reopened.load(DEFAULT_THEME_KEY).unwrap(), Some(theme));

            let raw: serde_json::Value =
                serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
            assert_eq!(raw["format_version"], 1);
            assert_eq!(raw["entries"]["ui-theme"]["accent"], "purple");
        }

        #[test]
        fn corrupt_file_is_reported_then_replaced() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("theme.json");
            std::fs::write(&path, "{not json").unwrap();
            let storage = FileThemeStorage::new(&path);
            assert!(matches!(
                storage.load(DEFAULT_THEME_KEY),
                Err(StorageError::Serialization(_))
            ));
            let theme = ThemeState::default();
            storage.save(DEFAULT_THEME_KEY, theme).unwrap();
            assert_eq!(storage.load(DEFAULT_THEME_KEY).unwrap(), Some(theme));
        }

        #[test]
        fn version_mismatch_reads_as_empty() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("theme.json");
            std::fs::write(
                &path,
                r#"{"format_version":99,"entries":{"ui-theme":{"mode":"dark","accent":"blue"}}}"#,
            )
            .unwrap();
            let storage = FileThemeStorage::new(&path);
            assert_eq!(storage.load(DEFAULT_THEME_KEY).unwrap(), None);
        }
    }
}
