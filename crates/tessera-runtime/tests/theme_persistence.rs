#![cfg(feature = "theme-persistence")]

//! Theme selection survives a restart through the JSON file backend.

use std::sync::Arc;

use tessera_core::{AccentColor, ThemeMode, ThemeState};
use tessera_runtime::{FileThemeStorage, ThemeContext, ThemeStorage};

#[test]
fn theme_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");

    {
        let ctx = ThemeContext::with_storage(Arc::new(FileThemeStorage::new(&path)));
        assert_eq!(ctx.current(), ThemeState::default());
        ctx.toggle_mode();
        ctx.set_accent(AccentColor::Purple);
    }

    let ctx = ThemeContext::with_storage(Arc::new(FileThemeStorage::new(&path)));
    assert_eq!(ctx.mode(), ThemeMode::Dark);
    assert_eq!(ctx.accent(), AccentColor::Purple);
}

#[test]
fn separate_keys_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileThemeStorage::new(dir.path().join("theme.json")));

    let site = ThemeContext::with_storage(storage.clone());
    let docs = ThemeContext::with_storage_key(storage.clone(), "docs-theme");
    site.set_mode(ThemeMode::Dark);
    docs.set_accent(AccentColor::Orange);

    assert_eq!(
        storage.load("ui-theme").unwrap(),
        Some(ThemeState::new(ThemeMode::Dark, AccentColor::Teal))
    );
    assert_eq!(
        storage.load("docs-theme").unwrap(),
        Some(ThemeState::new(ThemeMode::Light, AccentColor::Orange))
    );
}

#[test]
fn corrupt_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.json");
    std::fs::write(&path, b"\x00\x01garbage").unwrap();

    let ctx = ThemeContext::with_storage(Arc::new(FileThemeStorage::new(&path)));
    assert_eq!(ctx.current(), ThemeState::default());

    // The next change rewrites a valid file.
    ctx.set_mode(ThemeMode::Dark);
    let reloaded = FileThemeStorage::new(&path).load("ui-theme").unwrap();
    assert_eq!(reloaded.map(|t| t.mode), Some(ThemeMode::Dark));
}
