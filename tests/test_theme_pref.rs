//! Integration tests for the theme preference file.

mod common;

use std::fs;

use common::*;

#[test]
fn test_missing_file_defaults_to_dark() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;

    let theme = ThemePreference::load(theme_file_path(&dir))?;
    assert_eq!(theme, ThemePreference::Dark);
    Ok(())
}

#[test]
fn test_load_parses_dark_leniently() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = theme_file_path(&dir);
    fs::create_dir_all(path.parent().unwrap())?;

    for content in ["dark", "Dark", "DARK", "  dark\n"] {
        fs::write(&path, content)?;
        assert_eq!(
            ThemePreference::load(&path)?,
            ThemePreference::Dark,
            "content {content:?} should mean dark"
        );
    }

    // Anything else means light.
    for content in ["light", "darkish", ""] {
        fs::write(&path, content)?;
        assert_eq!(ThemePreference::load(&path)?, ThemePreference::Light);
    }
    Ok(())
}

#[test]
fn test_save_creates_parent_and_round_trips() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = theme_file_path(&dir);

    for theme in [ThemePreference::Dark, ThemePreference::Light] {
        theme.save(&path)?;
        assert_eq!(ThemePreference::load(&path)?, theme);
    }
    Ok(())
}

#[test]
fn test_toggle_twice_is_identity() {
    let mut theme = ThemePreference::default();
    assert!(theme.is_dark());

    theme.toggle();
    assert_eq!(theme, ThemePreference::Light);

    theme.toggle();
    assert_eq!(theme, ThemePreference::Dark);
}
