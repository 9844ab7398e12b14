//! Persisted user settings.
//!
//! A flat string-to-string store. Only the theme is persisted today.

use sensei_types::{Theme, THEME_KEY};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Settings file {path} is not a JSON object: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("No settings directory available")]
    NoHome,
}

pub trait SettingsStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// In-process store, used by tests and as a fallback.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/sensei/settings.json`.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        Ok(config_dir()?.join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, SettingsError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        let io_err = |source| SettingsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(&values).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, body).map_err(io_err)
    }
}

/// `<config dir>/sensei`, where settings and the log file live.
pub fn config_dir() -> Result<PathBuf, SettingsError> {
    dirs::config_dir()
        .map(|dir| dir.join("sensei"))
        .ok_or(SettingsError::NoHome)
}

/// Current theme, persisted through a [`SettingsStore`].
pub struct ThemeManager {
    store: Box<dyn SettingsStore>,
    theme: Theme,
}

impl ThemeManager {
    /// Read the stored theme; anything but `"dark"` means light.
    pub fn load(store: Box<dyn SettingsStore>) -> Self {
        let stored = match store.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read theme, using light");
                None
            }
        };
        let theme = Theme::from_stored(stored.as_deref());
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch theme and persist the new value.
    ///
    /// The in-memory theme flips even when persisting fails.
    pub fn toggle(&mut self) -> Result<Theme, SettingsError> {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }

    pub fn stored(&self) -> Result<Option<String>, SettingsError> {
        self.store.get(THEME_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested/settings.json"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/settings.json");

        let mut store = FileStore::new(&path);
        store.set("theme", "dark").unwrap();
        store.set("other", "x").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            FileStore::new(&path).get("theme"),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let manager = ThemeManager::load(Box::new(MemoryStore::new()));
        assert_eq!(manager.theme(), Theme::Light);

        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "purple").unwrap();
        assert_eq!(ThemeManager::load(Box::new(store)).theme(), Theme::Light);
    }

    #[test]
    fn test_theme_toggle_twice_restores_value() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        let mut manager = ThemeManager::load(Box::new(store));
        assert_eq!(manager.theme(), Theme::Dark);

        assert_eq!(manager.toggle().unwrap(), Theme::Light);
        assert_eq!(manager.stored().unwrap().as_deref(), Some("light"));
        assert_eq!(manager.toggle().unwrap(), Theme::Dark);
        assert_eq!(manager.stored().unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_theme_survives_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut manager = ThemeManager::load(Box::new(FileStore::new(&path)));
        manager.toggle().unwrap();

        let reloaded = ThemeManager::load(Box::new(FileStore::new(&path)));
        assert_eq!(reloaded.theme(), Theme::Dark);
    }
}
