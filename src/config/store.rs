//! Durable key/value preferences (currently only the last search term).

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Result type alias for preference store operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Key holding the last search term typed by the user.
pub const SEARCH_KEY: &str = "search";

/// A string-valued slot store that survives restarts.
pub trait PreferenceStore: std::fmt::Debug + Send {
    /// Read `key`, `None` when it was never written.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `key`.
    ///
    /// # Errors
    /// - Returns `Err` when the backing medium cannot be written
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// JSON-file backed store (`{"search": "..."}`).
#[derive(Debug)]
pub struct FilePreferenceStore {
    /// Backing file.
    path: PathBuf,
    /// In-memory copy of the file.
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// What: Open the store at `path`, loading existing values.
    ///
    /// Inputs:
    /// - `path`: JSON file location (need not exist yet).
    ///
    /// Output:
    /// - Store with whatever could be read; a missing or corrupt file starts empty.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "[Persist] Ignoring corrupt preference file");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.values.insert(key.to_string(), value.to_string());
        let s = serde_json::to_string(&self.values)?;
        fs::write(&self.path, &s)
            .map_err(|e| format!("Failed to write {}: {e}", self.path.display()))?;
        tracing::trace!(path = %self.path.display(), key, "[Persist] Preference written");
        Ok(())
    }
}

/// Volatile store for tests and print mode.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    /// Stored values.
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Store pre-populated with `key = value`.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// What: Read the persisted search term or fall back to `default`.
///
/// Inputs:
/// - `store`: Preference store.
/// - `default`: Term used when nothing (or an empty string) was stored.
///
/// Output:
/// - The term to seed the session with.
#[must_use]
pub fn load_search_term(store: &dyn PreferenceStore, default: &str) -> String {
    store
        .get(SEARCH_KEY)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
