//! Settings store - Persisted provider credential
//!
//! The credential lives in `settings.toml` under a namespaced table:
//!
//! ```toml
//! [geolab-settings]
//! api_key = "sk-..."
//! ```
//!
//! [`FileSettingsStore`] reads the file once when opened and writes it back
//! on every change. Other content in the file is preserved.
//!
//! Location priority:
//! 1. `GEOLAB_SETTINGS` env var
//! 2. platform data dir (`settings.toml`)
//! 3. `./.geolab/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use anyhow::{Context, Result};
use toml_edit::{value, DocumentMut, Item, Table};

/// Env var overriding the settings file location
pub const SETTINGS_ENV: &str = "GEOLAB_SETTINGS";

const NAMESPACE: &str = "geolab-settings";
const API_KEY: &str = "api_key";

/// Read/write access to the provider credential
pub trait CredentialStore: Send + Sync {
    /// Current credential, if one is set
    fn api_key(&self) -> Option<String>;

    /// Replace the credential
    fn set_api_key(&self, key: &str) -> Result<()>;

    /// Remove the credential
    fn clear(&self) -> Result<()>;
}

/// Credential store backed by a TOML file
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    api_key: RwLock<Option<String>>,
}

impl FileSettingsStore {
    /// Open the store at the default location
    pub fn open_default() -> Result<Self> {
        Self::open(default_path())
    }

    /// Open the store at a specific path; a missing file means no credential
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let api_key = if path.exists() {
            let doc = read_document(&path)?;
            doc.get(NAMESPACE)
                .and_then(|t| t.get(API_KEY))
                .and_then(|v| v.as_str())
                .filter(|k| !k.is_empty())
                .map(str::to_string)
        } else {
            None
        };

        tracing::debug!(path = %path.display(), has_key = api_key.is_some(), "settings loaded");

        Ok(Self {
            path,
            api_key: RwLock::new(api_key),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `api_key` (or remove it) and keep everything else
    fn persist(&self, api_key: Option<&str>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut doc = if self.path.exists() {
            read_document(&self.path)?
        } else {
            DocumentMut::new()
        };

        match api_key {
            Some(key) => {
                if !doc.contains_table(NAMESPACE) {
                    doc.insert(NAMESPACE, Item::Table(Table::new()));
                }
                doc[NAMESPACE][API_KEY] = value(key);
            }
            None => {
                if let Some(table) = doc.get_mut(NAMESPACE).and_then(Item::as_table_mut) {
                    table.remove(API_KEY);
                }
            }
        }

        fs::write(&self.path, doc.to_string())
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

impl CredentialStore for FileSettingsStore {
    fn api_key(&self) -> Option<String> {
        self.api_key.read().ok().and_then(|k| k.clone())
    }

    fn set_api_key(&self, key: &str) -> Result<()> {
        let key = key.trim();
        if key.is_empty() {
            return self.clear();
        }
        self.persist(Some(key))?;
        let mut slot = self
            .api_key
            .write()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        *slot = Some(key.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.persist(None)?;
        let mut slot = self
            .api_key
            .write()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        *slot = None;
        Ok(())
    }
}

/// In-memory credential store
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    api_key: RwLock<Option<String>>,
}

impl MemorySettingsStore {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: RwLock::new(api_key),
        }
    }
}

impl CredentialStore for MemorySettingsStore {
    fn api_key(&self) -> Option<String> {
        self.api_key.read().ok().and_then(|k| k.clone())
    }

    fn set_api_key(&self, key: &str) -> Result<()> {
        let mut slot = self
            .api_key
            .write()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        *slot = Some(key.trim().to_string()).filter(|k| !k.is_empty());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .api_key
            .write()
            .map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        *slot = None;
        Ok(())
    }
}

/// Default settings file location
pub fn default_path() -> PathBuf {
    if let Ok(path) = std::env::var(SETTINGS_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(dirs) = crate::config::project_dirs() {
        return dirs.data_dir().join("settings.toml");
    }

    PathBuf::from(".geolab").join("settings.toml")
}

/// Show only the edges of a credential
pub fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

fn read_document(path: &Path) -> Result<DocumentMut> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    content
        .parse::<DocumentMut>()
        .with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_has_no_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::open(dir.path().join("settings.toml")).unwrap();
        assert_eq!(store.api_key(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let store = FileSettingsStore::open(&path).unwrap();
        store.set_api_key("  sk-abc123  ").unwrap();
        assert_eq!(store.api_key().as_deref(), Some("sk-abc123"));

        let reopened = FileSettingsStore::open(&path).unwrap();
        assert_eq!(reopened.api_key().as_deref(), Some("sk-abc123"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[geolab-settings]"));
    }

    #[test]
    fn test_overwrite_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let store = FileSettingsStore::open(&path).unwrap();
        store.set_api_key("first").unwrap();
        store.set_api_key("second").unwrap();
        assert_eq!(FileSettingsStore::open(&path).unwrap().api_key().as_deref(), Some("second"));

        store.clear().unwrap();
        assert_eq!(store.api_key(), None);
        assert_eq!(FileSettingsStore::open(&path).unwrap().api_key(), None);
    }

    #[test]
    fn test_preserves_other_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "# my notes\n[theme]\nmode = \"dark\"\n").unwrap();

        let store = FileSettingsStore::open(&path).unwrap();
        store.set_api_key("sk-xyz").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("# my notes"));
        assert!(content.contains("mode = \"dark\""));
        assert!(content.contains("api_key = \"sk-xyz\""));
    }

    #[test]
    fn test_blank_key_clears() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::open(dir.path().join("settings.toml")).unwrap();
        store.set_api_key("sk").unwrap();
        store.set_api_key("   ").unwrap();
        assert_eq!(store.api_key(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySettingsStore::default();
        assert_eq!(store.api_key(), None);
        store.set_api_key("k").unwrap();
        assert_eq!(store.api_key().as_deref(), Some("k"));
        store.clear().unwrap();
        assert_eq!(store.api_key(), None);
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("sk-1234567890"), "sk-1…7890");
        assert_eq!(mask("short"), "*****");
    }
}
