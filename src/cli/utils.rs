//! CLI utility functions
//!
//! Helpers shared across commands: catalog loading, the tutoring client,
//! and credential resolution.

use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::warn;

use crate::config::Config;
use crate::core::catalog::Catalog;
use crate::settings::{CredentialStore, FileSettingsStore, MemorySettingsStore};
use crate::tutor::{FallbackTable, KnowledgeContext, OpenAiCompatibleProvider, TutorClient};

/// Load the built-in catalog
pub fn load_catalog() -> Result<Catalog> {
    Catalog::builtin().context("Built-in catalog is inconsistent")
}

/// Build a tutoring client from config
pub fn tutor_client(config: &Config) -> Result<TutorClient> {
    let provider = OpenAiCompatibleProvider::from_config(&config.provider)?;
    Ok(TutorClient::new(
        Arc::new(provider),
        FallbackTable::builtin(),
        &config.provider,
    ))
}

/// Settings store at the default location; an unreadable file counts as empty
pub fn open_credential_store() -> Box<dyn CredentialStore> {
    match FileSettingsStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("ignoring unreadable settings file: {e:#}");
            Box::new(MemorySettingsStore::default())
        }
    }
}

/// Explicit key if given, else the stored one
pub fn resolve_credential(explicit: Option<String>, store: &dyn CredentialStore) -> Option<String> {
    explicit
        .filter(|k| !k.trim().is_empty())
        .or_else(|| store.api_key())
}

/// Prompt context for an id: the catalog entry, or the generic subject
pub fn knowledge_context(catalog: &Catalog, id: &str) -> KnowledgeContext {
    catalog
        .knowledge_point(id)
        .map(KnowledgeContext::from)
        .unwrap_or_else(KnowledgeContext::generic)
}

/// The "not found" state shown for unknown ids
pub fn print_not_found(id: &str) {
    println!("{} {}", "Not found:".yellow(), id);
    println!("{}", "Run 'geolab ls' to see available knowledge points.".dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_wins() {
        let store = MemorySettingsStore::new(Some("stored".into()));
        assert_eq!(
            resolve_credential(Some("explicit".into()), &store).as_deref(),
            Some("explicit")
        );
    }

    #[test]
    fn test_blank_explicit_key_uses_store() {
        let store = MemorySettingsStore::new(Some("stored".into()));
        assert_eq!(resolve_credential(Some("  ".into()), &store).as_deref(), Some("stored"));
        assert_eq!(resolve_credential(None, &store).as_deref(), Some("stored"));
    }

    #[test]
    fn test_no_key_anywhere() {
        let store = MemorySettingsStore::default();
        assert_eq!(resolve_credential(None, &store), None);
    }

    #[test]
    fn test_unknown_id_gets_generic_context() {
        let catalog = load_catalog().unwrap();
        assert_eq!(knowledge_context(&catalog, "nope"), KnowledgeContext::generic());
        assert_eq!(knowledge_context(&catalog, "ocean-currents").title, "洋流");
    }
}
