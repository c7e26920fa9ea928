//! geolab - Interactive geography lab
//!
//! A static catalog of high-school geography knowledge points and an AI
//! tutoring assistant scoped to one point at a time.
//!
//! ## Key Concepts
//!
//! - **Catalog**: Category → Subcategory → KnowledgePoint, indexed by id
//! - **Tutor**: one provider call per question, canned fallback on any failure
//! - **Settings**: the provider API key, persisted under `[geolab-settings]`
//! - **Edge endpoints**: `/api/ai/tutor`, `/api/hints`, `/api/health`

pub mod cli;
pub mod config;
pub mod core;
pub mod server;
pub mod settings;
pub mod tutor;

pub use core::catalog::{Catalog, CatalogError};
pub use core::diagram::Diagram;
pub use core::knowledge::{Category, KnowledgePoint, Subcategory};
pub use settings::{CredentialStore, FileSettingsStore, MemorySettingsStore};
pub use tutor::{ChatSession, TutorClient, TutorReply, TutorRequest};
