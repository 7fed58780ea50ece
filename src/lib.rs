//! CodexSync
//!
//! Offline-first catalog cache for army-list builder apps. Synchronizes a
//! three-level remote rulebook catalog (edition → faction → {sub-factions,
//! detachments}) into immutable local JSON snapshots, and serves every read
//! from those snapshots with no network dependency.
//!
//! # Sync Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use codexsync::{HttpCatalog, SnapshotStore, SyncManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), codexsync::CodexError> {
//!     let store = Arc::new(SnapshotStore::open_default("armybuilder")?);
//!     let remote = Arc::new(HttpCatalog::new("http://localhost:6745"));
//!
//!     let sync = SyncManager::new(store, remote);
//!     let synced = sync.sync_all(None).await?;
//!     println!("Synced editions: {:?}", synced);
//!     Ok(())
//! }
//! ```
//!
//! # Offline Read Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use codexsync::{CodexReader, SnapshotStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), codexsync::CodexError> {
//!     let store = Arc::new(SnapshotStore::open_default("armybuilder")?);
//!     let reader = CodexReader::new(store);
//!
//!     // Works offline!
//!     let factions = reader.factions("10e").await?;
//!     for faction in &factions {
//!         println!("{}", faction.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod reader;
pub mod remote;
pub mod store;
pub mod sync;

pub use catalog::{
    slug_id, CatalogRecord, DetachmentRecord, EditionRecord, FactionRecord, MinMax, SlotLimits,
    SubFactionRecord,
};
pub use error::{CodexError, CodexResult};
pub use reader::CodexReader;
pub use remote::{decode_documents, fetch_collection, HttpCatalog, RemoteCatalog};
pub use store::SnapshotStore;
pub use sync::{SyncManager, SyncMetadata};
