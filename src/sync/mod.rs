//! Sync Orchestrator
//!
//! Walks the edition → faction → {sub-factions, detachments} hierarchy,
//! fetching concurrently in dependency order and persisting every collection
//! as an immutable local snapshot.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use codexsync::{HttpCatalog, SnapshotStore, SyncManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), codexsync::CodexError> {
//!     let store = Arc::new(SnapshotStore::open_default("armybuilder")?);
//!     let remote = Arc::new(HttpCatalog::new("http://localhost:6745"));
//!     let sync = SyncManager::new(store, remote);
//!
//!     // Sync two pinned editions; the result lists the ones that
//!     // downloaded completely.
//!     let synced = sync
//!         .sync_all(Some(vec!["9e".to_string(), "10e".to_string()]))
//!         .await?;
//!     println!("Up to date: {:?}", synced);
//!     Ok(())
//! }
//! ```

pub mod manager;

pub use manager::{SyncManager, SyncMetadata};
