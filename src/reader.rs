//! Catalog Reader
//!
//! Read-only façade over the snapshot store for the presentation layer.
//! Every call is served from disk; nothing here touches the network. Once a
//! sync run has reported an edition as successful, every read below is
//! guaranteed to find a complete, decodable snapshot.

use std::sync::Arc;

use crate::catalog::paths;
use crate::catalog::{DetachmentRecord, FactionRecord, SubFactionRecord};
use crate::error::{CodexError, CodexResult};
use crate::store::SnapshotStore;
use crate::sync::SyncMetadata;

pub struct CodexReader {
    store: Arc<SnapshotStore>,
}

impl CodexReader {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    /// The factions of an edition.
    pub async fn factions(&self, edition: &str) -> CodexResult<Vec<FactionRecord>> {
        self.store.get(&paths::factions_snapshot(edition)).await
    }

    /// The sub-factions of a faction, addressed by its derived identifier.
    pub async fn subfactions(
        &self,
        edition: &str,
        faction_id: &str,
    ) -> CodexResult<Vec<SubFactionRecord>> {
        self.store
            .get(&paths::subfactions_snapshot(edition, faction_id))
            .await
    }

    /// The detachments of a faction, addressed by its derived identifier.
    pub async fn detachments(
        &self,
        edition: &str,
        faction_id: &str,
    ) -> CodexResult<Vec<DetachmentRecord>> {
        self.store
            .get(&paths::detachments_snapshot(edition, faction_id))
            .await
    }

    /// Is the edition available offline?
    pub async fn has_edition(&self, edition: &str) -> bool {
        self.store.exists(&paths::factions_snapshot(edition)).await
    }

    /// Metadata of the last completed sync run, `None` if never synced.
    pub async fn last_sync(&self) -> CodexResult<Option<SyncMetadata>> {
        match self.store.get(paths::SYNC_METADATA).await {
            Ok(metadata) => Ok(Some(metadata)),
            Err(CodexError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
