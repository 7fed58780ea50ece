//! Sync Manager
//!
//! Coordinates the concurrent download of catalog editions into the local
//! snapshot store. Editions sync independently of each other; within an
//! edition, the faction list gates the per-faction sub-collection fetches.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::catalog::paths;
use crate::catalog::{CatalogRecord, DetachmentRecord, EditionRecord, FactionRecord, SubFactionRecord};
use crate::error::{CodexError, CodexResult};
use crate::remote::{fetch_collection, RemoteCatalog};
use crate::store::SnapshotStore;

/// Record of the last completed sync run, stored next to the snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncMetadata {
    /// When the run finished.
    pub last_sync_at: DateTime<Utc>,
    /// Editions that fully synchronized in that run.
    pub editions: Vec<String>,
}

/// Orchestrates the concurrent fetch-and-persist walk of the catalog.
///
/// The manager is the only writer of the snapshot store it is given; other
/// components read through [`CodexReader`](crate::CodexReader).
pub struct SyncManager {
    store: Arc<SnapshotStore>,
    remote: Arc<dyn RemoteCatalog>,
}

impl SyncManager {
    pub fn new(store: Arc<SnapshotStore>, remote: Arc<dyn RemoteCatalog>) -> Self {
        Self { store, remote }
    }

    /// Synchronize the given editions, or every edition the remote store
    /// advertises when `editions` is `None`.
    ///
    /// Returns the editions that downloaded completely, in the caller's (or
    /// discovery) order. An edition whose sync fails in any leaf fetch or
    /// write is omitted from the result and leaves sibling editions
    /// untouched; only a failure of the edition-discovery pre-fetch fails
    /// the call itself.
    pub async fn sync_all(&self, editions: Option<Vec<String>>) -> CodexResult<Vec<String>> {
        let editions = match editions {
            Some(list) => list,
            None => self.fetch_edition_ids().await?,
        };

        if editions.is_empty() {
            info!("No editions to synchronize");
            return Ok(Vec::new());
        }

        info!("Synchronizing {} edition(s)", editions.len());

        let mut tasks = JoinSet::new();
        for edition in editions.iter().cloned() {
            let store = self.store.clone();
            let remote = self.remote.clone();
            tasks.spawn(async move {
                let outcome = Self::sync_edition(&store, &remote, &edition).await;
                (edition, outcome)
            });
        }

        let mut completed = HashSet::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((edition, Ok(()))) => {
                    debug!("Edition synchronized: {}", edition);
                    completed.insert(edition);
                }
                Ok((edition, Err(e))) => {
                    warn!("Edition {} failed to sync: {}", edition, e);
                }
                Err(e) => {
                    warn!("Edition sync task aborted: {}", e);
                }
            }
        }

        let synced: Vec<String> = editions
            .into_iter()
            .filter(|edition| completed.contains(edition))
            .collect();

        self.record_sync(&synced).await;

        info!("Sync finished: {} edition(s) up to date", synced.len());
        Ok(synced)
    }

    /// Resolve the available edition identifiers from the remote store.
    ///
    /// Edition documents without a key cannot be addressed and are skipped.
    async fn fetch_edition_ids(&self) -> CodexResult<Vec<String>> {
        let records: Vec<EditionRecord> =
            fetch_collection(self.remote.as_ref(), paths::EDITIONS).await?;
        Ok(records.into_iter().filter_map(|record| record.key).collect())
    }

    /// Download one edition: the faction list first, then every faction's
    /// sub-collections concurrently.
    ///
    /// The edition counts as synchronized only if every spawned task
    /// succeeded; the first failure is reported and fails the edition.
    async fn sync_edition(
        store: &Arc<SnapshotStore>,
        remote: &Arc<dyn RemoteCatalog>,
        edition: &str,
    ) -> CodexResult<()> {
        let factions: Vec<FactionRecord> =
            fetch_collection(remote.as_ref(), &paths::remote_factions(edition)).await?;
        store.put(&paths::factions_snapshot(edition), &factions).await?;

        let mut tasks = JoinSet::new();
        for faction in &factions {
            // Derived once per faction and reused by both fetches, so a
            // remote rename mid-run cannot fragment the snapshot paths.
            let faction_id = faction.doc_id();

            tasks.spawn(Self::sync_subfactions(
                store.clone(),
                remote.clone(),
                edition.to_string(),
                faction_id.clone(),
            ));
            tasks.spawn(Self::sync_detachments(
                store.clone(),
                remote.clone(),
                edition.to_string(),
                faction_id,
            ));
        }

        let mut failure: Option<CodexError> = None;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    failure.get_or_insert(e);
                }
                Err(e) => {
                    failure.get_or_insert(CodexError::Internal(format!(
                        "sync task panicked: {}",
                        e
                    )));
                }
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn sync_subfactions(
        store: Arc<SnapshotStore>,
        remote: Arc<dyn RemoteCatalog>,
        edition: String,
        faction_id: String,
    ) -> CodexResult<()> {
        let subfactions: Vec<SubFactionRecord> =
            fetch_collection(remote.as_ref(), &paths::remote_subfactions(&edition, &faction_id))
                .await?;
        store
            .put(&paths::subfactions_snapshot(&edition, &faction_id), &subfactions)
            .await
    }

    async fn sync_detachments(
        store: Arc<SnapshotStore>,
        remote: Arc<dyn RemoteCatalog>,
        edition: String,
        faction_id: String,
    ) -> CodexResult<()> {
        let detachments: Vec<DetachmentRecord> =
            fetch_collection(remote.as_ref(), &paths::remote_detachments(&edition, &faction_id))
                .await?;
        store
            .put(&paths::detachments_snapshot(&edition, &faction_id), &detachments)
            .await
    }

    /// Best-effort record of the completed run; a failure to write the
    /// metadata artifact never fails a sync that already finished.
    async fn record_sync(&self, synced: &[String]) {
        let metadata = SyncMetadata {
            last_sync_at: Utc::now(),
            editions: synced.to_vec(),
        };

        if let Err(e) = self.store.put(paths::SYNC_METADATA, &metadata).await {
            warn!("Failed to record sync metadata: {}", e);
        }
    }
}
