//! Common test utilities for sync tests
//!
//! Provides shared helper functions for:
//! - Creating temp-rooted snapshot stores
//! - Building an in-memory remote catalog fixture with per-path
//!   failures and delays
//! - Building catalog documents in the remote wire format

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::sync::Mutex;

use codexsync::{CodexError, CodexResult, RemoteCatalog, SnapshotStore};

pub fn create_test_store() -> (Arc<SnapshotStore>, TempDir) {
    let tmp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = SnapshotStore::open(tmp_dir.path()).expect("Failed to open snapshot store");
    (Arc::new(store), tmp_dir)
}

/// In-memory stand-in for the remote hierarchical document store.
///
/// Collections are keyed by their slash-separated path. Paths can be marked
/// as failing (returning a `Remote` error) or as delayed; every request is
/// recorded so tests can assert which paths were fetched.
#[derive(Default)]
pub struct FixtureCatalog {
    collections: HashMap<String, Vec<Value>>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<String>>,
}

impl FixtureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, path: &str, documents: Vec<Value>) -> Self {
        self.collections.insert(path.to_string(), documents);
        self
    }

    pub fn with_failure(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    pub fn with_delay(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(path.to_string(), delay);
        self
    }

    pub async fn requested_paths(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl RemoteCatalog for FixtureCatalog {
    async fn list_documents(&self, path: &str) -> CodexResult<Vec<Value>> {
        self.requests.lock().await.push(path.to_string());

        if let Some(delay) = self.delays.get(path) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(path) {
            return Err(CodexError::Remote(format!("fixture failure for '{}'", path)));
        }

        Ok(self.collections.get(path).cloned().unwrap_or_default())
    }
}

pub fn edition_doc(key: &str) -> Value {
    json!({ "_key": key })
}

pub fn faction_doc(key: Option<&str>, name: &str) -> Value {
    match key {
        Some(key) => json!({ "_key": key, "name": name, "editionId": "10e" }),
        None => json!({ "name": name }),
    }
}

pub fn subfaction_doc(name: &str) -> Value {
    json!({ "name": name })
}

pub fn detachment_doc(key: &str, name: &str, cp_cost: u32) -> Value {
    json!({
        "_key": key,
        "name": name,
        "cpCost": cp_cost,
        "limits": {
            "hq": { "min": 1, "max": 2 },
            "troops": { "min": 0, "max": 6 },
            "elite": { "min": 0, "max": 3 },
            "fastAttack": { "min": 0, "max": 3 },
            "heavySupport": { "min": 0, "max": 3 },
            "flyers": { "min": 0, "max": 2 }
        }
    })
}

/// A fixture serving one edition (`10e`) with two fully populated factions.
pub fn two_faction_fixture() -> FixtureCatalog {
    FixtureCatalog::new()
        .with_collection("editions", vec![edition_doc("10e")])
        .with_collection(
            "editions/10e/factions",
            vec![
                faction_doc(Some("ultramarines"), "Ultramarines"),
                faction_doc(Some("orks"), "Orks"),
            ],
        )
        .with_collection(
            "editions/10e/factions/ultramarines/subfactions",
            vec![subfaction_doc("2nd Company")],
        )
        .with_collection(
            "editions/10e/factions/ultramarines/detachments",
            vec![detachment_doc("gladius", "Gladius Task Force", 0)],
        )
        .with_collection(
            "editions/10e/factions/orks/subfactions",
            vec![subfaction_doc("Goffs"), subfaction_doc("Bad Moons")],
        )
        .with_collection(
            "editions/10e/factions/orks/detachments",
            vec![detachment_doc("waaagh", "Waaagh! Tribe", 1)],
        )
}
