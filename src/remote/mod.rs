//! Remote Catalog client
//!
//! Fetches named collections of documents from the remote hierarchical
//! document store. `RemoteCatalog` is the one seam the sync engine depends
//! on; `HttpCatalog` is the production adapter over the store's HTTP API.
//!
//! Decoding is lenient per record: one malformed document never fails its
//! collection.

mod http;

pub use http::HttpCatalog;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::CodexResult;

/// Read access to the remote hierarchical document store.
///
/// Implementations perform no retries and no caching; they are pure
/// request/response adapters.
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// List every document in the collection at a slash-separated path
    /// (e.g. `editions/10e/factions`).
    ///
    /// An empty collection is a legitimate, empty success. Transport,
    /// authorization, and protocol failures surface as
    /// [`CodexError::Remote`](crate::CodexError::Remote).
    async fn list_documents(&self, path: &str) -> CodexResult<Vec<Value>>;
}

/// Fetch one collection and decode it leniently into typed records.
pub async fn fetch_collection<T: DeserializeOwned>(
    remote: &dyn RemoteCatalog,
    path: &str,
) -> CodexResult<Vec<T>> {
    Ok(decode_documents(remote.list_documents(path).await?))
}

/// Decode raw documents into typed records, dropping any that do not match.
pub fn decode_documents<T: DeserializeOwned>(documents: Vec<Value>) -> Vec<T> {
    let total = documents.len();
    let records: Vec<T> = documents
        .into_iter()
        .filter_map(|doc| serde_json::from_value(doc).ok())
        .collect();

    if records.len() < total {
        debug!("Dropped {} undecodable document(s)", total - records.len());
    }
    records
}
