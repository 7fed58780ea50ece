//! Snapshot Store
//!
//! Durable, path-addressed local storage for decoded catalog collections.
//! Each snapshot is one JSON file under the store root; writes go through a
//! uniquely named temp file and a rename, so a concurrent reader observes
//! either the old complete snapshot or the new one, never a mix.
//!
//! The store owns its root directory exclusively and never hands out file
//! handles; callers coordinate purely through path disjointness.

use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{CodexError, CodexResult};

/// Monotonic suffix for temp files, so concurrent writes to the same
/// snapshot path cannot share a temp file.
static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    /// Open a store rooted at the given directory, creating it if missing.
    pub fn open<P: AsRef<Path>>(root: P) -> CodexResult<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open a store in the default location (user data directory).
    pub fn open_default(app_name: &str) -> CodexResult<Self> {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::open(base.join(app_name).join("codex_cache"))
    }

    /// The root directory this store writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Serialize `value` as JSON and atomically replace the snapshot at
    /// `path`, creating intermediate directories as needed.
    pub async fn put<T: Serialize>(&self, path: &str, value: &T) -> CodexResult<()> {
        let target = self.resolve(path)?;
        let bytes = serde_json::to_vec(value)?;

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Temp file lives next to the target so the rename stays within one
        // filesystem and is atomic.
        let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
        let tmp = target.with_extension(format!("{}.tmp", seq));

        tokio::fs::write(&tmp, &bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &target).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        debug!("Snapshot written: {} ({} bytes)", path, bytes.len());
        Ok(())
    }

    /// Read and deserialize the snapshot at `path`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> CodexResult<T> {
        let target = self.resolve(path)?;

        let bytes = match tokio::fs::read(&target).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CodexError::NotFound(path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Does a snapshot exist at `path`?
    pub async fn exists(&self, path: &str) -> bool {
        match self.resolve(path) {
            Ok(target) => tokio::fs::try_exists(&target).await.unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Map a snapshot path onto the store root, rejecting anything that
    /// could escape it.
    fn resolve(&self, path: &str) -> CodexResult<PathBuf> {
        let relative = Path::new(path);
        let plain = !path.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !plain {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid snapshot path '{}'", path),
            )
            .into());
        }

        Ok(self.root.join(relative))
    }
}
