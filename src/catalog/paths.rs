//! Collection and snapshot paths
//!
//! The remote store and the local snapshot tree mirror the same hierarchy.
//! Every path on either side is built here so the sync writer and the offline
//! reader can never drift apart.

/// Top-level remote collection listing the available editions.
pub const EDITIONS: &str = "editions";

/// Name of the artifact recording the last completed sync run.
pub const SYNC_METADATA: &str = "sync_metadata.json";

// === Remote collection paths ===

pub fn remote_factions(edition: &str) -> String {
    format!("editions/{}/factions", edition)
}

pub fn remote_subfactions(edition: &str, faction_id: &str) -> String {
    format!("editions/{}/factions/{}/subfactions", edition, faction_id)
}

pub fn remote_detachments(edition: &str, faction_id: &str) -> String {
    format!("editions/{}/factions/{}/detachments", edition, faction_id)
}

// === Local snapshot paths ===

pub fn factions_snapshot(edition: &str) -> String {
    format!("{}/factions.json", edition)
}

pub fn subfactions_snapshot(edition: &str, faction_id: &str) -> String {
    format!("{}/{}/subfactions.json", edition, faction_id)
}

pub fn detachments_snapshot(edition: &str, faction_id: &str) -> String {
    format!("{}/{}/detachments.json", edition, faction_id)
}
