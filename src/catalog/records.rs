//! Typed catalog records
//!
//! Remote documents are JSON objects whose document key travels in the
//! `_key` field. Field names on the wire are camelCase.

use serde::{Deserialize, Serialize};

/// Normalize a display name into a stable identifier segment.
pub fn slug_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Identifier derivation shared by every catalog entity.
///
/// A record's identifier is its remote document key when present, otherwise
/// its normalized display name. Snapshot paths and the sub-collection fetches
/// under a faction must both go through `doc_id()` so they can never diverge.
pub trait CatalogRecord {
    fn key(&self) -> Option<&str>;
    fn name(&self) -> &str;

    fn doc_id(&self) -> String {
        match self.key() {
            Some(key) => key.to_string(),
            None => slug_id(self.name()),
        }
    }
}

/// A versioned ruleset root of the catalog hierarchy.
///
/// Editions carry no payload of their own; the document key is the edition
/// identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditionRecord {
    #[serde(rename = "_key")]
    pub key: Option<String>,
}

impl EditionRecord {
    pub fn id(&self) -> &str {
        self.key.as_deref().unwrap_or("unknown")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FactionRecord {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub name: String,
    pub icon_url: Option<String>,
    pub edition_id: Option<String>,
}

impl CatalogRecord for FactionRecord {
    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubFactionRecord {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub name: String,
}

impl CatalogRecord for SubFactionRecord {
    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetachmentRecord {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub name: String,
    pub cp_cost: u32,
    pub limits: SlotLimits,
}

impl CatalogRecord for DetachmentRecord {
    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Per-slot minimum/maximum unit counts for a detachment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlotLimits {
    pub hq: MinMax,
    pub troops: MinMax,
    pub elite: MinMax,
    pub fast_attack: MinMax,
    pub heavy_support: MinMax,
    pub flyers: MinMax,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MinMax {
    pub min: u32,
    pub max: u32,
}
