//! Catalog data model
//!
//! Typed records for the three-level rulebook hierarchy
//! (edition → faction → {sub-factions, detachments}), the shared
//! identifier-derivation rule, and the path helpers both the sync writer and
//! the offline reader address snapshots with.

pub mod paths;
pub mod records;

pub use records::{
    slug_id, CatalogRecord, DetachmentRecord, EditionRecord, FactionRecord, MinMax, SlotLimits,
    SubFactionRecord,
};
