//! Composite index definitions for the Firestore collections backing the
//! inventory app, and the builder that enumerates them.

mod builder;
mod catalog;
mod definition;

pub use builder::IndexSet;
pub use catalog::{inventory_index_set, CART_SESSIONS, ITEMS, LOTS, USAGE_LOGS};
pub use definition::{
    FieldOverride, IndexDefinition, IndexField, IndexManifest, ManifestWriteError, QueryScope, SortOrder,
};
