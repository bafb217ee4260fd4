use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Sort direction of a single field within a composite index.
///
/// `Ascending` orders before `Descending` so that comparing variants matches
/// the lexicographic order of their serialized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// One (field path, direction) entry of a composite index. Position within the
/// definition is significant: equality filters form the prefix, the trailing
/// field carries the sort.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexField {
    pub field_path: String,
    pub order: SortOrder,
}

impl IndexField {
    pub fn new(field_path: impl Into<String>, order: SortOrder) -> Self {
        Self { field_path: field_path.into(), order }
    }

    pub fn ascending(field_path: impl Into<String>) -> Self {
        Self::new(field_path, SortOrder::Ascending)
    }

    pub fn descending(field_path: impl Into<String>) -> Self {
        Self::new(field_path, SortOrder::Descending)
    }
}

/// Scope of documents an index applies to. Collection-group queries are not
/// used by the app, so every generated index is plain `COLLECTION` scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryScope {
    Collection,
}

/// A composite index over one collection group.
///
/// Two definitions are equal iff their collection group and full field
/// sequence are identical; `fields` preserves insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDefinition {
    pub collection_group: String,
    pub query_scope: QueryScope,
    pub fields: Vec<IndexField>,
}

/// Single-field index override. The generator never emits any, but the key
/// must be present in the manifest for the deploy tooling to accept it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOverride {
    pub collection_group: String,
    pub field_path: String,
    pub indexes: Vec<IndexField>,
}

/// Top-level structure of `firestore.indexes.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexManifest {
    pub indexes: Vec<IndexDefinition>,
    pub field_overrides: Vec<FieldOverride>,
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestWriteError {
    #[error("serializing index manifest")]
    Serialize(#[from] serde_json::Error),
    #[error("writing index manifest to {}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
}

impl IndexManifest {
    /// Render the manifest as indented JSON with a trailing newline, the exact
    /// byte form committed to the repository.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Serialize fully in memory, then write in a single call. There is no
    /// partial-write recovery; a failed write propagates to the caller.
    pub fn write_pretty(&self, path: &Path) -> Result<(), ManifestWriteError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| ManifestWriteError::Io { path: path.to_path_buf(), source })
    }
}
