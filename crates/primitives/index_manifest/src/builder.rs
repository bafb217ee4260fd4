use crate::definition::{IndexDefinition, IndexField, IndexManifest, QueryScope, SortOrder};
use std::collections::HashSet;
use tracing::debug;

/// Sort suffixes every equality-filter combination must support: newest-first,
/// plus both directions over the display name and the on-hand quantity.
const COMMON_SORTS: [(&str, SortOrder); 5] = [
    ("updatedAt", SortOrder::Descending),
    ("name", SortOrder::Ascending),
    ("name", SortOrder::Descending),
    ("qtyOnHand", SortOrder::Ascending),
    ("qtyOnHand", SortOrder::Descending),
];

pub(crate) const CATEGORY_FIELD: &str = "category";

/// Accumulates composite index definitions, silently absorbing exact
/// duplicates.
///
/// The registry key is (collection group, ordered field sequence); registering
/// the same key twice is a no-op, so overlapping generation passes can be
/// layered without bookkeeping on the caller's side.
#[derive(Debug, Default)]
pub struct IndexSet {
    seen: HashSet<(String, Vec<IndexField>)>,
    indexes: Vec<IndexDefinition>,
}

impl IndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Register one composite index over `collection`. Field order is
    /// preserved as given.
    pub fn register(&mut self, collection: &str, fields: Vec<IndexField>) {
        if !self.seen.insert((collection.to_string(), fields.clone())) {
            debug!("Absorbed duplicate index registration on {}", collection);
            return;
        }
        self.indexes.push(IndexDefinition {
            collection_group: collection.to_string(),
            query_scope: QueryScope::Collection,
            fields,
        });
    }

    /// Emit one index per (equality prefix, sort suffix) combination.
    ///
    /// `base_fields` are equality filters: sorted alphabetically and paired
    /// with `Ascending`, they form the index prefix. Each entry of the common
    /// sort catalog is appended as the trailing sort field. When
    /// `include_category_sort` is set and `category` is not itself a filter,
    /// two category-sorted variants are emitted on top.
    pub fn expand_equality_filters(&mut self, collection: &str, base_fields: &[&str], include_category_sort: bool) {
        let mut base = base_fields.to_vec();
        base.sort_unstable();
        let prefix: Vec<IndexField> = base.iter().map(|field| IndexField::ascending(*field)).collect();

        let mut sorts: Vec<IndexField> =
            COMMON_SORTS.iter().map(|(field, order)| IndexField::new(*field, *order)).collect();
        if include_category_sort && !base.iter().any(|field| *field == CATEGORY_FIELD) {
            sorts.push(IndexField::ascending(CATEGORY_FIELD));
            sorts.push(IndexField::descending(CATEGORY_FIELD));
        }

        for sort in sorts {
            let mut fields = prefix.clone();
            fields.push(sort);
            self.register(collection, fields);
        }
    }

    /// Consume the set and produce the manifest in its final deterministic
    /// order: by collection group, then by field sequence.
    pub fn into_manifest(mut self) -> IndexManifest {
        self.indexes.sort_by(|a, b| a.collection_group.cmp(&b.collection_group).then_with(|| a.fields.cmp(&b.fields)));
        IndexManifest { indexes: self.indexes, field_overrides: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::*;

    #[rstest]
    fn register_absorbs_exact_duplicates() {
        let mut set = IndexSet::new();
        let fields = vec![IndexField::ascending("archived"), IndexField::ascending("expiresAt")];

        set.register("lots", fields.clone());
        set.register("lots", fields.clone());
        set.register("lots", fields);

        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn register_distinguishes_field_order_direction_and_collection() {
        let mut set = IndexSet::new();

        set.register("items", vec![IndexField::ascending("a"), IndexField::ascending("b")]);
        set.register("items", vec![IndexField::ascending("b"), IndexField::ascending("a")]);
        set.register("items", vec![IndexField::ascending("a"), IndexField::descending("b")]);
        set.register("history", vec![IndexField::ascending("a"), IndexField::ascending("b")]);

        assert_eq!(set.len(), 4);
    }

    #[rstest]
    #[case::default_catalog(&["archived", "flagLow"], true, 7)]
    #[case::category_sort_disabled(&["archived", "flagLow"], false, 5)]
    #[case::category_already_a_filter(&["category"], true, 5)]
    fn expand_equality_filters_emits_one_index_per_sort(
        #[case] base_fields: &[&str],
        #[case] include_category_sort: bool,
        #[case] expected: usize,
    ) {
        let mut set = IndexSet::new();

        set.expand_equality_filters("items", base_fields, include_category_sort);

        assert_eq!(set.len(), expected);
        for definition in &set.indexes {
            assert_eq!(definition.fields.len(), base_fields.len() + 1);
        }
    }

    #[rstest]
    fn category_filter_never_receives_a_category_sort() {
        let mut set = IndexSet::new();

        set.expand_equality_filters("items", &["category"], true);

        assert!(set.indexes.iter().all(|d| d.fields.last().unwrap().field_path != CATEGORY_FIELD));
    }

    #[rstest]
    fn equality_prefix_is_sorted_alphabetically() {
        let mut set = IndexSet::new();

        set.expand_equality_filters("items", &["homeLocationId", "archived", "flagLow"], false);

        for definition in &set.indexes {
            let prefix: Vec<&str> = definition.fields[..3].iter().map(|f| f.field_path.as_str()).collect();
            assert_eq!(prefix, ["archived", "flagLow", "homeLocationId"]);
            assert!(definition.fields[..3].iter().all(|f| f.order == SortOrder::Ascending));
        }
    }

    #[rstest]
    fn expansion_is_idempotent() {
        let mut set = IndexSet::new();

        set.expand_equality_filters("items", &["archived"], true);
        let first = set.len();
        set.expand_equality_filters("items", &["archived"], true);

        assert_eq!(set.len(), first);
    }

    #[rstest]
    fn into_manifest_orders_by_collection_then_field_sequence() {
        let mut set = IndexSet::new();
        set.register("usage_logs", vec![IndexField::ascending("itemId"), IndexField::descending("usedAt")]);
        set.register("items", vec![IndexField::ascending("name")]);
        set.register("items", vec![IndexField::ascending("category"), IndexField::descending("name")]);
        set.register("items", vec![IndexField::ascending("category"), IndexField::ascending("name")]);
        set.register("lots", vec![IndexField::ascending("archived"), IndexField::ascending("expiresAt")]);

        let manifest = set.into_manifest();

        let keys: Vec<_> = manifest.indexes.iter().map(|d| (d.collection_group.clone(), d.fields.clone())).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(manifest.indexes[0].collection_group, "items");
        assert_eq!(manifest.indexes.last().unwrap().collection_group, "usage_logs");
    }
}
