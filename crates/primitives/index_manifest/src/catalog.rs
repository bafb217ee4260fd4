//! Fixed catalog of composite indexes for the inventory collections: the
//! hand-picked flag indexes plus an equality-filter expansion for every filter
//! combination the item browser can issue.

use crate::builder::{IndexSet, CATEGORY_FIELD};
use crate::definition::IndexField;

/// Inventory item documents.
pub const ITEMS: &str = "items";
/// Per-item lot documents carrying expiry dates.
pub const LOTS: &str = "lots";
/// Append-only usage log entries.
pub const USAGE_LOGS: &str = "usage_logs";
/// Checkout cart sessions.
pub const CART_SESSIONS: &str = "cart_sessions";

/// Fields the item browser filters on with exact-match conditions.
const SINGLE_FILTERS: [&str; 4] = ["category", "homeLocationId", "grantId", "useType"];

/// Build the complete index set covering every query shape the app issues.
pub fn inventory_index_set() -> IndexSet {
    let mut set = IndexSet::new();

    // Flag dashboards not covered by the equality-filter expansion.
    set.register(ITEMS, vec![IndexField::ascending("flagLow"), IndexField::descending("updatedAt")]);
    set.register(ITEMS, vec![IndexField::ascending("flagExpiringSoon"), IndexField::ascending("earliestExpiresAt")]);
    set.register(ITEMS, vec![IndexField::ascending("flagStale"), IndexField::descending("updatedAt")]);
    set.register(ITEMS, vec![IndexField::ascending("flagExcess"), IndexField::descending("updatedAt")]);
    set.register(ITEMS, vec![IndexField::ascending("flagStale"), IndexField::ascending("archived")]);
    set.register(ITEMS, vec![IndexField::ascending("flagExpired"), IndexField::ascending("archived")]);

    for field in SINGLE_FILTERS {
        set.expand_equality_filters(ITEMS, &[field], true);
    }

    set.expand_equality_filters(ITEMS, &["flagLow"], true);
    set.expand_equality_filters(ITEMS, &["archived"], true);
    set.expand_equality_filters(ITEMS, &["archived", "flagLow"], true);

    for field in SINGLE_FILTERS {
        let include_category = field != CATEGORY_FIELD;
        set.expand_equality_filters(ITEMS, &[field, "flagLow"], include_category);
        set.expand_equality_filters(ITEMS, &["archived", field], include_category);
        set.expand_equality_filters(ITEMS, &["archived", field, "flagLow"], include_category);
    }

    // The expiring-soon view over archived items sorts on the expiry date.
    set.register(
        ITEMS,
        vec![
            IndexField::ascending("flagExpiringSoon"),
            IndexField::ascending("archived"),
            IndexField::ascending("earliestExpiresAt"),
        ],
    );

    set.register(LOTS, vec![IndexField::ascending("archived"), IndexField::ascending("expiresAt")]);

    set.register(USAGE_LOGS, vec![IndexField::ascending("itemId"), IndexField::descending("usedAt")]);

    set.register(CART_SESSIONS, vec![IndexField::ascending("status"), IndexField::descending("updatedAt")]);
    set.register(CART_SESSIONS, vec![IndexField::ascending("status"), IndexField::descending("closedAt")]);
    set.register(
        CART_SESSIONS,
        vec![
            IndexField::ascending("interventionId"),
            IndexField::ascending("status"),
            IndexField::descending("closedAt"),
        ],
    );

    set
}
