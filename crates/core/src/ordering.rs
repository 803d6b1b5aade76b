//! Display ordering for catalog listings
//!
//! Featured entries come first, then ascending priority, then name
//! (case-insensitive) and finally id so the order is total.

use std::cmp::Ordering;

use crate::featured::RankableItem;

/// Compare two `(featured, priority, name, id)` keys for display order.
pub fn compare_listing_keys(
    a: (bool, i64, &str, &str),
    b: (bool, i64, &str, &str),
) -> Ordering {
    b.0.cmp(&a.0)
        .then(a.1.cmp(&b.1))
        .then_with(|| a.2.to_lowercase().cmp(&b.2.to_lowercase()))
        .then_with(|| a.3.cmp(b.3))
}

pub fn compare_for_display(a: &RankableItem, b: &RankableItem) -> Ordering {
    compare_listing_keys(
        (a.featured, a.priority, &a.name, &a.id),
        (b.featured, b.priority, &b.name, &b.id),
    )
}

/// Return a sorted copy of `items` in display order.
pub fn sort_for_display(items: &[RankableItem]) -> Vec<RankableItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(compare_for_display);
    sorted
}
