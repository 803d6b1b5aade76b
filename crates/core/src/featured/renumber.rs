use super::types::{RankableItem, RenumberConfig};

/// Reassign priorities so both bands are contiguous from their start bounds.
///
/// Featured items keep their relative priority order (stable for ties).
/// Non-featured items are ordered by case-insensitive name; their existing
/// priority is ignored. The returned collection holds the featured partition
/// followed by the non-featured one.
pub fn auto_renumber_priorities(
    items: &[RankableItem],
    config: &RenumberConfig,
) -> Vec<RankableItem> {
    let (mut featured, mut non_featured): (Vec<RankableItem>, Vec<RankableItem>) =
        items.iter().cloned().partition(|item| item.featured);

    featured.sort_by_key(|item| item.priority);
    non_featured.sort_by_cached_key(|item| item.name.to_lowercase());

    assign_from(&mut featured, config.featured_start);
    assign_from(&mut non_featured, config.non_featured_start);

    featured.extend(non_featured);
    featured
}

/// Priorities past `i64::MAX` saturate; the validator reports the resulting ties.
fn assign_from(items: &mut [RankableItem], start: i64) {
    let mut priority = start;
    for item in items.iter_mut() {
        item.priority = priority;
        priority = priority.saturating_add(1);
    }
}
