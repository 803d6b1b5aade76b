use std::collections::BTreeMap;

use super::types::{GapDetail, Partition, PriorityRange, RankableItem, RenumberConfig, Stats};

/// Compute partition sizes, observed ranges and gap information for a collection.
///
/// A partition has gaps when its sorted priorities are not a contiguous run
/// starting at the partition's configured start bound, or when any of its
/// items sit outside the partition's band. Duplicate priorities also count,
/// since a run with ties cannot be contiguous.
pub fn calculate_stats(items: &[RankableItem], config: &RenumberConfig) -> Stats {
    let (featured, non_featured): (Vec<&RankableItem>, Vec<&RankableItem>) =
        items
            .iter()
            .partition(|item| item.partition() == Partition::Featured);

    let mut gap_details = scan_partition(&featured, Partition::Featured, config);
    gap_details.extend(scan_partition(
        &non_featured,
        Partition::NonFeatured,
        config,
    ));

    Stats {
        featured_count: featured.len(),
        non_featured_count: non_featured.len(),
        featured_range: priority_range(&featured, config.featured_start),
        non_featured_range: priority_range(&non_featured, config.non_featured_start),
        has_priority_gaps: !gap_details.is_empty(),
        gap_details,
    }
}

fn priority_range(items: &[&RankableItem], start: i64) -> PriorityRange {
    let min = items.iter().map(|item| item.priority).min();
    let max = items.iter().map(|item| item.priority).max();

    match (min, max) {
        (Some(min), Some(max)) => PriorityRange { min, max },
        _ => PriorityRange {
            min: start,
            max: start,
        },
    }
}

fn scan_partition(
    items: &[&RankableItem],
    partition: Partition,
    config: &RenumberConfig,
) -> Vec<GapDetail> {
    let mut details = Vec::new();

    for item in items {
        if !config.in_band(partition, item.priority) {
            details.push(GapDetail::OutOfBand {
                partition,
                id: item.id.clone(),
                priority: item.priority,
            });
        }
    }

    let mut by_priority: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    for item in items {
        by_priority
            .entry(item.priority)
            .or_default()
            .push(item.id.clone());
    }

    for (priority, ids) in &by_priority {
        if ids.len() > 1 {
            details.push(GapDetail::Duplicate {
                partition,
                priority: *priority,
                ids: ids.clone(),
            });
        }
    }

    // Values below the start bound were reported as out-of-band above.
    let mut expected = config.start_of(partition);
    for &priority in by_priority.keys() {
        if priority < expected {
            continue;
        }
        if priority > expected {
            details.push(GapDetail::Missing {
                partition,
                from: expected,
                to: priority - 1,
            });
        }
        match priority.checked_add(1) {
            Some(next) => expected = next,
            None => break,
        }
    }

    details
}
