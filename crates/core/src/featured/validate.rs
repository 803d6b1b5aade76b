use std::collections::HashSet;

use super::stats::calculate_stats;
use super::types::{GapDetail, Partition, RankableItem, RenumberConfig, ValidationResult};

/// Pre-commit guard for a proposed collection.
///
/// Fails on out-of-band priorities, priority ties inside a partition and
/// repeated ids. Missing values inside a band are allowed; they are reported
/// by [`calculate_stats`] and fixed by renumbering.
pub fn validate_featured_operation(
    items: &[RankableItem],
    config: &RenumberConfig,
) -> ValidationResult {
    let stats = calculate_stats(items, config);
    let mut errors = Vec::new();

    for detail in &stats.gap_details {
        match detail {
            GapDetail::OutOfBand {
                partition: Partition::Featured,
                id,
                priority,
            } => errors.push(format!(
                "Featured item '{id}' has priority {priority}, outside {}-{}",
                config.featured_start, config.featured_end
            )),
            GapDetail::OutOfBand {
                partition: Partition::NonFeatured,
                id,
                priority,
            } => errors.push(format!(
                "Non-featured item '{id}' has priority {priority}, below {}",
                config.non_featured_start
            )),
            GapDetail::Duplicate {
                partition,
                priority,
                ids,
            } => errors.push(format!(
                "Duplicate {partition} priority {priority}: {}",
                ids.join(", ")
            )),
            GapDetail::Missing { .. } => {}
        }
    }

    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            errors.push(format!("Duplicate id '{}'", item.id));
        }
    }

    ValidationResult::from_errors(errors)
}
