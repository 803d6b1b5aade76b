use std::fmt::Write;

use serde::Serialize;

use super::types::{PriorityRange, RankableItem, RenumberConfig, Stats};
use crate::ordering::compare_listing_keys;

/// Before/after view of one item across a renumber or reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenumberChange {
    pub id: String,
    pub name: String,
    pub featured: bool,
    pub old_featured: bool,
    pub old_priority: i64,
    pub new_priority: i64,
}

impl RenumberChange {
    pub fn changed(&self) -> bool {
        self.old_priority != self.new_priority || self.old_featured != self.featured
    }
}

fn describe_partition(label: &str, count: usize, range: PriorityRange, plural: &str) -> String {
    if count == 0 {
        format!("{label}: 0 {plural}")
    } else {
        format!(
            "{label}: {count} {plural} (Priority {}-{})",
            range.min, range.max
        )
    }
}

/// Multi-line summary such as `Featured: 7 categories (Priority 1-7)`.
pub fn format_summary(stats: &Stats, config: &RenumberConfig, plural: &str) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{}",
        describe_partition(
            "Featured",
            stats.featured_count,
            stats.featured_range,
            plural
        )
    );
    let _ = writeln!(
        output,
        "{}",
        describe_partition(
            "Non-featured",
            stats.non_featured_count,
            stats.non_featured_range,
            plural
        )
    );
    let _ = writeln!(
        output,
        "Featured slots: {} of {} used",
        stats.featured_count,
        config.featured_capacity()
    );

    if stats.has_priority_gaps {
        let _ = write!(
            output,
            "Priority gaps detected ({} issue(s))",
            stats.gap_details.len()
        );
    } else {
        output.push_str("No priority gaps");
    }

    output
}

pub fn format_gap_report(stats: &Stats) -> String {
    if stats.gap_details.is_empty() {
        return "No priority gaps found.".to_string();
    }

    stats
        .gap_details
        .iter()
        .map(|detail| format!("  - {detail}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered list of featured items for the reorder screen; `selected` gets a marker.
pub fn format_reorder_list(featured: &[RankableItem], selected: Option<usize>) -> String {
    if featured.is_empty() {
        return "No featured items.".to_string();
    }

    let mut output = String::new();
    for (idx, item) in featured.iter().enumerate() {
        let marker = if selected == Some(idx) { "▶" } else { " " };
        let _ = writeln!(
            output,
            "{marker} {}. {} (priority {})",
            idx + 1,
            item.name,
            item.priority
        );
    }
    output.trim_end().to_string()
}

/// Pair up `before` and `after` by id, in display order of the new state.
///
/// Items present on only one side are skipped.
pub fn renumber_comparison(before: &[RankableItem], after: &[RankableItem]) -> Vec<RenumberChange> {
    let mut changes: Vec<RenumberChange> = after
        .iter()
        .filter_map(|new| {
            before
                .iter()
                .find(|old| old.id == new.id)
                .map(|old| RenumberChange {
                    id: new.id.clone(),
                    name: new.name.clone(),
                    featured: new.featured,
                    old_featured: old.featured,
                    old_priority: old.priority,
                    new_priority: new.priority,
                })
        })
        .collect();

    changes.sort_by(|a, b| {
        compare_listing_keys(
            (a.featured, a.new_priority, &a.name, &a.id),
            (b.featured, b.new_priority, &b.name, &b.id),
        )
    });
    changes
}

pub fn format_renumber_comparison(changes: &[RenumberChange]) -> String {
    let changed: Vec<&RenumberChange> = changes.iter().filter(|c| c.changed()).collect();

    if changed.is_empty() {
        return "No priority changes.".to_string();
    }

    let mut output = format!(
        "{} of {} priorities change:\n",
        changed.len(),
        changes.len()
    );
    for change in changed {
        let flag = match (change.old_featured, change.featured) {
            (false, true) => " [now featured]",
            (true, false) => " [no longer featured]",
            _ => "",
        };
        let _ = writeln!(
            output,
            "  {}: {} → {}{}",
            change.name, change.old_priority, change.new_priority, flag
        );
    }
    output.trim_end().to_string()
}
