//! Catalog record projection and merge-back
//!
//! Persisted category/tag records carry many fields the ranking functions
//! never look at. [`project`] reduces them to [`RankableItem`]s and
//! [`apply_rankings`] writes the ranked `featured`/`priority` values back,
//! leaving every other field untouched.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::featured::RankableItem;
use crate::ordering::compare_listing_keys;

/// A category or tag as stored in its JSON data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub priority: i64,
    /// Remaining fields (description, icon, color, ...) kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("Duplicate id '{0}'")]
    DuplicateId(String),

    #[error("Ranked item '{0}' has no matching record")]
    UnknownId(String),

    #[error("Record '{0}' has no ranked item")]
    MissingItem(String),
}

pub fn project(records: &[CatalogRecord]) -> Vec<RankableItem> {
    records
        .iter()
        .map(|record| RankableItem {
            id: record.id.clone(),
            name: record.name.clone(),
            featured: record.featured,
            priority: record.priority,
        })
        .collect()
}

/// Copy `featured`/`priority` from `items` onto `records` by id.
///
/// Every record must have exactly one item and vice versa. The result is
/// sorted in display order, which is also the on-disk order.
pub fn apply_rankings(
    records: &[CatalogRecord],
    items: &[RankableItem],
) -> Result<Vec<CatalogRecord>, MergeError> {
    let mut by_id: HashMap<&str, &RankableItem> = HashMap::with_capacity(items.len());
    for item in items {
        if by_id.insert(item.id.as_str(), item).is_some() {
            return Err(MergeError::DuplicateId(item.id.clone()));
        }
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    let mut merged = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(MergeError::DuplicateId(record.id.clone()));
        }

        let item = by_id
            .get(record.id.as_str())
            .ok_or_else(|| MergeError::MissingItem(record.id.clone()))?;

        let mut updated = record.clone();
        updated.featured = item.featured;
        updated.priority = item.priority;
        merged.push(updated);
    }

    if let Some(unknown) = items.iter().find(|item| !seen.contains(item.id.as_str())) {
        return Err(MergeError::UnknownId(unknown.id.clone()));
    }

    sort_records(&mut merged);
    Ok(merged)
}

pub fn sort_records(records: &mut [CatalogRecord]) {
    records.sort_by(|a, b| {
        compare_listing_keys(
            (a.featured, a.priority, &a.name, &a.id),
            (b.featured, b.priority, &b.name, &b.id),
        )
    });
}
