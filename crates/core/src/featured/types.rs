use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimal projection of a catalog record that the ranking functions operate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankableItem {
    pub id: String,
    pub name: String,
    pub featured: bool,
    pub priority: i64,
}

impl RankableItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, featured: bool, priority: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            featured,
            priority,
        }
    }

    pub fn partition(&self) -> Partition {
        if self.featured {
            Partition::Featured
        } else {
            Partition::NonFeatured
        }
    }
}

/// Priority bands for one collection.
///
/// The featured band is `[featured_start, featured_end]`, the non-featured band
/// starts at `non_featured_start` and is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenumberConfig {
    pub featured_start: i64,
    pub featured_end: i64,
    pub non_featured_start: i64,
}

impl RenumberConfig {
    /// Bands used by the category editor.
    pub const CATEGORIES: Self = Self {
        featured_start: 1,
        featured_end: 7,
        non_featured_start: 8,
    };

    /// Bands used by the tag editor.
    pub const TAGS: Self = Self {
        featured_start: 1,
        featured_end: 8,
        non_featured_start: 21,
    };

    /// Number of slots in the featured band.
    pub fn featured_capacity(&self) -> usize {
        let width = i128::from(self.featured_end) - i128::from(self.featured_start) + 1;
        if width <= 0 {
            0
        } else {
            usize::try_from(width).unwrap_or(usize::MAX)
        }
    }

    pub fn start_of(&self, partition: Partition) -> i64 {
        match partition {
            Partition::Featured => self.featured_start,
            Partition::NonFeatured => self.non_featured_start,
        }
    }

    /// Whether `priority` lies inside the band reserved for `partition`.
    pub fn in_band(&self, partition: Partition, priority: i64) -> bool {
        match partition {
            Partition::Featured => (self.featured_start..=self.featured_end).contains(&priority),
            Partition::NonFeatured => priority >= self.non_featured_start,
        }
    }

    /// Check that the bands are well-ordered and disjoint.
    pub fn validate(&self) -> Result<(), String> {
        if self.featured_start > self.featured_end {
            return Err(format!(
                "featured_start ({}) must not exceed featured_end ({})",
                self.featured_start, self.featured_end
            ));
        }
        if self.non_featured_start <= self.featured_end {
            return Err(format!(
                "non_featured_start ({}) must be greater than featured_end ({})",
                self.non_featured_start, self.featured_end
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    Featured,
    NonFeatured,
}

impl Partition {
    pub fn label(&self) -> &'static str {
        match self {
            Partition::Featured => "featured",
            Partition::NonFeatured => "non-featured",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Observed `{min, max}` of a partition's priorities.
///
/// An empty partition reports `{start, start}` for its configured start bound;
/// check the partition count before reading anything into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRange {
    pub min: i64,
    pub max: i64,
}

/// One discontinuity found while scanning a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GapDetail {
    /// Priorities `from..=to` are absent from an otherwise ascending run.
    Missing {
        partition: Partition,
        from: i64,
        to: i64,
    },
    /// More than one item shares `priority`.
    Duplicate {
        partition: Partition,
        priority: i64,
        ids: Vec<String>,
    },
    /// An item sits outside its partition's band.
    OutOfBand {
        partition: Partition,
        id: String,
        priority: i64,
    },
}

impl fmt::Display for GapDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapDetail::Missing {
                partition,
                from,
                to,
            } if from == to => write!(f, "{partition}: missing priority {from}"),
            GapDetail::Missing {
                partition,
                from,
                to,
            } => write!(f, "{partition}: missing priorities {from}-{to}"),
            GapDetail::Duplicate {
                partition,
                priority,
                ids,
            } => write!(
                f,
                "{partition}: priority {priority} shared by {}",
                ids.join(", ")
            ),
            GapDetail::OutOfBand {
                partition,
                id,
                priority,
            } => write!(f, "{partition}: '{id}' has out-of-band priority {priority}"),
        }
    }
}

/// Summary of a collection as computed by [`calculate_stats`](super::calculate_stats).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub featured_count: usize,
    pub non_featured_count: usize,
    pub featured_range: PriorityRange,
    pub non_featured_range: PriorityRange,
    pub has_priority_gaps: bool,
    pub gap_details: Vec<GapDetail>,
}

/// Verdict of [`validate_featured_operation`](super::validate_featured_operation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub success: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

/// Errors from id-addressed ranking operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("No item with id '{0}'")]
    NotFound(String),

    #[error("'{0}' is already featured")]
    AlreadyFeatured(String),

    #[error("'{0}' is not featured")]
    NotFeatured(String),

    #[error("Featured band is full ({capacity} slots)")]
    BandFull { capacity: usize },
}
