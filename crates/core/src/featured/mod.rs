//! Featured-item ranking
//!
//! Pure functions over collections of [`RankableItem`]s split into two
//! priority bands: a bounded featured band and an open-ended non-featured
//! band, both configured through [`RenumberConfig`]. Every function takes the
//! full collection by reference and returns a new one (or a verdict); inputs
//! are never mutated.

pub mod display;
pub mod renumber;
pub mod reorder;
pub mod session;
pub mod stats;
pub mod toggle;
pub mod types;
pub mod validate;

pub use display::{
    format_gap_report, format_renumber_comparison, format_reorder_list, format_summary,
    renumber_comparison, RenumberChange,
};
pub use renumber::auto_renumber_priorities;
pub use reorder::{featured_in_order, move_item_down, move_item_up, reorder_featured};
pub use session::{EditOp, EditSession, SessionError, SessionState};
pub use stats::calculate_stats;
pub use toggle::{feature_item, unfeature_item};
pub use types::{
    Direction, GapDetail, Partition, PriorityRange, RankableItem, RankingError, RenumberConfig,
    Stats, ValidationResult,
};
pub use validate::validate_featured_operation;
