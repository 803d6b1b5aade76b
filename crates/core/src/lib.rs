//! Core library for the storefront data tools
//!
//! This crate implements the **Functional Core** of the storefront editors,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The workspace uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`storefront_core`** (this crate): Pure ranking and transformation functions with zero I/O
//! - **`storefront`**: File access, prompts and terminal output (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, inputs are borrowed and never mutated
//! - **Deterministic**: Every sort has a total tie-break
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`featured`]: Two-band priority ranking (statistics, gap detection,
//!   renumbering, reordering, validation, display helpers, edit sessions)
//! - [`ordering`]: Display order shared by listings and the on-disk format
//! - [`records`]: Projection of persisted records and merge-back of rankings
//! - [`config`]: Collection presets and configuration file parsing
//!
//! # Example Usage
//!
//! ```rust
//! use storefront_core::featured::{auto_renumber_priorities, calculate_stats, RankableItem, RenumberConfig};
//!
//! let items = vec![
//!     RankableItem::new("shoes", "Shoes", true, 3),
//!     RankableItem::new("bags", "Bags", false, 12),
//! ];
//!
//! let config = RenumberConfig::CATEGORIES;
//! assert!(calculate_stats(&items, &config).has_priority_gaps);
//!
//! let renumbered = auto_renumber_priorities(&items, &config);
//! assert!(!calculate_stats(&renumbered, &config).has_priority_gaps);
//! ```

pub mod config;
pub mod featured;
pub mod ordering;
pub mod records;
