//! Diff engine for objcmp.
//!
//! Walks two objects of the same type field by field and records every
//! divergent field as a [`ChangeRecord`]. Changes inside nested objects are
//! appended to the same flat [`ChangeList`] and point at the record of their
//! enclosing field, so the list describes a tree of differences.
//!
//! # Key Types
//!
//! - [`Differ`] / [`diff`] -- Recursive field-level diff
//! - [`ChangeList`] / [`ChangeRecord`] -- Flat change list with parent links
//! - [`changed_data`] / [`changed_data_map`] -- Shallow per-property diff
//! - [`DiffConfig`] -- Depth bound, cycle tracking, strict input checks

pub mod change;
pub mod config;
pub mod differ;
pub mod error;
pub mod property_diff;

pub use change::{ChangeList, ChangeRecord};
pub use config::DiffConfig;
pub use differ::{diff, Differ};
pub use error::{DiffError, DiffResult};
pub use property_diff::{changed_data, changed_data_map};
