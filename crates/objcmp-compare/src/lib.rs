//! Property-level comparison of same-typed objects.
//!
//! Every bean property of the two objects is compared by its natural
//! ordering, with absent values ordering before present ones.
//!
//! # Key Functions
//!
//! - [`compare`] -- `true` if every property compares equal
//! - [`compare_to`] -- first non-equal property ordering
//! - [`compare_property`] / [`compare_property_quietly`] -- a single property
//! - [`compare_to_result`] -- ordering per property name

pub mod error;
pub mod object;
pub mod property;

pub use error::{CompareError, CompareResult};
pub use object::{compare, compare_to, compare_to_result, ensure_same_type};
pub use property::{compare_property, compare_property_quietly, compare_values, null_check};
