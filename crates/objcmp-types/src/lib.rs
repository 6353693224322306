//! Foundation types for objcmp.
//!
//! Compared objects describe themselves through an explicit, per-type field
//! descriptor list instead of runtime reflection. Every other objcmp crate
//! depends on `objcmp-types`.
//!
//! # Key Types
//!
//! - [`Value`] — Tagged variant holding a field value (scalars, lists, maps, nested objects)
//! - [`ObjectRef`] — Shared handle to a nested [`Inspect`] object
//! - [`Inspect`] — Per-type field enumeration, equality, and ordering
//! - [`Field`] / [`Modifiers`] — One declared field and its static/final qualifiers
//!
//! Implementations are usually generated with the [`inspect!`] macro.

pub mod error;
pub mod inspect;
mod macros;
pub mod value;

pub use error::{TypeError, TypeResult};
pub use inspect::{downcast, identity, same_type, Field, Inspect, Modifiers};
pub use value::{ObjectRef, Value};
