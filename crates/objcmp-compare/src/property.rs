//! Comparison of a single bean property.

use std::cmp::Ordering;

use objcmp_types::{Inspect, Value};
use tracing::error;

use crate::error::{CompareError, CompareResult};

/// Orders two possibly absent values before their content is considered.
///
/// Returns `Some(Equal)` if both are absent, `Some(Greater)` if only the
/// left one is present, `Some(Less)` if only the right one is present, and
/// `None` if both are present.
pub fn null_check(left: &Value, right: &Value) -> Option<Ordering> {
    match (left.is_null(), right.is_null()) {
        (true, true) => Some(Ordering::Equal),
        (false, true) => Some(Ordering::Greater),
        (true, false) => Some(Ordering::Less),
        (false, false) => None,
    }
}

/// Compare two values of the property `property`.
///
/// Values without a natural ordering still compare `Equal` when they are
/// equal; otherwise they are [`CompareError::Incomparable`].
pub fn compare_values(property: &str, left: &Value, right: &Value) -> CompareResult<Ordering> {
    if let Some(ord) = null_check(left, right) {
        return Ok(ord);
    }
    if let Some(ord) = left.natural_cmp(right) {
        return Ok(ord);
    }
    if left == right {
        return Ok(Ordering::Equal);
    }
    Err(CompareError::Incomparable {
        property: property.to_string(),
        left: left.kind(),
        right: right.kind(),
    })
}

/// Compare the property `property` of two objects.
pub fn compare_property(
    source: &dyn Inspect,
    compare_to: &dyn Inspect,
    property: &str,
) -> CompareResult<Ordering> {
    let left = source
        .property(property)
        .ok_or_else(|| CompareError::UnknownProperty(property.to_string()))?;
    let right = compare_to
        .property(property)
        .ok_or_else(|| CompareError::UnknownProperty(property.to_string()))?;
    compare_values(property, &left, &right)
}

/// Like [`compare_property`], but failures are logged and count as `Equal`.
pub fn compare_property_quietly(
    source: &dyn Inspect,
    compare_to: &dyn Inspect,
    property: &str,
) -> Ordering {
    compare_property(source, compare_to, property).unwrap_or_else(|err| {
        error!(
            property,
            source = source.type_name(),
            compare_to = compare_to.type_name(),
            error = %err,
            "property comparison failed"
        );
        Ordering::Equal
    })
}
