//! Shallow diff over bean properties.
//!
//! Unlike [`Differ`](crate::Differ), these functions never descend into
//! nested objects: each property that does not compare equal produces one
//! top-level record.

use std::collections::BTreeMap;

use objcmp_compare::{compare_values, ensure_same_type};
use objcmp_types::{Inspect, TypeError};

use crate::change::{ChangeList, ChangeRecord};
use crate::error::{DiffError, DiffResult};

/// Changed properties of two same-typed objects, in declaration order.
pub fn changed_data(source: &dyn Inspect, compare_to: &dyn Inspect) -> DiffResult<ChangeList> {
    ensure_same_type(source, compare_to).map_err(|_| DiffError::InvalidComparison {
        left: source.type_name(),
        right: compare_to.type_name(),
    })?;

    let theirs = compare_to.properties();
    let mut changes = ChangeList::new();
    for ours in source.properties() {
        let other = theirs
            .iter()
            .find(|f| f.name == ours.name)
            .map(|f| f.value.clone())
            .ok_or_else(|| {
                TypeError::MissingField(format!("{}.{}", compare_to.type_name(), ours.name))
            })?;
        if compare_values(ours.name, &ours.value, &other)?.is_ne() {
            changes.push(ours.name, ours.value, other, None);
        }
    }
    Ok(changes)
}

/// Like [`changed_data`], keyed by property name.
pub fn changed_data_map(
    source: &dyn Inspect,
    compare_to: &dyn Inspect,
) -> DiffResult<BTreeMap<String, ChangeRecord>> {
    Ok(changed_data(source, compare_to)?
        .into_iter()
        .map(|record| (record.attribute_name.clone(), record))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use objcmp_compare::CompareError;
    use objcmp_types::{inspect, Value};

    use super::*;

    #[derive(Clone, PartialEq)]
    struct Inner {
        code: i64,
    }

    inspect!(Inner {
        fields: [code],
        equality: partial_eq,
    });

    #[derive(Clone)]
    struct Order {
        id: u64,
        note: Option<String>,
        lines: Vec<i64>,
        inner: Rc<Inner>,
    }

    impl Order {
        const TABLE: &'static str = "orders";
    }

    inspect!(Order {
        fields: [id, note, lines, inner],
        constants: [TABLE => Order::TABLE],
    });

    #[derive(Clone)]
    struct Invoice {
        id: u64,
    }

    inspect!(Invoice { fields: [id] });

    fn order(id: u64) -> Order {
        Order {
            id,
            note: None,
            lines: vec![1, 2],
            inner: Rc::new(Inner { code: 1 }),
        }
    }

    #[test]
    fn equal_objects_have_no_changed_data() {
        let a = order(1);
        assert!(changed_data(&a, &a.clone()).unwrap().is_empty());
        assert!(changed_data_map(&a, &a.clone()).unwrap().is_empty());
    }

    #[test]
    fn changed_properties_are_listed_in_order() {
        let a = order(1);
        let mut b = order(2);
        b.note = Some("rush".into());
        b.lines.push(3);

        let changes = changed_data(&a, &b).unwrap();
        let names: Vec<_> = changes.iter().map(|r| r.attribute_name.as_str()).collect();
        assert_eq!(names, ["id", "note", "lines"]);
        assert!(changes.iter().all(|r| r.parent.is_none()));
        assert_eq!(changes.as_slice()[1].source_attribute, Value::Null);
    }

    #[test]
    fn nested_objects_are_not_descended() {
        let a = order(1);
        let mut b = order(1);
        b.inner = Rc::new(Inner { code: 2 });

        // Inner has no natural ordering, so unequal values cannot be ranked.
        let err = changed_data(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            DiffError::Compare(CompareError::Incomparable { ref property, .. }) if property == "inner"
        ));
    }

    #[test]
    fn map_is_keyed_by_property() {
        let a = order(1);
        let mut b = order(1);
        b.note = Some("gift".into());

        let map = changed_data_map(&a, &b).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["note"].changed_attribute, Value::from("gift"));
    }

    #[test]
    fn mismatched_types_are_rejected() {
        let err = changed_data(&order(1), &Invoice { id: 1 }).unwrap_err();
        assert_eq!(
            err,
            DiffError::InvalidComparison {
                left: "Order",
                right: "Invoice"
            }
        );
    }
}
