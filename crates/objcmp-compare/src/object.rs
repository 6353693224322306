//! Whole-object comparison over all bean properties.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use objcmp_types::{same_type, Inspect};

use crate::error::{CompareError, CompareResult};
use crate::property::compare_values;

/// Fail with [`CompareError::InvalidComparison`] unless both objects have
/// the same runtime type.
pub fn ensure_same_type(source: &dyn Inspect, compare_to: &dyn Inspect) -> CompareResult<()> {
    if same_type(source, compare_to) {
        Ok(())
    } else {
        Err(CompareError::InvalidComparison {
            left: source.type_name(),
            right: compare_to.type_name(),
        })
    }
}

/// Property orderings in declaration order.
fn property_orderings(
    source: &dyn Inspect,
    compare_to: &dyn Inspect,
) -> CompareResult<Vec<(&'static str, Ordering)>> {
    ensure_same_type(source, compare_to)?;
    let theirs = compare_to.properties();
    source
        .properties()
        .into_iter()
        .map(|ours| {
            let other = theirs
                .iter()
                .find(|f| f.name == ours.name)
                .ok_or_else(|| CompareError::UnknownProperty(ours.name.to_string()))?;
            let ord = compare_values(ours.name, &ours.value, &other.value)?;
            Ok((ours.name, ord))
        })
        .collect()
}

/// Returns `true` if every bean property of the two objects compares equal.
pub fn compare(source: &dyn Inspect, compare_to: &dyn Inspect) -> CompareResult<bool> {
    Ok(property_orderings(source, compare_to)?
        .iter()
        .all(|(_, ord)| ord.is_eq()))
}

/// Order two objects by their bean properties.
///
/// The first property (in declaration order) that does not compare equal
/// decides the result, so properties order lexicographically. This is
/// deliberately not the ordering of the last property visited.
pub fn compare_to(source: &dyn Inspect, compare_to: &dyn Inspect) -> CompareResult<Ordering> {
    Ok(property_orderings(source, compare_to)?
        .into_iter()
        .map(|(_, ord)| ord)
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal))
}

/// The ordering of every bean property, keyed by property name.
pub fn compare_to_result(
    source: &dyn Inspect,
    compare_to: &dyn Inspect,
) -> CompareResult<BTreeMap<String, Ordering>> {
    Ok(property_orderings(source, compare_to)?
        .into_iter()
        .map(|(name, ord)| (name.to_string(), ord))
        .collect())
}

#[cfg(test)]
mod tests {
    use objcmp_types::inspect;

    use super::*;

    #[derive(Clone)]
    struct Employee {
        name: String,
        age: u32,
        manager: Option<String>,
    }

    impl Employee {
        const KIND: &'static str = "employee";
    }

    inspect!(Employee {
        fields: [name, age, manager],
        constants: [KIND => Employee::KIND],
    });

    #[derive(Clone)]
    struct Contractor {
        name: String,
    }

    inspect!(Contractor { fields: [name] });

    fn employee(name: &str, age: u32) -> Employee {
        Employee {
            name: name.to_string(),
            age,
            manager: None,
        }
    }

    #[test]
    fn equal_objects_compare_true() {
        let a = employee("ada", 36);
        assert!(compare(&a, &a.clone()).unwrap());
        assert_eq!(compare_to(&a, &a.clone()).unwrap(), Ordering::Equal);
    }

    #[test]
    fn any_differing_property_compares_false() {
        let a = employee("ada", 36);
        let b = employee("ada", 37);
        assert!(!compare(&a, &b).unwrap());
    }

    #[test]
    fn first_differing_property_decides_order() {
        let a = employee("ada", 40);
        let b = employee("bob", 20);
        assert_eq!(compare_to(&a, &b).unwrap(), Ordering::Less);
        assert_eq!(compare_to(&b, &a).unwrap(), Ordering::Greater);
    }

    #[test]
    fn result_map_covers_every_property() {
        let a = employee("ada", 36);
        let mut b = employee("ada", 30);
        b.manager = Some("grace".into());

        let result = compare_to_result(&a, &b).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result["name"], Ordering::Equal);
        assert_eq!(result["age"], Ordering::Greater);
        assert_eq!(result["manager"], Ordering::Less);
        assert!(!result.contains_key("KIND"));
    }

    #[derive(Clone)]
    struct Sample {
        ratio: f64,
    }

    inspect!(Sample { fields: [ratio] });

    #[test]
    fn nan_property_compares_equal_to_itself() {
        let s = Sample { ratio: f64::NAN };
        assert!(compare(&s, &s.clone()).unwrap());
        assert_eq!(compare_to(&s, &s.clone()).unwrap(), Ordering::Equal);

        let zero = Sample { ratio: 0.0 };
        let neg_zero = Sample { ratio: -0.0 };
        assert_eq!(compare_to(&neg_zero, &zero).unwrap(), Ordering::Less);
    }

    #[test]
    fn later_properties_do_not_override_earlier_ones() {
        // name decides; age would order the other way.
        let a = employee("ada", 90);
        let b = employee("bob", 10);
        assert_eq!(compare_to(&a, &b).unwrap(), Ordering::Less);
    }

    #[test]
    fn different_types_are_rejected() {
        let a = employee("ada", 36);
        let c = Contractor { name: "ada".into() };
        let err = compare(&a, &c).unwrap_err();
        assert_eq!(
            err,
            CompareError::InvalidComparison {
                left: "Employee",
                right: "Contractor"
            }
        );
        assert!(compare_to(&a, &c).is_err());
        assert!(compare_to_result(&a, &c).is_err());
    }
}
