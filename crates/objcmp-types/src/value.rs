//! Dynamic field values.
//!
//! [`Value`] is the sum type over everything a compared object can expose
//! from a field. Nested composites are held as [`ObjectRef`] handles so that
//! shared (and even cyclic) object graphs can be described.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::{TypeError, TypeResult};
use crate::inspect::{identity, Inspect};

/// Shared handle to a nested object.
pub type ObjectRef = Rc<dyn Inspect>;

/// A single field value.
///
/// `Null` stands for an absent value (`None`).
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Object(ObjectRef),
}

impl Value {
    /// Wrap an already type-erased object handle.
    pub fn object(obj: ObjectRef) -> Self {
        Value::Object(obj)
    }

    /// Returns `true` for an absent value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this value is a nested object.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The nested object, if this value is one.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant (or the object's type name).
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Object(obj) => obj.type_name(),
        }
    }

    /// Natural ordering between two values.
    ///
    /// Defined for same-variant scalars, lexicographically for lists, and by
    /// delegation to [`Inspect::compare`] for objects. Floats use the IEEE
    /// total order, so NaN is ordered too. Returns `None` when the two values
    /// have no ordering (mixed variants, maps).
    pub fn natural_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::UInt(a), Value::UInt(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => Some(a.total_cmp(b)),
            (Value::Char(a), Value::Char(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::List(a), Value::List(b)) => {
                for (x, y) in a.iter().zip(b) {
                    match x.natural_cmp(y)? {
                        Ordering::Equal => continue,
                        ord => return Some(ord),
                    }
                }
                Some(a.len().cmp(&b.len()))
            }
            (Value::Object(a), Value::Object(b)) => a.compare(b.as_ref()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            // NaN equals itself and -0.0 differs from 0.0.
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b).is_eq(),
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.equals(b.as_ref()),
            _ => false,
        }
    }
}

// Objects print as `Type@address` so that cyclic graphs never recurse.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(v) => write!(f, "Bool({v})"),
            Value::Int(v) => write!(f, "Int({v})"),
            Value::UInt(v) => write!(f, "UInt({v})"),
            Value::Float(v) => write!(f, "Float({v})"),
            Value::Char(v) => write!(f, "Char({v:?})"),
            Value::Str(v) => write!(f, "Str({v:?})"),
            Value::List(v) => f.debug_tuple("List").field(v).finish(),
            Value::Map(v) => f.debug_tuple("Map").field(v).finish(),
            Value::Object(obj) => write!(
                f,
                "Object({}@{:#x})",
                obj.type_name(),
                identity(obj.as_ref())
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::UInt(v) => serializer.serialize_u64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Char(v) => serializer.serialize_char(*v),
            Value::Str(v) => serializer.serialize_str(v),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            // Nested objects are reported opaquely; their own changes appear
            // as separate records.
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", obj.type_name())?;
                map.end()
            }
        }
    }
}

// ---------------------------------------------------------------
// Conversions into Value
// ---------------------------------------------------------------

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(i64::from(v))
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::UInt(u64::from(v))
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::UInt(v as u64)
    }
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Value {
    fn from(v: BTreeMap<String, V>) -> Self {
        Value::Map(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Inspect> From<Rc<T>> for Value {
    fn from(v: Rc<T>) -> Self {
        Value::Object(v)
    }
}

// ---------------------------------------------------------------
// Conversions out of Value
// ---------------------------------------------------------------

impl TryFrom<&Value> for i64 {
    type Error = TypeError;

    fn try_from(value: &Value) -> TypeResult<Self> {
        match value {
            Value::Int(v) => Ok(*v),
            Value::UInt(v) => i64::try_from(*v).map_err(|_| TypeError::TypeMismatch {
                expected: "int",
                actual: "uint",
            }),
            other => Err(TypeError::TypeMismatch {
                expected: "int",
                actual: other.kind(),
            }),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = TypeError;

    fn try_from(value: &Value) -> TypeResult<Self> {
        match value {
            Value::Bool(v) => Ok(*v),
            other => Err(TypeError::TypeMismatch {
                expected: "bool",
                actual: other.kind(),
            }),
        }
    }
}

impl TryFrom<&Value> for String {
    type Error = TypeError;

    fn try_from(value: &Value) -> TypeResult<Self> {
        match value {
            Value::Str(v) => Ok(v.clone()),
            other => Err(TypeError::TypeMismatch {
                expected: "string",
                actual: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_maps_to_null() {
        let none: Option<i32> = None;
        assert_eq!(Value::from(none), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::Int(3));
    }

    #[test]
    fn variants_never_equal_across_kinds() {
        assert_ne!(Value::Int(1), Value::UInt(1));
        assert_ne!(Value::Str("1".into()), Value::Int(1));
        assert_ne!(Value::Null, Value::Bool(false));
    }

    #[test]
    fn natural_order_of_scalars() {
        assert_eq!(
            Value::from(1).natural_cmp(&Value::from(2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::from("b").natural_cmp(&Value::from("a")),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::from(1).natural_cmp(&Value::from("a")), None);
    }

    #[test]
    fn nan_equals_itself() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert_eq!(nan.natural_cmp(&nan.clone()), Some(Ordering::Equal));
        assert_eq!(
            nan.natural_cmp(&Value::Float(f64::INFINITY)),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn signed_zeros_are_distinct() {
        let pos = Value::Float(0.0);
        let neg = Value::Float(-0.0);
        assert_ne!(pos, neg);
        assert_eq!(neg.natural_cmp(&pos), Some(Ordering::Less));
    }

    #[test]
    fn lists_order_lexicographically() {
        let short = Value::from(vec![1, 2]);
        let long = Value::from(vec![1, 2, 0]);
        let bigger = Value::from(vec![1, 3]);
        assert_eq!(short.natural_cmp(&long), Some(Ordering::Less));
        assert_eq!(bigger.natural_cmp(&long), Some(Ordering::Greater));
        assert_eq!(short.natural_cmp(&short.clone()), Some(Ordering::Equal));
    }

    #[test]
    fn maps_compare_by_equality_only() {
        let mut a = BTreeMap::new();
        a.insert("k".to_string(), 1);
        let left = Value::from(a.clone());
        let right = Value::from(a);
        assert_eq!(left, right);
        assert_eq!(left.natural_cmp(&right), None);
    }

    #[test]
    fn try_from_reports_mismatch() {
        let err = i64::try_from(&Value::from("x")).unwrap_err();
        assert_eq!(
            err,
            TypeError::TypeMismatch {
                expected: "int",
                actual: "string"
            }
        );
        assert_eq!(String::try_from(&Value::from("x")).unwrap(), "x");
        assert!(bool::try_from(&Value::Bool(true)).unwrap());
    }

    #[test]
    fn serializes_scalars_and_collections() {
        let value = Value::List(vec![Value::Null, Value::from(7), Value::from("s")]);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!([null, 7, "s"]));
    }
}
