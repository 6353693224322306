//! The [`Inspect`] trait: an explicit field descriptor list per type.
//!
//! A type that wants to be compared or diffed lists its declared fields in
//! declaration order, tags type-level constants with [`Modifiers`], and may
//! define its own equality and natural ordering.

use std::any::Any;
use std::cmp::Ordering;
use std::ops::BitOr;

use crate::error::{TypeError, TypeResult};
use crate::value::Value;

/// Qualifiers of a declared field.
///
/// A field that is both [`STATIC`](Modifiers::STATIC) and
/// [`FINAL`](Modifiers::FINAL) is a type-level constant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    /// Shared by every instance of the type.
    pub const STATIC: Modifiers = Modifiers(1);
    /// Never reassigned after construction.
    pub const FINAL: Modifiers = Modifiers(1 << 1);
    pub const CONSTANT: Modifiers = Modifiers(Self::STATIC.0 | Self::FINAL.0);

    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    pub const fn is_final(self) -> bool {
        self.contains(Self::FINAL)
    }

    /// Both static and final.
    pub const fn is_constant(self) -> bool {
        self.contains(Self::CONSTANT)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

/// One declared field read from an instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub modifiers: Modifiers,
    pub value: Value,
}

impl Field {
    /// An ordinary instance field.
    pub fn new(name: &'static str, value: impl Into<Value>) -> Self {
        Self {
            name,
            modifiers: Modifiers::NONE,
            value: value.into(),
        }
    }

    /// A type-level constant (static + final).
    pub fn constant(name: &'static str, value: impl Into<Value>) -> Self {
        Self {
            name,
            modifiers: Modifiers::CONSTANT,
            value: value.into(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn is_constant(&self) -> bool {
        self.modifiers.is_constant()
    }
}

/// Describes an object's fields to the comparator and the differ.
///
/// Implementors must return fields in declaration order and must return the
/// same field names, in the same order, for every instance of the type.
pub trait Inspect: 'static {
    /// Human-readable type name used in reports and errors.
    fn type_name(&self) -> &'static str;

    /// Upcast used for exact runtime type identity and downcasting.
    fn as_any(&self) -> &dyn Any;

    /// All declared fields, constants included, in declaration order.
    fn fields(&self) -> Vec<Field>;

    /// The bean properties of the object: every field that is not a
    /// type-level constant.
    fn properties(&self) -> Vec<Field> {
        self.fields()
            .into_iter()
            .filter(|field| !field.is_constant())
            .collect()
    }

    /// Look up a single bean property by name.
    fn property(&self, name: &str) -> Option<Value> {
        self.properties()
            .into_iter()
            .find(|field| field.name == name)
            .map(|field| field.value)
    }

    /// Look up a declared field by name, failing if the type has none.
    fn field(&self, name: &str) -> TypeResult<Value> {
        self.fields()
            .into_iter()
            .find(|field| field.name == name)
            .map(|field| field.value)
            .ok_or_else(|| TypeError::MissingField(format!("{}.{}", self.type_name(), name)))
    }

    /// Equality used when this object is a field value.
    ///
    /// Defaults to identity: two handles are equal only if they point at
    /// the same instance.
    fn equals(&self, other: &dyn Inspect) -> bool {
        std::ptr::addr_eq(self as *const Self, other as *const dyn Inspect)
    }

    /// Natural ordering against another object, if the type has one.
    fn compare(&self, _other: &dyn Inspect) -> Option<Ordering> {
        None
    }
}

/// Returns `true` if both objects have exactly the same runtime type.
pub fn same_type(a: &dyn Inspect, b: &dyn Inspect) -> bool {
    a.as_any().type_id() == b.as_any().type_id()
}

/// Address of the object, used as its identity.
pub fn identity(obj: &dyn Inspect) -> usize {
    obj as *const dyn Inspect as *const () as usize
}

/// Downcast a type-erased object to its concrete type.
pub fn downcast<T: Inspect>(obj: &dyn Inspect) -> Option<&T> {
    obj.as_any().downcast_ref::<T>()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Point {
        const ORIGIN_LABEL: &'static str = "origin";
    }

    crate::inspect!(Point {
        fields: [x, y],
        constants: [ORIGIN_LABEL => Point::ORIGIN_LABEL],
        equality: partial_eq,
    });

    struct Opaque;

    crate::inspect!(Opaque { fields: [] });

    #[test]
    fn modifiers_constant_requires_both() {
        assert!(Modifiers::CONSTANT.is_constant());
        assert!(!Modifiers::STATIC.is_constant());
        assert!(!Modifiers::FINAL.is_constant());
        assert!((Modifiers::STATIC | Modifiers::FINAL).is_constant());
    }

    #[test]
    fn fields_keep_declaration_order() {
        let names: Vec<_> = Point { x: 1, y: 2 }
            .fields()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["x", "y", "ORIGIN_LABEL"]);
    }

    #[test]
    fn properties_exclude_constants() {
        let point = Point { x: 1, y: 2 };
        assert_eq!(point.properties().len(), 2);
        assert_eq!(point.property("y"), Some(Value::Int(2)));
        assert_eq!(point.property("ORIGIN_LABEL"), None);
    }

    #[test]
    fn missing_field_is_an_error() {
        let err = Point { x: 0, y: 0 }.field("z").unwrap_err();
        assert_eq!(err, TypeError::MissingField("Point.z".into()));
    }

    #[test]
    fn default_equality_is_identity() {
        let a = Rc::new(Opaque);
        let b = Rc::new(Opaque);
        assert_eq!(Value::from(a.clone()), Value::from(a.clone()));
        assert_ne!(Value::from(a), Value::from(b));
    }

    #[test]
    fn partial_eq_equality_is_structural() {
        let a = Value::from(Rc::new(Point { x: 1, y: 2 }));
        let b = Value::from(Rc::new(Point { x: 1, y: 2 }));
        let c = Value::from(Rc::new(Point { x: 9, y: 2 }));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn same_type_and_downcast() {
        let point = Point { x: 1, y: 1 };
        assert!(same_type(&point, &point.clone()));
        assert!(!same_type(&point, &Opaque));
        assert_eq!(downcast::<Point>(&point).map(|p| p.x), Some(1));
        assert!(downcast::<Opaque>(&point).is_none());
    }
}
