/// Generate an [`Inspect`](crate::Inspect) implementation from a field list.
///
/// Field values are cloned and converted with `Value::from`, so each listed
/// field type must be `Clone` and convert into [`Value`](crate::Value).
///
/// ```
/// use objcmp_types::{inspect, Inspect};
///
/// #[derive(Clone, PartialEq)]
/// struct Account {
///     owner: String,
///     balance: i64,
/// }
///
/// impl Account {
///     const SCHEMA: u32 = 2;
/// }
///
/// inspect!(Account {
///     fields: [owner, balance],
///     constants: [SCHEMA => Account::SCHEMA],
///     equality: partial_eq,
/// });
///
/// let account = Account { owner: "ada".into(), balance: 10 };
/// assert_eq!(account.properties().len(), 2);
/// ```
///
/// `equality` accepts `partial_eq`; `ordering` accepts `ord` or
/// `partial_ord`. Without them the generated impl keeps the trait defaults
/// (identity equality, no ordering).
#[macro_export]
macro_rules! inspect {
    (
        $ty:ident {
            fields: [$($field:ident),* $(,)?]
            $(, constants: [$($cname:ident => $cval:expr),* $(,)?])?
            $(, equality: $eq:ident)?
            $(, ordering: $ord:ident)?
            $(,)?
        }
    ) => {
        impl $crate::Inspect for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::Field> {
                ::std::vec![
                    $($crate::Field::new(
                        stringify!($field),
                        ::core::clone::Clone::clone(&self.$field),
                    ),)*
                    $($($crate::Field::constant(stringify!($cname), $cval),)*)?
                ]
            }

            $crate::inspect!(@equals $($eq)?);
            $crate::inspect!(@compare $($ord)?);
        }
    };

    (@equals) => {};
    (@equals partial_eq) => {
        fn equals(&self, other: &dyn $crate::Inspect) -> bool {
            other
                .as_any()
                .downcast_ref::<Self>()
                .is_some_and(|other| self == other)
        }
    };

    (@compare) => {};
    (@compare ord) => {
        fn compare(&self, other: &dyn $crate::Inspect) -> ::core::option::Option<::core::cmp::Ordering> {
            other
                .as_any()
                .downcast_ref::<Self>()
                .map(|other| ::core::cmp::Ord::cmp(self, other))
        }
    };
    (@compare partial_ord) => {
        fn compare(&self, other: &dyn $crate::Inspect) -> ::core::option::Option<::core::cmp::Ordering> {
            other
                .as_any()
                .downcast_ref::<Self>()
                .and_then(|other| ::core::cmp::PartialOrd::partial_cmp(self, other))
        }
    };
}
