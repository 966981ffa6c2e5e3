/// Builds a [`TypeDescriptor`](crate::TypeDescriptor) from a compact type expression.
///
/// - `ty!(Integer)`: scalar
/// - `ty!(List(Integer))`: generic with element types in parentheses
/// - `ty!([Integer])`: array of the bracketed element type
///
/// Names are taken verbatim as [`TypeId`](crate::TypeId)s.
///
/// ```rust
/// use conf_literal::{ty, parametrized, TypeDescriptor, TypeId};
///
/// assert_eq!(
///     ty!(Set(List(String))),
///     parametrized(
///         TypeId::SET,
///         vec![parametrized(TypeId::LIST, vec![TypeDescriptor::scalar(TypeId::STRING)])],
///     )
/// );
/// assert_eq!(ty!([int]).to_string(), "int[]");
/// ```
#[macro_export]
macro_rules! ty {
    // Element list muncher: array element
    (@args [$($out:expr,)*] [ $($elem:tt)+ ] $(, $($rest:tt)*)?) => {
        $crate::ty!(@args [$($out,)* $crate::ty!([ $($elem)+ ]),] $($($rest)*)?)
    };

    // Element list muncher: generic element
    (@args [$($out:expr,)*] $raw:ident ( $($inner:tt)* ) $(, $($rest:tt)*)?) => {
        $crate::ty!(@args [$($out,)* $crate::ty!($raw ( $($inner)* )),] $($($rest)*)?)
    };

    // Element list muncher: scalar element
    (@args [$($out:expr,)*] $id:ident $(, $($rest:tt)*)?) => {
        $crate::ty!(@args [$($out,)* $crate::ty!($id),] $($($rest)*)?)
    };

    // Element list muncher: done
    (@args [$($out:expr,)*]) => {
        vec![$($out),*]
    };

    // Array
    ([ $($elem:tt)+ ]) => {
        $crate::TypeDescriptor::ArrayOf(::std::boxed::Box::new($crate::ty!($($elem)+)))
    };

    // Generic
    ($raw:ident ( $($args:tt)* )) => {
        $crate::TypeDescriptor::Generic {
            raw: $crate::TypeId::from_static(stringify!($raw)),
            args: $crate::ty!(@args [] $($args)*),
        }
    };

    // Scalar
    ($id:ident) => {
        $crate::TypeDescriptor::Scalar($crate::TypeId::from_static(stringify!($id)))
    };
}
