// ============================================================================
// observable-property - Macros
// ============================================================================

/// Implement raw-value-on-the-left comparisons against `Property<T>`.
///
/// `Property<T>` already compares against `T` when it sits on the left.
/// The mirrored form (`5 == prop`, `5 < prop`) needs one impl per concrete
/// type. This crate provides them for the std scalars and `String`; call
/// the macro for your own types.
///
/// # Usage
///
/// ```rust
/// use observable_property::{impl_raw_comparisons, Property};
///
/// #[derive(PartialEq, PartialOrd)]
/// struct Celsius(i32);
///
/// impl_raw_comparisons!(Celsius);
///
/// let t = Property::new(Celsius(20));
/// assert!(Celsius(20) == t);
/// assert!(Celsius(5) < t);
/// ```
#[macro_export]
macro_rules! impl_raw_comparisons {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ::core::cmp::PartialEq<$crate::Property<$t>> for $t {
                fn eq(&self, other: &$crate::Property<$t>) -> bool {
                    self == other.get()
                }
            }

            impl ::core::cmp::PartialOrd<$crate::Property<$t>> for $t {
                fn partial_cmp(
                    &self,
                    other: &$crate::Property<$t>,
                ) -> ::core::option::Option<::core::cmp::Ordering> {
                    ::core::cmp::PartialOrd::partial_cmp(self, other.get())
                }
            }
        )+
    };
}

/// Helper macro to clone variables into a move closure.
///
/// Handy when a callback needs its own handle on shared state.
///
/// # Usage
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use observable_property::{cloned, Property};
///
/// let hits = Rc::new(Cell::new(0));
/// let mut p = Property::new(0).on_changed(cloned!(hits => move |_| hits.set(hits.get() + 1)));
///
/// p.set(1);
/// assert_eq!(hits.get(), 1);
/// ```
#[macro_export]
macro_rules! cloned {
    ($($n:ident),+ => $e:expr) => {
        {
            $( let $n = $n.clone(); )+
            $e
        }
    };
}
