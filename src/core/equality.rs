// ============================================================================
// observable-property - Equality Gates
// Functions deciding whether a write counts as a change
// ============================================================================

/// Strict equality using `PartialEq`. The gate every `Property::new` uses.
///
/// # Example
/// ```
/// use observable_property::equals;
///
/// assert!(equals(&true, &true));
/// assert!(!equals(&1, &2));
/// ```
pub fn equals<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}

// =============================================================================
// FLOATS
// =============================================================================

/// `f64` equality where NaN equals NaN.
///
/// Plain `PartialEq` treats every NaN write as a change, so a property
/// holding NaN would notify on each assignment of NaN.
///
/// # Example
/// ```
/// use observable_property::nan_aware_f64;
///
/// assert!(nan_aware_f64(&f64::NAN, &f64::NAN));
/// assert!(!nan_aware_f64(&f64::NAN, &0.0));
/// assert!(nan_aware_f64(&-0.0, &0.0));
/// ```
pub fn nan_aware_f64(a: &f64, b: &f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    a == b
}

/// `f32` counterpart of [`nan_aware_f64`].
pub fn nan_aware_f32(a: &f32, b: &f32) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    a == b
}

// =============================================================================
// FIXED ANSWERS
// =============================================================================

/// Never equal: every write is applied and fires callbacks.
///
/// Works for types with no `PartialEq` at all.
pub fn always_notify<T>(_a: &T, _b: &T) -> bool {
    false
}

/// Always equal: every write is dropped. The property keeps its
/// construction value.
pub fn never_notify<T>(_a: &T, _b: &T) -> bool {
    true
}

// =============================================================================
// PROJECTIONS
// =============================================================================

/// Build a gate comparing only a projected key.
///
/// The result is a closure, so it goes through `Property::set_with`
/// rather than an `EqualsFn` slot.
///
/// # Example
/// ```
/// use observable_property::{by_key, Property};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Entry { id: u32, label: &'static str }
///
/// let mut p = Property::new(Entry { id: 1, label: "a" });
/// let same_id = by_key(|e: &Entry| e.id);
///
/// assert!(!p.set_with(Entry { id: 1, label: "b" }, &same_id));
/// assert_eq!(p.label, "a");
/// ```
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> bool
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    move |a, b| key(a) == key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_equality() {
        assert!(equals(&"x", &"x"));
        assert!(!equals(&vec![1], &vec![2]));
    }

    #[test]
    fn nan_aware_floats() {
        assert!(nan_aware_f64(&f64::NAN, &f64::NAN));
        assert!(!nan_aware_f64(&1.0, &f64::NAN));
        assert!(nan_aware_f64(&f64::INFINITY, &f64::INFINITY));
        assert!(!nan_aware_f64(&f64::INFINITY, &f64::NEG_INFINITY));

        assert!(nan_aware_f32(&f32::NAN, &f32::NAN));
        assert!(!nan_aware_f32(&f32::NAN, &2.0));
        assert!(nan_aware_f32(&2.0, &2.0));
    }

    #[test]
    fn fixed_gates_ignore_arguments() {
        struct Opaque;
        assert!(!always_notify(&Opaque, &Opaque));
        assert!(never_notify(&1, &2));
    }

    #[test]
    fn key_projection() {
        let by_len = by_key(|s: &String| s.len());
        assert!(by_len(&"abc".to_string(), &"xyz".to_string()));
        assert!(!by_len(&"ab".to_string(), &"xyz".to_string()));
    }
}
