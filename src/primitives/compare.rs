// ============================================================================
// observable-property - Comparisons
// ==, !=, <, > and friends delegate to the wrapped value
// ============================================================================

use std::cmp::Ordering;

use super::property::Property;

// =============================================================================
// PROPERTY vs PROPERTY
// =============================================================================

impl<T: PartialEq> PartialEq for Property<T> {
    fn eq(&self, other: &Property<T>) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for Property<T> {}

impl<T: PartialOrd> PartialOrd for Property<T> {
    fn partial_cmp(&self, other: &Property<T>) -> Option<Ordering> {
        self.get().partial_cmp(other.get())
    }
}

impl<T: Ord> Ord for Property<T> {
    fn cmp(&self, other: &Property<T>) -> Ordering {
        self.get().cmp(other.get())
    }
}

// =============================================================================
// PROPERTY vs RAW VALUE
// =============================================================================

impl<T: PartialEq> PartialEq<T> for Property<T> {
    fn eq(&self, other: &T) -> bool {
        self.get() == other
    }
}

impl<T: PartialOrd> PartialOrd<T> for Property<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.get().partial_cmp(other)
    }
}

impl PartialEq<str> for Property<String> {
    fn eq(&self, other: &str) -> bool {
        self.get() == other
    }
}

impl PartialEq<&str> for Property<String> {
    fn eq(&self, other: &&str) -> bool {
        self.get() == *other
    }
}

// Raw value on the left for std types
crate::impl_raw_comparisons!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);
