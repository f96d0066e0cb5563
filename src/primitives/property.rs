// ============================================================================
// observable-property - Property Primitive
// A single owned value with equality-gated change callbacks
// ============================================================================

use std::fmt;
use std::ops::Deref;

use crate::core::equality::equals;
use crate::core::types::{ChangedFn, ChangingFn, EqualsFn, SetOutcome};

// =============================================================================
// PROPERTY<T>
// =============================================================================

/// An owned value that runs a callback whenever it changes.
///
/// A write goes through the equality gate first. If the new value equals
/// the current one nothing happens. Otherwise `on_changing(old, new)` runs,
/// the value is stored, and `on_changed(new)` runs.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use observable_property::Property;
///
/// let fired = Rc::new(Cell::new(0));
/// let f = fired.clone();
/// let mut checked = Property::new(false).on_changed(move |_| f.set(f.get() + 1));
///
/// assert!(checked.set(true));
/// assert!(!checked.set(true));
/// assert_eq!(fired.get(), 1);
/// assert!(*checked);
/// ```
pub struct Property<T> {
    value: T,
    on_changed: Option<ChangedFn<T>>,
    on_changing: Option<ChangingFn<T>>,
    equals: EqualsFn<T>,
}

impl<T> Property<T> {
    /// Create a property with no callbacks, gated on `PartialEq`.
    pub fn new(value: T) -> Self
    where
        T: PartialEq,
    {
        Self::with_equals(value, equals)
    }

    /// Create a property with a custom equality gate.
    pub fn with_equals(value: T, equals: EqualsFn<T>) -> Self {
        Self {
            value,
            on_changed: None,
            on_changing: None,
            equals,
        }
    }

    /// Create a property with both callback slots filled.
    pub fn with_callbacks(
        value: T,
        on_changed: impl FnMut(&T) + 'static,
        on_changing: impl FnMut(&T, &T) + 'static,
    ) -> Self
    where
        T: PartialEq,
    {
        Self::new(value).on_changed(on_changed).on_changing(on_changing)
    }

    /// Builder form of [`Property::set_on_changed`].
    pub fn on_changed(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.on_changed = Some(Box::new(f));
        self
    }

    /// Builder form of [`Property::set_on_changing`].
    pub fn on_changing(mut self, f: impl FnMut(&T, &T) + 'static) -> Self {
        self.on_changing = Some(Box::new(f));
        self
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_cloned(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// Access the current value with a closure.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value)
    }

    /// Consume the property, dropping its callbacks.
    pub fn into_inner(self) -> T {
        self.value
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    /// Set the value.
    ///
    /// Returns true if the value changed (based on the equality gate).
    /// If it didn't, neither callback runs.
    pub fn set(&mut self, value: T) -> bool {
        let eq = self.equals;
        self.write(value, eq).is_changed()
    }

    /// Set the value using a one-off equality gate instead of the
    /// configured one.
    pub fn set_with(&mut self, value: T, eq: impl Fn(&T, &T) -> bool) -> bool {
        self.write(value, eq).is_changed()
    }

    /// Edit a copy of the value and write it back through the gate.
    ///
    /// # Example
    ///
    /// ```
    /// use observable_property::Property;
    ///
    /// let mut items = Property::new(vec![1, 2]);
    /// assert!(items.update(|v| v.push(3)));
    /// assert!(!items.update(|v| v.sort()));
    /// assert_eq!(*items, vec![1, 2, 3]);
    /// ```
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> bool
    where
        T: Clone,
    {
        let mut next = self.value.clone();
        f(&mut next);
        self.set(next)
    }

    /// Store a value without consulting the gate or firing callbacks.
    /// Returns the previous value.
    pub fn replace_silent(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    fn write(&mut self, value: T, eq: impl Fn(&T, &T) -> bool) -> SetOutcome {
        if eq(&self.value, &value) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                target: "observable_property",
                ty = std::any::type_name::<T>(),
                "write rejected: value unchanged"
            );
            return SetOutcome::Unchanged;
        }

        if let Some(cb) = self.on_changing.as_mut() {
            cb(&self.value, &value);
        }

        self.value = value;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "observable_property",
            ty = std::any::type_name::<T>(),
            notify = self.on_changed.is_some(),
            "value changed"
        );

        if let Some(cb) = self.on_changed.as_mut() {
            cb(&self.value);
        }

        SetOutcome::Changed
    }

    // -------------------------------------------------------------------------
    // Callback and gate management
    // -------------------------------------------------------------------------

    /// Install the post-change callback, returning the previous one.
    pub fn set_on_changed(&mut self, f: impl FnMut(&T) + 'static) -> Option<ChangedFn<T>> {
        self.on_changed.replace(Box::new(f))
    }

    /// Install the pre-change callback, returning the previous one.
    pub fn set_on_changing(&mut self, f: impl FnMut(&T, &T) + 'static) -> Option<ChangingFn<T>> {
        self.on_changing.replace(Box::new(f))
    }

    pub fn set_equals(&mut self, equals: EqualsFn<T>) {
        self.equals = equals;
    }

    pub fn has_on_changed(&self) -> bool {
        self.on_changed.is_some()
    }

    pub fn has_on_changing(&self) -> bool {
        self.on_changing.is_some()
    }

    pub fn clear_callbacks(&mut self) {
        self.on_changed = None;
        self.on_changing = None;
    }

    /// Exchange values, callbacks and gates with another property.
    /// No callback fires.
    pub fn swap(&mut self, other: &mut Property<T>) {
        std::mem::swap(self, other);
    }
}

// =============================================================================
// TRANSPARENT ACCESS
// =============================================================================

impl<T> Deref for Property<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> AsRef<T> for Property<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> std::borrow::Borrow<T> for Property<T> {
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T: Default + PartialEq> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.value)
            .field("on_changed", &self.on_changed.is_some())
            .field("on_changing", &self.on_changing.is_some())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// =============================================================================
// TESTS
// =============================================================================


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<String>>>);

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for Captured {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if event.metadata().target() != "observable_property" {
                return;
            }
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0.lock().unwrap().push(visitor.0);
        }
    }

    #[test]
    fn writes_emit_trace_events() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());

        tracing::subscriber::with_default(subscriber, || {
            let mut p = Property::new(1).on_changed(|_| {});
            assert!(!p.set(1));
            assert!(p.set(2));
        });

        let events = captured.0.lock().unwrap();
        assert_eq!(
            *events,
            vec!["write rejected: value unchanged", "value changed"]
        );
    }
}
