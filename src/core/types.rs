// ============================================================================
// observable-property - Type Definitions
// Callback slots, the equality gate, and the outcome of a write
// ============================================================================

// =============================================================================
// CALLBACK SLOTS
// =============================================================================

/// Post-change callback. Receives the value that was just stored.
pub type ChangedFn<T> = Box<dyn FnMut(&T)>;

/// Pre-change callback. Receives `(old, new)` before `new` is stored.
pub type ChangingFn<T> = Box<dyn FnMut(&T, &T)>;

/// Equality gate used by `Property::set`.
///
/// Returning `true` means "same value": the write is dropped and no
/// callback fires.
pub type EqualsFn<T> = fn(&T, &T) -> bool;

/// Get the default equality function for a type (`PartialEq`).
pub fn default_equals<T: PartialEq>() -> EqualsFn<T> {
    super::equality::equals
}

// =============================================================================
// SET OUTCOME
// =============================================================================

/// Result of routing a value through the equality gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOutcome {
    /// The new value compared equal; nothing was stored or fired.
    Unchanged,
    /// The new value was stored and callbacks ran.
    Changed,
}

impl SetOutcome {
    pub fn is_changed(self) -> bool {
        matches!(self, SetOutcome::Changed)
    }
}

impl From<bool> for SetOutcome {
    fn from(changed: bool) -> Self {
        if changed {
            SetOutcome::Changed
        } else {
            SetOutcome::Unchanged
        }
    }
}

impl From<SetOutcome> for bool {
    fn from(outcome: SetOutcome) -> Self {
        outcome.is_changed()
    }
}

// =============================================================================
// TESTS
// =============================================================================
