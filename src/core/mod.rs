// ============================================================================
// observable-property - Core Module
// Callback types and equality gates
// ============================================================================

pub mod equality;
pub mod types;

pub use equality::{always_notify, by_key, equals, nan_aware_f32, nan_aware_f64, never_notify};
pub use types::{default_equals, ChangedFn, ChangingFn, EqualsFn, SetOutcome};
