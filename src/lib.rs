// ============================================================================
// observable-property - An Observable Value Holder for Rust
// ============================================================================
//
// One owned value, one post-change callback slot, one pre-change callback
// slot. Writes are gated on equality: assigning the value a property
// already holds does nothing.
// ============================================================================

#[macro_use]
mod macros;

pub mod core;
pub mod primitives;

#[cfg(feature = "serde")]
pub mod variant;

// Re-export core items at crate root for ergonomic access
pub use crate::core::equality::{always_notify, by_key, equals, nan_aware_f32, nan_aware_f64, never_notify};
pub use crate::core::types::{default_equals, ChangedFn, ChangingFn, EqualsFn, SetOutcome};

pub use primitives::property::Property;

// =============================================================================
// TESTS
// =============================================================================
