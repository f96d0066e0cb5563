// ============================================================================
// observable-property - Primitives Module
// The property holder and its comparison impls
// ============================================================================

pub mod compare;
pub mod property;

pub use property::Property;
