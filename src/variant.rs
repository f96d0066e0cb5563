// ============================================================================
// observable-property - Serde Adapter
// A property crosses a serialization boundary as its bare value
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::primitives::property::Property;

impl<T: Serialize> Serialize for Property<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

/// Deserializing yields a property with no callbacks.
impl<'de, T> Deserialize<'de> for Property<T>
where
    T: Deserialize<'de> + PartialEq,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Property::new)
    }
}

impl<T> Property<T> {
    /// Decode a value and route it through the gated [`Property::set`].
    ///
    /// Returns whether the decoded value changed the property. Decode
    /// errors leave the property untouched.
    pub fn set_from_deserializer<'de, D>(&mut self, deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Ok(self.set(value))
    }
}
