use alloc::string::String;

/// A `name="value"` pair attached to an [`XmlNode`](crate::XmlNode).
///
/// Both strings are owned. `Clone` produces an independent duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlAttribute {
    name: String,
    value: String,
}

impl XmlAttribute {
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the name, dropping the previous one.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.into();
    }

    /// Replaces the value, dropping the previous one.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.into();
    }
}
