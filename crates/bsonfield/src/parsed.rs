//! Results of pulling a field out of a document.

/// The value of a required field.
#[derive(Debug, Clone, PartialEq)]
pub struct Required<T> {
    name: String,
    value: T,
}

impl<T> Required<T> {
    pub(crate) fn new(name: String, value: T) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// The value of an optional field, `None` when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Optional<T> {
    name: String,
    value: Option<T>,
}

impl<T> Optional<T> {
    pub(crate) fn new(name: String, value: Option<T>) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    pub(crate) fn into_parts(self) -> (String, Option<T>) {
        (self.name, self.value)
    }
}

/// The value of a field with a default.
#[derive(Debug, Clone, PartialEq)]
pub struct WithDefault<T> {
    name: String,
    value: Option<T>,
    default: T,
}

impl<T> WithDefault<T> {
    pub(crate) fn new(name: String, value: Option<T>, default: T) -> Self {
        Self {
            name,
            value,
            default,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the document carried the field.
    pub fn is_explicit(&self) -> bool {
        self.value.is_some()
    }

    /// The parsed value, or the default when the field was absent.
    pub fn into_value(self) -> T {
        self.value.unwrap_or(self.default)
    }
}
