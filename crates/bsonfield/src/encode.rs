//! DocumentBuilder: the encoding mirror of [`DocumentParser`](crate::DocumentParser).

use bsonfield_value::Document;

use crate::field::FieldDescriptor;

/// Writes fields in the order they are added. Optional fields holding `None`
/// are left out.
#[must_use]
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<F: FieldDescriptor>(mut self, descriptor: &F, value: &F::Value) -> Self {
        if let Some(encoded) = descriptor.encode_field(value) {
            self.document.insert(descriptor.name(), encoded);
        }
        self
    }

    pub fn build(self) -> Document {
        self.document
    }
}
