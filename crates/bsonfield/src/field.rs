//! Named field descriptors, as pulled from a [`DocumentParser`](crate::DocumentParser).

use bsonfield_value::Value;

use crate::codec::{Codec, Presence};
use crate::context::ParseContext;
use crate::error::ParseError;
use crate::parsed;

/// A descriptor that can be pulled out of, and written into, a document.
pub trait FieldDescriptor {
    /// The in-memory value written by [`DocumentBuilder`](crate::DocumentBuilder).
    type Value;
    /// What [`DocumentParser::get_field`](crate::DocumentParser::get_field) returns.
    type Parsed;

    fn name(&self) -> &str;

    /// `ctx` already points at the field.
    fn parse_presence(
        &self,
        ctx: &ParseContext,
        presence: Presence<'_>,
    ) -> Result<Self::Parsed, ParseError>;

    /// `None` leaves the field out of the document.
    fn encode_field(&self, value: &Self::Value) -> Option<Value>;
}

/// A field that must be present.
pub struct Required<T> {
    name: String,
    codec: Codec<T>,
}

impl<T: 'static> Required<T> {
    pub(crate) fn new(name: String, codec: Codec<T>) -> Self {
        Self { name, codec }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codec(&self) -> &Codec<T> {
        &self.codec
    }

    pub fn encode(&self, value: &T) -> Value {
        self.codec.encode(value)
    }
}

impl<T: 'static> FieldDescriptor for Required<T> {
    type Value = T;
    type Parsed = parsed::Required<T>;

    fn name(&self) -> &str {
        &self.name
    }

    fn parse_presence(
        &self,
        ctx: &ParseContext,
        presence: Presence<'_>,
    ) -> Result<Self::Parsed, ParseError> {
        let value = self.codec.parse_required(ctx, presence)?;
        Ok(parsed::Required::new(self.name.clone(), value))
    }

    fn encode_field(&self, value: &T) -> Option<Value> {
        Some(self.codec.encode(value))
    }
}

/// A field that may be absent. An explicit null also reads as absent unless
/// the builder was made `nullable()`.
pub struct Optional<T> {
    name: String,
    codec: Codec<T>,
}

impl<T: 'static> Optional<T> {
    pub(crate) fn new(name: String, codec: Codec<T>) -> Self {
        Self { name, codec }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codec(&self) -> &Codec<T> {
        &self.codec
    }

    pub fn encode(&self, value: &Option<T>) -> Option<Value> {
        value.as_ref().map(|value| self.codec.encode(value))
    }
}

impl<T: 'static> FieldDescriptor for Optional<T> {
    type Value = Option<T>;
    type Parsed = parsed::Optional<T>;

    fn name(&self) -> &str {
        &self.name
    }

    fn parse_presence(
        &self,
        ctx: &ParseContext,
        presence: Presence<'_>,
    ) -> Result<Self::Parsed, ParseError> {
        let value = self.codec.parse_optional(ctx, presence)?;
        Ok(parsed::Optional::new(self.name.clone(), value))
    }

    fn encode_field(&self, value: &Option<T>) -> Option<Value> {
        self.encode(value)
    }
}

/// A field that falls back to a default when absent.
pub struct WithDefault<T> {
    name: String,
    codec: Codec<T>,
    default: T,
}

impl<T: 'static> WithDefault<T> {
    pub(crate) fn new(name: String, codec: Codec<T>, default: T) -> Self {
        Self {
            name,
            codec,
            default,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codec(&self) -> &Codec<T> {
        &self.codec
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn encode(&self, value: &T) -> Value {
        self.codec.encode(value)
    }
}

impl<T: Clone + 'static> FieldDescriptor for WithDefault<T> {
    type Value = T;
    type Parsed = parsed::WithDefault<T>;

    fn name(&self) -> &str {
        &self.name
    }

    fn parse_presence(
        &self,
        ctx: &ParseContext,
        presence: Presence<'_>,
    ) -> Result<Self::Parsed, ParseError> {
        let value = self.codec.parse_optional(ctx, presence)?;
        Ok(parsed::WithDefault::new(
            self.name.clone(),
            value,
            self.default.clone(),
        ))
    }

    fn encode_field(&self, value: &T) -> Option<Value> {
        Some(self.codec.encode(value))
    }
}
