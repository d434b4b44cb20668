//! Unnamed value descriptors: list elements, map values and bare root values.

use std::sync::Arc;

use bsonfield_value::Value;

use crate::codec::{Codec, Presence};
use crate::context::ParseContext;
use crate::error::ParseError;

/// A descriptor usable as the element of a list or the value of a map.
pub trait Element {
    type Output: 'static;

    fn into_codec(self) -> Codec<Self::Output>;
}

pub struct Required<T> {
    codec: Codec<T>,
}

impl<T: 'static> Required<T> {
    pub(crate) fn new(codec: Codec<T>) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &Codec<T> {
        &self.codec
    }

    pub fn parse(&self, ctx: &ParseContext, value: &Value) -> Result<T, ParseError> {
        self.codec.parse_required(ctx, Presence::of(Some(value)))
    }

    pub fn encode(&self, value: &T) -> Value {
        self.codec.encode(value)
    }
}

impl<T: 'static> Element for Required<T> {
    type Output = T;

    fn into_codec(self) -> Codec<T> {
        self.codec
    }
}

/// Null reads as `None` unless the builder was made `nullable()`.
pub struct Optional<T> {
    codec: Codec<T>,
}

impl<T: 'static> Optional<T> {
    pub(crate) fn new(codec: Codec<T>) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &Codec<T> {
        &self.codec
    }

    pub fn parse(&self, ctx: &ParseContext, value: &Value) -> Result<Option<T>, ParseError> {
        self.codec.parse_optional(ctx, Presence::of(Some(value)))
    }

    /// `None` encodes as null.
    pub fn encode(&self, value: &Option<T>) -> Value {
        value
            .as_ref()
            .map(|value| self.codec.encode(value))
            .unwrap_or(Value::Null)
    }
}

impl<T: 'static> Element for Optional<T> {
    type Output = Option<T>;

    fn into_codec(self) -> Codec<Option<T>> {
        let encoder = self.codec.clone();
        let parser = self.codec;
        Codec::new(
            move |value: &Option<T>| {
                value
                    .as_ref()
                    .map(|value| encoder.encode(value))
                    .unwrap_or(Value::Null)
            },
            move |ctx: &ParseContext, value: &Value| {
                parser.parse_optional(ctx, Presence::of(Some(value)))
            },
        )
    }
}

/// Null reads as the default.
pub struct WithDefault<T> {
    codec: Codec<T>,
    default: T,
}

impl<T: 'static> WithDefault<T> {
    pub(crate) fn new(codec: Codec<T>, default: T) -> Self {
        Self { codec, default }
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

impl<T: Clone + 'static> WithDefault<T> {
    pub fn parse(&self, ctx: &ParseContext, value: &Value) -> Result<T, ParseError> {
        Ok(self
            .codec
            .parse_optional(ctx, Presence::of(Some(value)))?
            .unwrap_or_else(|| self.default.clone()))
    }
}

impl<T: Clone + Send + Sync + 'static> Element for WithDefault<T> {
    type Output = T;

    fn into_codec(self) -> Codec<T> {
        let codec = self.codec;
        let default = self.default;
        Codec::from_shared(
            codec.encoder().clone(),
            Arc::new(move |ctx: &ParseContext, value: &Value| -> Result<T, ParseError> {
                Ok(codec
                    .parse_optional(ctx, Presence::of(Some(value)))?
                    .unwrap_or_else(|| default.clone()))
            }),
        )
    }
}
