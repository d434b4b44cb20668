//! Codecs for types whose document mapping is defined outside this crate.

use core::fmt;

use bsonfield_value::{Document, Value};

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::Codec;
use crate::context::ParseContext;
use crate::error::{ParseError, TypeDescription};

/// A message type with its own document conversion, such as generated code.
pub trait BsonMessage: Sized {
    type Error: fmt::Display;

    fn from_document(document: &Document) -> Result<Self, Self::Error>;
    fn to_document(&self) -> Document;
}

pub fn parse_message<M: BsonMessage>(ctx: &ParseContext, value: &Value) -> Result<M, ParseError> {
    match value {
        Value::Document(doc) => {
            M::from_document(doc).map_err(|error| ctx.semantic_error(error.to_string()))
        }
        other => Err(ctx.unexpected_type(TypeDescription::Document, other.kind())),
    }
}

pub fn codec<M: BsonMessage + 'static>() -> Codec<M> {
    Codec::new(
        |message: &M| Value::Document(message.to_document()),
        parse_message::<M>,
    )
}

impl<N: Target> TypeSelector<N> {
    pub fn message<M: BsonMessage + 'static>(self) -> TypedBuilder<N, M> {
        TypedBuilder::new(self.target, codec::<M>())
    }
}
