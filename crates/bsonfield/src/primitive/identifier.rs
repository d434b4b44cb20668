//! ObjectId and UUID codecs.
//!
//! Both accept their native wire form or their canonical string form. They
//! encode to the native form unless `encode_as_string()` is selected.

use std::sync::Arc;

use bsonfield_value::{Binary, ObjectId, Uuid, Value};

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::Codec;
use crate::context::ParseContext;
use crate::error::{ParseError, TypeDescription};

pub fn parse_object_id(ctx: &ParseContext, value: &Value) -> Result<ObjectId, ParseError> {
    match value {
        Value::ObjectId(id) => Ok(*id),
        Value::String(s) => ObjectId::parse_str(s)
            .map_err(|error| ctx.semantic_error(format!("is not a valid ObjectId: {}", error))),
        other => Err(ctx.unexpected_type(TypeDescription::ObjectId, other.kind())),
    }
}

pub fn parse_uuid(ctx: &ParseContext, value: &Value) -> Result<Uuid, ParseError> {
    match value {
        Value::Binary(binary) => binary
            .to_uuid()
            .map_err(|error| ctx.semantic_error(format!("is not a valid UUID: {}", error))),
        Value::String(s) => Uuid::parse_str(s)
            .map_err(|error| ctx.semantic_error(format!("is not a valid UUID: {}", error))),
        other => Err(ctx.unexpected_type(TypeDescription::Uuid, other.kind())),
    }
}

pub fn object_id() -> Codec<ObjectId> {
    Codec::new(|id: &ObjectId| Value::ObjectId(*id), parse_object_id)
}

pub fn uuid() -> Codec<Uuid> {
    Codec::new(
        |uuid: &Uuid| Value::Binary(Binary::from_uuid(*uuid)),
        parse_uuid,
    )
}

impl<N: Target> TypeSelector<N> {
    pub fn object_id(self) -> TypedBuilder<N, ObjectId> {
        TypedBuilder::new(self.target, object_id())
    }

    pub fn uuid(self) -> TypedBuilder<N, Uuid> {
        TypedBuilder::new(self.target, uuid())
    }
}

impl<N: Target> TypedBuilder<N, ObjectId> {
    /// Writes the 24-digit hex form instead of the native identifier.
    pub fn encode_as_string(self) -> Self {
        self.map_codec(|codec| {
            codec.with_encoder(Arc::new(|id: &ObjectId| Value::String(id.to_hex())))
        })
    }
}

impl<N: Target> TypedBuilder<N, Uuid> {
    /// Writes the hyphenated string form instead of binary subtype 4.
    pub fn encode_as_string(self) -> Self {
        self.map_codec(|codec| {
            codec.with_encoder(Arc::new(|uuid: &Uuid| {
                Value::String(uuid.hyphenated().to_string())
            }))
        })
    }
}
