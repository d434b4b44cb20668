use bsonfield_value::Value;

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::Codec;
use crate::context::ParseContext;
use crate::error::{ParseError, TypeDescription};

pub fn parse_bool(ctx: &ParseContext, value: &Value) -> Result<bool, ParseError> {
    match value {
        Value::Boolean(b) => Ok(*b),
        other => Err(ctx.unexpected_type(TypeDescription::Boolean, other.kind())),
    }
}

pub fn codec() -> Codec<bool> {
    Codec::new(|b: &bool| Value::Boolean(*b), parse_bool)
}

impl<N: Target> TypeSelector<N> {
    pub fn boolean(self) -> TypedBuilder<N, bool> {
        TypedBuilder::new(self.target, codec())
    }
}
