use bsonfield_value::{Binary, Value};

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::Codec;
use crate::context::ParseContext;
use crate::error::{ParseError, TypeDescription};

pub fn parse_binary(ctx: &ParseContext, value: &Value) -> Result<Binary, ParseError> {
    match value {
        Value::Binary(binary) => Ok(binary.clone()),
        other => Err(ctx.unexpected_type(TypeDescription::Binary, other.kind())),
    }
}

pub fn codec() -> Codec<Binary> {
    Codec::new(|b: &Binary| Value::Binary(b.clone()), parse_binary)
}

impl<N: Target> TypeSelector<N> {
    pub fn binary(self) -> TypedBuilder<N, Binary> {
        TypedBuilder::new(self.target, codec())
    }
}
