use bsonfield_value::{DateTime, Timestamp, Value};

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::Codec;
use crate::context::ParseContext;
use crate::error::{ParseError, TypeDescription};

pub fn parse_date_time(ctx: &ParseContext, value: &Value) -> Result<DateTime, ParseError> {
    value
        .as_date_time()
        .ok_or_else(|| ctx.unexpected_type(TypeDescription::DateTime, value.kind()))
}

pub fn parse_timestamp(ctx: &ParseContext, value: &Value) -> Result<Timestamp, ParseError> {
    value
        .as_timestamp()
        .ok_or_else(|| ctx.unexpected_type(TypeDescription::Timestamp, value.kind()))
}

pub fn date_time() -> Codec<DateTime> {
    Codec::new(|d: &DateTime| Value::DateTime(*d), parse_date_time)
}

pub fn timestamp() -> Codec<Timestamp> {
    Codec::new(|t: &Timestamp| Value::Timestamp(*t), parse_timestamp)
}

impl<N: Target> TypeSelector<N> {
    pub fn date_time(self) -> TypedBuilder<N, DateTime> {
        TypedBuilder::new(self.target, date_time())
    }

    pub fn timestamp(self) -> TypedBuilder<N, Timestamp> {
        TypedBuilder::new(self.target, timestamp())
    }
}
