use bsonfield_value::Value;
use regex::Regex;

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::Codec;
use crate::context::ParseContext;
use crate::error::{ParseError, TypeDescription};

pub fn parse_string(ctx: &ParseContext, value: &Value) -> Result<String, ParseError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(ctx.unexpected_type(TypeDescription::String, other.kind())),
    }
}

pub fn codec() -> Codec<String> {
    Codec::new(|s: &String| Value::String(s.clone()), parse_string)
}

impl<N: Target> TypeSelector<N> {
    pub fn string(self) -> TypedBuilder<N, String> {
        TypedBuilder::new(self.target, codec())
    }
}

impl<N: Target> TypedBuilder<N, String> {
    pub fn must_not_be_empty(self) -> Self {
        self.validate(|s: &String| s.is_empty().then(|| "cannot be empty".to_string()))
    }

    /// The whole string must match; anchor the pattern as needed.
    pub fn must_match(self, pattern: Regex) -> Self {
        self.validate(move |s: &String| {
            (!pattern.is_match(s)).then(|| format!("must match pattern {}", pattern.as_str()))
        })
    }
}
