//! The encode/parse pair every type plugs into, and post-parse validation.

use std::sync::Arc;

use bsonfield_value::Value;

use crate::context::ParseContext;
use crate::error::ParseError;

/// Decodes a `T` from a wire value.
pub trait ValueParser<T>: Send + Sync {
    fn parse(&self, ctx: &ParseContext, value: &Value) -> Result<T, ParseError>;
}

impl<T, F> ValueParser<T> for F
where
    F: Fn(&ParseContext, &Value) -> Result<T, ParseError> + Send + Sync,
{
    fn parse(&self, ctx: &ParseContext, value: &Value) -> Result<T, ParseError> {
        (*self)(ctx, value)
    }
}

/// Encodes a `T` into a wire value. Encoding cannot fail.
pub trait ValueEncoder<T>: Send + Sync {
    fn encode(&self, value: &T) -> Value;
}

impl<T, F> ValueEncoder<T> for F
where
    F: Fn(&T) -> Value + Send + Sync,
{
    fn encode(&self, value: &T) -> Value {
        (*self)(value)
    }
}

pub type SharedParser<T> = Arc<dyn ValueParser<T>>;
pub type SharedEncoder<T> = Arc<dyn ValueEncoder<T>>;

/// Whether a value was there, explicitly null, or missing from its document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence<'a> {
    Absent,
    Null,
    Present(&'a Value),
}

impl<'a> Presence<'a> {
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(value) => Self::Present(value),
        }
    }
}

/// An encoder and a parser for the same type.
pub struct Codec<T> {
    encoder: SharedEncoder<T>,
    parser: SharedParser<T>,
    keeps_null: bool,
}

impl<T> Clone for Codec<T> {
    fn clone(&self) -> Self {
        Self {
            encoder: self.encoder.clone(),
            parser: self.parser.clone(),
            keeps_null: self.keeps_null,
        }
    }
}

impl<T: 'static> Codec<T> {
    pub fn new(
        encoder: impl ValueEncoder<T> + 'static,
        parser: impl ValueParser<T> + 'static,
    ) -> Self {
        Self::from_shared(Arc::new(encoder), Arc::new(parser))
    }

    pub fn from_shared(encoder: SharedEncoder<T>, parser: SharedParser<T>) -> Self {
        Self {
            encoder,
            parser,
            keeps_null: false,
        }
    }

    pub fn encoder(&self) -> &SharedEncoder<T> {
        &self.encoder
    }

    pub fn parser(&self) -> &SharedParser<T> {
        &self.parser
    }

    pub fn with_parser(self, parser: SharedParser<T>) -> Self {
        Self { parser, ..self }
    }

    pub fn with_encoder(self, encoder: SharedEncoder<T>) -> Self {
        Self { encoder, ..self }
    }

    /// True when an explicit null reaches the parser instead of reading as absent.
    pub fn keeps_null(&self) -> bool {
        self.keeps_null
    }

    pub fn encode(&self, value: &T) -> Value {
        self.encoder.encode(value)
    }

    pub fn parse(&self, ctx: &ParseContext, value: &Value) -> Result<T, ParseError> {
        self.parser.parse(ctx, value)
    }

    /// Absent values are missing. A null is handed to the parser, which
    /// reports it as missing unless it understands null.
    pub fn parse_required(&self, ctx: &ParseContext, presence: Presence<'_>) -> Result<T, ParseError> {
        match presence {
            Presence::Absent => Err(ctx.missing()),
            Presence::Null => self.parse(ctx, &Value::Null),
            Presence::Present(value) => self.parse(ctx, value),
        }
    }

    pub fn parse_optional(
        &self,
        ctx: &ParseContext,
        presence: Presence<'_>,
    ) -> Result<Option<T>, ParseError> {
        match presence {
            Presence::Absent => Ok(None),
            Presence::Null if !self.keeps_null => Ok(None),
            Presence::Null => self.parse(ctx, &Value::Null).map(Some),
            Presence::Present(value) => self.parse(ctx, value).map(Some),
        }
    }

    /// Runs `validator` after every successful parse.
    pub fn validated(self, validator: Arc<dyn Validator<T>>) -> Self {
        let parser = Arc::new(ValidatingParser {
            inner: self.parser.clone(),
            validator,
        });
        self.with_parser(parser)
    }

    /// A codec where an explicit null is a value of its own.
    pub fn nullable(self) -> Codec<Nullable<T>> {
        let encoder = self.encoder;
        let parser = self.parser;
        Codec {
            encoder: Arc::new(move |value: &Nullable<T>| match value {
                Nullable::Null => Value::Null,
                Nullable::Value(value) => encoder.encode(value),
            }),
            parser: Arc::new(move |ctx: &ParseContext, value: &Value| match value {
                Value::Null => Ok(Nullable::Null),
                value => parser.parse(ctx, value).map(Nullable::Value),
            }),
            keeps_null: true,
        }
    }
}

/// A value that may be an explicit null on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Nullable<T> {
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Null => None,
            Self::Value(value) => Some(value),
        }
    }
}

/// A check run on an already-parsed value.
pub trait Validator<T>: Send + Sync {
    fn validate(&self, ctx: &ParseContext, value: &T) -> Result<(), ParseError>;
}

impl<T, F> Validator<T> for F
where
    F: Fn(&ParseContext, &T) -> Result<(), ParseError> + Send + Sync,
{
    fn validate(&self, ctx: &ParseContext, value: &T) -> Result<(), ParseError> {
        (*self)(ctx, value)
    }
}

/// A validator returning an error message, raised as a semantic error at the value's own path.
pub struct FieldValidator<F>(pub F);

impl<T, F> Validator<T> for FieldValidator<F>
where
    F: Fn(&T) -> Option<String> + Send + Sync,
{
    fn validate(&self, ctx: &ParseContext, value: &T) -> Result<(), ParseError> {
        match (self.0)(value) {
            Some(message) => Err(ctx.semantic_error(message)),
            None => Ok(()),
        }
    }
}

pub struct ValidatingParser<T> {
    inner: SharedParser<T>,
    validator: Arc<dyn Validator<T>>,
}

impl<T> ValidatingParser<T> {
    pub fn new(inner: SharedParser<T>, validator: Arc<dyn Validator<T>>) -> Self {
        Self { inner, validator }
    }
}

impl<T> ValueParser<T> for ValidatingParser<T> {
    fn parse(&self, ctx: &ParseContext, value: &Value) -> Result<T, ParseError> {
        let parsed = self.inner.parse(ctx, value)?;
        self.validator.validate(ctx, &parsed)?;
        Ok(parsed)
    }
}
