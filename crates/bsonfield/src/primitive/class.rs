//! Codecs for caller-defined types.

use std::sync::Arc;

use bsonfield_value::{Document, Value};

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::{Codec, ValueEncoder, ValueParser};
use crate::context::ParseContext;
use crate::document::DocumentParser;
use crate::error::{ParseError, TypeDescription};

/// A type that knows how to write itself as a wire value.
pub trait Encodable {
    fn to_bson(&self) -> Value;
}

/// Opens a parser over a sub-document at `ctx`, runs `f`, and checks that
/// every key was consumed.
fn parse_document_class<T, F>(f: &F, ctx: &ParseContext, value: &Value) -> Result<T, ParseError>
where
    F: Fn(&mut DocumentParser<'_>) -> Result<T, ParseError>,
{
    match value {
        Value::Document(doc) => DocumentParser::with_context(ctx.clone(), doc)
            .build()
            .parse(|parser| f(parser)),
        other => Err(ctx.unexpected_type(TypeDescription::Document, other.kind())),
    }
}

impl<N: Target> TypeSelector<N> {
    /// A type parsed from any value and encoded through [`Encodable`].
    pub fn class<T, P>(self, parser: P) -> TypedBuilder<N, T>
    where
        T: Encodable + 'static,
        P: ValueParser<T> + 'static,
    {
        self.class_with(parser, |value: &T| value.to_bson())
    }

    pub fn class_with<T, P, E>(self, parser: P, encoder: E) -> TypedBuilder<N, T>
    where
        T: 'static,
        P: ValueParser<T> + 'static,
        E: ValueEncoder<T> + 'static,
    {
        TypedBuilder::new(self.target, Codec::new(encoder, parser))
    }

    /// A type parsed field by field from a sub-document.
    ///
    /// Unknown keys in the sub-document are an error unless `f` calls
    /// [`DocumentParser::set_allow_unknown_fields`].
    pub fn document_class<T, F>(self, f: F) -> TypedBuilder<N, T>
    where
        T: Encodable + 'static,
        F: Fn(&mut DocumentParser<'_>) -> Result<T, ParseError> + Send + Sync + 'static,
    {
        self.document_class_with(f, |value: &T| value.to_bson())
    }

    pub fn document_class_with<T, F, E>(self, f: F, encoder: E) -> TypedBuilder<N, T>
    where
        T: 'static,
        F: Fn(&mut DocumentParser<'_>) -> Result<T, ParseError> + Send + Sync + 'static,
        E: ValueEncoder<T> + 'static,
    {
        let parser = Arc::new(move |ctx: &ParseContext, value: &Value| {
            parse_document_class(&f, ctx, value)
        });
        TypedBuilder::new(self.target, Codec::from_shared(Arc::new(encoder), parser))
    }
}

/// Encodes a type that writes itself as a document.
pub fn encode_document<T, F>(f: F) -> impl Fn(&T) -> Value + Send + Sync + 'static
where
    F: Fn(&T) -> Document + Send + Sync + 'static,
{
    move |value: &T| Value::Document(f(value))
}
