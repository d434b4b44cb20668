//! Passthrough codecs for sub-documents and arbitrary values.

use bsonfield_value::{Document, Value};

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::Codec;
use crate::context::ParseContext;
use crate::error::{ParseError, TypeDescription};

pub fn parse_document(ctx: &ParseContext, value: &Value) -> Result<Document, ParseError> {
    match value {
        Value::Document(doc) => Ok(doc.clone()),
        other => Err(ctx.unexpected_type(TypeDescription::Document, other.kind())),
    }
}

pub fn document() -> Codec<Document> {
    Codec::new(|doc: &Document| Value::Document(doc.clone()), parse_document)
}

/// Accepts anything, null included.
pub fn unparsed_value() -> Codec<Value> {
    Codec::new(
        |value: &Value| value.clone(),
        |_: &ParseContext, value: &Value| -> Result<Value, ParseError> { Ok(value.clone()) },
    )
}

impl<N: Target> TypeSelector<N> {
    pub fn document(self) -> TypedBuilder<N, Document> {
        TypedBuilder::new(self.target, document())
    }

    pub fn unparsed_value(self) -> TypedBuilder<N, Value> {
        TypedBuilder::new(self.target, unparsed_value())
    }
}
