//! Declarative, type-safe descriptors for decoding and encoding BSON-like documents.
//!
//! A descriptor is built once with [`field`] or [`value`], by picking a type
//! and then a cardinality. It is then reused to pull values out of documents
//! through a [`DocumentParser`] and to write them back with a [`DocumentBuilder`].
//! Every decode error carries the dotted path of the offending value.

/// Where a parser is in the document, for error messages.
pub mod context;

/// Decode errors.
pub mod error;

/// The encoder/parser pair and validators.
pub mod codec;

/// The type-then-cardinality builder chain.
pub mod builder;

/// Named field descriptors.
pub mod field;

/// Unnamed value descriptors.
pub mod value;

/// Parsed field wrappers.
pub mod parsed;

/// Scalar codecs.
pub mod primitive;

/// List codecs.
pub mod list;

/// Map codecs.
pub mod map;

/// Enum codecs.
pub mod enumeration;

/// Pulling fields out of a document.
pub mod document;

/// Constraints across several optional fields.
pub mod group;

/// Writing fields into a document.
pub mod encode;

pub use builder::{TypeSelector, TypedBuilder, field, value};
pub use codec::{Codec, Nullable, Presence, ValueEncoder, ValueParser, Validator};
pub use context::ParseContext;
pub use document::{DocumentParser, DocumentParserBuilder};
pub use encode::DocumentBuilder;
pub use enumeration::{BsonEnum, CaseConvention};
pub use error::{ParseError, ParseErrorKind, TypeDescription};
pub use field::FieldDescriptor;
pub use group::FieldGroup;
pub use list::SingleValuePresence;
pub use primitive::{BsonMessage, Encodable};

pub use bsonfield_value::{
    self, Array, Binary, BinarySubtype, DateTime, Document, Number, ObjectId, Timestamp, Uuid,
    Value, ValueKind, doc,
};
