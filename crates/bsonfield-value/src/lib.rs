//! Tagged values and ordered documents for a BSON-like data model.
//!
//! This crate only describes the shape of the data. Bytes-level encoding is
//! somebody else's job; the `bsonfield` crate inspects these values through
//! their tags and typed accessors.

/// The tagged value union and its kinds.
pub mod value;

/// Insertion-ordered documents and arrays.
pub mod document;

/// 12-byte object identifiers.
pub mod object_id;

/// Binary payloads and their subtypes.
pub mod binary;

/// Date-time and timestamp scalars.
pub mod time;

/// Declarative macro for building documents.
mod doc_macro;

pub use binary::{Binary, BinarySubtype, UuidError};
pub use document::{Array, Document};
pub use object_id::{ObjectId, ObjectIdError};
pub use time::{DateTime, Timestamp};
pub use uuid::Uuid;
pub use value::{Number, Value, ValueKind};
