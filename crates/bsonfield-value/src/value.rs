use core::fmt;

use crate::{Array, Binary, DateTime, Document, ObjectId, Timestamp};

/// The tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Int32,
    Int64,
    Double,
    String,
    Binary,
    DateTime,
    Timestamp,
    ObjectId,
    Document,
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean => write!(f, "boolean"),
            Self::Int32 => write!(f, "int32"),
            Self::Int64 => write!(f, "int64"),
            Self::Double => write!(f, "double"),
            Self::String => write!(f, "string"),
            Self::Binary => write!(f, "binData"),
            Self::DateTime => write!(f, "date"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::ObjectId => write!(f, "objectId"),
            Self::Document => write!(f, "document"),
            Self::Array => write!(f, "array"),
        }
    }
}

/// A single value of the document model.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(String),
    Binary(Binary),
    DateTime(DateTime),
    Timestamp(Timestamp),
    ObjectId(ObjectId),
    Document(Document),
    Array(Array),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::Double(_) => ValueKind::Double,
            Self::String(_) => ValueKind::String,
            Self::Binary(_) => ValueKind::Binary,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::ObjectId(_) => ValueKind::ObjectId,
            Self::Document(_) => ValueKind::Document,
            Self::Array(_) => ValueKind::Array,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for the three numeric tags.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int32(_) | Self::Int64(_) | Self::Double(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        if let Self::Int32(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Int64(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        if let Self::Double(d) = self {
            Some(*d)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    pub fn as_binary(&self) -> Option<&Binary> {
        if let Self::Binary(b) = self {
            Some(b)
        } else {
            None
        }
    }

    pub fn as_date_time(&self) -> Option<DateTime> {
        if let Self::DateTime(d) = self {
            Some(*d)
        } else {
            None
        }
    }

    pub fn as_timestamp(&self) -> Option<Timestamp> {
        if let Self::Timestamp(t) = self {
            Some(*t)
        } else {
            None
        }
    }

    pub fn as_object_id(&self) -> Option<ObjectId> {
        if let Self::ObjectId(id) = self {
            Some(*id)
        } else {
            None
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        if let Self::Document(doc) = self {
            Some(doc)
        } else {
            None
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        if let Self::Array(array) = self {
            Some(array)
        } else {
            None
        }
    }

    /// Returns the numeric payload, if this value carries one of the numeric tags.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Int32(i) => Some(Number::Int32(*i)),
            Self::Int64(i) => Some(Number::Int64(*i)),
            Self::Double(d) => Some(Number::Double(*d)),
            _ => None,
        }
    }
}

/// A raw numeric value that keeps its wire tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int32(i32),
    Int64(i64),
    Double(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int32(i) => *i as f64,
            Self::Int64(i) => *i as f64,
            Self::Double(d) => *d,
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::Double(_) => ValueKind::Double,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32(i) => write!(f, "{}", i),
            Self::Int64(i) => write!(f, "{}", i),
            Self::Double(d) => write!(f, "{}", d),
        }
    }
}

// ============================================================================
// From implementations for Value
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Double(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Binary> for Value {
    fn from(b: Binary) -> Self {
        Value::Binary(b)
    }
}

impl From<DateTime> for Value {
    fn from(d: DateTime) -> Self {
        Value::DateTime(d)
    }
}

impl From<Timestamp> for Value {
    fn from(t: Timestamp) -> Self {
        Value::Timestamp(t)
    }
}

impl From<ObjectId> for Value {
    fn from(id: ObjectId) -> Self {
        Value::ObjectId(id)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(uuid: uuid::Uuid) -> Self {
        Value::Binary(Binary::from_uuid(uuid))
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Document(doc)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int32(i) => Value::Int32(i),
            Number::Int64(i) => Value::Int64(i),
            Number::Double(d) => Value::Double(d),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}
