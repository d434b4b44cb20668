//! Error types produced while decoding documents.

use core::fmt;

use bsonfield_value::ValueKind;

/// A decoding failure, optionally qualified by the path where it happened.
///
/// Renders as `"a.b[2].c" <message>`, or just `<message>` when the failure
/// happened at the root.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
#[error("{}", render(.path, .kind))]
pub struct ParseError {
    pub path: Option<String>,
    pub kind: ParseErrorKind,
}

fn render(path: &Option<String>, kind: &ParseErrorKind) -> String {
    match path {
        Some(path) => format!("\"{}\" {}", path, kind),
        None => kind.to_string(),
    }
}

impl ParseError {
    /// The message without the path prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Field absent, or present as null where a value was needed.
    #[error("is required")]
    Required,

    #[error("must be {expected}")]
    UnexpectedType {
        expected: TypeDescription,
        actual: ValueKind,
    },

    #[error("is too large to fit in {0}")]
    Overflow(TypeDescription),

    #[error("is too small to fit in {0}")]
    Underflow(TypeDescription),

    /// Caller-supplied validation text.
    #[error("{0}")]
    Semantic(String),

    #[error("{}", unrecognized_fields(.0))]
    UnrecognizedFields(Vec<String>),

    #[error("one of [{}] must be present", .0.join(", "))]
    NoneOf(Vec<String>),

    #[error("only one of [{}] may be present", .0.join(", "))]
    MoreThanOneOf(Vec<String>),
}

fn unrecognized_fields(names: &[String]) -> String {
    let mut names: Vec<&String> = names.iter().collect();
    names.sort();
    match names.as_slice() {
        [single] => format!("unrecognized field \"{}\"", single),
        many => format!(
            "unrecognized fields [{}]",
            many.iter()
                .map(|name| format!("\"{}\"", name))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// The shape a parser expected, used in type mismatch and range messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDescription {
    Boolean,
    Int32,
    Int64,
    Float32,
    Float64,
    Number,
    String,
    Binary,
    DateTime,
    Timestamp,
    ObjectId,
    Uuid,
    Document,
    Array,
}

impl fmt::Display for TypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Boolean => "a boolean",
            Self::Int32 => "a 32-bit integer",
            Self::Int64 => "a 64-bit integer",
            Self::Float32 => "a 32-bit float",
            Self::Float64 => "a 64-bit float",
            Self::Number => "a number",
            Self::String => "a string",
            Self::Binary => "binary data",
            Self::DateTime => "a date",
            Self::Timestamp => "a timestamp",
            Self::ObjectId => "an ObjectId",
            Self::Uuid => "a UUID",
            Self::Document => "a document",
            Self::Array => "an array",
        };
        f.write_str(text)
    }
}
