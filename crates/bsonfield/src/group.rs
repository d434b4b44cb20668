//! Cardinality constraints across several optional fields.

use crate::context::ParseContext;
use crate::error::{ParseError, ParseErrorKind};
use crate::parsed;

/// Obtained from [`DocumentParser::group`](crate::DocumentParser::group).
/// Errors are reported at the document's path, naming fields in the order given.
#[derive(Debug, Clone)]
pub struct FieldGroup {
    context: ParseContext,
}

impl FieldGroup {
    pub(crate) fn new(context: ParseContext) -> Self {
        Self { context }
    }

    /// The single present value.
    pub fn exactly_one_of<T>(&self, fields: Vec<parsed::Optional<T>>) -> Result<T, ParseError> {
        let (names, mut present) = split(fields);
        match present.len() {
            0 => Err(self.context.error(ParseErrorKind::NoneOf(names))),
            1 => Ok(present.remove(0)),
            _ => Err(self.context.error(ParseErrorKind::MoreThanOneOf(names))),
        }
    }

    /// The present value, if any.
    pub fn at_most_one_of<T>(&self, fields: Vec<parsed::Optional<T>>) -> Result<Option<T>, ParseError> {
        let (names, mut present) = split(fields);
        if present.len() > 1 {
            return Err(self.context.error(ParseErrorKind::MoreThanOneOf(names)));
        }
        Ok(present.pop())
    }

    /// Every present value, in the order given.
    pub fn at_least_one_of<T>(&self, fields: Vec<parsed::Optional<T>>) -> Result<Vec<T>, ParseError> {
        let (names, present) = split(fields);
        if present.is_empty() {
            return Err(self.context.error(ParseErrorKind::NoneOf(names)));
        }
        Ok(present)
    }
}

fn split<T>(fields: Vec<parsed::Optional<T>>) -> (Vec<String>, Vec<T>) {
    let mut names = Vec::with_capacity(fields.len());
    let mut present = Vec::new();
    for field in fields {
        let (name, value) = field.into_parts();
        names.push(name);
        present.extend(value);
    }
    (names, present)
}
