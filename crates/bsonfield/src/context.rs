//! Location tracking for decode errors.

use std::cell::RefCell;
use std::rc::Rc;

use bsonfield_value::ValueKind;

use crate::error::{ParseError, ParseErrorKind, TypeDescription};

#[derive(Debug)]
struct Segment {
    name: String,
    parent: Option<Rc<Segment>>,
}

/// Where in the document a parser currently is.
///
/// A persistent list of path segments, innermost first. Extending a context
/// allocates one node and shares the rest, so sibling fields can branch off
/// the same parent freely.
///
/// A context built with [`ParseContext::collecting`] records unknown-field
/// errors in a list shared by all of its descendants instead of failing.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    head: Option<Rc<Segment>>,
    collected: Option<Rc<RefCell<Vec<ParseError>>>>,
}

impl ParseContext {
    pub fn root() -> Self {
        Self::default()
    }

    /// A root context that collects unknown-field errors instead of raising them.
    pub fn collecting() -> Self {
        Self {
            head: None,
            collected: Some(Rc::new(RefCell::new(Vec::new()))),
        }
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        self.with_head(Segment {
            name: name.into(),
            parent: self.head.clone(),
        })
    }

    /// `a` followed by element 2 renders as `a[2]`; at the root it renders as `[2]`.
    pub fn array_element(&self, index: usize) -> Self {
        let segment = match &self.head {
            None => Segment {
                name: format!("[{}]", index),
                parent: None,
            },
            Some(head) => Segment {
                name: format!("{}[{}]", head.name, index),
                parent: head.parent.clone(),
            },
        };
        self.with_head(segment)
    }

    fn with_head(&self, segment: Segment) -> Self {
        Self {
            head: Some(Rc::new(segment)),
            collected: self.collected.clone(),
        }
    }

    /// The rendered path, or `None` at the root.
    pub fn path(&self) -> Option<String> {
        let mut names = Vec::new();
        let mut cursor = self.head.as_deref();
        while let Some(segment) = cursor {
            names.push(segment.name.as_str());
            cursor = segment.parent.as_deref();
        }
        if names.is_empty() {
            return None;
        }
        names.reverse();
        Some(names.join("."))
    }

    pub fn is_collecting(&self) -> bool {
        self.collected.is_some()
    }

    /// Errors recorded so far by a collecting context. Always empty otherwise.
    pub fn collected_errors(&self) -> Vec<ParseError> {
        self.collected
            .as_ref()
            .map(|errors| errors.borrow().clone())
            .unwrap_or_default()
    }

    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            path: self.path(),
            kind,
        }
    }

    pub fn semantic_error(&self, message: impl Into<String>) -> ParseError {
        self.error(ParseErrorKind::Semantic(message.into()))
    }

    pub fn missing(&self) -> ParseError {
        self.error(ParseErrorKind::Required)
    }

    /// A null where a value was expected is reported as missing, not as a mismatch.
    pub fn unexpected_type(&self, expected: TypeDescription, actual: ValueKind) -> ParseError {
        match actual {
            ValueKind::Null => self.missing(),
            actual => self.error(ParseErrorKind::UnexpectedType { expected, actual }),
        }
    }

    pub fn overflow(&self, ty: TypeDescription) -> ParseError {
        self.error(ParseErrorKind::Overflow(ty))
    }

    pub fn underflow(&self, ty: TypeDescription) -> ParseError {
        self.error(ParseErrorKind::Underflow(ty))
    }

    /// Reports keys that no parser asked for.
    ///
    /// A collecting context records the error and returns `Ok(())`.
    pub fn handle_unexpected_fields(&self, names: Vec<String>) -> Result<(), ParseError> {
        if names.is_empty() {
            return Ok(());
        }
        let error = self.error(ParseErrorKind::UnrecognizedFields(names));
        match &self.collected {
            Some(collected) => {
                tracing::debug!(%error, "collected unrecognized fields");
                collected.borrow_mut().push(error);
                Ok(())
            }
            None => Err(error),
        }
    }
}
