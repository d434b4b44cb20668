//! DocumentParser: pulls declared fields out of a document and checks that
//! nothing else was left behind.

use ahash::AHashSet;
use bsonfield_value::Document;

use crate::codec::Presence;
use crate::context::ParseContext;
use crate::error::ParseError;
use crate::field::FieldDescriptor;
use crate::group::FieldGroup;

/// Options for a [`DocumentParser`] session.
#[must_use]
pub struct DocumentParserBuilder<'doc> {
    context: ParseContext,
    document: &'doc Document,
    allow_unknown_fields: bool,
}

impl<'doc> DocumentParserBuilder<'doc> {
    /// Keys no field asked for are ignored instead of reported on close.
    pub fn allow_unknown_fields(mut self, allow: bool) -> Self {
        self.allow_unknown_fields = allow;
        self
    }

    pub fn build(self) -> DocumentParser<'doc> {
        DocumentParser {
            context: self.context,
            document: self.document,
            allow_unknown_fields: self.allow_unknown_fields,
            witnessed: AHashSet::new(),
            closed: false,
        }
    }

    /// Builds the parser and hands it to [`DocumentParser::parse`].
    pub fn parse<T, F>(self, f: F) -> Result<T, ParseError>
    where
        F: FnOnce(&mut DocumentParser<'doc>) -> Result<T, ParseError>,
    {
        self.build().parse(f)
    }
}

/// A single decode of a single document.
///
/// Every key must be pulled with [`get_field`](Self::get_field) before
/// [`close`](Self::close), unless unknown fields are allowed. Prefer
/// [`parse`](Self::parse), which closes on every exit. A parser dropped
/// without `close` still runs the check, but its error is only logged at
/// debug level (or recorded, in a collecting context).
pub struct DocumentParser<'doc> {
    context: ParseContext,
    document: &'doc Document,
    allow_unknown_fields: bool,
    witnessed: AHashSet<String>,
    closed: bool,
}

impl<'doc> DocumentParser<'doc> {
    /// A parser for a top-level document. Error paths start at the document's own keys.
    pub fn from_root(document: &'doc Document) -> DocumentParserBuilder<'doc> {
        Self::with_context(ParseContext::root(), document)
    }

    /// A parser for a document nested at `context`.
    pub fn with_context(context: ParseContext, document: &'doc Document) -> DocumentParserBuilder<'doc> {
        DocumentParserBuilder {
            context,
            document,
            allow_unknown_fields: false,
        }
    }

    /// Decodes one field and marks its key as consumed.
    pub fn get_field<F: FieldDescriptor>(&mut self, descriptor: &F) -> Result<F::Parsed, ParseError> {
        let name = descriptor.name();
        self.witnessed.insert(name.to_string());
        let ctx = self.context.child(name);
        descriptor.parse_presence(&ctx, Presence::of(self.document.get(name)))
    }

    /// True when the field is present and not null. Does not consume the key.
    pub fn has_field<F: FieldDescriptor>(&self, descriptor: &F) -> bool {
        !matches!(
            Presence::of(self.document.get(descriptor.name())),
            Presence::Absent | Presence::Null
        )
    }

    /// Cross-field constraints, reported at this document's path.
    pub fn group(&self) -> FieldGroup {
        FieldGroup::new(self.context.clone())
    }

    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    pub fn document(&self) -> &'doc Document {
        self.document
    }

    pub fn set_allow_unknown_fields(&mut self, allow: bool) {
        self.allow_unknown_fields = allow;
    }

    /// Runs `f` against this parser, then closes it.
    ///
    /// The completeness check runs once whether or not `f` succeeds. An error
    /// from `f` takes precedence over one from the check.
    pub fn parse<T, F>(mut self, f: F) -> Result<T, ParseError>
    where
        F: FnOnce(&mut Self) -> Result<T, ParseError>,
    {
        let result = f(&mut self);
        let closed = self.close();
        let value = result?;
        closed?;
        Ok(value)
    }

    /// Reports every key that no field pulled, in document order.
    pub fn close(mut self) -> Result<(), ParseError> {
        self.closed = true;
        self.check_unknown_fields()
    }

    fn unknown_fields(&self) -> Vec<String> {
        self.document
            .keys()
            .filter(|key| !self.witnessed.contains(*key))
            .map(str::to_string)
            .collect()
    }

    fn check_unknown_fields(&self) -> Result<(), ParseError> {
        let unknown = self.unknown_fields();
        if unknown.is_empty() {
            return Ok(());
        }
        if self.allow_unknown_fields {
            tracing::debug!(
                path = self.context.path().as_deref().unwrap_or(""),
                fields = ?unknown,
                "ignoring unknown fields"
            );
            return Ok(());
        }
        self.context.handle_unexpected_fields(unknown)
    }
}

impl Drop for DocumentParser<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(error) = self.check_unknown_fields() {
            tracing::debug!(%error, "document parser dropped without close");
        }
    }
}
