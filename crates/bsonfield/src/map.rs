//! String-keyed map codec and its validators.

use bsonfield_value::{Document, Value};
use indexmap::IndexMap;

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::Codec;
use crate::context::ParseContext;
use crate::error::{ParseError, TypeDescription};
use crate::value::Element;

/// Entries keep document order.
pub(crate) fn codec<V: 'static>(value: Codec<V>) -> Codec<IndexMap<String, V>> {
    let encoder = value.clone();
    let parser = value;
    Codec::new(
        move |map: &IndexMap<String, V>| {
            Value::Document(
                map.iter()
                    .map(|(key, value)| (key.as_str(), encoder.encode(value)))
                    .collect::<Document>(),
            )
        },
        move |ctx: &ParseContext, value: &Value| -> Result<IndexMap<String, V>, ParseError> {
            let Value::Document(doc) = value else {
                return Err(ctx.unexpected_type(TypeDescription::Document, value.kind()));
            };
            let mut parsed = IndexMap::with_capacity(doc.len());
            for (key, value) in doc.iter() {
                parsed.insert(key.clone(), parser.parse(&ctx.child(key.as_str()), value)?);
            }
            Ok(parsed)
        },
    )
}

impl<N: Target> TypeSelector<N> {
    pub fn map_of<E: Element>(self, value: E) -> TypedBuilder<N, IndexMap<String, E::Output>> {
        TypedBuilder::new(self.target, codec(value.into_codec()))
    }
}

impl<N: Target, V: 'static> TypedBuilder<N, IndexMap<String, V>> {
    pub fn must_not_be_empty(self) -> Self {
        self.validate(|map: &IndexMap<String, V>| {
            map.is_empty().then(|| "cannot be empty".to_string())
        })
    }

    pub fn must_not_contain_empty_key(self) -> Self {
        self.validate(|map: &IndexMap<String, V>| {
            map.contains_key("")
                .then(|| "cannot contain an empty key".to_string())
        })
    }

    /// Runs `check` on every key. A failure is reported at the key's own path.
    pub fn validate_keys<F>(self, check: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.validate_with(
            move |ctx: &ParseContext, map: &IndexMap<String, V>| -> Result<(), ParseError> {
                for key in map.keys() {
                    if let Some(message) = check(key) {
                        return Err(ctx.child(key.as_str()).semantic_error(message));
                    }
                }
                Ok(())
            },
        )
    }
}
