//! List codec and its validators.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::RangeInclusive;

use bsonfield_value::Value;

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::Codec;
use crate::context::ParseContext;
use crate::error::{ParseError, TypeDescription};
use crate::value::Element;

/// Whether a bare element may stand in for a one-element list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingleValuePresence {
    #[default]
    MustBeList,
    SingleValueAllowed,
}

/// What a list builder needs to rebuild its base codec.
pub struct ListShape<E> {
    element: Codec<E>,
    presence: SingleValuePresence,
    skip_invalid: bool,
}

impl<E: 'static> ListShape<E> {
    fn codec(&self) -> Codec<Vec<E>> {
        let encoder = self.element.clone();
        let parser = self.element.clone();
        let presence = self.presence;
        let skip_invalid = self.skip_invalid;
        Codec::new(
            move |values: &Vec<E>| encode_list(&encoder, presence, values),
            move |ctx: &ParseContext, value: &Value| {
                parse_list(&parser, presence, skip_invalid, ctx, value)
            },
        )
    }
}

fn encode_list<E: 'static>(
    element: &Codec<E>,
    presence: SingleValuePresence,
    values: &[E],
) -> Value {
    match (presence, values) {
        (SingleValuePresence::SingleValueAllowed, [single]) => element.encode(single),
        _ => Value::Array(values.iter().map(|value| element.encode(value)).collect()),
    }
}

fn parse_list<E: 'static>(
    element: &Codec<E>,
    presence: SingleValuePresence,
    skip_invalid: bool,
    ctx: &ParseContext,
    value: &Value,
) -> Result<Vec<E>, ParseError> {
    let Value::Array(array) = value else {
        if presence == SingleValuePresence::MustBeList {
            return Err(ctx.unexpected_type(TypeDescription::Array, value.kind()));
        }
        return Ok(vec![element.parse(ctx, value)?]);
    };

    let mut parsed = Vec::with_capacity(array.len());
    for (index, item) in array.iter().enumerate() {
        let element_ctx = ctx.array_element(index);
        match element.parse(&element_ctx, item) {
            Ok(value) => parsed.push(value),
            Err(error) if skip_invalid => {
                tracing::debug!(%error, "skipping invalid list element");
            }
            Err(error) => return Err(error),
        }
    }
    Ok(parsed)
}

pub(crate) fn builder<N: Target, E: 'static>(
    target: N,
    element: Codec<E>,
    presence: SingleValuePresence,
) -> TypedBuilder<N, Vec<E>, ListShape<E>> {
    let shape = ListShape {
        element,
        presence,
        skip_invalid: false,
    };
    TypedBuilder::with_shape(target, shape.codec(), shape)
}

impl<N: Target> TypeSelector<N> {
    pub fn list_of<E: Element>(self, element: E) -> TypedBuilder<N, Vec<E::Output>, ListShape<E::Output>> {
        builder(
            self.target,
            element.into_codec(),
            SingleValuePresence::MustBeList,
        )
    }

    /// A list that also accepts a bare element in place of a one-element list.
    pub fn single_value_or_list_of<E: Element>(
        self,
        element: E,
    ) -> TypedBuilder<N, Vec<E::Output>, ListShape<E::Output>> {
        builder(
            self.target,
            element.into_codec(),
            SingleValuePresence::SingleValueAllowed,
        )
    }
}

impl<N: Target, E: 'static> TypedBuilder<N, Vec<E>, ListShape<E>> {
    /// Drops elements that fail to parse instead of failing the whole list.
    ///
    /// Applies to this list only. Nested lists keep their own setting.
    pub fn skip_invalid_elements(mut self) -> Self {
        self.shape.skip_invalid = true;
        self.codec = self.shape.codec();
        self
    }

    pub fn must_not_be_empty(self) -> Self {
        self.validate(|values: &Vec<E>| values.is_empty().then(|| "cannot be empty".to_string()))
    }

    pub fn size_must_be_within_bounds(self, bounds: RangeInclusive<usize>) -> Self {
        self.validate(move |values: &Vec<E>| {
            (!bounds.contains(&values.len())).then(|| {
                format!(
                    "size must be within bounds: [{}..{}]",
                    bounds.start(),
                    bounds.end()
                )
            })
        })
    }

    /// Rejects lists where two elements share the attribute `getter` returns.
    pub fn must_have_unique_attribute<R, G>(self, attribute: &str, getter: G) -> Self
    where
        R: Eq + Hash,
        G: Fn(&E) -> R + Send + Sync + 'static,
    {
        let message = format!("cannot contain elements with the same {}", attribute);
        self.validate(move |values: &Vec<E>| {
            (!all_unique(values.iter().map(|value| getter(value)))).then(|| message.clone())
        })
    }
}

impl<N: Target, E: Eq + Hash + 'static> TypedBuilder<N, Vec<E>, ListShape<E>> {
    pub fn must_be_unique(self) -> Self {
        self.validate(|values: &Vec<E>| {
            (!all_unique(values.iter())).then(|| "cannot contain duplicate elements".to_string())
        })
    }
}

fn all_unique<I>(items: I) -> bool
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut seen = HashSet::new();
    items.into_iter().all(|item| seen.insert(item))
}
