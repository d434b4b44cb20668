//! The two-stage builder chain: pick a type, then pick a cardinality.
//!
//! ```
//! use bsonfield::{doc, field, DocumentParser};
//!
//! let name = field("name").string().must_not_be_empty().required();
//! let retries = field("retries").int32().must_be_non_negative().with_default(3);
//!
//! let doc = doc! { "name": "primary" };
//! let (name, retries) = DocumentParser::from_root(&doc)
//!     .build()
//!     .parse(|p| Ok((p.get_field(&name)?.into_value(), p.get_field(&retries)?.into_value())))
//!     .unwrap();
//! assert_eq!(name, "primary");
//! assert_eq!(retries, 3);
//! ```

use std::sync::Arc;

use indexmap::IndexMap;

use crate::codec::{Codec, FieldValidator, Nullable, Validator};
use crate::list::{self, ListShape, SingleValuePresence};
use crate::map;

/// Where a finished builder ends up: a named field or an unnamed value.
pub trait Target {
    type Required<T: 'static>;
    type Optional<T: 'static>;
    type WithDefault<T: 'static>;

    fn required<T: 'static>(self, codec: Codec<T>) -> Self::Required<T>;
    fn optional<T: 'static>(self, codec: Codec<T>) -> Self::Optional<T>;
    fn with_default<T: 'static>(self, codec: Codec<T>, default: T) -> Self::WithDefault<T>;
}

/// Builds `field::*` descriptors.
#[derive(Debug, Clone)]
pub struct Named(String);

/// Builds `value::*` descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unnamed;

impl Target for Named {
    type Required<T: 'static> = crate::field::Required<T>;
    type Optional<T: 'static> = crate::field::Optional<T>;
    type WithDefault<T: 'static> = crate::field::WithDefault<T>;

    fn required<T: 'static>(self, codec: Codec<T>) -> Self::Required<T> {
        crate::field::Required::new(self.0, codec)
    }

    fn optional<T: 'static>(self, codec: Codec<T>) -> Self::Optional<T> {
        crate::field::Optional::new(self.0, codec)
    }

    fn with_default<T: 'static>(self, codec: Codec<T>, default: T) -> Self::WithDefault<T> {
        crate::field::WithDefault::new(self.0, codec, default)
    }
}

impl Target for Unnamed {
    type Required<T: 'static> = crate::value::Required<T>;
    type Optional<T: 'static> = crate::value::Optional<T>;
    type WithDefault<T: 'static> = crate::value::WithDefault<T>;

    fn required<T: 'static>(self, codec: Codec<T>) -> Self::Required<T> {
        crate::value::Required::new(codec)
    }

    fn optional<T: 'static>(self, codec: Codec<T>) -> Self::Optional<T> {
        crate::value::Optional::new(codec)
    }

    fn with_default<T: 'static>(self, codec: Codec<T>, default: T) -> Self::WithDefault<T> {
        crate::value::WithDefault::new(codec, default)
    }
}

/// Starts a named field descriptor.
pub fn field(name: impl Into<String>) -> TypeSelector<Named> {
    TypeSelector {
        target: Named(name.into()),
    }
}

/// Starts an unnamed value descriptor, for list elements, map values and bare values.
pub fn value() -> TypeSelector<Unnamed> {
    TypeSelector { target: Unnamed }
}

/// First stage: the type has not been chosen yet.
///
/// The type methods live next to their codecs (`primitive`, `list`, `map`,
/// `enumeration`).
#[must_use]
#[derive(Debug, Clone)]
pub struct TypeSelector<N> {
    pub(crate) target: N,
}

impl<N: Target> TypeSelector<N> {
    /// Uses a codec built elsewhere.
    pub fn codec<T: 'static>(self, codec: Codec<T>) -> TypedBuilder<N, T> {
        TypedBuilder::new(self.target, codec)
    }
}

/// Second stage: the type is fixed, validators may be attached.
///
/// `K` carries extra state for shapes that need it (lists keep their element
/// codec so the list parser can be rebuilt).
#[must_use]
pub struct TypedBuilder<N, T, K = ()> {
    pub(crate) target: N,
    pub(crate) codec: Codec<T>,
    pub(crate) validators: Vec<Arc<dyn Validator<T>>>,
    pub(crate) shape: K,
}

impl<N: Target, T: 'static> TypedBuilder<N, T> {
    pub(crate) fn new(target: N, codec: Codec<T>) -> Self {
        Self::with_shape(target, codec, ())
    }
}

impl<N: Target, T: 'static, K> TypedBuilder<N, T, K> {
    pub(crate) fn with_shape(target: N, codec: Codec<T>, shape: K) -> Self {
        Self {
            target,
            codec,
            validators: Vec::new(),
            shape,
        }
    }

    /// Replaces the base codec, keeping validators.
    pub(crate) fn map_codec(mut self, f: impl FnOnce(Codec<T>) -> Codec<T>) -> Self {
        self.codec = f(self.codec);
        self
    }

    /// Adds a check that returns an error message on failure.
    pub fn validate<F>(self, check: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        self.validate_with(FieldValidator(check))
    }

    /// Adds a check with access to the parse context.
    pub fn validate_with(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// The codec with every validator applied, in declaration order.
    pub fn codec(&self) -> Codec<T> {
        self.validators
            .iter()
            .cloned()
            .fold(self.codec.clone(), |codec, validator| codec.validated(validator))
    }

    fn into_parts(self) -> (N, Codec<T>) {
        let codec = self.codec();
        (self.target, codec)
    }

    pub fn required(self) -> N::Required<T> {
        let (target, codec) = self.into_parts();
        target.required(codec)
    }

    pub fn optional(self) -> N::Optional<T> {
        let (target, codec) = self.into_parts();
        target.optional(codec)
    }

    pub fn with_default(self, default: T) -> N::WithDefault<T> {
        let (target, codec) = self.into_parts();
        target.with_default(codec, default)
    }

    /// Tells an explicit null apart from an absent field.
    pub fn nullable(self) -> TypedBuilder<N, Nullable<T>> {
        let (target, codec) = self.into_parts();
        TypedBuilder::new(target, codec.nullable())
    }

    pub fn as_list(self) -> TypedBuilder<N, Vec<T>, ListShape<T>> {
        let (target, codec) = self.into_parts();
        list::builder(target, codec, SingleValuePresence::MustBeList)
    }

    /// A list that also accepts a bare element, and writes a one-element list as a bare element.
    pub fn as_single_value_or_list(self) -> TypedBuilder<N, Vec<T>, ListShape<T>> {
        let (target, codec) = self.into_parts();
        list::builder(target, codec, SingleValuePresence::SingleValueAllowed)
    }

    pub fn as_map(self) -> TypedBuilder<N, IndexMap<String, T>> {
        let (target, codec) = self.into_parts();
        TypedBuilder::new(target, map::codec(codec))
    }
}
