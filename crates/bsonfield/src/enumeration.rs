//! Enum codec: matches string tags against variant names under a case convention.

use std::sync::Arc;

use ahash::AHashMap;
use bsonfield_value::Value;
use convert_case::{Case, Casing as _};

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::Codec;
use crate::context::ParseContext;
use crate::error::{ParseError, TypeDescription};

/// A closed set of named variants.
///
/// `name()` is the canonical spelling, typically `UPPER_SNAKE` or `PascalCase`;
/// the wire spelling is derived from it by a [`CaseConvention`].
pub trait BsonEnum: Clone + Send + Sync + 'static {
    fn variants() -> &'static [Self];

    fn name(&self) -> &'static str;

    /// Hidden variants are still accepted but never listed in error messages.
    fn is_hidden(&self) -> bool {
        false
    }
}

/// How variant names are spelled on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseConvention {
    /// `highPriority`
    Camel,
    /// `HighPriority`
    UpperCamel,
    /// `HIGH_PRIORITY`
    UpperUnderscore,
    /// Upper-cased name on output; input is upper-cased before lookup.
    CaseInsensitive,
}

impl CaseConvention {
    pub fn convert(self, name: &str) -> String {
        match self {
            CaseConvention::Camel => name.to_case(Case::Camel),
            CaseConvention::UpperCamel => name.to_case(Case::Pascal),
            CaseConvention::UpperUnderscore => name.to_case(Case::UpperSnake),
            CaseConvention::CaseInsensitive => name.to_uppercase(),
        }
    }

    fn normalize_input<'a>(self, input: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            CaseConvention::CaseInsensitive => input.to_uppercase().into(),
            _ => input.into(),
        }
    }
}

struct EnumTable<E> {
    convention: CaseConvention,
    by_name: AHashMap<String, E>,
    /// Sorted, hidden variants excluded.
    listed: String,
    fallback: Option<E>,
}

impl<E: BsonEnum> EnumTable<E> {
    fn new(convention: CaseConvention, fallback: Option<E>) -> Self {
        let mut by_name: AHashMap<String, E> = AHashMap::with_capacity(E::variants().len());
        for variant in E::variants() {
            let converted = convention.convert(variant.name());
            if let Some(existing) = by_name.get(&converted) {
                tracing::warn!(
                    name = converted.as_str(),
                    kept = existing.name(),
                    ignored = variant.name(),
                    ?convention,
                    "enum variants collide under case convention"
                );
                continue;
            }
            by_name.insert(converted, variant.clone());
        }
        let mut listed: Vec<&str> = by_name
            .iter()
            .filter(|(_, variant)| !variant.is_hidden())
            .map(|(name, _)| name.as_str())
            .collect();
        listed.sort_unstable();
        let listed = listed.join(", ");
        Self {
            convention,
            by_name,
            listed,
            fallback,
        }
    }

    fn parse(&self, ctx: &ParseContext, value: &Value) -> Result<E, ParseError> {
        let Value::String(input) = value else {
            return Err(ctx.unexpected_type(TypeDescription::String, value.kind()));
        };
        if let Some(variant) = self.by_name.get(self.convention.normalize_input(input).as_ref()) {
            return Ok(variant.clone());
        }
        match &self.fallback {
            Some(fallback) => {
                tracing::debug!(
                    path = ctx.path().as_deref().unwrap_or(""),
                    input = input.as_str(),
                    fallback = fallback.name(),
                    "unknown enum value replaced by fallback"
                );
                Ok(fallback.clone())
            }
            None => Err(ctx.semantic_error(format!("must be one of [{}]", self.listed))),
        }
    }

    fn encode(&self, variant: &E) -> Value {
        Value::String(self.convention.convert(variant.name()))
    }
}

pub fn codec<E: BsonEnum>(convention: CaseConvention, fallback: Option<E>) -> Codec<E> {
    let table = Arc::new(EnumTable::new(convention, fallback));
    let encoder = table.clone();
    Codec::new(
        move |variant: &E| encoder.encode(variant),
        move |ctx: &ParseContext, value: &Value| table.parse(ctx, value),
    )
}

/// Enum builder stage: a case convention must be chosen before the type is fixed.
#[must_use]
pub struct EnumCaseSelector<N, E> {
    target: N,
    fallback: Option<E>,
}

impl<N: Target> TypeSelector<N> {
    pub fn enumeration<E: BsonEnum>(self) -> EnumCaseSelector<N, E> {
        EnumCaseSelector {
            target: self.target,
            fallback: None,
        }
    }
}

impl<N: Target, E: BsonEnum> EnumCaseSelector<N, E> {
    /// Returns `fallback` for unrecognized names instead of failing.
    pub fn with_fallback(self, fallback: E) -> Self {
        Self {
            fallback: Some(fallback),
            ..self
        }
    }

    pub fn as_camel_case(self) -> TypedBuilder<N, E> {
        self.with_convention(CaseConvention::Camel)
    }

    pub fn as_upper_camel_case(self) -> TypedBuilder<N, E> {
        self.with_convention(CaseConvention::UpperCamel)
    }

    pub fn as_upper_underscore(self) -> TypedBuilder<N, E> {
        self.with_convention(CaseConvention::UpperUnderscore)
    }

    pub fn as_case_insensitive(self) -> TypedBuilder<N, E> {
        self.with_convention(CaseConvention::CaseInsensitive)
    }

    pub fn with_convention(self, convention: CaseConvention) -> TypedBuilder<N, E> {
        TypedBuilder::new(self.target, codec(convention, self.fallback))
    }
}
