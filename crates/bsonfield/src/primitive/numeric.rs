//! Integer and floating point codecs.
//!
//! Integers accept any numeric wire tag as long as the value fits exactly;
//! a double with a fractional part is rejected rather than truncated. Floats
//! accept any numeric tag, and a 32-bit float lets infinities and NaN through
//! before checking its range.

use std::ops::RangeInclusive;

use bsonfield_value::{Number, Value};

use crate::builder::{Target, TypeSelector, TypedBuilder};
use crate::codec::Codec;
use crate::context::ParseContext;
use crate::error::{ParseError, TypeDescription};

/// Checks a double against an integer range given as doubles.
///
/// The comparison is done in `f64`, so at the edges of the 64-bit range a
/// value equal to `2^63` passes and saturates when cast.
fn integral_double(
    ctx: &ParseContext,
    d: f64,
    min: f64,
    max: f64,
    ty: TypeDescription,
) -> Result<f64, ParseError> {
    if d > max {
        return Err(ctx.overflow(ty));
    }
    if d < min {
        return Err(ctx.underflow(ty));
    }
    if d.is_nan() || d.fract() != 0.0 {
        return Err(ctx.semantic_error("must be an integer"));
    }
    Ok(d)
}

pub fn parse_i32(ctx: &ParseContext, value: &Value) -> Result<i32, ParseError> {
    const TY: TypeDescription = TypeDescription::Int32;
    match value {
        Value::Int32(i) => Ok(*i),
        Value::Int64(i) => {
            if *i > i32::MAX as i64 {
                Err(ctx.overflow(TY))
            } else if *i < i32::MIN as i64 {
                Err(ctx.underflow(TY))
            } else {
                Ok(*i as i32)
            }
        }
        Value::Double(d) => {
            integral_double(ctx, *d, i32::MIN as f64, i32::MAX as f64, TY).map(|d| d as i32)
        }
        other => Err(ctx.unexpected_type(TY, other.kind())),
    }
}

pub fn parse_i64(ctx: &ParseContext, value: &Value) -> Result<i64, ParseError> {
    const TY: TypeDescription = TypeDescription::Int64;
    match value {
        Value::Int32(i) => Ok(*i as i64),
        Value::Int64(i) => Ok(*i),
        Value::Double(d) => {
            integral_double(ctx, *d, i64::MIN as f64, i64::MAX as f64, TY).map(|d| d as i64)
        }
        other => Err(ctx.unexpected_type(TY, other.kind())),
    }
}

pub fn parse_f64(ctx: &ParseContext, value: &Value) -> Result<f64, ParseError> {
    match value {
        Value::Int32(i) => Ok(*i as f64),
        Value::Int64(i) => Ok(*i as f64),
        Value::Double(d) => Ok(*d),
        other => Err(ctx.unexpected_type(TypeDescription::Float64, other.kind())),
    }
}

pub fn parse_f32(ctx: &ParseContext, value: &Value) -> Result<f32, ParseError> {
    const TY: TypeDescription = TypeDescription::Float32;
    match value {
        Value::Int32(i) => Ok(*i as f32),
        Value::Int64(i) => Ok(*i as f32),
        Value::Double(d) if d.is_infinite() || d.is_nan() => Ok(*d as f32),
        Value::Double(d) => {
            if *d > f32::MAX as f64 {
                Err(ctx.overflow(TY))
            } else if *d < f32::MIN as f64 {
                Err(ctx.underflow(TY))
            } else {
                Ok(*d as f32)
            }
        }
        other => Err(ctx.unexpected_type(TY, other.kind())),
    }
}

/// Any numeric tag, passed through as-is.
pub fn parse_number(ctx: &ParseContext, value: &Value) -> Result<Number, ParseError> {
    value
        .as_number()
        .ok_or_else(|| ctx.unexpected_type(TypeDescription::Number, value.kind()))
}

pub fn int32() -> Codec<i32> {
    Codec::new(|i: &i32| Value::Int32(*i), parse_i32)
}

pub fn int64() -> Codec<i64> {
    Codec::new(|i: &i64| Value::Int64(*i), parse_i64)
}

pub fn float32() -> Codec<f32> {
    Codec::new(|f: &f32| Value::Double(*f as f64), parse_f32)
}

pub fn float64() -> Codec<f64> {
    Codec::new(|f: &f64| Value::Double(*f), parse_f64)
}

pub fn number() -> Codec<Number> {
    Codec::new(|n: &Number| Value::from(*n), parse_number)
}

impl<N: Target> TypeSelector<N> {
    pub fn int32(self) -> TypedBuilder<N, i32> {
        TypedBuilder::new(self.target, int32())
    }

    pub fn int64(self) -> TypedBuilder<N, i64> {
        TypedBuilder::new(self.target, int64())
    }

    pub fn float32(self) -> TypedBuilder<N, f32> {
        TypedBuilder::new(self.target, float32())
    }

    pub fn float64(self) -> TypedBuilder<N, f64> {
        TypedBuilder::new(self.target, float64())
    }

    /// A raw number that keeps its wire tag.
    pub fn number(self) -> TypedBuilder<N, Number> {
        TypedBuilder::new(self.target, number())
    }
}

macro_rules! numeric_validators {
    ($($ty:ty),*) => {$(
        impl<N: Target> TypedBuilder<N, $ty> {
            pub fn must_be_positive(self) -> Self {
                self.validate(|v: &$ty| (!(*v > 0 as $ty)).then(|| "must be positive".to_string()))
            }

            pub fn must_be_non_negative(self) -> Self {
                self.validate(|v: &$ty| {
                    (!(*v >= 0 as $ty)).then(|| "must be non-negative".to_string())
                })
            }

            pub fn must_be_within_bounds(self, bounds: RangeInclusive<$ty>) -> Self {
                self.validate(move |v: &$ty| {
                    (!bounds.contains(v)).then(|| {
                        format!(
                            "must be within bounds: [{}..{}]",
                            bounds.start(),
                            bounds.end()
                        )
                    })
                })
            }
        }
    )*};
}

numeric_validators!(i32, i64, f32, f64);

macro_rules! finite_validator {
    ($($ty:ty),*) => {$(
        impl<N: Target> TypedBuilder<N, $ty> {
            /// Rejects NaN and the infinities.
            pub fn must_be_finite(self) -> Self {
                self.validate(|v: &$ty| (!v.is_finite()).then(|| "must be finite".to_string()))
            }
        }
    )*};
}

finite_validator!(f32, f64);
