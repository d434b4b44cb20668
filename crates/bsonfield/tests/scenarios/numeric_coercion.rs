use bsonfield::{DocumentParser, ParseError, doc, field};

fn parse_int32(doc: &bsonfield::Document) -> Result<i32, ParseError> {
    let n = field("n").int32().required();
    DocumentParser::from_root(doc)
        .build()
        .parse(|p| Ok(p.get_field(&n)?.into_value()))
}

fn parse_float32(doc: &bsonfield::Document) -> Result<f32, ParseError> {
    let f = field("f").float32().required();
    DocumentParser::from_root(doc)
        .build()
        .parse(|p| Ok(p.get_field(&f)?.into_value()))
}

#[test]
fn int32_from_int64_checks_range() {
    assert_eq!(
        parse_int32(&doc! { "n": 2147483648i64 })
            .unwrap_err()
            .to_string(),
        "\"n\" is too large to fit in a 32-bit integer"
    );
    assert_eq!(
        parse_int32(&doc! { "n": -2147483649i64 })
            .unwrap_err()
            .to_string(),
        "\"n\" is too small to fit in a 32-bit integer"
    );
    assert_eq!(parse_int32(&doc! { "n": 2147483647i64 }), Ok(i32::MAX));
}

#[test]
fn int32_from_double_rejects_fractions() {
    assert_eq!(parse_int32(&doc! { "n": 12.0 }), Ok(12));
    assert_eq!(
        parse_int32(&doc! { "n": 12.5 }).unwrap_err().to_string(),
        "\"n\" must be an integer"
    );
}

#[test]
fn float32_lets_infinity_through() {
    assert_eq!(
        parse_float32(&doc! { "f": (f64::INFINITY) }),
        Ok(f32::INFINITY)
    );
    assert_eq!(
        parse_float32(&doc! { "f": (f64::NEG_INFINITY) }),
        Ok(f32::NEG_INFINITY)
    );
    assert!(parse_float32(&doc! { "f": (f64::NAN) }).unwrap().is_nan());
}

#[test]
fn float32_rejects_finite_out_of_range() {
    assert_eq!(
        parse_float32(&doc! { "f": 3.4e39 }).unwrap_err().to_string(),
        "\"f\" is too large to fit in a 32-bit float"
    );
    assert_eq!(
        parse_float32(&doc! { "f": (-3.4e39) }).unwrap_err().to_string(),
        "\"f\" is too small to fit in a 32-bit float"
    );
    assert_eq!(parse_float32(&doc! { "f": 7 }), Ok(7.0));
}

#[test]
fn int64_double_boundary_is_compared_as_double() {
    let n = field("n").int64().required();
    let doc = doc! { "n": 9223372036854775808.0 };
    let parsed = DocumentParser::from_root(&doc)
        .build()
        .parse(|p| Ok(p.get_field(&n)?.into_value()));
    assert_eq!(parsed, Ok(i64::MAX));
}
