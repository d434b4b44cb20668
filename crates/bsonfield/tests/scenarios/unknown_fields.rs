use bsonfield::{DocumentParser, ParseContext, doc, field};

#[test]
fn single_extra_key() {
    let a = field("a").int32().required();
    let doc = doc! { "a": 1, "b": 2 };
    let err = DocumentParser::from_root(&doc)
        .allow_unknown_fields(false)
        .build()
        .parse(|p| Ok(p.get_field(&a)?.into_value()))
        .unwrap_err();
    assert_eq!(err.to_string(), "unrecognized field \"b\"");
}

#[test]
fn several_extra_keys_are_sorted_and_quoted() {
    let a = field("a").int32().required();
    let doc = doc! { "a": 1, "d": 2, "c": 3 };
    let err = DocumentParser::from_root(&doc)
        .build()
        .parse(|p| Ok(p.get_field(&a)?.into_value()))
        .unwrap_err();
    assert_eq!(err.to_string(), "unrecognized fields [\"c\", \"d\"]");
}

#[test]
fn permissive_parser_ignores_extra_keys() {
    let a = field("a").int32().required();
    let doc = doc! { "a": 1, "b": 2 };
    let parsed = DocumentParser::from_root(&doc)
        .allow_unknown_fields(true)
        .build()
        .parse(|p| Ok(p.get_field(&a)?.into_value()));
    assert_eq!(parsed, Ok(1));
}

#[test]
fn nested_extra_key_is_reported_at_nested_path() {
    let name = field("name").string().required();
    let inner = field("inner")
        .document_class_with(
            |p| Ok(p.get_field(&field("x").int32().required())?.into_value()),
            |x: &i32| bsonfield::Value::Document(doc! { "x": (*x) }),
        )
        .required();
    let doc = doc! { "name": "n", "inner": { "x": 1, "y": 2 } };
    let err = DocumentParser::from_root(&doc)
        .build()
        .parse(|p| {
            let name = p.get_field(&name)?.into_value();
            let inner = p.get_field(&inner)?.into_value();
            Ok((name, inner))
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "\"inner\" unrecognized field \"y\"");
}

#[test]
fn collecting_context_gathers_every_level() {
    let inner = field("inner")
        .document_class_with(
            |p| Ok(p.get_field(&field("x").int32().required())?.into_value()),
            |x: &i32| bsonfield::Value::Document(doc! { "x": (*x) }),
        )
        .required();
    let doc = doc! { "inner": { "x": 1, "y": 2, "z": 3 }, "top": true };
    let ctx = ParseContext::collecting();
    let parsed = DocumentParser::with_context(ctx.clone(), &doc)
        .build()
        .parse(|p| Ok(p.get_field(&inner)?.into_value()));
    assert_eq!(parsed, Ok(1));

    let messages: Vec<String> = ctx
        .collected_errors()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        messages,
        vec![
            "\"inner\" unrecognized fields [\"y\", \"z\"]".to_string(),
            "unrecognized field \"top\"".to_string(),
        ]
    );
}
