use bsonfield::{DocumentBuilder, DocumentParser, Value, doc, field, value};

#[test]
fn strict_list_rejects_bare_value() {
    let tags = field("tags").string().as_list().required();
    let doc = doc! { "tags": "solo" };
    let err = DocumentParser::from_root(&doc)
        .build()
        .parse(|p| Ok(p.get_field(&tags)?.into_value()))
        .unwrap_err();
    assert_eq!(err.to_string(), "\"tags\" must be an array");
}

#[test]
fn single_value_list_round_trip() {
    let tags = field("tags").string().as_single_value_or_list().required();
    let doc = doc! { "tags": "solo" };
    let parsed = DocumentParser::from_root(&doc)
        .build()
        .parse(|p| Ok(p.get_field(&tags)?.into_value()))
        .unwrap();
    assert_eq!(parsed, vec!["solo".to_string()]);

    let encoded = DocumentBuilder::new().field(&tags, &parsed).build();
    assert_eq!(encoded, doc);
    assert_eq!(encoded.get("tags"), Some(&Value::from("solo")));

    let two = vec!["a".to_string(), "b".to_string()];
    let encoded = DocumentBuilder::new().field(&tags, &two).build();
    assert_eq!(encoded, doc! { "tags": ["a", "b"] });
}

#[test]
fn element_errors_use_bracket_paths() {
    let ports = field("ports")
        .list_of(value().int32().must_be_positive().required())
        .required();
    let doc = doc! { "ports": [80, 443, 0] };
    let err = DocumentParser::from_root(&doc)
        .build()
        .parse(|p| Ok(p.get_field(&ports)?.into_value()))
        .unwrap_err();
    assert_eq!(err.to_string(), "\"ports[2]\" must be positive");
}

#[test]
fn skip_invalid_does_not_cascade_into_nested_lists() {
    let matrix = field("matrix")
        .list_of(value().int32().as_list().required())
        .skip_invalid_elements()
        .required();
    let doc = doc! { "matrix": [[1, 2], [3, "x"], 4, [5]] };
    let parsed = DocumentParser::from_root(&doc)
        .build()
        .parse(|p| Ok(p.get_field(&matrix)?.into_value()));
    assert_eq!(parsed, Ok(vec![vec![1, 2], vec![5]]));
}

#[test]
fn optional_list_absent() {
    let tags = field("tags").string().as_list().optional();
    let doc = doc! {};
    let parsed = DocumentParser::from_root(&doc)
        .build()
        .parse(|p| Ok(p.get_field(&tags)?.into_value()));
    assert_eq!(parsed, Ok(None));
}
