use bsonfield::{DocumentParser, ParseError, doc, field};

fn pick_source(doc: &bsonfield::Document) -> Result<String, ParseError> {
    let path = field("path").string().optional();
    let url = field("url").string().optional();
    let inline = field("inline").string().optional();
    DocumentParser::from_root(doc).build().parse(|p| {
        let path = p.get_field(&path)?;
        let url = p.get_field(&url)?;
        let inline = p.get_field(&inline)?;
        p.group().exactly_one_of(vec![path, url, inline])
    })
}

#[test]
fn exactly_one_present() {
    assert_eq!(pick_source(&doc! { "url": "http://x" }), Ok("http://x".to_string()));
}

#[test]
fn more_than_one_present() {
    assert_eq!(
        pick_source(&doc! { "path": "/a", "url": "http://x" })
            .unwrap_err()
            .to_string(),
        "only one of [path, url, inline] may be present"
    );
}

#[test]
fn none_present() {
    assert_eq!(
        pick_source(&doc! {}).unwrap_err().to_string(),
        "one of [path, url, inline] must be present"
    );
}

#[test]
fn null_counts_as_absent() {
    assert_eq!(
        pick_source(&doc! { "path": null, "inline": "body" }),
        Ok("body".to_string())
    );
}

#[test]
fn at_least_and_at_most() {
    let a = field("a").int32().optional();
    let b = field("b").int32().optional();
    let doc = doc! { "a": 1, "b": 2 };
    let result = DocumentParser::from_root(&doc).build().parse(|p| {
        let a = p.get_field(&a)?;
        let b = p.get_field(&b)?;
        p.group().at_least_one_of(vec![a.clone(), b.clone()])?;
        p.group().at_most_one_of(vec![a, b])
    });
    assert_eq!(
        result.unwrap_err().to_string(),
        "only one of [a, b] may be present"
    );
}
