use bsonfield::{BsonEnum, DocumentBuilder, DocumentParser, doc, field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Similarity {
    Euclidean,
    Cosine,
    DotProduct,
    Unknown,
}

impl BsonEnum for Similarity {
    fn variants() -> &'static [Self] {
        &[
            Similarity::Euclidean,
            Similarity::Cosine,
            Similarity::DotProduct,
            Similarity::Unknown,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            Similarity::Euclidean => "EUCLIDEAN",
            Similarity::Cosine => "COSINE",
            Similarity::DotProduct => "DOT_PRODUCT",
            Similarity::Unknown => "UNKNOWN",
        }
    }

    fn is_hidden(&self) -> bool {
        matches!(self, Similarity::Unknown)
    }
}

fn parse(
    descriptor: &bsonfield::field::Required<Similarity>,
    doc: &bsonfield::Document,
) -> Result<Similarity, bsonfield::ParseError> {
    DocumentParser::from_root(doc)
        .build()
        .parse(|p| Ok(p.get_field(descriptor)?.into_value()))
}

#[test]
fn case_insensitive_with_fallback() {
    let similarity = field("similarity")
        .enumeration::<Similarity>()
        .with_fallback(Similarity::Unknown)
        .as_case_insensitive()
        .required();
    assert_eq!(
        parse(&similarity, &doc! { "similarity": "Bogus" }),
        Ok(Similarity::Unknown)
    );
    assert_eq!(
        parse(&similarity, &doc! { "similarity": "dot_Product" }),
        Ok(Similarity::DotProduct)
    );
}

#[test]
fn without_fallback_lists_visible_names() {
    let similarity = field("similarity")
        .enumeration::<Similarity>()
        .as_case_insensitive()
        .required();
    assert_eq!(
        parse(&similarity, &doc! { "similarity": "Bogus" })
            .unwrap_err()
            .to_string(),
        "\"similarity\" must be one of [COSINE, DOT_PRODUCT, EUCLIDEAN]"
    );
}

#[test]
fn camel_case_round_trip() {
    let similarity = field("similarity")
        .enumeration::<Similarity>()
        .as_camel_case()
        .required();
    let encoded = DocumentBuilder::new()
        .field(&similarity, &Similarity::DotProduct)
        .build();
    assert_eq!(encoded, doc! { "similarity": "dotProduct" });
    assert_eq!(parse(&similarity, &encoded), Ok(Similarity::DotProduct));
}
