use bsonfield::field::{Optional, Required, WithDefault};
use bsonfield::{
    BsonEnum, DocumentBuilder, DocumentParser, Encodable, ObjectId, ParseError, Value, doc, field,
    value,
};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Ready,
    Building,
    Failed,
}

impl BsonEnum for Status {
    fn variants() -> &'static [Self] {
        &[Status::Ready, Status::Building, Status::Failed]
    }

    fn name(&self) -> &'static str {
        match self {
            Status::Ready => "READY",
            Status::Building => "BUILDING",
            Status::Failed => "FAILED",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Analyzer {
    name: String,
    max_token_length: i32,
}

mod analyzer_fields {
    use super::*;

    pub fn name() -> Required<String> {
        field("name").string().must_not_be_empty().required()
    }

    pub fn max_token_length() -> WithDefault<i32> {
        field("maxTokenLength")
            .int32()
            .must_be_within_bounds(1..=1024)
            .with_default(255)
    }
}

impl Analyzer {
    fn parse(p: &mut DocumentParser<'_>) -> Result<Self, ParseError> {
        Ok(Analyzer {
            name: p.get_field(&analyzer_fields::name())?.into_value(),
            max_token_length: p
                .get_field(&analyzer_fields::max_token_length())?
                .into_value(),
        })
    }
}

impl Encodable for Analyzer {
    fn to_bson(&self) -> Value {
        Value::Document(
            DocumentBuilder::new()
                .field(&analyzer_fields::name(), &self.name)
                .field(&analyzer_fields::max_token_length(), &self.max_token_length)
                .build(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
struct IndexDefinition {
    id: ObjectId,
    name: String,
    status: Status,
    num_partitions: i64,
    stored_fields: Vec<String>,
    analyzers: Vec<Analyzer>,
    weights: IndexMap<String, f64>,
    comment: Option<String>,
}

struct Fields {
    id: Required<ObjectId>,
    name: Required<String>,
    status: Required<Status>,
    num_partitions: WithDefault<i64>,
    stored_fields: Required<Vec<String>>,
    analyzers: Required<Vec<Analyzer>>,
    weights: Required<IndexMap<String, f64>>,
    comment: Optional<String>,
}

impl Fields {
    fn new() -> Self {
        Self {
            id: field("_id").object_id().required(),
            name: field("name").string().must_not_be_empty().required(),
            status: field("status")
                .enumeration::<Status>()
                .as_camel_case()
                .required(),
            num_partitions: field("numPartitions")
                .int64()
                .must_be_positive()
                .with_default(1),
            stored_fields: field("storedFields")
                .string()
                .as_single_value_or_list()
                .must_be_unique()
                .required(),
            analyzers: field("analyzers")
                .list_of(value().document_class(Analyzer::parse).required())
                .must_have_unique_attribute("name", |a: &Analyzer| a.name.clone())
                .required(),
            weights: field("weights")
                .map_of(value().float64().must_be_finite().required())
                .must_not_contain_empty_key()
                .required(),
            comment: field("comment").string().optional(),
        }
    }

    fn parse(&self, doc: &bsonfield::Document) -> Result<IndexDefinition, ParseError> {
        DocumentParser::from_root(doc).build().parse(|p| {
            Ok(IndexDefinition {
                id: p.get_field(&self.id)?.into_value(),
                name: p.get_field(&self.name)?.into_value(),
                status: p.get_field(&self.status)?.into_value(),
                num_partitions: p.get_field(&self.num_partitions)?.into_value(),
                stored_fields: p.get_field(&self.stored_fields)?.into_value(),
                analyzers: p.get_field(&self.analyzers)?.into_value(),
                weights: p.get_field(&self.weights)?.into_value(),
                comment: p.get_field(&self.comment)?.into_value(),
            })
        })
    }

    fn encode(&self, index: &IndexDefinition) -> bsonfield::Document {
        DocumentBuilder::new()
            .field(&self.id, &index.id)
            .field(&self.name, &index.name)
            .field(&self.status, &index.status)
            .field(&self.num_partitions, &index.num_partitions)
            .field(&self.stored_fields, &index.stored_fields)
            .field(&self.analyzers, &index.analyzers)
            .field(&self.weights, &index.weights)
            .field(&self.comment, &index.comment)
            .build()
    }
}

fn sample_id() -> ObjectId {
    ObjectId::from_bytes([7; 12])
}

#[test]
fn parses_with_defaults_and_encodes_back() {
    let fields = Fields::new();
    let doc = doc! {
        "_id": (sample_id()),
        "name": "products",
        "status": "building",
        "storedFields": "title",
        "analyzers": [{ "name": "lucene.standard" }],
        "weights": { "title": 2.0, "body": 1 },
    };
    let index = fields.parse(&doc).unwrap();
    assert_eq!(
        index,
        IndexDefinition {
            id: sample_id(),
            name: "products".to_string(),
            status: Status::Building,
            num_partitions: 1,
            stored_fields: vec!["title".to_string()],
            analyzers: vec![Analyzer {
                name: "lucene.standard".to_string(),
                max_token_length: 255,
            }],
            weights: [("title".to_string(), 2.0), ("body".to_string(), 1.0)]
                .into_iter()
                .collect(),
            comment: None,
        }
    );

    let encoded = fields.encode(&index);
    assert_eq!(
        encoded,
        doc! {
            "_id": (sample_id()),
            "name": "products",
            "status": "building",
            "numPartitions": 1i64,
            "storedFields": "title",
            "analyzers": [{ "name": "lucene.standard", "maxTokenLength": 255 }],
            "weights": { "title": 2.0, "body": 1.0 },
        }
    );
    assert_eq!(fields.parse(&encoded), Ok(index));
}

#[test]
fn object_id_accepts_hex_string() {
    let fields = Fields::new();
    let doc = doc! {
        "_id": (sample_id().to_hex()),
        "name": "products",
        "status": "ready",
        "storedFields": [],
        "analyzers": [],
        "weights": {},
    };
    assert_eq!(fields.parse(&doc).map(|index| index.id), Ok(sample_id()));
}

#[test]
fn nested_errors_carry_full_path() {
    let fields = Fields::new();
    let doc = doc! {
        "_id": (sample_id()),
        "name": "products",
        "status": "ready",
        "storedFields": [],
        "analyzers": [{ "name": "a" }, { "name": "b", "maxTokenLength": 0 }],
        "weights": {},
    };
    assert_eq!(
        fields.parse(&doc).unwrap_err().to_string(),
        "\"analyzers[1].maxTokenLength\" must be within bounds: [1..1024]"
    );
}

#[test]
fn list_and_map_validators_report_at_field() {
    let fields = Fields::new();
    let duplicate_analyzers = doc! {
        "_id": (sample_id()),
        "name": "products",
        "status": "ready",
        "storedFields": ["a", "a"],
        "analyzers": [],
        "weights": {},
    };
    assert_eq!(
        fields.parse(&duplicate_analyzers).unwrap_err().to_string(),
        "\"storedFields\" cannot contain duplicate elements"
    );

    let same_name = doc! {
        "_id": (sample_id()),
        "name": "products",
        "status": "ready",
        "storedFields": [],
        "analyzers": [{ "name": "a" }, { "name": "a", "maxTokenLength": 3 }],
        "weights": {},
    };
    assert_eq!(
        fields.parse(&same_name).unwrap_err().to_string(),
        "\"analyzers\" cannot contain elements with the same name"
    );

    let bad_weight = doc! {
        "_id": (sample_id()),
        "name": "products",
        "status": "ready",
        "storedFields": [],
        "analyzers": [],
        "weights": { "title": (f64::NAN) },
    };
    assert_eq!(
        fields.parse(&bad_weight).unwrap_err().to_string(),
        "\"weights.title\" must be finite"
    );
}

#[test]
fn null_required_field_is_missing() {
    let fields = Fields::new();
    let doc = doc! {
        "_id": (sample_id()),
        "name": null,
    };
    assert_eq!(
        fields.parse(&doc).unwrap_err().to_string(),
        "\"name\" is required"
    );
}

mod proptests {
    use super::*;
    use bsonfield::{CaseConvention, ParseContext};
    use proptest::prelude::*;

    fn conventions() -> impl Strategy<Value = CaseConvention> {
        prop_oneof![
            Just(CaseConvention::Camel),
            Just(CaseConvention::UpperCamel),
            Just(CaseConvention::UpperUnderscore),
            Just(CaseConvention::CaseInsensitive),
        ]
    }

    proptest! {
        #[test]
        fn int32_round_trips(i in any::<i32>()) {
            let descriptor = value().int32().required();
            let ctx = ParseContext::root();
            prop_assert_eq!(descriptor.parse(&ctx, &descriptor.encode(&i)), Ok(i));
        }

        #[test]
        fn int64_round_trips(i in any::<i64>()) {
            let descriptor = value().int64().required();
            let ctx = ParseContext::root();
            prop_assert_eq!(descriptor.parse(&ctx, &descriptor.encode(&i)), Ok(i));
        }

        #[test]
        fn finite_float64_round_trips(d in -1.0e300f64..1.0e300f64) {
            let descriptor = value().float64().must_be_finite().required();
            let ctx = ParseContext::root();
            prop_assert_eq!(descriptor.parse(&ctx, &descriptor.encode(&d)), Ok(d));
        }

        #[test]
        fn string_round_trips(s in ".*") {
            let descriptor = value().string().required();
            let ctx = ParseContext::root();
            prop_assert_eq!(descriptor.parse(&ctx, &descriptor.encode(&s)), Ok(s));
        }

        #[test]
        fn single_value_or_list_round_trips(
            items in proptest::collection::vec("[a-z]{0,6}", 0..5),
        ) {
            let descriptor = value().string().as_single_value_or_list().required();
            let ctx = ParseContext::root();
            let encoded = descriptor.encode(&items);
            if items.len() == 1 {
                prop_assert_eq!(&encoded, &Value::from(items[0].as_str()));
            }
            prop_assert_eq!(descriptor.parse(&ctx, &encoded), Ok(items));
        }

        #[test]
        fn map_round_trips_in_order(
            entries in proptest::collection::vec(("[a-z]{1,8}", any::<i32>()), 0..6),
        ) {
            let map: IndexMap<String, i32> = entries.into_iter().collect();
            let descriptor = value().map_of(value().int32().required()).required();
            let ctx = ParseContext::root();
            let parsed = descriptor.parse(&ctx, &descriptor.encode(&map)).unwrap();
            prop_assert!(parsed.iter().eq(map.iter()));
        }

        #[test]
        fn enum_round_trips_under_every_convention(
            status in proptest::sample::select(Status::variants()),
            convention in conventions(),
        ) {
            let descriptor = value()
                .enumeration::<Status>()
                .with_convention(convention)
                .required();
            let ctx = ParseContext::root();
            prop_assert_eq!(descriptor.parse(&ctx, &descriptor.encode(&status)), Ok(status));
        }
    }
}
