//! Codecs for scalar wire values, and the builder methods that select them.

pub mod binary;
pub mod boolean;
pub mod class;
pub mod identifier;
pub mod message;
pub mod numeric;
pub mod raw;
pub mod string;
pub mod time;

pub use class::Encodable;
pub use message::BsonMessage;
pub use numeric::{parse_f32, parse_f64, parse_i32, parse_i64};
