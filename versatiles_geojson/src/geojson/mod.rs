//! Conversion between GeoJSON text and the geometry model.
//!
//! Every GeoJSON shape has a [`GeoJsonCodec`] implementation. Codecs work on
//! [`serde_json::Value`] trees and take the [`GeoJsonSerializer`] session by
//! reference, which supplies the precision model, the dimension and the null policy.

mod collection;
mod coordinates;
mod document;
mod envelope;
mod feature;
mod geometry;
mod properties;
mod read;
mod serializer;

pub use coordinates::*;
pub use document::*;
pub use read::*;
pub use serializer::*;

use anyhow::Result;
use serde_json::{Map, Value};

/// Converts a type from and to its GeoJSON representation.
pub trait GeoJsonCodec: Sized {
	fn decode(value: &Value, serializer: &GeoJsonSerializer) -> Result<Self>;
	fn encode(&self, serializer: &GeoJsonSerializer) -> Result<Value>;
}

/// The `type` member of an object, if it is a string.
fn type_of(object: &Map<String, Value>) -> Option<&str> {
	object.get("type").and_then(Value::as_str)
}

/// A short name for the JSON type of `value`, used in error messages.
fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
