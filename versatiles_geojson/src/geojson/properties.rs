use super::{GeoJsonCodec, GeoJsonSerializer, NullHandling, json_type};
use crate::{GeoJsonError, GeoProperties, GeoValue};
use anyhow::{Context, Result, bail, ensure};
use serde_json::{Map, Number, Value};

/// The `properties` member of a feature. Key order is preserved in both directions.
impl GeoJsonCodec for GeoProperties {
	fn decode(value: &Value, serializer: &GeoJsonSerializer) -> Result<Self> {
		let Value::Object(object) = value else {
			bail!(GeoJsonError::feature(format!(
				"properties must be an object, found {}",
				json_type(value)
			)));
		};
		decode_table(object, serializer, 0)
	}

	fn encode(&self, serializer: &GeoJsonSerializer) -> Result<Value> {
		Ok(encode_table(self, serializer))
	}
}

/// `depth` is the number of arrays and objects enclosing the entries of `object`
/// below the top-level table.
fn decode_table(object: &Map<String, Value>, serializer: &GeoJsonSerializer, depth: usize) -> Result<GeoProperties> {
	object
		.iter()
		.map(|(key, value)| {
			let value = decode_value(value, serializer, depth).with_context(|| format!("property '{key}'"))?;
			Ok((key.clone(), value))
		})
		.collect()
}

fn decode_value(value: &Value, serializer: &GeoJsonSerializer, depth: usize) -> Result<GeoValue> {
	Ok(match value {
		Value::Null => GeoValue::Null,
		Value::Bool(b) => GeoValue::Bool(*b),
		Value::Number(n) => decode_number(n),
		Value::String(s) => GeoValue::String(s.clone()),
		Value::Array(entries) => {
			ensure!(
				depth < serializer.max_depth(),
				GeoJsonError::RecursionLimit(serializer.max_depth())
			);
			GeoValue::Array(
				entries
					.iter()
					.enumerate()
					.map(|(index, entry)| decode_value(entry, serializer, depth + 1).with_context(|| format!("entry {index}")))
					.collect::<Result<_>>()?,
			)
		}
		Value::Object(object) => {
			ensure!(
				depth < serializer.max_depth(),
				GeoJsonError::RecursionLimit(serializer.max_depth())
			);
			GeoValue::Object(decode_table(object, serializer, depth + 1)?)
		}
	})
}

/// Integers stay integers: non-negative ones become `UInt`, negative ones `Int`,
/// everything with a fraction or exponent `Double`.
pub(super) fn decode_number(n: &Number) -> GeoValue {
	if let Some(v) = n.as_u64() {
		GeoValue::UInt(v)
	} else if let Some(v) = n.as_i64() {
		GeoValue::Int(v)
	} else {
		n.as_f64().map_or(GeoValue::Null, GeoValue::Double)
	}
}

fn encode_table(properties: &GeoProperties, serializer: &GeoJsonSerializer) -> Value {
	let skip_nulls = serializer.null_handling() == NullHandling::Ignore;
	let mut object = Map::with_capacity(properties.len());
	for (key, value) in properties {
		if skip_nulls && value.is_null() {
			continue;
		}
		object.insert(key.clone(), encode_value(value, serializer));
	}
	Value::Object(object)
}

/// Array elements are never dropped, their position is part of the data.
pub(super) fn encode_value(value: &GeoValue, serializer: &GeoJsonSerializer) -> Value {
	match value {
		GeoValue::Bool(b) => Value::Bool(*b),
		// NaN and infinities have no JSON form and become null
		GeoValue::Double(v) => Value::from(*v),
		GeoValue::Int(v) => Value::from(*v),
		GeoValue::UInt(v) => Value::from(*v),
		GeoValue::Null => Value::Null,
		GeoValue::String(s) => Value::from(s.as_str()),
		GeoValue::Array(entries) => Value::Array(entries.iter().map(|entry| encode_value(entry, serializer)).collect()),
		GeoValue::Object(table) => encode_table(table, serializer),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeometryFactory;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	fn serializer(null_handling: NullHandling) -> GeoJsonSerializer {
		GeoJsonSerializer::new(GeometryFactory::default(), 2, null_handling).unwrap()
	}

	#[test]
	fn key_order_is_preserved() {
		let serializer = serializer(NullHandling::Ignore);
		let properties: GeoProperties = serializer.deserialize(r#"{"b":1,"a":2,"c":3}"#).unwrap();
		assert_eq!(properties.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
		assert_eq!(serializer.serialize(&properties).unwrap(), r#"{"b":1,"a":2,"c":3}"#);
	}

	#[test]
	fn scalar_types_are_kept() {
		let properties: GeoProperties = serializer(NullHandling::Ignore)
			.deserialize(r#"{"u":1,"i":-1,"d":1.0,"s":"x","t":true,"n":null}"#)
			.unwrap();
		assert_eq!(properties.get("u"), Some(&GeoValue::UInt(1)));
		assert_eq!(properties.get("i"), Some(&GeoValue::Int(-1)));
		assert_eq!(properties.get("d"), Some(&GeoValue::Double(1.0)));
		assert_eq!(properties.get("s"), Some(&GeoValue::from("x")));
		assert_eq!(properties.get("t"), Some(&GeoValue::Bool(true)));
		assert_eq!(properties.get("n"), Some(&GeoValue::Null));
	}

	#[test]
	fn nested_values() {
		let json = r#"{"tags":["a",2,{"deep":false}],"meta":{"level":-3}}"#;
		let serializer = serializer(NullHandling::Ignore);
		let properties: GeoProperties = serializer.deserialize(json).unwrap();
		let Some(GeoValue::Array(tags)) = properties.get("tags") else {
			panic!("tags should be an array");
		};
		assert_eq!(tags.len(), 3);
		assert!(matches!(tags[2], GeoValue::Object(_)));
		assert_eq!(serializer.serialize(&properties).unwrap(), json);
	}

	#[test]
	fn nulls_are_omitted_under_ignore() {
		let properties: GeoProperties = serializer(NullHandling::Ignore)
			.deserialize(r#"{"a":null,"b":{"c":null,"d":1},"e":[null,2]}"#)
			.unwrap();
		assert_eq!(
			serializer(NullHandling::Ignore).serialize(&properties).unwrap(),
			r#"{"b":{"d":1},"e":[null,2]}"#
		);
	}

	#[test]
	fn nulls_are_written_under_include() {
		let json = r#"{"a":null,"b":{"c":null,"d":1},"e":[null,2]}"#;
		let serializer = serializer(NullHandling::Include);
		let properties: GeoProperties = serializer.deserialize(json).unwrap();
		assert_eq!(serializer.serialize(&properties).unwrap(), json);
	}

	#[test]
	fn non_finite_doubles_become_null() {
		let properties = GeoProperties::from(vec![("nan", GeoValue::Double(f64::NAN)), ("one", GeoValue::Double(1.5))]);
		assert_eq!(
			serializer(NullHandling::Ignore).serialize_value(&properties).unwrap(),
			json!({"nan": null, "one": 1.5})
		);
	}

	#[test]
	fn non_object_is_rejected() {
		let error = serializer(NullHandling::Ignore)
			.deserialize::<GeoProperties>("[1,2]")
			.unwrap_err();
		assert_eq!(
			GeoJsonError::find(&error),
			Some(&GeoJsonError::feature("properties must be an object, found an array"))
		);
	}

	#[test]
	fn nesting_is_limited() {
		let serializer = serializer(NullHandling::Ignore).with_max_depth(2);
		assert!(serializer.deserialize::<GeoProperties>(r#"{"a":{"b":[1]}}"#).is_ok());

		let error = serializer
			.deserialize::<GeoProperties>(r#"{"a":{"b":[[1]]}}"#)
			.unwrap_err();
		assert_eq!(GeoJsonError::find(&error), Some(&GeoJsonError::RecursionLimit(2)));
		assert!(format!("{error:#}").starts_with("property 'a': property 'b': entry 0: "));
	}

	#[test]
	fn large_integers() {
		let properties: GeoProperties = serializer(NullHandling::Ignore)
			.deserialize(r#"{"max":18446744073709551615,"min":-9223372036854775808}"#)
			.unwrap();
		assert_eq!(properties.get("max"), Some(&GeoValue::UInt(u64::MAX)));
		assert_eq!(properties.get("min"), Some(&GeoValue::Int(i64::MIN)));
	}
}
