use super::{
	GeoJsonCodec, GeoJsonSerializer, NullHandling,
	envelope::{decode_bbox, decode_crs, encode_bbox, encode_crs},
	json_type,
	properties::{decode_number, encode_value},
	type_of,
};
use crate::{GeoFeature, GeoJsonError, GeoProperties, GeoValue, Geometry};
use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

impl GeoJsonCodec for GeoFeature {
	fn decode(value: &Value, serializer: &GeoJsonSerializer) -> Result<Self> {
		let Value::Object(object) = value else {
			bail!(GeoJsonError::feature(format!(
				"expected a Feature object, found {}",
				json_type(value)
			)));
		};
		check_type(object, "Feature")?;

		let geometry = match object.get("geometry") {
			None => bail!(GeoJsonError::feature("Feature has no 'geometry' member")),
			Some(Value::Null) => None,
			Some(value) => Some(Geometry::decode(value, serializer).context("geometry")?),
		};

		let properties = match object.get("properties") {
			None | Some(Value::Null) => GeoProperties::new(),
			Some(value) => GeoProperties::decode(value, serializer).context("properties")?,
		};

		let id = match object.get("id") {
			None | Some(Value::Null) => None,
			Some(Value::String(s)) => Some(GeoValue::String(s.clone())),
			Some(Value::Number(n)) => Some(decode_number(n)),
			Some(other) => bail!(GeoJsonError::feature(format!(
				"id must be a string or a number, found {}",
				json_type(other)
			))),
		};

		Ok(GeoFeature {
			id,
			geometry,
			properties,
			bbox: decode_bbox(object, serializer)?,
			crs: decode_crs(object, serializer)?,
		})
	}

	/// Members are written as `type`, `id`, `geometry`, `bbox`, `crs`, `properties`.
	fn encode(&self, serializer: &GeoJsonSerializer) -> Result<Value> {
		let mut object = Map::new();
		object.insert("type".to_string(), Value::from("Feature"));

		match self.id.as_ref().filter(|id| !id.is_null()) {
			Some(id) => {
				object.insert("id".to_string(), encode_id(id, serializer)?);
			}
			None if serializer.null_handling() == NullHandling::Include => {
				object.insert("id".to_string(), Value::Null);
			}
			None => {}
		}

		let geometry = match &self.geometry {
			Some(geometry) => geometry.encode(serializer).context("geometry")?,
			None => Value::Null,
		};
		object.insert("geometry".to_string(), geometry);

		let bbox = self.bbox.or_else(|| serializer.write_bbox().then(|| self.envelope()));
		encode_bbox(&mut object, bbox.as_ref(), serializer)?;
		encode_crs(&mut object, self.crs.as_ref(), serializer)?;

		object.insert("properties".to_string(), self.properties.encode(serializer)?);
		Ok(Value::Object(object))
	}
}

/// Fails unless the object's `type` member is `expected`.
pub(super) fn check_type(object: &Map<String, Value>, expected: &str) -> Result<()> {
	match type_of(object) {
		Some(found) if found == expected => Ok(()),
		Some(found) => bail!(GeoJsonError::feature(format!(
			"expected type '{expected}', found '{found}'"
		))),
		None => bail!(GeoJsonError::feature(format!("{expected} has no 'type' member"))),
	}
}

fn encode_id(id: &GeoValue, serializer: &GeoJsonSerializer) -> Result<Value> {
	match id {
		GeoValue::Double(v) if !v.is_finite() => {
			bail!(GeoJsonError::feature(format!("id must be a finite number, found {v}")))
		}
		GeoValue::String(_) | GeoValue::Int(_) | GeoValue::UInt(_) | GeoValue::Double(_) => {
			Ok(encode_value(id, serializer))
		}
		other => bail!(GeoJsonError::feature(format!(
			"id must be a string or a number, found {}",
			other.type_name()
		))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CrsTag, Envelope, GeometryFactory, PrecisionModel};
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use serde_json::json;

	fn serializer(null_handling: NullHandling) -> GeoJsonSerializer {
		GeoJsonSerializer::new(GeometryFactory::default(), 2, null_handling).unwrap()
	}

	fn kind(error: &anyhow::Error) -> GeoJsonError {
		GeoJsonError::find(error).cloned().expect("typed error in chain")
	}

	#[test]
	fn decode_complete_feature() {
		let feature: GeoFeature = serializer(NullHandling::Ignore)
			.deserialize(
				r#"{
					"type": "Feature",
					"id": "road-7",
					"bbox": [0, 0, 1, 1],
					"geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
					"properties": {"name": "Main Street", "lanes": 2},
					"title": "ignored foreign member"
				}"#,
			)
			.unwrap();
		assert_eq!(feature.id, Some(GeoValue::from("road-7")));
		assert_eq!(feature.geometry, Some(Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]])));
		assert_eq!(feature.bbox, Some(Envelope::new(0.0, 0.0, 1.0, 1.0)));
		assert_eq!(feature.properties.get("lanes"), Some(&GeoValue::UInt(2)));
		assert_eq!(feature.crs, None);
	}

	#[rstest]
	#[case(json!(7), GeoValue::UInt(7))]
	#[case(json!(-7), GeoValue::Int(-7))]
	#[case(json!(7.5), GeoValue::Double(7.5))]
	#[case(json!("7"), GeoValue::from("7"))]
	fn id_types(#[case] id: Value, #[case] expected: GeoValue) {
		let serializer = serializer(NullHandling::Ignore);
		let value = json!({"type": "Feature", "id": id, "geometry": null, "properties": {}});
		let feature: GeoFeature = serializer.deserialize_value(&value).unwrap();
		assert_eq!(feature.id, Some(expected));
		assert_eq!(serializer.serialize_value(&feature).unwrap(), value);
	}

	#[rstest]
	#[case(json!({"type": "Feature", "id": true, "geometry": null}))]
	#[case(json!({"type": "Feature", "id": [1], "geometry": null}))]
	#[case(json!({"type": "Feature", "properties": {}}))]
	#[case(json!({"type": "Feature", "geometry": null, "properties": [1]}))]
	#[case(json!({"type": "Point", "coordinates": [0, 0]}))]
	#[case(json!({"geometry": null}))]
	#[case(json!("Feature"))]
	fn invalid_feature(#[case] value: Value) {
		let error = serializer(NullHandling::Ignore)
			.deserialize_value::<GeoFeature>(&value)
			.unwrap_err();
		assert!(
			matches!(kind(&error), GeoJsonError::InvalidFeatureStructure(_)),
			"{error:#}"
		);
	}

	#[test]
	fn geometry_errors_carry_context() {
		let error = serializer(NullHandling::Ignore)
			.deserialize::<GeoFeature>(r#"{"type":"Feature","geometry":{"type":"Circle"},"properties":{}}"#)
			.unwrap_err();
		assert_eq!(format!("{error:#}"), "geometry: unsupported geometry type 'Circle'");
	}

	#[test]
	fn absent_or_null_properties_give_empty_table() {
		let serializer = serializer(NullHandling::Ignore);
		for json in [
			r#"{"type":"Feature","geometry":null}"#,
			r#"{"type":"Feature","geometry":null,"properties":null}"#,
		] {
			let feature: GeoFeature = serializer.deserialize(json).unwrap();
			assert!(feature.properties.is_empty());
			assert_eq!(feature.geometry, None);
		}
	}

	#[test]
	fn minimal_feature_omits_nulls() {
		let feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		assert_eq!(
			serializer(NullHandling::Ignore).serialize(&feature).unwrap(),
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.0,2.0]},"properties":{}}"#
		);
	}

	#[test]
	fn include_writes_null_id() {
		let feature = GeoFeature::new_without_geometry();
		assert_eq!(
			serializer(NullHandling::Include).serialize(&feature).unwrap(),
			r#"{"type":"Feature","id":null,"geometry":null,"properties":{}}"#
		);
	}

	#[test]
	fn member_order() {
		let mut feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		feature.set_property("b".to_string(), 1);
		feature.set_property("a".to_string(), "x");
		feature.set_id(9);
		feature.crs = Some(CrsTag::named("EPSG:4326"));
		feature.bbox = Some(Envelope::new(1.0, 2.0, 1.0, 2.0));
		assert_eq!(
			serializer(NullHandling::Ignore).serialize(&feature).unwrap(),
			concat!(
				r#"{"type":"Feature","id":9,"#,
				r#""geometry":{"type":"Point","coordinates":[1.0,2.0]},"#,
				r#""bbox":[1.0,2.0,1.0,2.0],"#,
				r#""crs":{"type":"name","properties":{"name":"EPSG:4326"}},"#,
				r#""properties":{"b":1,"a":"x"}}"#
			)
		);
	}

	#[test]
	fn write_bbox_computes_missing_bbox() {
		let feature = GeoFeature::new(Geometry::new_line_string(vec![[0.0, 5.0], [2.0, -1.0]]));
		let value = serializer(NullHandling::Ignore)
			.with_write_bbox(true)
			.serialize_value(&feature)
			.unwrap();
		assert_eq!(value["bbox"], json!([0.0, -1.0, 2.0, 5.0]));

		let value = serializer(NullHandling::Ignore).serialize_value(&feature).unwrap();
		assert!(value.get("bbox").is_none());
	}

	#[test]
	fn write_bbox_skips_features_without_geometry() {
		let value = serializer(NullHandling::Ignore)
			.with_write_bbox(true)
			.serialize_value(&GeoFeature::new_without_geometry())
			.unwrap();
		assert!(value.get("bbox").is_none());
	}

	#[rstest]
	#[case(GeoValue::Bool(true))]
	#[case(GeoValue::Double(f64::NAN))]
	#[case(GeoValue::Double(f64::INFINITY))]
	fn invalid_id_is_not_written(#[case] id: GeoValue) {
		let mut feature = GeoFeature::new_without_geometry();
		feature.set_id(id);
		for null_handling in [NullHandling::Ignore, NullHandling::Include] {
			let error = serializer(null_handling).serialize(&feature).unwrap_err();
			assert!(matches!(kind(&error), GeoJsonError::InvalidFeatureStructure(_)));
		}
	}

	#[test]
	fn round_trip_with_precision() {
		let factory = GeometryFactory::new(PrecisionModel::from_decimals(1).unwrap(), 4326);
		let serializer = GeoJsonSerializer::new(factory, 2, NullHandling::Ignore).unwrap();
		let feature: GeoFeature = serializer
			.deserialize(r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[0.44,0.46]},"properties":{"v":0.44}}"#)
			.unwrap();
		assert_eq!(
			serializer.serialize(&feature).unwrap(),
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[0.4,0.5]},"properties":{"v":0.44}}"#
		);
	}
}
