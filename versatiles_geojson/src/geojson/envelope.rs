use super::{GeoJsonCodec, GeoJsonSerializer, json_type};
use crate::{CrsTag, Envelope, GeoJsonError};
use anyhow::{Context, Result, anyhow, bail, ensure};
use log::debug;
use serde_json::{Map, Value};

/// A `bbox` array: `[minX, minY, maxX, maxY]` or `[minX, minY, minZ, maxX, maxY, maxZ]`.
///
/// An empty envelope encodes as `null`; features and collections leave the member out instead.
impl GeoJsonCodec for Envelope {
	fn decode(value: &Value, serializer: &GeoJsonSerializer) -> Result<Self> {
		let Value::Array(entries) = value else {
			bail!(GeoJsonError::structure(format!(
				"bbox must be an array, found {}",
				json_type(value)
			)));
		};
		let numbers = entries
			.iter()
			.enumerate()
			.map(|(index, entry)| {
				entry.as_f64().ok_or_else(|| {
					anyhow!(GeoJsonError::structure(format!(
						"bbox entry {index} must be a number, found {}",
						json_type(entry)
					)))
				})
			})
			.collect::<Result<Vec<f64>>>()?;

		let precise = |v: f64| -> Result<f64> {
			let v = serializer.precision_model().make_precise(v);
			ensure!(
				v.is_finite(),
				GeoJsonError::structure("bbox value is out of range for the precision model")
			);
			Ok(v)
		};
		match *numbers.as_slice() {
			[x_min, y_min, x_max, y_max] => Ok(Envelope::new(
				precise(x_min)?,
				precise(y_min)?,
				precise(x_max)?,
				precise(y_max)?,
			)),
			[x_min, y_min, z_min, x_max, y_max, z_max] => {
				let (x_min, y_min, x_max, y_max) = (precise(x_min)?, precise(y_min)?, precise(x_max)?, precise(y_max)?);
				if serializer.dimension().has_z() {
					Ok(Envelope::new_3d(x_min, y_min, z_min, x_max, y_max, z_max))
				} else {
					Ok(Envelope::new(x_min, y_min, x_max, y_max))
				}
			}
			_ => bail!(GeoJsonError::structure(format!(
				"bbox must have 4 or 6 entries, found {}",
				numbers.len()
			))),
		}
	}

	fn encode(&self, serializer: &GeoJsonSerializer) -> Result<Value> {
		let Envelope::Bounds {
			x_min,
			y_min,
			x_max,
			y_max,
			z,
		} = *self
		else {
			return Ok(Value::Null);
		};

		let z = z.filter(|_| serializer.dimension().has_z());
		let model = serializer.precision_model();
		let [x_min, y_min, x_max, y_max] = [x_min, y_min, x_max, y_max].map(|v| model.make_precise(v));
		let finite = [x_min, y_min, x_max, y_max].iter().all(|v| v.is_finite())
			&& z.is_none_or(|(z_min, z_max)| z_min.is_finite() && z_max.is_finite());
		ensure!(finite, GeoJsonError::structure(format!("bbox {self:?} has a non-finite value")));

		Ok(Value::Array(match z {
			Some((z_min, z_max)) => vec![
				Value::from(x_min),
				Value::from(y_min),
				Value::from(z_min),
				Value::from(x_max),
				Value::from(y_max),
				Value::from(z_max),
			],
			None => vec![
				Value::from(x_min),
				Value::from(y_min),
				Value::from(x_max),
				Value::from(y_max),
			],
		}))
	}
}

/// The legacy `crs` member. Any JSON value is carried through untouched.
impl GeoJsonCodec for CrsTag {
	fn decode(value: &Value, _serializer: &GeoJsonSerializer) -> Result<Self> {
		debug!("reading legacy 'crs' member: {value}");
		Ok(CrsTag(value.clone()))
	}

	fn encode(&self, _serializer: &GeoJsonSerializer) -> Result<Value> {
		Ok(self.0.clone())
	}
}

/// Reads the optional `bbox` member of a feature or collection. `null` counts as absent.
pub(super) fn decode_bbox(object: &Map<String, Value>, serializer: &GeoJsonSerializer) -> Result<Option<Envelope>> {
	match object.get("bbox") {
		None | Some(Value::Null) => Ok(None),
		Some(value) => Envelope::decode(value, serializer).context("bbox").map(Some),
	}
}

/// Reads the optional `crs` member. `null` counts as absent.
pub(super) fn decode_crs(object: &Map<String, Value>, serializer: &GeoJsonSerializer) -> Result<Option<CrsTag>> {
	match object.get("crs") {
		None | Some(Value::Null) => Ok(None),
		Some(value) => CrsTag::decode(value, serializer).map(Some),
	}
}

/// Writes `bbox` unless it is missing or empty.
pub(super) fn encode_bbox(
	object: &mut Map<String, Value>,
	bbox: Option<&Envelope>,
	serializer: &GeoJsonSerializer,
) -> Result<()> {
	if let Some(bbox) = bbox.filter(|bbox| !bbox.is_empty()) {
		object.insert("bbox".to_string(), bbox.encode(serializer).context("bbox")?);
	}
	Ok(())
}

pub(super) fn encode_crs(
	object: &mut Map<String, Value>,
	crs: Option<&CrsTag>,
	serializer: &GeoJsonSerializer,
) -> Result<()> {
	if let Some(crs) = crs {
		object.insert("crs".to_string(), crs.encode(serializer)?);
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeometryFactory, NullHandling, PrecisionModel};
	use rstest::rstest;
	use serde_json::json;

	fn serializer(dimension: u8) -> GeoJsonSerializer {
		let factory = GeometryFactory::new(PrecisionModel::from_decimals(2).unwrap(), 4326);
		GeoJsonSerializer::new(factory, dimension, NullHandling::Ignore).unwrap()
	}

	#[test]
	fn decode_four_values_and_round() {
		let bbox: Envelope = serializer(2).deserialize("[-10.123,-5,10.456,5]").unwrap();
		assert_eq!(bbox, Envelope::new(-10.12, -5.0, 10.46, 5.0));
	}

	#[test]
	fn decode_six_values() {
		let json = "[0,0,-1.555,1,1,2.555]";
		let bbox: Envelope = serializer(3).deserialize(json).unwrap();
		assert_eq!(bbox, Envelope::new_3d(0.0, 0.0, -1.555, 1.0, 1.0, 2.555));

		let bbox: Envelope = serializer(2).deserialize(json).unwrap();
		assert_eq!(bbox, Envelope::new(0.0, 0.0, 1.0, 1.0));
	}

	#[rstest]
	#[case("[]")]
	#[case("[1,2,3]")]
	#[case("[1,2,3,4,5]")]
	#[case("[1,2,3,4,5,6,7]")]
	#[case("[1,2,\"3\",4]")]
	#[case("{\"minx\":1}")]
	fn decode_invalid(#[case] json: &str) {
		let error = serializer(2).deserialize::<Envelope>(json).unwrap_err();
		assert!(matches!(
			GeoJsonError::find(&error),
			Some(GeoJsonError::InvalidGeometryStructure(_))
		));
	}

	#[test]
	fn encode_bounds() {
		let serializer = serializer(3);
		assert_eq!(
			serializer.serialize_value(&Envelope::new(1.111, 2.0, 3.0, 4.999)).unwrap(),
			json!([1.11, 2.0, 3.0, 5.0])
		);
		assert_eq!(
			serializer.serialize_value(&Envelope::new_3d(1.0, 2.0, 0.125, 3.0, 4.0, 9.875)).unwrap(),
			json!([1.0, 2.0, 0.125, 3.0, 4.0, 9.875])
		);
	}

	#[test]
	fn single_precision_overflow() {
		let factory = GeometryFactory::new(PrecisionModel::FloatingSingle, 4326);
		let serializer = GeoJsonSerializer::new(factory, 2, NullHandling::Ignore).unwrap();

		let error = serializer
			.serialize_value(&Envelope::new(0.0, 0.0, 1e39, 1.0))
			.unwrap_err();
		assert!(matches!(
			GeoJsonError::find(&error),
			Some(GeoJsonError::InvalidGeometryStructure(_))
		));

		let error = serializer.deserialize::<Envelope>("[0,0,1e39,1]").unwrap_err();
		assert!(matches!(
			GeoJsonError::find(&error),
			Some(GeoJsonError::InvalidGeometryStructure(_))
		));
	}

	#[test]
	fn encode_drops_z_under_two_dimensions() {
		assert_eq!(
			serializer(2)
				.serialize_value(&Envelope::new_3d(1.0, 2.0, 0.0, 3.0, 4.0, 9.0))
				.unwrap(),
			json!([1.0, 2.0, 3.0, 4.0])
		);
	}

	#[test]
	fn encode_empty_is_null() {
		assert_eq!(serializer(2).serialize_value(&Envelope::Empty).unwrap(), Value::Null);
	}

	#[test]
	fn encode_non_finite_fails() {
		assert!(
			serializer(2)
				.serialize_value(&Envelope::new(0.0, 0.0, f64::INFINITY, 1.0))
				.is_err()
		);
	}

	#[test]
	fn optional_members() {
		let serializer = serializer(2);
		let object = json!({"bbox": null, "crs": null});
		let object = object.as_object().unwrap();
		assert_eq!(decode_bbox(object, &serializer).unwrap(), None);
		assert_eq!(decode_crs(object, &serializer).unwrap(), None);

		let mut out = Map::new();
		encode_bbox(&mut out, Some(&Envelope::Empty), &serializer).unwrap();
		encode_crs(&mut out, None, &serializer).unwrap();
		assert!(out.is_empty());
	}

	#[test]
	fn bbox_errors_carry_member_name() {
		let object = json!({"bbox": [1, 2]});
		let error = decode_bbox(object.as_object().unwrap(), &serializer(2)).unwrap_err();
		assert_eq!(
			format!("{error:#}"),
			"bbox: invalid geometry structure: bbox must have 4 or 6 entries, found 2"
		);
	}

	#[test]
	fn crs_is_kept_verbatim() {
		let serializer = serializer(2);
		let json = r#"{"type":"name","properties":{"name":"urn:ogc:def:crs:OGC:1.3:CRS84"},"extra":[1,null]}"#;
		let crs: CrsTag = serializer.deserialize(json).unwrap();
		assert_eq!(crs.name(), Some("urn:ogc:def:crs:OGC:1.3:CRS84"));
		assert_eq!(serializer.serialize(&crs).unwrap(), json);
	}
}
