use super::{
	GeoJsonCodec, GeoJsonSerializer,
	envelope::{decode_bbox, decode_crs, encode_bbox, encode_crs},
	feature::check_type,
	json_type,
};
use crate::{GeoCollection, GeoFeature, GeoJsonError};
use anyhow::{Context, Result, anyhow, bail};
use log::debug;
use serde_json::{Map, Value};

impl GeoJsonCodec for GeoCollection {
	/// The first invalid feature aborts decoding; its index is added as context.
	fn decode(value: &Value, serializer: &GeoJsonSerializer) -> Result<Self> {
		let Value::Object(object) = value else {
			bail!(GeoJsonError::feature(format!(
				"expected a FeatureCollection object, found {}",
				json_type(value)
			)));
		};
		check_type(object, "FeatureCollection")?;

		let entries = object
			.get("features")
			.ok_or_else(|| anyhow!(GeoJsonError::feature("FeatureCollection has no 'features' member")))?
			.as_array()
			.ok_or_else(|| anyhow!(GeoJsonError::feature("'features' must be an array")))?;

		let features = entries
			.iter()
			.enumerate()
			.map(|(index, entry)| GeoFeature::decode(entry, serializer).with_context(|| format!("feature {index}")))
			.collect::<Result<Vec<_>>>()?;
		debug!("decoded FeatureCollection with {} features", features.len());

		Ok(GeoCollection {
			features,
			bbox: decode_bbox(object, serializer)?,
			crs: decode_crs(object, serializer)?,
		})
	}

	/// Members are written as `type`, `features`, `bbox`, `crs`.
	fn encode(&self, serializer: &GeoJsonSerializer) -> Result<Value> {
		let mut object = Map::new();
		object.insert("type".to_string(), Value::from("FeatureCollection"));

		let features = self
			.features
			.iter()
			.enumerate()
			.map(|(index, feature)| feature.encode(serializer).with_context(|| format!("feature {index}")))
			.collect::<Result<Vec<_>>>()?;
		object.insert("features".to_string(), Value::Array(features));

		let bbox = self.bbox.or_else(|| serializer.write_bbox().then(|| self.envelope()));
		encode_bbox(&mut object, bbox.as_ref(), serializer)?;
		encode_crs(&mut object, self.crs.as_ref(), serializer)?;
		Ok(Value::Object(object))
	}
}
