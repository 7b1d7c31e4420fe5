use super::{GeoJsonCodec, GeoJsonSerializer, json_type, type_of};
use crate::{GeoCollection, GeoFeature, GeoJsonError, Geometry};
use anyhow::{Result, bail};
use serde_json::Value;

/// Any complete GeoJSON document, selected by its `type` member.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoJson {
	Geometry(Geometry),
	Feature(GeoFeature),
	FeatureCollection(GeoCollection),
}

impl GeoJson {
	/// The features of the document: a single feature becomes a collection of one,
	/// a bare geometry is wrapped in a feature.
	#[must_use]
	pub fn into_collection(self) -> GeoCollection {
		match self {
			GeoJson::Geometry(geometry) => GeoCollection::from(vec![GeoFeature::new(geometry)]),
			GeoJson::Feature(feature) => GeoCollection::from(vec![feature]),
			GeoJson::FeatureCollection(collection) => collection,
		}
	}
}

impl GeoJsonCodec for GeoJson {
	fn decode(value: &Value, serializer: &GeoJsonSerializer) -> Result<Self> {
		let Some(document_type) = value.as_object().and_then(type_of) else {
			bail!(GeoJsonError::feature(format!(
				"expected an object with a 'type' member, found {}",
				json_type(value)
			)));
		};
		Ok(match document_type {
			"Feature" => GeoJson::Feature(GeoFeature::decode(value, serializer)?),
			"FeatureCollection" => GeoJson::FeatureCollection(GeoCollection::decode(value, serializer)?),
			_ => GeoJson::Geometry(Geometry::decode(value, serializer)?),
		})
	}

	fn encode(&self, serializer: &GeoJsonSerializer) -> Result<Value> {
		match self {
			GeoJson::Geometry(geometry) => geometry.encode(serializer),
			GeoJson::Feature(feature) => feature.encode(serializer),
			GeoJson::FeatureCollection(collection) => collection.encode(serializer),
		}
	}
}

impl From<Geometry> for GeoJson {
	fn from(geometry: Geometry) -> Self {
		GeoJson::Geometry(geometry)
	}
}

impl From<GeoFeature> for GeoJson {
	fn from(feature: GeoFeature) -> Self {
		GeoJson::Feature(feature)
	}
}

impl From<GeoCollection> for GeoJson {
	fn from(collection: GeoCollection) -> Self {
		GeoJson::FeatureCollection(collection)
	}
}
