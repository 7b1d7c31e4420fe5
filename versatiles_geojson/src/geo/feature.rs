use super::*;
use std::fmt::Debug;

/// A geometry with an optional identifier, attributes and bounding box.
///
/// `geometry` is `None` for features whose GeoJSON geometry is `null`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeature {
	/// Either a string or a number.
	pub id: Option<GeoValue>,
	pub geometry: Option<Geometry>,
	pub properties: GeoProperties,
	pub bbox: Option<Envelope>,
	pub crs: Option<CrsTag>,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry: Some(geometry),
			..Default::default()
		}
	}

	/// A feature whose geometry is explicitly absent.
	pub fn new_without_geometry() -> Self {
		Self::default()
	}

	pub fn set_id(&mut self, id: impl Into<GeoValue>) {
		self.id = Some(id.into());
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key, GeoValue::from(value));
	}

	/// The stored bbox if there is one, otherwise the envelope of the geometry.
	pub fn envelope(&self) -> Envelope {
		match (self.bbox, &self.geometry) {
			(Some(bbox), _) => bbox,
			(None, Some(geometry)) => geometry.envelope(),
			(None, None) => Envelope::Empty,
		}
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: Some(GeoValue::from(13)),
			geometry: Some(Geometry::new_example()),
			properties: GeoProperties::from(vec![
				("name", GeoValue::from("Nice")),
				("population", GeoValue::from(348085)),
				("is_nice", GeoValue::from(true)),
			]),
			bbox: None,
			crs: None,
		}
	}
}
