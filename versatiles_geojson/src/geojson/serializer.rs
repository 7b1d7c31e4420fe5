use super::GeoJsonCodec;
use crate::{GeoJsonError, GeometryFactory, PrecisionModel, WGS84_SRID};
use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use serde_json::Value;

/// Maximum nesting of geometry collections and attribute values accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Number of ordinates read and written per position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dimension {
	#[default]
	Xy,
	Xyz,
}

impl Dimension {
	#[must_use]
	pub fn ordinates(self) -> usize {
		match self {
			Dimension::Xy => 2,
			Dimension::Xyz => 3,
		}
	}

	#[must_use]
	pub fn has_z(self) -> bool {
		self == Dimension::Xyz
	}
}

impl TryFrom<u8> for Dimension {
	type Error = GeoJsonError;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			2 => Ok(Dimension::Xy),
			3 => Ok(Dimension::Xyz),
			_ => Err(GeoJsonError::argument(format!("dimension must be 2 or 3, got {value}"))),
		}
	}
}

/// What to do with attribute entries whose value is `null` when writing.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NullHandling {
	/// Leave null-valued entries and an absent feature `id` out of the output.
	#[default]
	Ignore,
	/// Write them as JSON `null`.
	Include,
}

/// A codec session: the geometry factory, dimension and null policy shared by every
/// decode and encode call.
///
/// A session is immutable once built and can be shared between threads.
///
/// ```
/// use versatiles_geojson::{GeoFeature, GeoJsonSerializer, GeometryFactory, NullHandling, PrecisionModel};
///
/// let factory = GeometryFactory::new(PrecisionModel::from_decimals(3)?, 4326);
/// let serializer = GeoJsonSerializer::new(factory, 2, NullHandling::Ignore)?;
/// let feature: GeoFeature = serializer.deserialize(
/// 	r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.23456,7.89]},"properties":null}"#,
/// )?;
/// assert_eq!(
/// 	serializer.serialize(&feature)?,
/// 	r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.235,7.89]},"properties":{}}"#
/// );
/// # anyhow::Ok(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GeoJsonSerializer {
	factory: GeometryFactory,
	dimension: Dimension,
	null_handling: NullHandling,
	max_depth: usize,
	write_bbox: bool,
}

impl Default for GeoJsonSerializer {
	fn default() -> Self {
		Self::assemble(GeometryFactory::default(), Dimension::Xy, NullHandling::Ignore)
	}
}

impl GeoJsonSerializer {
	/// Creates a session.
	///
	/// Fails with [`GeoJsonError::InvalidArgument`] unless `dimension` is 2 or 3 and a fixed
	/// precision scale is a finite positive number.
	/// A factory SRID other than 4326 is logged as a warning and otherwise accepted.
	pub fn new(factory: GeometryFactory, dimension: u8, null_handling: NullHandling) -> Result<Self> {
		let dimension = Dimension::try_from(dimension)?;
		factory.precision_model().validate()?;
		if factory.srid() != WGS84_SRID {
			warn!(
				"geometry factory uses SRID {}, but GeoJSON coordinates are expected in WGS 84 (SRID {WGS84_SRID})",
				factory.srid()
			);
		}
		Ok(Self::assemble(factory, dimension, null_handling))
	}

	/// Creates a two-dimensional session from a bare precision model.
	///
	/// Skips the dimension and reference-system checks of [`GeoJsonSerializer::new`].
	#[deprecated(note = "build a GeometryFactory and use GeoJsonSerializer::new")]
	#[must_use]
	pub fn legacy(precision_model: PrecisionModel, null_handling: NullHandling) -> Self {
		Self::assemble(
			GeometryFactory::new(precision_model, WGS84_SRID),
			Dimension::Xy,
			null_handling,
		)
	}

	fn assemble(factory: GeometryFactory, dimension: Dimension, null_handling: NullHandling) -> Self {
		Self {
			factory,
			dimension,
			null_handling,
			max_depth: DEFAULT_MAX_DEPTH,
			write_bbox: false,
		}
	}

	/// Limits the nesting of geometry collections and attribute values.
	#[must_use]
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// When set, features and collections without a bbox get one computed on write.
	#[must_use]
	pub fn with_write_bbox(mut self, write_bbox: bool) -> Self {
		self.write_bbox = write_bbox;
		self
	}

	#[must_use]
	pub fn factory(&self) -> &GeometryFactory {
		&self.factory
	}

	#[must_use]
	pub fn precision_model(&self) -> &PrecisionModel {
		self.factory.precision_model()
	}

	#[must_use]
	pub fn dimension(&self) -> Dimension {
		self.dimension
	}

	#[must_use]
	pub fn null_handling(&self) -> NullHandling {
		self.null_handling
	}

	#[must_use]
	pub fn max_depth(&self) -> usize {
		self.max_depth
	}

	#[must_use]
	pub fn write_bbox(&self) -> bool {
		self.write_bbox
	}

	/// Parses GeoJSON text into the requested type.
	pub fn deserialize<T: GeoJsonCodec>(&self, json: &str) -> Result<T> {
		let value: Value = serde_json::from_str(json).context("parsing GeoJSON text")?;
		self.deserialize_value(&value)
	}

	pub fn deserialize_value<T: GeoJsonCodec>(&self, value: &Value) -> Result<T> {
		T::decode(value, self)
	}

	/// Writes `item` as compact GeoJSON text.
	pub fn serialize<T: GeoJsonCodec>(&self, item: &T) -> Result<String> {
		Ok(serde_json::to_string(&item.encode(self)?)?)
	}

	pub fn serialize_pretty<T: GeoJsonCodec>(&self, item: &T) -> Result<String> {
		Ok(serde_json::to_string_pretty(&item.encode(self)?)?)
	}

	pub fn serialize_value<T: GeoJsonCodec>(&self, item: &T) -> Result<Value> {
		item.encode(self)
	}
}
