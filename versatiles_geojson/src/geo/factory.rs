use super::*;
use anyhow::{Context, Result};

/// SRID of WGS 84, the only reference system RFC 7946 allows.
pub const WGS84_SRID: i32 = 4326;

/// Builds geometries that share one precision model and one reference system.
///
/// Construction checks structure (line lengths, closed rings, consistent
/// dimension) but not topology.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryFactory {
	precision_model: PrecisionModel,
	srid: i32,
}

impl Default for GeometryFactory {
	fn default() -> Self {
		Self::new(PrecisionModel::Floating, WGS84_SRID)
	}
}

impl GeometryFactory {
	#[must_use]
	pub fn new(precision_model: PrecisionModel, srid: i32) -> Self {
		Self { precision_model, srid }
	}

	#[must_use]
	pub fn precision_model(&self) -> &PrecisionModel {
		&self.precision_model
	}

	#[must_use]
	pub fn srid(&self) -> i32 {
		self.srid
	}

	#[must_use]
	pub fn create_point(&self, c: Coordinates) -> Geometry {
		Geometry::Point(PointGeometry(c))
	}

	pub fn create_line_string(&self, coordinates: Vec<Coordinates>) -> Result<Geometry> {
		checked(Geometry::LineString(LineStringGeometry(coordinates)))
	}

	pub fn create_polygon(&self, rings: Vec<Vec<Coordinates>>) -> Result<Geometry> {
		checked(Geometry::Polygon(polygon(rings)))
	}

	pub fn create_multi_point(&self, coordinates: Vec<Coordinates>) -> Result<Geometry> {
		checked(Geometry::MultiPoint(MultiPointGeometry(
			coordinates.into_iter().map(PointGeometry).collect(),
		)))
	}

	pub fn create_multi_line_string(&self, lines: Vec<Vec<Coordinates>>) -> Result<Geometry> {
		checked(Geometry::MultiLineString(MultiLineStringGeometry(
			lines.into_iter().map(LineStringGeometry).collect(),
		)))
	}

	pub fn create_multi_polygon(&self, polygons: Vec<Vec<Vec<Coordinates>>>) -> Result<Geometry> {
		checked(Geometry::MultiPolygon(MultiPolygonGeometry(
			polygons.into_iter().map(polygon).collect(),
		)))
	}

	/// Children were already checked when they were built, so only the shared dimension is verified.
	pub fn create_geometry_collection(&self, geometries: Vec<Geometry>) -> Result<Geometry> {
		let geometry = Geometry::GeometryCollection(GeometryCollection(geometries));
		geometry.ordinate_count()?;
		Ok(geometry)
	}
}

fn polygon(rings: Vec<Vec<Coordinates>>) -> PolygonGeometry {
	PolygonGeometry(rings.into_iter().map(RingGeometry).collect())
}

fn checked(geometry: Geometry) -> Result<Geometry> {
	geometry
		.verify()
		.with_context(|| format!("invalid {}", geometry.type_name()))?;
	geometry.ordinate_count()?;
	Ok(geometry)
}
