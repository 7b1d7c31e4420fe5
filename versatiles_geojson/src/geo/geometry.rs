use super::*;
use anyhow::Result;
use std::fmt::Debug;

/// Any GeoJSON geometry. Each variant owns its positions; collections own their children.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	pub fn new_point(value: impl Into<Coordinates>) -> Self {
		Self::Point(PointGeometry(value.into()))
	}
	pub fn new_line_string<T>(value: Vec<T>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: Vec<T>) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: Vec<Vec<T>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: Vec<Vec<Vec<T>>>) -> Self
	where
		Coordinates: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	pub fn new_geometry_collection(value: Vec<Geometry>) -> Self {
		Self::GeometryCollection(GeometryCollection(value))
	}

	/// The GeoJSON `type` discriminator of this geometry.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_)
			| Geometry::MultiLineString(_)
			| Geometry::MultiPolygon(_)
			| Geometry::GeometryCollection(_) => self,
		}
	}

	/// Returns a copy with the Z ordinate removed from every position.
	#[must_use]
	pub fn to_2d(&self) -> Self {
		fn flat(list: &[Coordinates]) -> Vec<Coordinates> {
			list.iter().map(Coordinates::to_2d).collect()
		}
		fn rings(polygon: &PolygonGeometry) -> PolygonGeometry {
			PolygonGeometry(polygon.0.iter().map(|ring| RingGeometry(flat(&ring.0))).collect())
		}
		match self {
			Geometry::Point(g) => Geometry::Point(PointGeometry(g.0.to_2d())),
			Geometry::LineString(g) => Geometry::LineString(LineStringGeometry(flat(&g.0))),
			Geometry::Polygon(g) => Geometry::Polygon(rings(g)),
			Geometry::MultiPoint(g) => {
				Geometry::MultiPoint(MultiPointGeometry(g.0.iter().map(|p| PointGeometry(p.0.to_2d())).collect()))
			}
			Geometry::MultiLineString(g) => Geometry::MultiLineString(MultiLineStringGeometry(
				g.0.iter().map(|line| LineStringGeometry(flat(&line.0))).collect(),
			)),
			Geometry::MultiPolygon(g) => Geometry::MultiPolygon(MultiPolygonGeometry(g.0.iter().map(rings).collect())),
			Geometry::GeometryCollection(g) => {
				Geometry::GeometryCollection(GeometryCollection(g.0.iter().map(Geometry::to_2d).collect()))
			}
		}
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl GeometryTrait for Geometry {
	fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::GeometryCollection(g) => g.verify(),
		}
	}

	fn visit_coordinates(&self, visit: &mut dyn FnMut(&Coordinates)) {
		match self {
			Geometry::Point(g) => g.visit_coordinates(visit),
			Geometry::LineString(g) => g.visit_coordinates(visit),
			Geometry::Polygon(g) => g.visit_coordinates(visit),
			Geometry::MultiPoint(g) => g.visit_coordinates(visit),
			Geometry::MultiLineString(g) => g.visit_coordinates(visit),
			Geometry::MultiPolygon(g) => g.visit_coordinates(visit),
			Geometry::GeometryCollection(g) => g.visit_coordinates(visit),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

impl From<geo::Point<f64>> for Geometry {
	fn from(value: geo::Point<f64>) -> Self {
		Geometry::Point(PointGeometry(Coordinates::from(value.0)))
	}
}

impl From<geo::LineString<f64>> for Geometry {
	fn from(value: geo::LineString<f64>) -> Self {
		Geometry::LineString(LineStringGeometry::from(value))
	}
}

impl From<geo::Polygon<f64>> for Geometry {
	fn from(value: geo::Polygon<f64>) -> Self {
		Geometry::Polygon(PolygonGeometry::from(value))
	}
}
