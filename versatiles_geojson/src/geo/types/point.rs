use super::{Coordinates, GeometryTrait, MultiPointGeometry, traits::SingleGeometryTrait};
use std::fmt::Debug;

/// Represents a single position.
///
/// This is the simplest geometric type and is often used as a building block for more complex geometries.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	/// Constructs a new `PointGeometry` from a `Coordinates` instance.
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.0.z()
	}
	/// Returns a reference to the underlying `Coordinates`.
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	/// A point is always structurally valid.
	fn verify(&self) -> anyhow::Result<()> {
		Ok(())
	}

	fn visit_coordinates(&self, visit: &mut dyn FnMut(&Coordinates)) {
		visit(&self.0);
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	/// Wraps this single point into a `MultiPointGeometry`.
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	/// Allows creating a `PointGeometry` from any type convertible into `Coordinates`, such as arrays or tuples.
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
