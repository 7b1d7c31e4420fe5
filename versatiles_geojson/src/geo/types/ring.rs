use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use crate::GeoJsonError;
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// Represents a closed ring geometry, which is a connected series of positions forming a loop.
/// This structure is the building block for polygons.
/// The first and last positions must be identical to form a closed shape.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl GeometryTrait for RingGeometry {
	/// Verifies that the ring is valid by checking:
	/// - It has at least 4 positions (3 unique points plus the closing point).
	/// - It is closed, i.e., the first and last positions are identical.
	///
	/// Winding order is not checked.
	fn verify(&self) -> Result<()> {
		ensure!(
			self.0.len() >= 4,
			GeoJsonError::structure(format!("ring must have at least 4 positions, found {}", self.0.len()))
		);
		ensure!(
			self.0.first() == self.0.last(),
			GeoJsonError::structure("ring must be closed")
		);
		Ok(())
	}

	fn visit_coordinates(&self, visit: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(visit);
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry => Coordinates);

/// Converts a `geo::LineString<f64>` into a `RingGeometry`, preserving the order of positions.
impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}
