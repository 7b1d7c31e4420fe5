use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, MultiLineStringGeometry, SingleGeometryTrait};
use crate::GeoJsonError;
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// Represents a sequence of connected positions forming a line, typically used for polylines or paths.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	/// Ensures that the `LineStringGeometry` has at least two positions.
	fn verify(&self) -> Result<()> {
		ensure!(
			self.0.len() >= 2,
			GeoJsonError::structure(format!(
				"LineString must have at least two positions, found {}",
				self.0.len()
			))
		);
		Ok(())
	}

	fn visit_coordinates(&self, visit: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(visit);
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
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

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	/// Converts this single line into a `MultiLineStringGeometry` containing just this one line.
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry => Coordinates);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Envelope;

	#[test]
	fn verify_requires_two_positions() {
		assert!(LineStringGeometry::from(&[[0, 0], [1, 1]]).verify().is_ok());

		let error = LineStringGeometry::from(&[[0, 0]]).verify().unwrap_err();
		assert_eq!(
			GeoJsonError::find(&error),
			Some(&GeoJsonError::structure(
				"LineString must have at least two positions, found 1"
			))
		);
		assert!(LineStringGeometry::new().verify().is_err());
	}

	#[test]
	fn envelope() {
		let line = LineStringGeometry::from(&[[3, -1], [0, 4], [2, 2]]);
		assert_eq!(line.envelope(), Envelope::new(0.0, -1.0, 3.0, 4.0));
		assert_eq!(LineStringGeometry::new().envelope(), Envelope::Empty);
	}

	#[test]
	fn mixed_dimensions_are_detected() {
		let line = LineStringGeometry(vec![Coordinates::new(0.0, 0.0), Coordinates::new_3d(1.0, 1.0, 1.0)]);
		assert!(line.ordinate_count().is_err());
		assert_eq!(LineStringGeometry::new().ordinate_count().unwrap(), None);
	}

	#[test]
	fn from_slice_and_vec() {
		let positions: Vec<[f64; 2]> = vec![[0.0, 0.0], [1.0, 2.0], [3.0, 1.0]];
		let from_slice = LineStringGeometry::from(&positions[..2]);
		assert_eq!(from_slice, LineStringGeometry::from(&[[0, 0], [1, 2]]));
		assert_eq!(LineStringGeometry::from(&positions).0.len(), 3);
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![(0.0, 0.0), (1.0, 2.0)]);
		assert_eq!(LineStringGeometry::from(ls), LineStringGeometry::from(&[[0, 0], [1, 2]]));
	}

	#[test]
	fn debug_format() {
		assert_eq!(
			format!("{:?}", LineStringGeometry::from(&[[1, 2], [3, 4]])),
			"[[1.0, 2.0], [3.0, 4.0]]"
		);
	}
}
