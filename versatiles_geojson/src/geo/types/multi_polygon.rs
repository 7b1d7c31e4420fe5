use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, PolygonGeometry};
use anyhow::{Context, Result};
use std::fmt::Debug;

/// Represents a collection of polygons, each of which may have an outer ring and optional inner holes.
/// This struct is used for complex, multi-part areas.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<()> {
		for (index, polygon) in self.0.iter().enumerate() {
			polygon.verify().with_context(|| format!("polygon {index}"))?;
		}
		Ok(())
	}

	fn visit_coordinates(&self, visit: &mut dyn FnMut(&Coordinates)) {
		for polygon in &self.0 {
			polygon.visit_coordinates(visit);
		}
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry => PolygonGeometry);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Envelope;

	fn sample() -> MultiPolygonGeometry {
		MultiPolygonGeometry::from(&[
			vec![vec![[0, 0], [5, 0], [2, 4], [0, 0]]],
			vec![vec![[6, 0], [9, 0], [9, 4], [6, 4], [6, 0]]],
		])
	}

	#[test]
	fn verify_ok() {
		assert!(sample().verify().is_ok());
	}

	#[test]
	fn verify_reports_path() {
		let mp = MultiPolygonGeometry::from(&[
			vec![vec![[0, 0], [5, 0], [2, 4], [0, 0]]],
			vec![vec![[6, 0], [9, 0], [9, 4], [6, 4]]],
		]);
		let error = mp.verify().unwrap_err();
		assert!(format!("{error:#}").starts_with("polygon 1: ring 0: "));
	}

	#[test]
	fn envelope() {
		assert_eq!(sample().envelope(), Envelope::new(0.0, 0.0, 9.0, 4.0));
	}
}
