use super::*;
use anyhow::{Context, Result};
use std::fmt::Debug;

/// A polygon: the first ring is the shell, any further rings are holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl GeometryTrait for PolygonGeometry {
	/// Every ring is verified on its own. A polygon without rings is empty, not invalid.
	fn verify(&self) -> Result<()> {
		for (index, ring) in self.0.iter().enumerate() {
			ring.verify().with_context(|| format!("ring {index}"))?;
		}
		Ok(())
	}

	fn visit_coordinates(&self, visit: &mut dyn FnMut(&Coordinates)) {
		for ring in &self.0 {
			ring.visit_coordinates(visit);
		}
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry => RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry(rings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Envelope, GeoJsonError};

	#[test]
	fn verify_reports_failing_ring() {
		let polygon = PolygonGeometry::from(&[
			vec![[0, 0], [5, 0], [5, 5], [0, 5], [0, 0]],
			vec![[1, 1], [2, 1], [2, 2]],
		]);
		let error = polygon.verify().unwrap_err();
		assert!(format!("{error:#}").starts_with("ring 1: invalid geometry structure"));
		assert!(matches!(
			GeoJsonError::find(&error),
			Some(GeoJsonError::InvalidGeometryStructure(_))
		));
	}

	#[test]
	fn empty_polygon_is_valid() {
		assert!(PolygonGeometry::new().verify().is_ok());
	}

	#[test]
	fn envelope_spans_all_rings() {
		let polygon = PolygonGeometry::from(&[[[0, 0], [5, 0], [5, 5], [0, 5], [0, 0]]]);
		assert_eq!(polygon.envelope(), Envelope::new(0.0, 0.0, 5.0, 5.0));
	}

	#[test]
	fn from_geo_polygon() {
		let polygon = geo::Polygon::new(
			geo::LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)]),
			vec![geo::LineString::from(vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)])],
		);
		let converted = PolygonGeometry::from(polygon);
		assert_eq!(converted.len(), 2);
		assert!(converted.verify().is_ok());
	}
}
