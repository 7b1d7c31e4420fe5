use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use crate::Geometry;
use anyhow::{Context, Result};
use std::fmt::Debug;

/// An ordered list of child geometries of any kind, including nested collections.
#[derive(Clone, PartialEq)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryTrait for GeometryCollection {
	fn verify(&self) -> Result<()> {
		for (index, geometry) in self.0.iter().enumerate() {
			geometry.verify().with_context(|| format!("geometry {index}"))?;
		}
		Ok(())
	}

	fn visit_coordinates(&self, visit: &mut dyn FnMut(&Coordinates)) {
		for geometry in &self.0 {
			geometry.visit_coordinates(visit);
		}
	}
}

impl CompositeGeometryTrait<Geometry> for GeometryCollection {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Geometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Geometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Geometry> {
		self.0
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<Vec<Geometry>> for GeometryCollection {
	fn from(value: Vec<Geometry>) -> Self {
		Self(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Envelope;

	#[test]
	fn verify_reports_child_index() {
		let collection = GeometryCollection(vec![
			Geometry::new_point([1.0, 2.0]),
			Geometry::new_line_string(vec![[0.0, 0.0]]),
		]);
		let error = collection.verify().unwrap_err();
		assert!(format!("{error:#}").starts_with("geometry 1: "));
	}

	#[test]
	fn envelope_covers_nested_children() {
		let collection = GeometryCollection(vec![
			Geometry::new_point([1.0, 2.0]),
			Geometry::GeometryCollection(GeometryCollection(vec![Geometry::new_point([-4.0, 9.0])])),
		]);
		assert_eq!(collection.envelope(), Envelope::new(-4.0, 2.0, 1.0, 9.0));
		assert_eq!(GeometryCollection::new().envelope(), Envelope::Empty);
	}
}
