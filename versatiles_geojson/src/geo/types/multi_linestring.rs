use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, LineStringGeometry};
use anyhow::{Context, Result};
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn verify(&self) -> Result<()> {
		for (index, line) in self.0.iter().enumerate() {
			line.verify().with_context(|| format!("line {index}"))?;
		}
		Ok(())
	}

	fn visit_coordinates(&self, visit: &mut dyn FnMut(&Coordinates)) {
		for line in &self.0 {
			line.visit_coordinates(visit);
		}
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry => LineStringGeometry);
