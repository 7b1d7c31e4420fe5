use super::Coordinates;
use crate::{Envelope, GeoJsonError};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// Defines the basic interface for geometric primitives, providing common functionality
/// for all geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Verifies the structural validity of the geometry.
	/// For example, checks if lines have enough positions or if rings are closed.
	/// Returns an [`GeoJsonError::InvalidGeometryStructure`] error if the geometry is invalid.
	fn verify(&self) -> Result<()>;

	/// Calls `visit` for every position of the geometry, in document order.
	fn visit_coordinates(&self, visit: &mut dyn FnMut(&Coordinates));

	/// Computes the bounding box of all positions.
	///
	/// Returns [`Envelope::Empty`] if the geometry has no positions.
	fn envelope(&self) -> Envelope {
		let mut envelope = Envelope::Empty;
		self.visit_coordinates(&mut |c| envelope.expand_to_include(c));
		envelope
	}

	/// Returns the ordinate count shared by all positions, or `None` for an empty geometry.
	///
	/// Fails if 2D and 3D positions are mixed.
	fn ordinate_count(&self) -> Result<Option<usize>> {
		let mut first: Option<usize> = None;
		let mut mixed = false;
		self.visit_coordinates(&mut |c| match first {
			None => first = Some(c.ordinate_count()),
			Some(n) => mixed |= n != c.ordinate_count(),
		});
		ensure!(
			!mixed,
			GeoJsonError::structure("2D and 3D positions are mixed within one geometry")
		);
		Ok(first)
	}
}

/// Represents geometries that can be wrapped into a corresponding multi-geometry.
/// For example, a single `PointGeometry` can be converted into a `MultiPointGeometry`.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Converts the single geometry into its multi-geometry equivalent.
	fn into_multi(self) -> Multi;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
