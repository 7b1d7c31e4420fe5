use super::Coordinates;
use std::fmt::Debug;

/// An axis-aligned bounding box, optionally with a Z range.
///
/// `Empty` is its own state: an envelope over no positions has no bounds at all,
/// rather than bounds of zero.
///
/// # Examples
/// ```
/// use versatiles_geojson::{Coordinates, Envelope};
///
/// let mut envelope = Envelope::Empty;
/// envelope.expand_to_include(&Coordinates::new(3.0, 1.0));
/// envelope.expand_to_include(&Coordinates::new(-1.0, 2.0));
/// assert_eq!(envelope, Envelope::new(-1.0, 1.0, 3.0, 2.0));
/// ```
#[derive(Clone, Copy, Default, PartialEq)]
pub enum Envelope {
	#[default]
	Empty,
	Bounds {
		x_min: f64,
		y_min: f64,
		x_max: f64,
		y_max: f64,
		/// `(z_min, z_max)` when every included position carried a Z ordinate.
		z: Option<(f64, f64)>,
	},
}

impl Envelope {
	#[must_use]
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
		Envelope::Bounds {
			x_min,
			y_min,
			x_max,
			y_max,
			z: None,
		}
	}

	#[must_use]
	pub fn new_3d(x_min: f64, y_min: f64, z_min: f64, x_max: f64, y_max: f64, z_max: f64) -> Self {
		Envelope::Bounds {
			x_min,
			y_min,
			x_max,
			y_max,
			z: Some((z_min, z_max)),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		matches!(self, Envelope::Empty)
	}

	/// Returns `[x_min, y_min, x_max, y_max]`, or `None` if empty.
	#[must_use]
	pub fn as_array(&self) -> Option<[f64; 4]> {
		match self {
			Envelope::Empty => None,
			Envelope::Bounds {
				x_min,
				y_min,
				x_max,
				y_max,
				..
			} => Some([*x_min, *y_min, *x_max, *y_max]),
		}
	}

	/// Grows the envelope to contain `c`.
	///
	/// The Z range survives only while every included position has a Z value.
	pub fn expand_to_include(&mut self, c: &Coordinates) {
		let point = match c.z() {
			Some(z) => Envelope::new_3d(c.x(), c.y(), z, c.x(), c.y(), z),
			None => Envelope::new(c.x(), c.y(), c.x(), c.y()),
		};
		self.merge(&point);
	}

	/// Grows the envelope to contain `other`.
	pub fn merge(&mut self, other: &Envelope) {
		*self = match (*self, *other) {
			(Envelope::Empty, e) | (e, Envelope::Empty) => e,
			(
				Envelope::Bounds {
					x_min: ax0,
					y_min: ay0,
					x_max: ax1,
					y_max: ay1,
					z: az,
				},
				Envelope::Bounds {
					x_min: bx0,
					y_min: by0,
					x_max: bx1,
					y_max: by1,
					z: bz,
				},
			) => Envelope::Bounds {
				x_min: ax0.min(bx0),
				y_min: ay0.min(by0),
				x_max: ax1.max(bx1),
				y_max: ay1.max(by1),
				z: az.zip(bz).map(|((a0, a1), (b0, b1))| (a0.min(b0), a1.max(b1))),
			},
		};
	}
}

impl Debug for Envelope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Envelope::Empty => f.write_str("Envelope::Empty"),
			Envelope::Bounds {
				x_min,
				y_min,
				x_max,
				y_max,
				z: None,
			} => write!(f, "Envelope[{x_min}, {y_min}, {x_max}, {y_max}]"),
			Envelope::Bounds {
				x_min,
				y_min,
				x_max,
				y_max,
				z: Some((z_min, z_max)),
			} => write!(f, "Envelope[{x_min}, {y_min}, {z_min}, {x_max}, {y_max}, {z_max}]"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_is_default_and_distinct_from_zero() {
		assert!(Envelope::default().is_empty());
		assert_ne!(Envelope::Empty, Envelope::new(0.0, 0.0, 0.0, 0.0));
		assert_eq!(Envelope::Empty.as_array(), None);
	}

	#[test]
	fn merge_with_empty() {
		let mut envelope = Envelope::Empty;
		envelope.merge(&Envelope::new(1.0, 2.0, 3.0, 4.0));
		assert_eq!(envelope, Envelope::new(1.0, 2.0, 3.0, 4.0));

		envelope.merge(&Envelope::Empty);
		assert_eq!(envelope, Envelope::new(1.0, 2.0, 3.0, 4.0));
	}

	#[test]
	fn merge_extends_bounds() {
		let mut envelope = Envelope::new(-10.0, -5.0, 10.0, 5.0);
		envelope.merge(&Envelope::new(-12.0, -3.0, 8.0, 6.0));
		assert_eq!(envelope.as_array(), Some([-12.0, -5.0, 10.0, 6.0]));
	}

	#[test]
	fn z_range_requires_z_everywhere() {
		let mut envelope = Envelope::Empty;
		envelope.expand_to_include(&Coordinates::new_3d(0.0, 0.0, 5.0));
		envelope.expand_to_include(&Coordinates::new_3d(1.0, 1.0, -2.0));
		assert_eq!(envelope, Envelope::new_3d(0.0, 0.0, -2.0, 1.0, 1.0, 5.0));

		envelope.expand_to_include(&Coordinates::new(2.0, 2.0));
		assert_eq!(envelope, Envelope::new(0.0, 0.0, 2.0, 2.0));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", Envelope::Empty), "Envelope::Empty");
		assert_eq!(format!("{:?}", Envelope::new(1.0, 2.0, 3.0, 4.0)), "Envelope[1, 2, 3, 4]");
	}
}
