use std::fmt::Debug;

/// A single position with mandatory `x`/`y` and an optional `z` ordinate.
///
/// A missing `z` is a distinct state: it is never represented as `0.0`.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	x: f64,
	y: f64,
	z: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None }
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z: Some(z) }
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.x
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.y
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn has_z(&self) -> bool {
		self.z.is_some()
	}

	/// Number of ordinates carried, either 2 or 3.
	#[must_use]
	pub fn ordinate_count(&self) -> usize {
		if self.z.is_some() { 3 } else { 2 }
	}

	/// Returns a copy with `x` and `y` passed through `f`; `z` is left untouched.
	#[must_use]
	pub fn map_xy(&self, f: impl Fn(f64) -> f64) -> Self {
		Self {
			x: f(self.x),
			y: f(self.y),
			z: self.z,
		}
	}

	/// Returns a copy without the `z` ordinate.
	#[must_use]
	pub fn to_2d(&self) -> Self {
		Self::new(self.x, self.y)
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.x.is_finite() && self.y.is_finite() && self.z.is_none_or(f64::is_finite)
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl<'a, T> From<&'a [T; 3]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 3]) -> Self {
		Coordinates::new_3d(value[0].into(), value[1].into(), value[2].into())
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinates {
	fn from(value: [f64; 3]) -> Self {
		Coordinates::new_3d(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl From<Coordinates> for geo::Coord {
	fn from(value: Coordinates) -> Self {
		geo::Coord { x: value.x, y: value.y }
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.z {
			Some(z) => [self.x, self.y, z].fmt(f),
			None => [self.x, self.y].fmt(f),
		}
	}
}
