use super::Coordinates;
use crate::GeoJsonError;
use anyhow::{Result, ensure};

/// Rounding rule applied to the X and Y ordinates of every position.
///
/// Z is never rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PrecisionModel {
	/// Full `f64` precision, values pass through unchanged.
	#[default]
	Floating,
	/// Values are rounded to the nearest `f32`.
	FloatingSingle,
	/// Values are snapped to a grid of `1 / scale`, e.g. `scale = 1000` keeps three decimals.
	Fixed { scale: f64 },
}

impl PrecisionModel {
	/// Creates a fixed model. `scale` must be finite and positive.
	pub fn fixed(scale: f64) -> Result<Self> {
		let model = PrecisionModel::Fixed { scale };
		model.validate()?;
		Ok(model)
	}

	/// Fails with [`GeoJsonError::InvalidArgument`] if a fixed scale is not a finite positive number.
	pub fn validate(&self) -> Result<()> {
		if let PrecisionModel::Fixed { scale } = *self {
			ensure!(
				scale.is_finite() && scale > 0.0,
				GeoJsonError::argument(format!("precision scale must be a positive number, got {scale}"))
			);
		}
		Ok(())
	}

	/// Creates a fixed model that keeps `decimals` digits after the decimal point.
	pub fn from_decimals(decimals: u8) -> Result<Self> {
		Self::fixed(10f64.powi(i32::from(decimals)))
	}

	/// Rounds a single ordinate value. Applying it twice gives the same result as once.
	#[must_use]
	pub fn make_precise(&self, value: f64) -> f64 {
		match self {
			PrecisionModel::Floating => value,
			PrecisionModel::FloatingSingle => f64::from(value as f32),
			PrecisionModel::Fixed { scale } => {
				let scaled = value * scale;
				if scaled.is_finite() {
					scaled.round() / scale
				} else {
					value
				}
			}
		}
	}

	/// Rounds `x` and `y`, leaving `z` as it is.
	#[must_use]
	pub fn make_precise_coordinates(&self, c: &Coordinates) -> Coordinates {
		if self.is_floating() {
			*c
		} else {
			c.map_xy(|v| self.make_precise(v))
		}
	}

	#[must_use]
	pub fn is_floating(&self) -> bool {
		matches!(self, PrecisionModel::Floating)
	}
}
