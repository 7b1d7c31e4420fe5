use super::{Dimension, json_type};
use crate::{Coordinates, GeoJsonError, PrecisionModel};
use anyhow::{Result, anyhow, bail, ensure};
use serde_json::Value;

/// Reads one position array such as `[x, y]` or `[x, y, z]`.
///
/// X and Y are rounded by `precision`, Z is taken as is. Under [`Dimension::Xy`] a third
/// entry is ignored; under [`Dimension::Xyz`] a missing third entry leaves Z absent.
/// Entries beyond the third are always ignored.
pub fn decode_coordinates(value: &Value, precision: &PrecisionModel, dimension: Dimension) -> Result<Coordinates> {
	let Value::Array(entries) = value else {
		bail!(GeoJsonError::structure(format!(
			"expected a position array, found {}",
			json_type(value)
		)));
	};
	ensure!(
		entries.len() >= 2,
		GeoJsonError::coordinate(format!("expected at least 2 ordinates, found {}", entries.len()))
	);

	let ordinate = |index: usize| -> Result<f64> {
		entries[index].as_f64().ok_or_else(|| {
			anyhow!(GeoJsonError::coordinate(format!(
				"ordinate {index} must be a number, found {}",
				json_type(&entries[index])
			)))
		})
	};

	let (x, y) = (ordinate(0)?, ordinate(1)?);
	let c = if dimension.has_z() && entries.len() > 2 {
		Coordinates::new_3d(x, y, ordinate(2)?)
	} else {
		Coordinates::new(x, y)
	};
	let c = precision.make_precise_coordinates(&c);
	ensure!(
		c.is_finite(),
		GeoJsonError::coordinate(format!("position {c:?} is out of range for the precision model"))
	);
	Ok(c)
}

/// Writes one position. Z is dropped under [`Dimension::Xy`] and never invented.
pub fn encode_coordinates(c: &Coordinates, precision: &PrecisionModel, dimension: Dimension) -> Result<Value> {
	let precise = precision.make_precise_coordinates(c);
	ensure!(
		precise.is_finite(),
		GeoJsonError::structure(format!("position {c:?} has a non-finite ordinate"))
	);
	let mut ordinates = Vec::with_capacity(dimension.ordinates());
	ordinates.push(Value::from(precise.x()));
	ordinates.push(Value::from(precise.y()));
	if let (Some(z), true) = (c.z(), dimension.has_z()) {
		ordinates.push(Value::from(z));
	}
	Ok(Value::Array(ordinates))
}
