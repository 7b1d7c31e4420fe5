//! YAML configuration for a [`GeoJsonSerializer`].
//!
//! ```yaml
//! dimension: 3
//! srid: 4326
//! precision: fixed
//! scale: 1000
//! null_handling: include
//! max_depth: 32
//! write_bbox: true
//! ```
//!
//! Every key is optional.

use crate::{
	DEFAULT_MAX_DEPTH, GeoJsonError, GeoJsonSerializer, GeometryFactory, NullHandling, PrecisionModel, WGS84_SRID,
};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionKind {
	#[default]
	Floating,
	FloatingSingle,
	Fixed,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeoJsonConfig {
	/// Ordinates per position, 2 or 3.
	pub dimension: u8,

	/// Reference system of the geometry factory. Anything but 4326 is logged as a warning.
	pub srid: i32,

	pub precision: PrecisionKind,

	/// Grid scale for `precision: fixed`, e.g. 1000 keeps three decimals.
	pub scale: Option<f64>,

	pub null_handling: NullHandling,

	pub max_depth: usize,

	/// Compute a `bbox` for features and collections that have none.
	pub write_bbox: bool,
}

impl Default for GeoJsonConfig {
	fn default() -> Self {
		Self {
			dimension: 2,
			srid: WGS84_SRID,
			precision: PrecisionKind::Floating,
			scale: None,
			null_handling: NullHandling::Ignore,
			max_depth: DEFAULT_MAX_DEPTH,
			write_bbox: false,
		}
	}
}

impl GeoJsonConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Self::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}

	pub fn precision_model(&self) -> Result<PrecisionModel> {
		match (self.precision, self.scale) {
			(PrecisionKind::Floating, None) => Ok(PrecisionModel::Floating),
			(PrecisionKind::FloatingSingle, None) => Ok(PrecisionModel::FloatingSingle),
			(PrecisionKind::Fixed, Some(scale)) => PrecisionModel::fixed(scale),
			(PrecisionKind::Fixed, None) => bail!(GeoJsonError::argument("precision 'fixed' requires a 'scale'")),
			(_, Some(_)) => bail!(GeoJsonError::argument("'scale' is only allowed with precision 'fixed'")),
		}
	}

	/// Builds the session through [`GeoJsonSerializer::new`], so the dimension is checked
	/// and a foreign SRID is reported.
	pub fn build(&self) -> Result<GeoJsonSerializer> {
		let factory = GeometryFactory::new(self.precision_model()?, self.srid);
		Ok(GeoJsonSerializer::new(factory, self.dimension, self.null_handling)?
			.with_max_depth(self.max_depth)
			.with_write_bbox(self.write_bbox))
	}
}
