//! Error kinds raised while decoding or encoding GeoJSON.
//!
//! Codecs return [`anyhow::Result`] and attach the path of the offending element
//! (`feature 3`, `ring 0`, ...) as context. The typed kind stays reachable through
//! [`GeoJsonError::find`].

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeoJsonError {
	/// A construction-time parameter is out of range, e.g. a dimension of 4.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// The `type` discriminator names no known geometry.
	#[error("unsupported geometry type '{0}'")]
	UnsupportedGeometryType(String),

	/// Coordinate data has the wrong arity or shape for the declared type.
	#[error("invalid geometry structure: {0}")]
	InvalidGeometryStructure(String),

	/// A position has fewer than two numeric ordinates.
	#[error("malformed coordinate: {0}")]
	MalformedCoordinate(String),

	/// A Feature or FeatureCollection lacks a required member.
	#[error("invalid feature structure: {0}")]
	InvalidFeatureStructure(String),

	/// Nested geometry collections or attribute values exceed the depth limit.
	#[error("nesting exceeds the maximum depth of {0}")]
	RecursionLimit(usize),
}

impl GeoJsonError {
	pub fn argument(message: impl Into<String>) -> Self {
		Self::InvalidArgument(message.into())
	}

	pub fn structure(message: impl Into<String>) -> Self {
		Self::InvalidGeometryStructure(message.into())
	}

	pub fn coordinate(message: impl Into<String>) -> Self {
		Self::MalformedCoordinate(message.into())
	}

	pub fn feature(message: impl Into<String>) -> Self {
		Self::InvalidFeatureStructure(message.into())
	}

	/// Finds the typed error inside an `anyhow` chain, skipping any context layers.
	pub fn find(error: &anyhow::Error) -> Option<&GeoJsonError> {
		error.chain().find_map(|cause| cause.downcast_ref::<GeoJsonError>())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::{Context, Result, anyhow};

	fn failing() -> Result<()> {
		Err(anyhow!(GeoJsonError::coordinate("expected at least 2 ordinates")))
	}

	#[test]
	fn display_includes_kind_and_message() {
		assert_eq!(
			GeoJsonError::structure("LineString needs 2 positions").to_string(),
			"invalid geometry structure: LineString needs 2 positions"
		);
		assert_eq!(
			GeoJsonError::UnsupportedGeometryType("Shape".into()).to_string(),
			"unsupported geometry type 'Shape'"
		);
		assert_eq!(
			GeoJsonError::RecursionLimit(64).to_string(),
			"nesting exceeds the maximum depth of 64"
		);
	}

	#[test]
	fn find_through_context_layers() {
		let error = failing()
			.context("position 2")
			.context("feature 7")
			.unwrap_err();

		assert_eq!(
			GeoJsonError::find(&error),
			Some(&GeoJsonError::coordinate("expected at least 2 ordinates"))
		);
		assert_eq!(
			format!("{error:#}"),
			"feature 7: position 2: malformed coordinate: expected at least 2 ordinates"
		);
	}

	#[test]
	fn find_returns_none_for_foreign_errors() {
		let error = anyhow!("something else");
		assert!(GeoJsonError::find(&error).is_none());
	}
}
