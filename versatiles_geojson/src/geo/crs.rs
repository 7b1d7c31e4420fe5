use serde_json::Value;

/// The legacy `crs` member of pre-RFC 7946 documents, kept verbatim.
///
/// RFC 7946 removed `crs`; new documents should not carry one. The value is never
/// interpreted, it is only read and written back unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct CrsTag(pub Value);

impl CrsTag {
	/// Builds the common `{"type":"name","properties":{"name":...}}` form.
	#[must_use]
	pub fn named(name: &str) -> Self {
		Self(serde_json::json!({
			"type": "name",
			"properties": { "name": name }
		}))
	}

	/// Returns `properties.name` if the tag uses the named form.
	#[must_use]
	pub fn name(&self) -> Option<&str> {
		self.0.get("properties")?.get("name")?.as_str()
	}
}
