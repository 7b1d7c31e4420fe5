use super::GeoValue;
use indexmap::{IndexMap, map};
use std::fmt::Debug;

/// The attribute table of a feature: unique, case-sensitive names mapped to values.
///
/// Entries keep the order in which their names were first inserted.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: IndexMap<String, GeoValue>,
}

impl GeoProperties {
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: IndexMap::new(),
		}
	}
	/// Inserts or replaces a value. A replaced entry keeps its position.
	pub fn insert(&mut self, key: String, value: GeoValue) {
		self.properties.insert(key, value);
	}
	pub fn update(&mut self, new_properties: &GeoProperties) {
		for (k, v) in new_properties.iter() {
			self.properties.insert(k.to_string(), v.clone());
		}
	}
	/// Removes an entry while keeping the order of the others.
	pub fn remove(&mut self, key: &str) -> Option<GeoValue> {
		self.properties.shift_remove(key)
	}
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.get(key)
	}
	pub fn contains_key(&self, key: &str) -> bool {
		self.properties.contains_key(key)
	}
	pub fn iter(&self) -> map::Iter<'_, String, GeoValue> {
		self.properties.iter()
	}
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.properties.keys().map(String::as_str)
	}
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = map::IntoIter<String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl<'a> IntoIterator for &'a GeoProperties {
	type Item = (&'a String, &'a GeoValue);
	type IntoIter = map::Iter<'a, String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.iter()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl From<Vec<(&str, &str)>> for GeoProperties {
	fn from(value: Vec<(&str, &str)>) -> Self {
		GeoProperties {
			properties: value
				.into_iter()
				.map(|(k, v)| (k.to_string(), GeoValue::from(v)))
				.collect(),
		}
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: IndexMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
