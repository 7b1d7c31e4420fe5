use super::GeoProperties;
use std::fmt::{Debug, Display};

/// A dynamically typed attribute value.
///
/// JSON integers stay integers (`UInt` for non-negative, `Int` for negative) and
/// fractional numbers become `Double`, so `1` and `1.0` remain distinguishable.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	String(String),
	UInt(u64),
	Array(Vec<GeoValue>),
	Object(GeoProperties),
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
			Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<&String> for GeoValue {
	fn from(value: &String) -> Self {
		GeoValue::String(value.clone())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(value as i64)
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u32> for GeoValue {
	fn from(value: u32) -> Self {
		GeoValue::UInt(value as u64)
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		if value < 0 {
			GeoValue::Int(value)
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl From<Vec<GeoValue>> for GeoValue {
	fn from(value: Vec<GeoValue>) -> Self {
		GeoValue::Array(value)
	}
}

impl From<GeoProperties> for GeoValue {
	fn from(value: GeoProperties) -> Self {
		GeoValue::Object(value)
	}
}

impl<T> From<Option<T>> for GeoValue
where
	GeoValue: From<T>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(GeoValue::Null, GeoValue::from)
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => f.write_str("null"),
			GeoValue::String(v) => f.write_str(v),
			GeoValue::UInt(v) => write!(f, "{v}"),
			GeoValue::Array(v) => {
				f.write_str("[")?;
				for (index, item) in v.iter().enumerate() {
					if index > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			GeoValue::Object(v) => {
				f.write_str("{")?;
				for (index, (key, item)) in v.iter().enumerate() {
					if index > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{key}: {item}")?;
				}
				f.write_str("}")
			}
		}
	}
}

impl GeoValue {
	/// The JSON type name of this value.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			GeoValue::Bool(_) => "boolean",
			GeoValue::Double(_) | GeoValue::Int(_) | GeoValue::UInt(_) => "number",
			GeoValue::Null => "null",
			GeoValue::String(_) => "string",
			GeoValue::Array(_) => "array",
			GeoValue::Object(_) => "object",
		}
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, GeoValue::Null)
	}

	#[must_use]
	pub fn is_number(&self) -> bool {
		matches!(self, GeoValue::Double(_) | GeoValue::Int(_) | GeoValue::UInt(_))
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			GeoValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the value as `f64` for any numeric variant.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			GeoValue::Double(v) => Some(*v),
			GeoValue::Int(v) => Some(*v as f64),
			GeoValue::UInt(v) => Some(*v as f64),
			_ => None,
		}
	}
}
