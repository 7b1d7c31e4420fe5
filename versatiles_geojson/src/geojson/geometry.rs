use super::{GeoJsonCodec, GeoJsonSerializer, decode_coordinates, encode_coordinates, json_type, type_of};
use crate::{Coordinates, GeoJsonError, Geometry, GeometryTrait};
use anyhow::{Context, Result, anyhow, bail, ensure};
use log::trace;
use serde_json::{Map, Value};

impl GeoJsonCodec for Geometry {
	fn decode(value: &Value, serializer: &GeoJsonSerializer) -> Result<Self> {
		decode_geometry(value, serializer, 0)
	}

	fn encode(&self, serializer: &GeoJsonSerializer) -> Result<Value> {
		encode_geometry(self, serializer, 0)
	}
}

/// A JSON array of bare geometries, as found in the `geometries` member of a collection.
impl GeoJsonCodec for Vec<Geometry> {
	fn decode(value: &Value, serializer: &GeoJsonSerializer) -> Result<Self> {
		decode_geometries(value, serializer, 0)
	}

	fn encode(&self, serializer: &GeoJsonSerializer) -> Result<Value> {
		encode_geometries(self, serializer, 0)
	}
}

/// `depth` counts the geometry collections enclosing `value`.
pub(super) fn decode_geometry(value: &Value, serializer: &GeoJsonSerializer, depth: usize) -> Result<Geometry> {
	let Value::Object(object) = value else {
		bail!(GeoJsonError::structure(format!(
			"expected a geometry object, found {}",
			json_type(value)
		)));
	};
	let Some(geometry_type) = type_of(object) else {
		bail!(GeoJsonError::structure("geometry has no 'type' member"));
	};
	trace!("decoding {geometry_type} geometry at depth {depth}");

	let factory = serializer.factory();
	let positions = |value: &Value| decode_positions(value, serializer);
	match geometry_type {
		"Point" => {
			let c = decode_coordinates(
				member(object, "coordinates")?,
				serializer.precision_model(),
				serializer.dimension(),
			)?;
			Ok(factory.create_point(c))
		}
		"LineString" => factory.create_line_string(positions(member(object, "coordinates")?)?),
		"Polygon" => factory.create_polygon(decode_nested(member(object, "coordinates")?, "ring", positions)?),
		"MultiPoint" => factory.create_multi_point(positions(member(object, "coordinates")?)?),
		"MultiLineString" => {
			factory.create_multi_line_string(decode_nested(member(object, "coordinates")?, "line", positions)?)
		}
		"MultiPolygon" => factory.create_multi_polygon(decode_nested(
			member(object, "coordinates")?,
			"polygon",
			|polygon| decode_nested(polygon, "ring", positions),
		)?),
		"GeometryCollection" => {
			ensure!(
				depth < serializer.max_depth(),
				GeoJsonError::RecursionLimit(serializer.max_depth())
			);
			let children = decode_geometries(member(object, "geometries")?, serializer, depth + 1)?;
			factory.create_geometry_collection(children)
		}
		other => bail!(GeoJsonError::UnsupportedGeometryType(other.to_string())),
	}
}

/// Stops at the first invalid element; its index is added as context.
pub(super) fn decode_geometries(value: &Value, serializer: &GeoJsonSerializer, depth: usize) -> Result<Vec<Geometry>> {
	as_array(value)?
		.iter()
		.enumerate()
		.map(|(index, entry)| decode_geometry(entry, serializer, depth).with_context(|| format!("geometry {index}")))
		.collect()
}

pub(super) fn encode_geometry(geometry: &Geometry, serializer: &GeoJsonSerializer, depth: usize) -> Result<Value> {
	let type_name = geometry.type_name();
	let has_z = serializer.dimension().has_z();
	if !matches!(geometry, Geometry::GeometryCollection(_)) {
		// checks run on the positions as they will be written
		let projected = (!has_z).then(|| geometry.to_2d());
		projected
			.as_ref()
			.unwrap_or(geometry)
			.verify()
			.with_context(|| format!("invalid {type_name}"))?;
	}
	if has_z {
		geometry.ordinate_count()?;
	}

	let mut object = Map::new();
	object.insert("type".to_string(), Value::from(type_name));

	let positions = |list: &[Coordinates]| encode_positions(list.iter(), serializer);
	let coordinates = match geometry {
		Geometry::Point(g) => encode_coordinates(&g.0, serializer.precision_model(), serializer.dimension())?,
		Geometry::LineString(g) => positions(&g.0)?,
		Geometry::Polygon(g) => encode_nested(&g.0, |ring| positions(&ring.0))?,
		Geometry::MultiPoint(g) => encode_positions(g.0.iter().map(|point| &point.0), serializer)?,
		Geometry::MultiLineString(g) => encode_nested(&g.0, |line| positions(&line.0))?,
		Geometry::MultiPolygon(g) => encode_nested(&g.0, |polygon| encode_nested(&polygon.0, |ring| positions(&ring.0)))?,
		Geometry::GeometryCollection(g) => {
			ensure!(
				depth < serializer.max_depth(),
				GeoJsonError::RecursionLimit(serializer.max_depth())
			);
			object.insert(
				"geometries".to_string(),
				encode_geometries(&g.0, serializer, depth + 1)?,
			);
			return Ok(Value::Object(object));
		}
	};
	object.insert("coordinates".to_string(), coordinates);
	Ok(Value::Object(object))
}

pub(super) fn encode_geometries(geometries: &[Geometry], serializer: &GeoJsonSerializer, depth: usize) -> Result<Value> {
	geometries
		.iter()
		.enumerate()
		.map(|(index, geometry)| {
			encode_geometry(geometry, serializer, depth).with_context(|| format!("geometry {index}"))
		})
		.collect::<Result<Vec<_>>>()
		.map(Value::Array)
}

fn member<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
	object
		.get(key)
		.ok_or_else(|| anyhow!(GeoJsonError::structure(format!("geometry has no '{key}' member"))))
}

fn as_array(value: &Value) -> Result<&Vec<Value>> {
	value.as_array().ok_or_else(|| {
		anyhow!(GeoJsonError::structure(format!(
			"expected an array, found {}",
			json_type(value)
		)))
	})
}

fn decode_positions(value: &Value, serializer: &GeoJsonSerializer) -> Result<Vec<Coordinates>> {
	as_array(value)?
		.iter()
		.enumerate()
		.map(|(index, entry)| {
			decode_coordinates(entry, serializer.precision_model(), serializer.dimension())
				.with_context(|| format!("position {index}"))
		})
		.collect()
}

fn decode_nested<T>(value: &Value, label: &str, decode: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
	as_array(value)?
		.iter()
		.enumerate()
		.map(|(index, entry)| decode(entry).with_context(|| format!("{label} {index}")))
		.collect()
}

fn encode_positions<'a>(
	positions: impl Iterator<Item = &'a Coordinates>,
	serializer: &GeoJsonSerializer,
) -> Result<Value> {
	positions
		.enumerate()
		.map(|(index, c)| {
			encode_coordinates(c, serializer.precision_model(), serializer.dimension())
				.with_context(|| format!("position {index}"))
		})
		.collect::<Result<Vec<_>>>()
		.map(Value::Array)
}

fn encode_nested<T>(items: &[T], encode: impl Fn(&T) -> Result<Value>) -> Result<Value> {
	items.iter().map(encode).collect::<Result<Vec<_>>>().map(Value::Array)
}
