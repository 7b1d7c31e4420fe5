use super::GeoJsonSerializer;
use crate::{GeoCollection, GeoFeature};
use anyhow::{Context, Error, Result};
use futures::{Stream, StreamExt, future::ready, stream};
use serde_json::Value;
use std::{
	io::{BufRead, Read},
	sync::Arc,
};

/// Reads a complete FeatureCollection document.
pub fn read_geojson(reader: impl Read, serializer: &GeoJsonSerializer) -> Result<GeoCollection> {
	let value: Value = serde_json::from_reader(reader).context("parsing GeoJSON text")?;
	serializer.deserialize_value(&value)
}

fn process_line(
	line: std::io::Result<String>,
	index: usize,
	serializer: &GeoJsonSerializer,
) -> Option<Result<GeoFeature>> {
	let result = match line {
		Ok(line) if line.trim().is_empty() => return None,
		Ok(line) => serializer.deserialize::<GeoFeature>(&line),
		Err(e) => Err(Error::from(e)),
	};
	Some(result.with_context(|| format!("line {}", index + 1)))
}

/// Reads newline-delimited GeoJSON: one Feature per line, blank lines skipped.
pub fn read_ndgeojson_iter<'a>(
	reader: impl BufRead + 'a,
	serializer: &'a GeoJsonSerializer,
) -> impl Iterator<Item = Result<GeoFeature>> + 'a {
	reader
		.lines()
		.enumerate()
		.filter_map(move |(index, line)| process_line(line, index, serializer))
}

/// Like [`read_ndgeojson_iter`], but decodes lines on tokio tasks, one per CPU at a time.
/// Features are yielded in input order.
pub fn read_ndgeojson_stream(
	reader: impl BufRead,
	serializer: Arc<GeoJsonSerializer>,
) -> impl Stream<Item = Result<GeoFeature>> {
	stream::iter(reader.lines().enumerate())
		.map(move |(index, line)| {
			let serializer = Arc::clone(&serializer);
			tokio::spawn(async move { process_line(line, index, &serializer) })
		})
		.buffered(num_cpus::get())
		.filter_map(|f| {
			ready(match f {
				Ok(value) => value,
				Err(e) => Some(Err(Error::from(e))),
			})
		})
}
