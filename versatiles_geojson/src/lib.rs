//! Lossless conversion between GeoJSON text and an in-memory geometry model.
//!
//! A [`GeoJsonSerializer`] session binds a [`GeometryFactory`] (precision model and SRID),
//! an ordinate dimension and a null policy. Every GeoJSON shape ([`Geometry`],
//! [`GeoFeature`], [`GeoCollection`], [`GeoProperties`], [`Envelope`], [`CrsTag`]
//! and the [`GeoJson`] document) implements [`GeoJsonCodec`] and is read and written
//! through that session.
//!
//! ```
//! use versatiles_geojson::{GeoCollection, GeoJsonSerializer, GeometryFactory, NullHandling, PrecisionModel};
//!
//! let factory = GeometryFactory::new(PrecisionModel::from_decimals(3)?, 4326);
//! let serializer = GeoJsonSerializer::new(factory, 2, NullHandling::Ignore)?;
//! let collection: GeoCollection = serializer.deserialize(
//! 	r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1.23456,7.89]},"properties":{"name":"A"}}]}"#,
//! )?;
//! assert_eq!(collection.features.len(), 1);
//! # anyhow::Ok(())
//! ```

mod config;
mod error;
mod geo;
pub mod geojson;

pub use config::*;
pub use error::*;
pub use geo::*;
pub use geojson::*;
