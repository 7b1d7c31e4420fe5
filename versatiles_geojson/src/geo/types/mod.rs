// This module defines the core geometric types used throughout the `versatiles_geojson` crate.
// It includes basic primitives such as `PointGeometry`, `LineStringGeometry`, `PolygonGeometry`,
// their multi-geometry counterparts and the recursive `GeometryCollection`. These types implement
// shared traits like `GeometryTrait`, `SingleGeometryTrait`, and `CompositeGeometryTrait` to provide
// consistent structural validation and bounding box computation.

mod coordinates;
mod geometry_collection;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use geometry_collection::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
