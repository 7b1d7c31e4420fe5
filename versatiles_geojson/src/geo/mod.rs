#![allow(clippy::module_inception)]

mod collection;
mod crs;
mod envelope;
mod factory;
mod feature;
mod geometry;
mod precision;
mod properties;
mod types;
mod value;

pub use collection::*;
pub use crs::*;
pub use envelope::*;
pub use factory::*;
pub use feature::*;
pub use geometry::*;
pub use precision::*;
pub use properties::*;
pub use types::*;
pub use value::*;
