//! Reprojects OGC-style vector geometries between spatial reference systems.
//!
//! This crate sits between the [`geo_types`] geometry model and the
//! [`proj4rs`] projection engine: given a source and destination
//! [`SpatialRef`], a [`CoordinateTransform`] walks a geometry of any
//! supported shape (point, line string, polygon, and their multi-part
//! variants), passes every coordinate through the projection math with the
//! degree/radian conversions each side requires, and rebuilds a geometry of
//! identical shape.
//!
//! ```
//! use geo_types::{point, Geometry};
//! use projgeom::{CoordinateTransform, SpatialRef};
//!
//! # fn main() -> projgeom::Result<()> {
//! let geographic = SpatialRef::from_proj_string("+proj=longlat +datum=NAD83 +no_defs")?;
//! let utm15 = SpatialRef::from_proj_string("+proj=utm +zone=15 +datum=NAD83 +units=m +no_defs")?;
//!
//! let transform = CoordinateTransform::new(&geographic, &utm15)?;
//! let projected = transform.reproject(Geometry::Point(point!(x: -93.09, y: 44.94)))?;
//!
//! let Geometry::Point(projected) = projected else { unreachable!() };
//! assert!(projected.x() > 100_000.0);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{ProjGeomError, Result};
pub use reproject::CoordinateTransform;
pub use spatial_ref::{SpatialRef, UnitSystem};
pub use transform::transform_geometry;

pub mod error;
pub mod io;
pub mod reproject;
pub mod spatial_ref;
#[cfg(test)]
pub(crate) mod test;
pub mod transform;
