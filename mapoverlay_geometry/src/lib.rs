//! Geometry primitives and rigid transforms used by mapoverlay.
//!
//! The crate is split into:
//! - `types`: `Coordinates`, `RingGeometry` and `PolygonGeometry`
//! - [`transform`]: pure rotate / translate / centroid functions
//! - [`projection`]: WGS84 ⇄ Web Mercator
//! - [`geojson`]: reading and writing polygon features
//!
//! All transforms are pure: they take their inputs by reference and return new values.

mod error;
pub mod geojson;
pub mod projection;
pub mod transform;
mod types;

pub use error::GeometryError;
pub use transform::*;
pub use types::*;
