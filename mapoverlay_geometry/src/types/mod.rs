// Core geometric types: a single `Coordinates` pair, a closed `RingGeometry`
// and a `PolygonGeometry` made of an exterior ring plus holes.

mod coordinates;
mod macros;
mod polygon;
mod ring;

pub use coordinates::*;
pub use polygon::*;
pub use ring::*;
