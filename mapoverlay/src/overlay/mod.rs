//! Relocation of the source polygon onto the user's position.

mod angle;
mod session;

pub use angle::*;
pub use session::*;

/// Outline of the Gaza Strip, bundled as the default source polygon.
pub const BUNDLED_POLYGON: &str = include_str!("../../data/gaza.json");

/// Reference point of the bundled polygon that gets moved onto the user's position.
pub const BUNDLED_ANCHOR: [f64; 2] = [34.379618283536985, 31.428995796219397];

/// Angle added or removed by one press of a rotation control.
pub const DEFAULT_ROTATION_STEP: f64 = 15.0;
