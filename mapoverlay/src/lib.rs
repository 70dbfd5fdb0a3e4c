//! # mapoverlay
//!
//! Relocates a polygon (by default the outline of the Gaza Strip) onto the
//! user's position so its size can be compared with familiar surroundings,
//! and serves the map frontend that displays it.
//!
//! - [`overlay`]: the session that tracks position, rotation and the relocated polygon
//! - [`server`]: static file server with a small JSON API
//! - [`config`]: YAML configuration for both
//!
//! ## Usage Example
//!
//! ```rust
//! use mapoverlay::overlay::{FixedAngle, OverlaySession};
//!
//! let mut session = OverlaySession::bundled(Box::new(FixedAngle(0.0))).unwrap();
//! let polygon = session.on_position(13.4, 52.5).unwrap();
//! assert!(polygon.verify().is_ok());
//! ```

pub mod config;
pub mod overlay;
pub mod server;

pub use mapoverlay_geometry as geometry;
