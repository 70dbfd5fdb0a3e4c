//! Spherical Web Mercator (EPSG:3857) projection.
//!
//! Rotations of a lon/lat polygon are done in projected space so the shape
//! is not sheared by the varying length of a degree of longitude.

use crate::{Coordinates, PolygonGeometry, RingGeometry};
use std::f64::consts::FRAC_PI_4;

pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;
pub const RADIUS: f64 = 6_378_137.0; // meters

/// Projects `[lon, lat]` in degrees to Web Mercator meters.
/// Latitudes are clamped to the Mercator limit. Longitudes are not clamped,
/// so polygons crossing the antimeridian keep their shape.
#[must_use]
pub fn lonlat_to_mercator(c: &Coordinates) -> Coordinates {
	let lat = c.y().clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
	Coordinates::new(
		RADIUS * c.x().to_radians(),
		RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln(),
	)
}

/// Inverse of [`lonlat_to_mercator`].
#[must_use]
pub fn mercator_to_lonlat(c: &Coordinates) -> Coordinates {
	Coordinates::new(
		(c.x() / RADIUS).to_degrees(),
		(2.0 * (c.y() / RADIUS).exp().atan() - 2.0 * FRAC_PI_4).to_degrees(),
	)
}

impl RingGeometry {
	#[must_use]
	pub fn to_mercator(&self) -> RingGeometry {
		self.map_coordinates(lonlat_to_mercator)
	}

	#[must_use]
	pub fn to_lonlat(&self) -> RingGeometry {
		self.map_coordinates(mercator_to_lonlat)
	}
}

impl PolygonGeometry {
	#[must_use]
	pub fn to_mercator(&self) -> PolygonGeometry {
		self.map_coordinates(lonlat_to_mercator)
	}

	#[must_use]
	pub fn to_lonlat(&self) -> PolygonGeometry {
		self.map_coordinates(mercator_to_lonlat)
	}
}
