//! Pure rigid transforms on coordinates and rings.
//!
//! Angles are in degrees and positive angles rotate counter-clockwise
//! (standard mathematical convention, y axis pointing up / north).
//! None of these functions keep state; NaN and infinite inputs propagate
//! through the arithmetic unchanged.

use crate::{Coordinates, GeometryError, RingGeometry};

/// Rotates `point` around `center` by `angle_degrees`.
#[must_use]
pub fn rotate_point(point: &Coordinates, center: &Coordinates, angle_degrees: f64) -> Coordinates {
	let (sin, cos) = angle_degrees.to_radians().sin_cos();
	let dx = point.x() - center.x();
	let dy = point.y() - center.y();
	Coordinates::new(cos * dx - sin * dy + center.x(), sin * dx + cos * dy + center.y())
}

/// Returns the arithmetic mean of all `points`.
///
/// Every point counts, so a closed ring passed in as-is weights its first
/// vertex twice. Use [`RingGeometry::vertex_centroid`] to skip the closing point.
pub fn centroid(points: &[Coordinates]) -> Result<Coordinates, GeometryError> {
	if points.is_empty() {
		return Err(GeometryError::invalid_argument("centroid of an empty point set"));
	}
	let n = points.len() as f64;
	let sum = points.iter().fold(Coordinates::default(), |acc, p| acc + *p);
	Ok(Coordinates::new(sum.x() / n, sum.y() / n))
}

#[must_use]
pub fn translate_point(point: &Coordinates, delta: &Coordinates) -> Coordinates {
	*point + *delta
}

/// Returns a new ring with `delta` added to every coordinate.
#[must_use]
pub fn translate_ring(ring: &RingGeometry, delta: &Coordinates) -> RingGeometry {
	RingGeometry(ring.0.iter().map(|c| translate_point(c, delta)).collect())
}

/// Returns a new ring with every coordinate rotated around `center`.
#[must_use]
pub fn rotate_ring(ring: &RingGeometry, center: &Coordinates, angle_degrees: f64) -> RingGeometry {
	RingGeometry(ring.0.iter().map(|c| rotate_point(c, center, angle_degrees)).collect())
}
