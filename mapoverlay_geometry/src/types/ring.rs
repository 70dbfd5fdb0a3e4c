use crate::{Coordinates, GeometryError, centroid, rotate_ring, translate_ring};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// Represents a closed ring geometry, a connected series of coordinates forming a loop.
/// This structure is the building block for polygons.
/// The first and last points must be identical to form a closed shape.
#[derive(Clone, PartialEq, Default)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn first(&self) -> Option<&Coordinates> {
		self.0.first()
	}

	pub fn last(&self) -> Option<&Coordinates> {
		self.0.last()
	}

	pub fn as_slice(&self) -> &[Coordinates] {
		&self.0
	}

	pub fn push(&mut self, c: Coordinates) {
		self.0.push(c);
	}

	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}

	/// Verifies that the ring is valid by checking:
	/// - It has at least 4 coordinates (3 unique points plus the closing point).
	/// - It is closed, i.e., the first and last points are identical.
	/// - All coordinates are finite.
	pub fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points");
		ensure!(self.is_closed(), "Ring must be closed");
		ensure!(self.0.iter().all(Coordinates::is_finite), "Ring must only contain finite coordinates");
		Ok(())
	}

	/// Mean of the distinct vertices: the closing duplicate of a closed ring is ignored.
	pub fn vertex_centroid(&self) -> Result<Coordinates, GeometryError> {
		let points = if self.is_closed() && self.0.len() > 1 {
			&self.0[..self.0.len() - 1]
		} else {
			&self.0[..]
		};
		centroid(points)
	}

	#[must_use]
	pub fn translated(&self, delta: &Coordinates) -> RingGeometry {
		translate_ring(self, delta)
	}

	#[must_use]
	pub fn rotated(&self, center: &Coordinates, angle_degrees: f64) -> RingGeometry {
		rotate_ring(self, center, angle_degrees)
	}

	/// Returns a new ring with `f` applied to every coordinate.
	#[must_use]
	pub fn map_coordinates(&self, f: impl Fn(&Coordinates) -> Coordinates) -> RingGeometry {
		RingGeometry(self.0.iter().map(f).collect())
	}

	/// Signed area using the shoelace formula: positive if counter-clockwise.
	pub fn area(&self) -> f64 {
		let mut sum = 0f64;
		if let Some(mut p2) = self.0.last() {
			for p1 in &self.0 {
				sum += (p2.x() - p1.x()) * (p1.y() + p2.y());
				p2 = p1;
			}
		}
		sum / 2.0
	}

	/// Returns `[x_min, y_min, x_max, y_max]`, or `None` for an empty ring.
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		if self.0.is_empty() {
			return None;
		}

		let mut bounds = [f64::MAX, f64::MAX, f64::MIN, f64::MIN];
		for coord in &self.0 {
			bounds[0] = bounds[0].min(coord.x());
			bounds[1] = bounds[1].min(coord.y());
			bounds[2] = bounds[2].max(coord.x());
			bounds[3] = bounds[3].max(coord.y());
		}
		Some(bounds)
	}

	/// Returns the coordinates of the ring as a JSON array, optionally rounded.
	pub fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|coord| coord.to_json(precision)).collect::<Vec<_>>())
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

impl From<&RingGeometry> for geo::LineString<f64> {
	fn from(ring: &RingGeometry) -> Self {
		geo::LineString::new(ring.0.iter().map(|c| geo::Coord::from(*c)).collect())
	}
}
