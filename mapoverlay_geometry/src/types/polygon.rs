use super::RingGeometry;
use crate::{Coordinates, GeometryError};
use anyhow::{Context, Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A polygon: the first ring is the exterior boundary, any further rings are holes.
#[derive(Clone, PartialEq, Default)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	pub fn rings(&self) -> &[RingGeometry] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for (index, ring) in self.0.iter().enumerate() {
			ring.verify().with_context(|| format!("invalid ring {index}"))?;
		}
		Ok(())
	}

	/// Vertex centroid of the exterior ring.
	pub fn center(&self) -> Result<Coordinates, GeometryError> {
		self.exterior()
			.ok_or_else(|| GeometryError::invalid_argument("polygon has no exterior ring"))?
			.vertex_centroid()
	}

	#[must_use]
	pub fn translated(&self, delta: &Coordinates) -> PolygonGeometry {
		PolygonGeometry(self.0.iter().map(|ring| ring.translated(delta)).collect())
	}

	#[must_use]
	pub fn rotated(&self, center: &Coordinates, angle_degrees: f64) -> PolygonGeometry {
		PolygonGeometry(self.0.iter().map(|ring| ring.rotated(center, angle_degrees)).collect())
	}

	#[must_use]
	pub fn map_coordinates(&self, f: impl Fn(&Coordinates) -> Coordinates) -> PolygonGeometry {
		PolygonGeometry(self.0.iter().map(|ring| ring.map_coordinates(&f)).collect())
	}

	/// Exterior area minus the area of all holes, regardless of winding.
	pub fn area(&self) -> f64 {
		let mut rings = self.0.iter();
		let Some(exterior) = rings.next() else {
			return 0.0;
		};
		rings.fold(exterior.area().abs(), |sum, hole| sum - hole.area().abs())
	}

	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.exterior().and_then(RingGeometry::compute_bounds)
	}

	pub fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|ring| ring.to_coord_json(precision)).collect::<Vec<_>>())
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);
