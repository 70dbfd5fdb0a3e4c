use crate::overlay::{
	AngleSource, BUNDLED_ANCHOR, BUNDLED_POLYGON, DEFAULT_ROTATION_STEP, FixedAngle, OverlaySession, RandomAngle,
};
use anyhow::{Context, Result, ensure};
use mapoverlay_geometry::{Coordinates, geojson::parse_polygon};
use serde::Deserialize;
use std::{
	fs,
	path::{Path, PathBuf},
};

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OverlayConfig {
	/// GeoJSON file with the source polygon. Default: the bundled Gaza Strip outline
	pub geojson: Option<PathBuf>,

	/// `[lon, lat]` of the source point moved onto the user's position.
	/// Default: the bundled anchor for the bundled polygon, otherwise the
	/// vertex centroid of the exterior ring
	pub anchor: Option<[f64; 2]>,

	/// Degrees per press of a rotation control. Default: 15
	pub rotation_step: Option<f64>,

	/// Fixed initial rotation in degrees. Takes precedence over `seed`
	pub initial_rotation: Option<f64>,

	/// Seed for the random initial rotation. Default: unseeded
	pub seed: Option<u64>,
}

impl OverlayConfig {
	pub fn angle_source(&self) -> Box<dyn AngleSource> {
		match (self.initial_rotation, self.seed) {
			(Some(angle), _) => Box::new(FixedAngle(angle)),
			(None, Some(seed)) => Box::new(RandomAngle::seeded(seed)),
			(None, None) => Box::new(RandomAngle::new()),
		}
	}

	pub fn build_session(&self) -> Result<OverlaySession> {
		let rotation_step = self.rotation_step.unwrap_or(DEFAULT_ROTATION_STEP);
		ensure!(
			rotation_step.is_finite(),
			"rotation_step must be finite, found {rotation_step}"
		);
		if let Some(angle) = self.initial_rotation {
			ensure!(angle.is_finite(), "initial_rotation must be finite, found {angle}");
		}

		let (source, default_anchor) = match &self.geojson {
			Some(path) => {
				let text = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
				let source = parse_polygon(&text).with_context(|| format!("parsing {path:?}"))?;
				let center = source.center()?;
				(source, center)
			}
			None => (parse_polygon(BUNDLED_POLYGON)?, Coordinates::from(BUNDLED_ANCHOR)),
		};
		let anchor = self.anchor.map_or(default_anchor, Coordinates::from);

		log::debug!("overlay source with {} ring(s), anchor {anchor:?}", source.len());

		Ok(OverlaySession::new(source, anchor, self.angle_source())?.with_rotation_step(rotation_step))
	}

	pub fn resolve_paths(&mut self, base: &Path) {
		if let Some(path) = &self.geojson
			&& path.is_relative()
		{
			self.geojson = Some(base.join(path));
		}
	}
}
