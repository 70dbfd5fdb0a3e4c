use super::{AngleSource, BUNDLED_ANCHOR, BUNDLED_POLYGON, DEFAULT_ROTATION_STEP};
use anyhow::{Context, Result, ensure};
use mapoverlay_geometry::{
	Coordinates, GeometryError, PolygonGeometry, geojson::parse_polygon, projection::lonlat_to_mercator,
};

/// State of one map view showing the relocated polygon.
///
/// The source polygon is never modified. Every position fix and every rotation
/// re-derives the displayed polygon from it, so repeated control presses do not
/// accumulate floating point drift.
#[derive(Debug)]
pub struct OverlaySession {
	source: PolygonGeometry,
	anchor: Coordinates,
	angle_source: Box<dyn AngleSource>,
	rotation_step: f64,
	location: Option<Coordinates>,
	accuracy: Option<f64>,
	rotation: f64,
	polygon: Option<PolygonGeometry>,
	error: Option<String>,
}

impl OverlaySession {
	/// Creates a session for `source` (lon/lat), whose point `anchor` will be
	/// placed onto the user's position.
	pub fn new(source: PolygonGeometry, anchor: Coordinates, angle_source: Box<dyn AngleSource>) -> Result<Self> {
		source.verify().context("verifying source polygon")?;
		ensure!(anchor.is_finite(), "anchor {anchor:?} must be finite");

		Ok(OverlaySession {
			source,
			anchor,
			angle_source,
			rotation_step: DEFAULT_ROTATION_STEP,
			location: None,
			accuracy: None,
			rotation: 0.0,
			polygon: None,
			error: None,
		})
	}

	/// Session for the bundled Gaza Strip outline.
	pub fn bundled(angle_source: Box<dyn AngleSource>) -> Result<Self> {
		let source = parse_polygon(BUNDLED_POLYGON).context("parsing bundled polygon")?;
		Self::new(source, Coordinates::from(BUNDLED_ANCHOR), angle_source)
	}

	#[must_use]
	pub fn with_rotation_step(mut self, step: f64) -> Self {
		self.rotation_step = step;
		self
	}

	/// Handles a position update from the geolocation provider.
	///
	/// The first fix draws the initial rotation from the angle source.
	/// Any displayed error message is cleared.
	pub fn on_position(&mut self, lon: f64, lat: f64) -> Result<&PolygonGeometry, GeometryError> {
		let location = Coordinates::new(lon, lat);
		if !location.is_finite() {
			return Err(GeometryError::invalid_argument(format!(
				"position {location:?} must be finite"
			)));
		}

		if self.location.is_none() {
			let initial = self.angle_source.next_angle();
			check_angle(initial)?;
			self.rotation = normalize(self.rotation + initial);
			log::info!("first position fix at {location:?}, initial rotation {:.1}°", self.rotation);
		} else {
			log::debug!("position update {location:?}");
		}

		self.location = Some(location);
		self.error = None;
		Ok(self.refresh(location))
	}

	/// Records the horizontal accuracy in meters reported with a fix.
	pub fn on_accuracy(&mut self, meters: f64) -> Result<(), GeometryError> {
		if !meters.is_finite() || meters < 0.0 {
			return Err(GeometryError::invalid_argument(format!(
				"accuracy {meters} must be a finite, non-negative number of meters"
			)));
		}
		self.accuracy = Some(meters);
		Ok(())
	}

	/// Handles a geolocation failure. There is no retry and no fallback position;
	/// the message is kept for display and the current polygon stays as it is.
	pub fn on_error(&mut self, message: impl Into<String>) {
		let message = message.into();
		log::warn!("geolocation error: {message}");
		self.error = Some(message);
	}

	/// Turns the polygon counter-clockwise by one step.
	pub fn rotate_left(&mut self) -> Result<Option<&PolygonGeometry>, GeometryError> {
		self.rotate_by(self.rotation_step)
	}

	/// Turns the polygon clockwise by one step.
	pub fn rotate_right(&mut self) -> Result<Option<&PolygonGeometry>, GeometryError> {
		self.rotate_by(-self.rotation_step)
	}

	/// Adds `angle_degrees` to the rotation. Before the first fix only the
	/// stored rotation changes and `None` is returned.
	/// A non-finite angle is rejected and leaves the session unchanged.
	pub fn rotate_by(&mut self, angle_degrees: f64) -> Result<Option<&PolygonGeometry>, GeometryError> {
		check_angle(angle_degrees)?;
		self.rotation = normalize(self.rotation + angle_degrees);
		log::debug!("rotation set to {:.1}°", self.rotation);
		Ok(match self.location {
			Some(location) => Some(self.refresh(location)),
			None => None,
		})
	}

	fn refresh(&mut self, location: Coordinates) -> &PolygonGeometry {
		self.polygon.insert(self.relocate(location))
	}

	/// Translates the source so the anchor lands on `location`, then rotates it
	/// around `location` in Web Mercator space.
	fn relocate(&self, location: Coordinates) -> PolygonGeometry {
		let delta = location - self.anchor;
		let pivot = lonlat_to_mercator(&location);
		self
			.source
			.translated(&delta)
			.to_mercator()
			.rotated(&pivot, self.rotation)
			.to_lonlat()
	}

	pub fn source(&self) -> &PolygonGeometry {
		&self.source
	}

	pub fn anchor(&self) -> Coordinates {
		self.anchor
	}

	pub fn location(&self) -> Option<Coordinates> {
		self.location
	}

	pub fn accuracy(&self) -> Option<f64> {
		self.accuracy
	}

	/// Translation vector from the anchor to the current location.
	pub fn translation(&self) -> Option<Coordinates> {
		self.location.map(|location| location - self.anchor)
	}

	/// Current rotation in degrees, normalized to `[0, 360)`.
	pub fn rotation(&self) -> f64 {
		self.rotation
	}

	pub fn rotation_step(&self) -> f64 {
		self.rotation_step
	}

	/// The relocated polygon, available after the first position fix.
	pub fn polygon(&self) -> Option<&PolygonGeometry> {
		self.polygon.as_ref()
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn is_located(&self) -> bool {
		self.location.is_some()
	}
}

fn check_angle(angle_degrees: f64) -> Result<(), GeometryError> {
	if angle_degrees.is_finite() {
		Ok(())
	} else {
		Err(GeometryError::invalid_argument(format!(
			"rotation angle {angle_degrees} must be finite"
		)))
	}
}

fn normalize(angle: f64) -> f64 {
	angle.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::overlay::{FixedAngle, RandomAngle};
	use approx::assert_abs_diff_eq;
	use rstest::rstest;

	fn square() -> PolygonGeometry {
		PolygonGeometry::from(&[[[0.0, 0.0], [0.2, 0.0], [0.2, 0.2], [0.0, 0.2], [0.0, 0.0]]])
	}

	fn session(initial: f64) -> OverlaySession {
		OverlaySession::new(square(), Coordinates::new(0.1, 0.1), Box::new(FixedAngle(initial))).unwrap()
	}

	fn assert_polygons_close(a: &PolygonGeometry, b: &PolygonGeometry) {
		assert_eq!(a.len(), b.len());
		for (ra, rb) in a.0.iter().zip(b.0.iter()) {
			assert_eq!(ra.len(), rb.len());
			for (ca, cb) in ra.0.iter().zip(rb.0.iter()) {
				assert_abs_diff_eq!(ca.x(), cb.x(), epsilon = 1e-9);
				assert_abs_diff_eq!(ca.y(), cb.y(), epsilon = 1e-9);
			}
		}
	}

	#[test]
	fn rejects_invalid_source() {
		let open = PolygonGeometry::from(&[[[0, 0], [1, 0], [1, 1], [0, 1]]]);
		let err = OverlaySession::new(open, Coordinates::new(0.0, 0.0), Box::new(FixedAngle(0.0))).unwrap_err();
		assert_eq!(
			format!("{err:#}"),
			"verifying source polygon: invalid ring 0: Ring must be closed"
		);
	}

	#[test]
	fn rejects_non_finite_anchor() {
		assert!(OverlaySession::new(square(), Coordinates::new(f64::NAN, 0.0), Box::new(FixedAngle(0.0))).is_err());
	}

	#[test]
	fn nothing_to_show_before_first_fix() {
		let mut s = session(0.0);
		assert!(!s.is_located());
		assert!(s.polygon().is_none());
		assert!(s.translation().is_none());
		assert!(s.rotate_left().unwrap().is_none());
		assert_eq!(s.rotation(), DEFAULT_ROTATION_STEP);
	}

	#[rstest]
	#[case(13.4, 52.5)]
	#[case(-74.0, 40.7)]
	#[case(151.2, -33.9)]
	fn first_fix_moves_anchor_onto_location(#[case] lon: f64, #[case] lat: f64) {
		let mut s = session(0.0);
		let polygon = s.on_position(lon, lat).unwrap().clone();

		let center = polygon.center().unwrap();
		assert_abs_diff_eq!(center.x(), lon, epsilon = 1e-9);
		assert_abs_diff_eq!(center.y(), lat, epsilon = 1e-9);
		assert!(polygon.verify().is_ok());

		let delta = s.translation().unwrap();
		assert_abs_diff_eq!(delta.x(), lon - 0.1, epsilon = 1e-12);
		assert_abs_diff_eq!(delta.y(), lat - 0.1, epsilon = 1e-12);
		// the source stays untouched
		assert_eq!(s.source(), &square());
	}

	#[test]
	fn initial_rotation_is_drawn_once() {
		let mut s = session(30.0);
		s.on_position(10.0, 10.0).unwrap();
		assert_eq!(s.rotation(), 30.0);
		s.on_position(10.5, 10.5).unwrap();
		assert_eq!(s.rotation(), 30.0);
	}

	#[test]
	fn rotation_is_rigid_in_projected_space() {
		let mut s = session(0.0);
		let unrotated = s.on_position(8.0, 47.0).unwrap().to_mercator();
		let rotated = s.rotate_by(75.0).unwrap().unwrap().to_mercator();
		let pivot = lonlat_to_mercator(&Coordinates::new(8.0, 47.0));

		for (a, b) in unrotated.0[0].0.iter().zip(rotated.0[0].0.iter()) {
			assert_abs_diff_eq!(a.distance(&pivot), b.distance(&pivot), epsilon = 1e-6);
		}
		assert_abs_diff_eq!(unrotated.area(), rotated.area(), epsilon = 1e-3 * unrotated.area());
	}

	#[test]
	fn left_then_right_restores_polygon() {
		let mut s = session(10.0);
		let start = s.on_position(2.0, 3.0).unwrap().clone();
		s.rotate_left().unwrap();
		assert_eq!(s.rotation(), 25.0);
		let back = s.rotate_right().unwrap().unwrap();
		assert_polygons_close(back, &start);
	}

	#[test]
	fn full_turn_does_not_drift() {
		let mut s = session(0.0);
		let start = s.on_position(2.0, 3.0).unwrap().clone();
		for _ in 0..24 {
			s.rotate_left().unwrap();
		}
		assert_eq!(s.rotation(), 0.0);
		assert_eq!(s.polygon().unwrap(), &start);
	}

	#[test]
	fn rotation_is_normalized() {
		let mut s = session(350.0).with_rotation_step(20.0);
		s.on_position(0.0, 0.0).unwrap();
		s.rotate_left().unwrap();
		assert_eq!(s.rotation(), 10.0);
		s.rotate_right().unwrap();
		s.rotate_right().unwrap();
		assert_eq!(s.rotation(), 330.0);
		assert_eq!(s.rotation_step(), 20.0);
	}

	#[test]
	fn errors_are_kept_until_next_fix() {
		let mut s = session(0.0);
		s.on_position(1.0, 1.0).unwrap();
		let before = s.polygon().cloned();

		s.on_error("User denied Geolocation");
		assert_eq!(s.error(), Some("User denied Geolocation"));
		assert_eq!(s.polygon().cloned(), before);

		s.on_position(1.0, 1.0).unwrap();
		assert!(s.error().is_none());
	}

	#[test]
	fn non_finite_position_is_rejected() {
		let mut s = session(0.0);
		assert!(matches!(
			s.on_position(f64::NAN, 1.0),
			Err(GeometryError::InvalidArgument(_))
		));
		assert!(!s.is_located());
	}

	#[rstest]
	#[case(f64::INFINITY)]
	#[case(f64::NEG_INFINITY)]
	#[case(f64::NAN)]
	fn non_finite_rotation_is_rejected(#[case] angle: f64) {
		let mut s = session(10.0);
		let start = s.on_position(13.4, 52.5).unwrap().clone();

		assert!(matches!(s.rotate_by(angle), Err(GeometryError::InvalidArgument(_))));
		assert_eq!(s.rotation(), 10.0);
		assert_eq!(s.polygon(), Some(&start));

		// later updates still produce a valid polygon
		assert!(s.on_position(13.4, 52.5).unwrap().verify().is_ok());
		assert!(s.rotate_left().unwrap().unwrap().verify().is_ok());
	}

	#[test]
	fn non_finite_rotation_step_is_rejected() {
		let mut s = session(0.0).with_rotation_step(f64::NAN);
		s.on_position(1.0, 1.0).unwrap();
		assert!(s.rotate_right().is_err());
		assert_eq!(s.rotation(), 0.0);
	}

	#[test]
	fn non_finite_initial_angle_is_rejected() {
		let mut s = session(f64::NAN);
		assert!(matches!(
			s.on_position(13.4, 52.5),
			Err(GeometryError::InvalidArgument(_))
		));
		assert!(!s.is_located());
		assert!(s.polygon().is_none());
		assert_eq!(s.rotation(), 0.0);
	}

	#[test]
	fn accuracy_is_recorded() {
		let mut s = session(0.0);
		assert_eq!(s.accuracy(), None);
		s.on_accuracy(12.5).unwrap();
		assert_eq!(s.accuracy(), Some(12.5));

		assert!(s.on_accuracy(-1.0).is_err());
		assert!(s.on_accuracy(f64::NAN).is_err());
		assert_eq!(s.accuracy(), Some(12.5));

		s.on_accuracy(0.0).unwrap();
		assert_eq!(s.accuracy(), Some(0.0));
	}

	#[test]
	fn seeded_sessions_agree() {
		let run = || {
			let mut s = OverlaySession::bundled(Box::new(RandomAngle::seeded(3))).unwrap();
			s.on_position(13.4, 52.5).unwrap().clone()
		};
		assert_eq!(run(), run());
	}

	#[test]
	fn bundled_polygon_is_valid() {
		let s = OverlaySession::bundled(Box::new(FixedAngle(0.0))).unwrap();
		assert_eq!(s.anchor(), Coordinates::from(BUNDLED_ANCHOR));
		assert!(s.source().area() > 0.0);
	}
}
