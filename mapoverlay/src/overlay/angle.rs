use rand::{Rng, SeedableRng, rngs::StdRng};
use std::fmt::Debug;

/// Supplies the initial rotation applied when the first position fix arrives.
pub trait AngleSource: Debug + Send {
	/// Returns an angle in degrees.
	fn next_angle(&mut self) -> f64;
}

/// Always returns the same angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAngle(pub f64);

impl AngleSource for FixedAngle {
	fn next_angle(&mut self) -> f64 {
		self.0
	}
}

/// Uniformly distributed angles in `[0, 360)`.
#[derive(Debug)]
pub struct RandomAngle {
	rng: StdRng,
}

impl RandomAngle {
	pub fn new() -> Self {
		RandomAngle {
			rng: StdRng::from_entropy(),
		}
	}

	/// Reproducible sequence of angles.
	pub fn seeded(seed: u64) -> Self {
		RandomAngle {
			rng: StdRng::seed_from_u64(seed),
		}
	}
}

impl Default for RandomAngle {
	fn default() -> Self {
		Self::new()
	}
}

impl AngleSource for RandomAngle {
	fn next_angle(&mut self) -> f64 {
		self.rng.gen_range(0.0..360.0)
	}
}
