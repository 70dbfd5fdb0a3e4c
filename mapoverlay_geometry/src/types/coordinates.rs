use serde_json::Value;
use std::{
	fmt::Debug,
	ops::{Add, Neg, Sub},
};

/// A planar coordinate pair `(x, y)`.
///
/// Depending on context this is either `[longitude, latitude]` in degrees or
/// a Web Mercator position in meters. It is also used as a translation vector.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.0[0].is_finite() && self.0[1].is_finite()
	}

	/// Euclidean distance to another coordinate.
	#[must_use]
	pub fn distance(&self, other: &Coordinates) -> f64 {
		(self.x() - other.x()).hypot(self.y() - other.y())
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let [x, y] = if let Some(prec) = precision {
			let factor = 10f64.powi(i32::from(prec));
			[(self.0[0] * factor).round() / factor, (self.0[1] * factor).round() / factor]
		} else {
			self.0
		};
		Value::from(vec![x, y])
	}
}

impl Add for Coordinates {
	type Output = Coordinates;

	fn add(self, rhs: Coordinates) -> Coordinates {
		Coordinates([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
	}
}

impl Sub for Coordinates {
	type Output = Coordinates;

	fn sub(self, rhs: Coordinates) -> Coordinates {
		Coordinates([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1]])
	}
}

impl Neg for Coordinates {
	type Output = Coordinates;

	fn neg(self) -> Coordinates {
		Coordinates([-self.0[0], -self.0[1]])
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl From<Coordinates> for geo::Coord {
	fn from(value: Coordinates) -> Self {
		geo::Coord {
			x: value.x(),
			y: value.y(),
		}
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn new_and_accessors() {
		let c = Coordinates::new(34.379618, 31.428995);
		assert_eq!(c.x(), 34.379618);
		assert_eq!(c.y(), 31.428995);
	}

	#[test]
	fn debug_formats_like_array() {
		assert_eq!(format!("{:?}", Coordinates::new(1.0, 2.0)), "[1.0, 2.0]");
	}

	#[test]
	fn arithmetic() {
		let a = Coordinates::new(1.0, 2.0);
		let b = Coordinates::new(5.0, -3.0);
		assert_eq!(a + b, Coordinates::new(6.0, -1.0));
		assert_eq!(b - a, Coordinates::new(4.0, -5.0));
		assert_eq!(-a, Coordinates::new(-1.0, -2.0));
	}

	#[test]
	fn distance() {
		assert_eq!(Coordinates::new(0.0, 0.0).distance(&Coordinates::new(3.0, 4.0)), 5.0);
	}

	#[test]
	fn finiteness() {
		assert!(Coordinates::new(1.0, 2.0).is_finite());
		assert!(!Coordinates::new(f64::NAN, 2.0).is_finite());
		assert!(!Coordinates::new(1.0, f64::INFINITY).is_finite());
	}

	#[rstest]
	#[case(0, [1.0, 2.0])]
	#[case(1, [1.2, 2.3])]
	#[case(3, [1.235, 2.346])]
	fn to_json_with_precision(#[case] prec: u8, #[case] expected: [f64; 2]) {
		let json = Coordinates::new(1.23456, 2.34567).to_json(Some(prec));
		assert_eq!(json, Value::from(expected.to_vec()));
	}

	#[test]
	fn to_json_without_precision() {
		let json = Coordinates::new(1.23456789, 9.87654321).to_json(None);
		assert_eq!(json, serde_json::json!([1.23456789, 9.87654321]));
	}

	#[test]
	fn conversions() {
		assert_eq!(Coordinates::from(&[7, 8]), Coordinates::new(7.0, 8.0));
		assert_eq!(Coordinates::from((3.0, 4.0)), Coordinates::new(3.0, 4.0));
		let arr: [f64; 2] = Coordinates::new(10.25, -20.5).into();
		assert_eq!(arr, [10.25, -20.5]);

		let gc: geo::Coord = Coordinates::new(11.0, 22.0).into();
		assert_eq!(Coordinates::from(gc), Coordinates::new(11.0, 22.0));
	}
}
