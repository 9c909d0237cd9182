//! Small value types shared by the helix simulation and its host.

use std::f64::consts::PI;

/// Which of the two interleaved strands a petal belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Helix {
	A,
	B,
}

impl Helix {
	pub const BOTH: [Helix; 2] = [Helix::A, Helix::B];

	/// Phase added at render time; B runs opposite to A.
	pub fn phase(self) -> f64 {
		match self {
			Helix::A => 0.0,
			Helix::B => PI,
		}
	}

	/// Extra rotation (degrees) so petals on each strand lean outward.
	pub fn tilt(self) -> f64 {
		match self {
			Helix::A => 90.0,
			Helix::B => -90.0,
		}
	}

	/// Sign of the lateral offset from the viewport center.
	pub fn side(self) -> f64 {
		match self {
			Helix::A => -1.0,
			Helix::B => 1.0,
		}
	}
}

/// Size of the area petals live in, in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Placement strategy chosen from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
	/// Two helices centered horizontally, rising from the bottom.
	Standard,
	/// Phone-sized screens: petals scattered in a lower-right region clear of the header.
	Compact,
}

impl Layout {
	pub fn for_width(width: f64, breakpoint: f64) -> Self {
		if width <= breakpoint {
			Layout::Compact
		} else {
			Layout::Standard
		}
	}
}
