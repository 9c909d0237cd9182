//! Petal particles following a parametric helix.

use std::f64::consts::TAU;

use rand::Rng;

use super::config::HelixConfig;
use super::types::{Helix, Layout, Viewport};

/// Uniform sample in `[low, high)`. Tolerates `low >= high` (tiny viewports)
/// by degenerating to a linear blend instead of panicking like `gen_range`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
	low + rng.gen_range(0.0..1.0) * (high - low)
}

/// Everything the host needs to draw one petal for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PetalPose {
	pub x: f64,
	pub y: f64,
	/// Pseudo-depth in [0, 1]; 1 is nearest the viewer.
	#[allow(dead_code, reason = "scale, opacity and hue are derived from it; kept for custom surfaces")]
	pub depth: f64,
	pub scale: f64,
	pub opacity: f64,
	/// Degrees.
	pub rotation: f64,
	/// Hue rotation in degrees, when depth tinting is enabled.
	pub hue: Option<f64>,
}

impl PetalPose {
	/// CSS `transform` value placing the petal element.
	pub fn css_transform(&self) -> String {
		format!(
			"translate3d({}px, {}px, 0) rotate({}deg) scale({})",
			self.x, self.y, self.rotation, self.scale
		)
	}
}

/// A single petal on one of the two helices.
#[derive(Clone, Debug)]
pub struct Particle<H> {
	pub helix: Helix,
	/// Current helix angle. Grows without wrapping until respawn.
	pub angle: f64,
	pub angle_speed: f64,
	pub radius: f64,
	pub phase_offset: f64,
	/// Vertical anchor; drifts upward every tick.
	pub base_y: f64,
	pub center_x: f64,
	#[allow(dead_code, reason = "fixed at spawn and handed to the surface then")]
	pub halo: bool,
	/// Visual owned 1:1 by this particle.
	pub handle: H,
}

/// Random fields of a freshly spawned particle, before its visual exists.
#[derive(Clone, Debug)]
pub(crate) struct Spawn {
	pub angle: f64,
	pub angle_speed: f64,
	pub radius: f64,
	pub phase_offset: f64,
	pub base_y: f64,
	pub center_x: f64,
	pub halo: bool,
}

/// Angular speed for a petal on `helix`, drawn from the configured range.
pub fn draw_angle_speed<R: Rng + ?Sized>(rng: &mut R, helix: Helix, config: &HelixConfig) -> f64 {
	let multiplier = match helix {
		Helix::A => 1.0,
		Helix::B => config.helix_b_speed_multiplier,
	};
	uniform(rng, config.angle_speed_min, config.angle_speed_max) * multiplier
}

impl Spawn {
	/// Lay out petal `index` of `helix` for a pool rebuild.
	pub fn new<R: Rng + ?Sized>(
		rng: &mut R,
		helix: Helix,
		index: usize,
		config: &HelixConfig,
		viewport: Viewport,
		layout: Layout,
	) -> Self {
		let Viewport { width, height } = viewport;
		let per_helix = config.per_helix() as f64;

		// Evenly spaced around the circle, with a little jitter.
		let angle = index as f64 / per_helix * TAU + uniform(rng, -0.2, 0.2);
		let angle_speed = draw_angle_speed(rng, helix, config);
		let mut radius = config.helix_radius * uniform(rng, 0.85, 1.15);
		let phase_offset = uniform(rng, 0.0, TAU);
		let halo = uniform(rng, 0.0, 1.0) > 1.0 - config.halo_chance;

		let (center_x, base_y) = match layout {
			Layout::Compact => {
				radius = config.helix_radius * 0.8;
				let right = width - config.compact_edge_margin;
				let left = width - config.compact_region_width;
				let top = height * config.compact_top_fraction;
				(
					uniform(rng, left, right),
					uniform(rng, top, height - config.compact_edge_margin),
				)
			}
			Layout::Standard => {
				let center_x = width * 0.5 + helix.side() * config.helix_offset;
				// Stagger by index so the strands interleave vertically.
				let base_y = height
					- uniform(rng, 10.0, height * 0.35)
					- index as f64 * (config.vertical_spacing * 0.12);
				(center_x, base_y)
			}
		};

		Self {
			angle,
			angle_speed,
			radius,
			phase_offset,
			base_y,
			center_x,
			halo,
		}
	}

	pub fn into_particle<H>(self, helix: Helix, handle: H) -> Particle<H> {
		Particle {
			helix,
			angle: self.angle,
			angle_speed: self.angle_speed,
			radius: self.radius,
			phase_offset: self.phase_offset,
			base_y: self.base_y,
			center_x: self.center_x,
			halo: self.halo,
			handle,
		}
	}
}

impl<H> Particle<H> {
	/// Rendered y: the drifting base lifted by the helical rise.
	pub fn effective_y(&self, config: &HelixConfig) -> f64 {
		self.base_y - self.angle * config.vertical_spacing
	}

	/// Pure projection of the particle's state to screen space.
	pub fn pose(&self, config: &HelixConfig) -> PetalPose {
		let phase = self.phase_offset + self.helix.phase();
		let theta = self.angle + phase;

		let depth = (theta.sin() + 1.0) / 2.0;
		let scale = config.depth_scale + depth * (1.2 - config.depth_scale);
		let opacity = (0.5 + depth * 0.6).clamp(0.35, 1.0);

		// Small lateral wobble so the motion looks organic.
		let wobble = ((self.angle + self.phase_offset) * 2.3).sin() * (2.0 + depth * 2.0);
		let x = self.center_x + theta.cos() * self.radius + wobble;

		PetalPose {
			x,
			y: self.effective_y(config),
			depth,
			scale,
			opacity,
			rotation: self.angle.to_degrees() + self.helix.tilt(),
			hue: config.hue_shift.then(|| (10.0 + depth * 20.0).round()),
		}
	}

	/// Move one tick along the helix.
	pub fn step(&mut self, config: &HelixConfig) {
		self.angle += self.angle_speed;
		self.base_y -= config.rise_speed * (0.9 + self.angle_speed * 30.0) * 0.5;
	}

	/// Send the petal back below the bottom edge with fresh motion parameters.
	/// Helix, phase, center, halo and handle survive.
	pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &HelixConfig, height: f64) {
		self.base_y = height + uniform(rng, 10.0, 80.0);
		self.angle = uniform(rng, 0.0, TAU);
		self.radius = config.helix_radius * uniform(rng, 0.85, 1.25);
		self.angle_speed = draw_angle_speed(rng, self.helix, config);
	}
}
