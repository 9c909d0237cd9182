//! Petal field simulation state.
//!
//! [`HelixField`] owns the petal pool, the surface the petals are drawn on,
//! and the random source used for spawning. It is created once by the overlay
//! component and mutated by the frame loop: [`HelixField::tick`] advances the
//! helices at a capped rate, [`HelixField::rebuild`] throws the pool away and
//! lays it out again for a new viewport.

use log::debug;
use rand::Rng;

use super::config::HelixConfig;
use super::particles::{Particle, Spawn};
use super::render::PetalSurface;
use super::types::{Helix, Layout, Viewport};
use crate::error::PageError;

/// Admits at most one frame per interval.
#[derive(Clone, Debug)]
pub struct FrameThrottle {
	interval_ms: f64,
	last: f64,
}

impl FrameThrottle {
	pub fn new(interval_ms: f64) -> Self {
		Self {
			interval_ms,
			last: 0.0,
		}
	}

	/// Returns true (and records `now`) if enough time has passed since the
	/// last admitted frame.
	pub fn admit(&mut self, now: f64) -> bool {
		if now - self.last > self.interval_ms {
			self.last = now;
			true
		} else {
			false
		}
	}
}

/// The double-helix petal pool and everything needed to animate it.
pub struct HelixField<S: PetalSurface, R: Rng> {
	config: HelixConfig,
	surface: S,
	rng: R,
	pool: Vec<Particle<S::Handle>>,
	viewport: Viewport,
	throttle: FrameThrottle,
}

impl<S: PetalSurface, R: Rng> HelixField<S, R> {
	/// Create an empty field. Call [`rebuild`](Self::rebuild) to populate it.
	pub fn new(config: HelixConfig, surface: S, rng: R) -> Self {
		let throttle = FrameThrottle::new(config.frame_interval_ms);
		Self {
			config,
			surface,
			rng,
			pool: Vec::new(),
			viewport: Viewport::default(),
			throttle,
		}
	}

	pub fn config(&self) -> &HelixConfig {
		&self.config
	}

	#[allow(dead_code, reason = "inspected by tests and debugging hooks")]
	pub fn particles(&self) -> &[Particle<S::Handle>] {
		&self.pool
	}

	#[allow(dead_code, reason = "inspected by tests and debugging hooks")]
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	#[allow(dead_code, reason = "inspected by tests and debugging hooks")]
	pub fn surface(&self) -> &S {
		&self.surface
	}

	#[allow(dead_code, reason = "inspected by tests and debugging hooks")]
	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	/// Discard every petal and lay out a fresh pool for `viewport`.
	///
	/// On error the pool is left empty with no visuals attached.
	pub fn rebuild(&mut self, viewport: Viewport, layout: Layout) -> Result<(), PageError> {
		self.clear();
		self.viewport = viewport;

		let per_helix = self.config.per_helix();
		self.pool.reserve(per_helix * 2);

		for helix in Helix::BOTH {
			for i in 0..per_helix {
				let spawn = Spawn::new(&mut self.rng, helix, i, &self.config, viewport, layout);
				let handle = match self.surface.create(helix, spawn.halo) {
					Ok(handle) => handle,
					Err(e) => {
						self.clear();
						return Err(e);
					}
				};
				self.pool.push(spawn.into_particle(helix, handle));
			}
		}

		debug!(
			"sunflower-helix: rebuilt {} petals for {}x{} ({:?})",
			self.pool.len(),
			viewport.width,
			viewport.height,
			layout
		);
		Ok(())
	}

	/// Rebuild using the surface's current size to pick the layout.
	pub fn rebuild_from_surface(&mut self) -> Result<(), PageError> {
		let viewport = self.surface.viewport();
		let layout = Layout::for_width(viewport.width, self.config.compact_breakpoint);
		self.rebuild(viewport, layout)
	}

	/// Advance every petal one step and redraw it, respawning petals that
	/// have risen past the top.
	pub fn advance(&mut self) {
		let config = &self.config;
		let height = self.viewport.height;

		for p in &mut self.pool {
			p.step(config);
			let mut pose = p.pose(config);
			if pose.y < config.respawn_threshold {
				p.respawn(&mut self.rng, config, height);
				pose = p.pose(config);
			}
			self.surface.apply(&p.handle, &pose);
		}
	}

	/// Frame callback entry point. Advances only if the throttle admits `now`.
	pub fn tick(&mut self, now: f64) -> bool {
		if self.throttle.admit(now) {
			self.advance();
			true
		} else {
			false
		}
	}

	fn clear(&mut self) {
		for p in self.pool.drain(..) {
			self.surface.remove(p.handle);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::helix::testing::RecordingSurface;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn field(total: usize, viewport: Viewport) -> HelixField<RecordingSurface, SmallRng> {
		let config = HelixConfig {
			total_petals: total,
			..HelixConfig::default()
		};
		HelixField::new(
			config,
			RecordingSurface::new(viewport),
			SmallRng::seed_from_u64(42),
		)
	}

	#[test]
	fn test_rebuild_invariants() {
		let mut f = field(120, Viewport::new(1280.0, 800.0));
		f.rebuild_from_surface().unwrap();

		let particles = f.particles();
		assert_eq!(particles.len(), 120);
		let a = particles.iter().filter(|p| p.helix == Helix::A).count();
		assert_eq!(a, 60);
		assert_eq!(f.surface().live(), 120);

		for p in particles {
			let mult = if p.helix == Helix::A { 1.0 } else { 1.05 };
			assert!(p.angle_speed >= 0.014 * mult && p.angle_speed <= 0.058 * mult);
			assert!(p.radius >= 85.0 && p.radius <= 115.0);
		}
	}

	#[test]
	fn test_standard_layout_centers() {
		let mut f = field(8, Viewport::new(1000.0, 800.0));
		f.rebuild(Viewport::new(1000.0, 800.0), Layout::Standard)
			.unwrap();
		for p in f.particles() {
			match p.helix {
				Helix::A => assert_eq!(p.center_x, 488.0),
				Helix::B => assert_eq!(p.center_x, 512.0),
			}
			assert!(p.base_y <= 790.0 && p.base_y > 800.0 - 280.0 - 4.0 * 1.2);
		}
	}

	#[test]
	fn test_compact_layout_region() {
		let viewport = Viewport::new(400.0, 800.0);
		let mut f = field(4, viewport);
		f.rebuild_from_surface().unwrap();

		assert_eq!(f.particles().len(), 4);
		for p in f.particles() {
			assert!((220.0..=390.0).contains(&p.center_x), "{}", p.center_x);
			assert!((240.0..=790.0).contains(&p.base_y), "{}", p.base_y);
			assert_eq!(p.radius, 80.0);
		}
	}

	#[test]
	fn test_rebuild_leaves_no_orphans() {
		let mut f = field(10, Viewport::new(1280.0, 800.0));
		f.rebuild_from_surface().unwrap();
		let first: Vec<usize> = f.particles().iter().map(|p| p.handle).collect();

		f.rebuild_from_surface().unwrap();
		assert_eq!(f.surface().live(), 10);
		assert_eq!(f.surface().removed(), 10);
		for p in f.particles() {
			assert!(!first.contains(&p.handle));
		}
	}

	#[test]
	fn test_failed_rebuild_empties_pool() {
		let mut f = field(10, Viewport::new(1280.0, 800.0));
		f.rebuild_from_surface().unwrap();
		f.surface.fail_after(3);

		assert!(f.rebuild_from_surface().is_err());
		assert!(f.particles().is_empty());
		assert_eq!(f.surface().live(), 0);
	}

	#[test]
	fn test_same_seed_same_pool() {
		let mut a = field(20, Viewport::new(900.0, 700.0));
		let mut b = field(20, Viewport::new(900.0, 700.0));
		a.rebuild_from_surface().unwrap();
		b.rebuild_from_surface().unwrap();
		for (pa, pb) in a.particles().iter().zip(b.particles()) {
			assert_eq!(pa.angle, pb.angle);
			assert_eq!(pa.base_y, pb.base_y);
			assert_eq!(pa.phase_offset, pb.phase_offset);
		}
	}

	#[test]
	fn test_angle_increases_every_tick() {
		let mut f = field(40, Viewport::new(1280.0, 4000.0));
		f.rebuild_from_surface().unwrap();

		for _ in 0..50 {
			let before: Vec<f64> = f.particles().iter().map(|p| p.angle).collect();
			let base: Vec<f64> = f.particles().iter().map(|p| p.base_y).collect();
			f.advance();
			for (i, p) in f.particles().iter().enumerate() {
				// A respawn resets base_y below the viewport.
				if p.base_y > base[i] {
					continue;
				}
				assert!(p.angle > before[i]);
			}
		}
	}

	#[test]
	fn test_offscreen_petal_respawns_before_draw() {
		let viewport = Viewport::new(1280.0, 800.0);
		let mut f = field(2, viewport);
		f.rebuild_from_surface().unwrap();
		{
			let p = &mut f.pool[0];
			p.angle = 0.0;
			p.angle_speed = 0.02;
			p.radius = 100.0;
			p.phase_offset = 0.0;
			p.center_x = 200.0;
			p.base_y = -150.0;
		}
		let handle = f.particles()[0].handle;

		f.advance();

		let p = &f.particles()[0];
		let y = p.effective_y(f.config());
		assert!(y >= 800.0 + 10.0 - std::f64::consts::TAU * 10.0, "{}", y);
		assert_eq!(p.handle, handle);
		assert_eq!(p.helix, Helix::A);
		assert_eq!(p.center_x, 200.0);
		let drawn = f.surface().pose(handle).unwrap();
		assert!(drawn.y > 0.0);
	}

	#[test]
	fn test_petals_keep_cycling() {
		let mut f = field(20, Viewport::new(1280.0, 800.0));
		f.rebuild_from_surface().unwrap();
		for _ in 0..5000 {
			f.advance();
		}
		assert_eq!(f.particles().len(), 20);
		for p in f.particles() {
			let y = p.effective_y(f.config());
			assert!(y >= -120.0 - 2.0, "{}", y);
		}
	}

	#[test]
	fn test_throttle_caps_frame_rate() {
		let mut throttle = FrameThrottle::new(33.0);
		assert!(!throttle.admit(16.0));
		assert!(throttle.admit(34.0));
		assert!(!throttle.admit(50.0));
		assert!(!throttle.admit(67.0));
		assert!(throttle.admit(68.0));
	}

	#[test]
	fn test_tick_is_throttled() {
		let mut f = field(4, Viewport::new(1280.0, 800.0));
		f.rebuild_from_surface().unwrap();
		let advanced = (1..=60)
			.map(|frame| f.tick(frame as f64 * 16.0))
			.filter(|&ran| ran)
			.count();
		// With 16ms frames only every third one clears the 33ms gap.
		assert_eq!(advanced, 20);
	}
}
