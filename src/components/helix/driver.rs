//! Routes ticker events into the petal field.

use log::warn;
use rand::Rng;

use super::debounce::Debouncer;
use super::render::PetalSurface;
use super::state::HelixField;
use super::ticker::{TickEvent, Ticker};
use crate::error::PageError;

/// What a single event did to the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(dead_code, reason = "read by tests; the browser loop only needs the side effects")]
pub struct TickOutcome {
	pub rebuilt: bool,
	pub advanced: bool,
}

/// Owns a [`HelixField`] and reacts to frame and resize notifications.
///
/// Resizes arm a trailing debounce; every frame first checks whether the
/// debounce has elapsed (rebuilding from the surface's current size), then
/// offers its timestamp to the field's frame throttle.
pub struct Driver<S: PetalSurface, R: Rng> {
	field: HelixField<S, R>,
	resize: Debouncer,
}

impl<S: PetalSurface, R: Rng> Driver<S, R> {
	/// Lay out the initial pool and return a driver ready for events.
	pub fn start(mut field: HelixField<S, R>) -> Result<Self, PageError> {
		field.rebuild_from_surface()?;
		let resize = Debouncer::new(field.config().debounce_ms);
		Ok(Self { field, resize })
	}

	#[allow(dead_code, reason = "inspected by tests and debugging hooks")]
	pub fn field(&self) -> &HelixField<S, R> {
		&self.field
	}

	#[allow(dead_code, reason = "inspected by tests and debugging hooks")]
	pub fn field_mut(&mut self) -> &mut HelixField<S, R> {
		&mut self.field
	}

	pub fn handle(&mut self, event: TickEvent) -> Result<TickOutcome, PageError> {
		let mut outcome = TickOutcome::default();
		match event {
			TickEvent::Resize { now } => self.resize.arm(now),
			TickEvent::Frame { now } => {
				if self.resize.poll(now) {
					self.field.rebuild_from_surface()?;
					outcome.rebuilt = true;
				}
				outcome.advanced = self.field.tick(now);
			}
		}
		Ok(outcome)
	}
}

impl<S: PetalSurface + 'static, R: Rng + 'static> Driver<S, R> {
	/// Hand the driver to `ticker`; it lives inside the subscription from now on.
	pub fn attach<T: Ticker>(mut self, ticker: &mut T) {
		ticker.subscribe(Box::new(move |event| {
			if let Err(e) = self.handle(event) {
				warn!("sunflower-helix: {}", e);
			}
		}));
	}
}
