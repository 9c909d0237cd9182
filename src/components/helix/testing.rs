//! In-memory petal surface for unit tests.

use std::collections::HashMap;

use super::particles::PetalPose;
use super::render::PetalSurface;
use super::types::{Helix, Viewport};
use crate::error::PageError;

/// Hands out numbered handles and remembers the last pose written to each.
pub struct RecordingSurface {
	viewport: Viewport,
	next: usize,
	live: HashMap<usize, Option<PetalPose>>,
	removed: usize,
	fail_after: Option<usize>,
}

impl RecordingSurface {
	pub fn new(viewport: Viewport) -> Self {
		Self {
			viewport,
			next: 0,
			live: HashMap::new(),
			removed: 0,
			fail_after: None,
		}
	}

	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
	}

	/// Make `create` fail once `n` more handles have been created.
	pub fn fail_after(&mut self, n: usize) {
		self.fail_after = Some(n);
	}

	pub fn live(&self) -> usize {
		self.live.len()
	}

	pub fn removed(&self) -> usize {
		self.removed
	}

	pub fn pose(&self, handle: usize) -> Option<&PetalPose> {
		self.live.get(&handle)?.as_ref()
	}
}

impl PetalSurface for RecordingSurface {
	type Handle = usize;

	fn viewport(&self) -> Viewport {
		self.viewport
	}

	fn create(&mut self, _helix: Helix, _halo: bool) -> Result<usize, PageError> {
		if let Some(remaining) = self.fail_after.as_mut() {
			if *remaining == 0 {
				return Err(PageError::CreateElement("surface full".into()));
			}
			*remaining -= 1;
		}
		let handle = self.next;
		self.next += 1;
		self.live.insert(handle, None);
		Ok(handle)
	}

	fn remove(&mut self, handle: usize) {
		if self.live.remove(&handle).is_some() {
			self.removed += 1;
		}
	}

	fn apply(&mut self, handle: &usize, pose: &PetalPose) {
		if let Some(slot) = self.live.get_mut(handle) {
			*slot = Some(pose.clone());
		}
	}
}
