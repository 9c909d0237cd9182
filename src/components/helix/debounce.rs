//! Trailing-edge debounce driven by caller-supplied timestamps.

/// A cancellable, fire-once deferred action.
///
/// Arming sets a deadline `delay` ms in the future, replacing any deadline
/// already pending. [`poll`](Self::poll) reports true exactly once, the first
/// time it is called at or past the deadline. A burst of `arm` calls therefore
/// collapses into a single firing `delay` ms after the last one.
#[derive(Clone, Debug)]
pub struct Debouncer {
	delay_ms: f64,
	deadline: Option<f64>,
}

impl Debouncer {
	pub fn new(delay_ms: f64) -> Self {
		Self {
			delay_ms,
			deadline: None,
		}
	}

	pub fn arm(&mut self, now: f64) {
		self.deadline = Some(now + self.delay_ms);
	}

	#[allow(dead_code, reason = "completes the arm/poll API; exercised in tests")]
	pub fn cancel(&mut self) {
		self.deadline = None;
	}

	#[allow(dead_code, reason = "completes the arm/poll API; exercised in tests")]
	pub fn is_armed(&self) -> bool {
		self.deadline.is_some()
	}

	pub fn poll(&mut self, now: f64) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}
}
