//! Animated "..." after a loading label.

use std::time::Duration;

use leptos::prelude::*;

pub const DOT_INTERVAL: Duration = Duration::from_millis(350);

/// Zero to three dots, cycling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DotCycle(u8);

impl DotCycle {
	pub fn advance(&mut self) {
		self.0 = (self.0 + 1) % 4;
	}

	pub fn text(self) -> String {
		".".repeat(self.0 as usize)
	}
}

/// Trailing dots that count up to three and start over.
#[component]
pub fn LoadingDots() -> impl IntoView {
	let (dots, set_dots) = signal(DotCycle::default());
	set_interval(move || set_dots.update(DotCycle::advance), DOT_INTERVAL);

	view! { <span id="dots" class="dots">{move || dots.get().text()}</span> }
}
