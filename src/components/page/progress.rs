//! Scroll progress readout.

use leptos::ev;
use leptos::prelude::*;

/// How far down the document has been scrolled, as a whole percentage.
///
/// Pages that do not scroll report 0. Overscroll (rubber-banding) is clamped.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> u32 {
	let scrollable = scroll_height - viewport_height;
	if scrollable <= 0.0 {
		return 0;
	}
	(scroll_top / scrollable * 100.0).round().clamp(0.0, 100.0) as u32
}

fn read_percent() -> Option<u32> {
	let window = web_sys::window()?;
	let body = window.document()?.body()?;
	let scroll_top = window.scroll_y().ok()?;
	let viewport_height = window.inner_height().ok()?.as_f64()?;
	Some(scroll_percent(
		scroll_top,
		body.scroll_height() as f64,
		viewport_height,
	))
}

/// Shows `NN%` and tracks the window's scroll position.
#[component]
pub fn ScrollProgress() -> impl IntoView {
	let (percent, set_percent) = signal(0u32);
	let update = move || {
		if let Some(p) = read_percent() {
			set_percent.set(p);
		}
	};

	Effect::new(move |_| update());
	let _ = window_event_listener(ev::scroll, move |_| update());
	let _ = window_event_listener(ev::load, move |_| update());

	view! {
		<div id="progress" class="progress">{move || format!("{}%", percent.get())}</div>
	}
}
