//! Leptos component hosting the petal overlay.
//!
//! The component renders an empty overlay `<div>`, and once it is mounted,
//! fills it with petal elements and starts the frame loop. The loop runs for
//! the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::HtmlElement;

use super::config::HelixConfig;
use super::driver::Driver;
use super::render::DomSurface;
use super::state::HelixField;
use super::ticker::FrameTicker;
use crate::dom;
use crate::error::PageError;

/// Fresh seed per page load.
fn seed() -> u64 {
	let entropy = js_sys::Math::random() * (u32::MAX as f64);
	((entropy as u64) << 32) ^ (js_sys::Date::now() as u64)
}

/// Populate `overlay` and start animating it.
fn mount(overlay: HtmlElement, config: HelixConfig) -> Result<FrameTicker, PageError> {
	config.validate()?;
	let window = dom::window()?;
	let surface = DomSurface::new(dom::document()?, overlay, &config);
	let field = HelixField::new(config, surface, SmallRng::seed_from_u64(seed()));

	let driver = Driver::start(field)?;
	let mut ticker = FrameTicker::new(window);
	driver.attach(&mut ticker);
	Ok(ticker)
}

/// Full-bleed overlay with two interleaved helices of rising sunflower petals.
///
/// The overlay sizes itself through CSS (`#sunflowers`); petals are laid out
/// for whatever size it has when mounted and again after each resize settles.
#[component]
pub fn PetalOverlay(#[prop(optional)] config: HelixConfig) -> impl IntoView {
	let overlay_ref = NodeRef::<leptos::html::Div>::new();
	let ticker: Rc<RefCell<Option<FrameTicker>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(overlay) = overlay_ref.get() else {
			return;
		};
		if ticker.borrow().is_some() {
			return;
		}

		let total = config.total_petals;
		match mount(overlay.into(), config.clone()) {
			Ok(t) => {
				info!("sunflower-helix: animating {} petals", total);
				*ticker.borrow_mut() = Some(t);
			}
			Err(e) => warn!("sunflower-helix: petal overlay disabled: {}", e),
		}
	});

	view! {
		<div node_ref=overlay_ref id="sunflowers" class="sunflowers" aria-hidden="true" />
	}
}
