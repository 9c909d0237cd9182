//! Drawing petals.
//!
//! The simulation only knows about [`PetalSurface`]: something that can hand
//! out per-petal visual handles and write a [`PetalPose`] to them. The browser
//! implementation, [`DomSurface`], keeps one absolutely positioned `<div>` per
//! petal inside the overlay element and moves it with CSS transforms.

use web_sys::{Document, HtmlElement};

use wasm_bindgen::JsCast;

use super::config::HelixConfig;
use super::particles::PetalPose;
use super::types::{Helix, Viewport};
use crate::error::PageError;

/// Host capability for creating, styling and removing petal visuals.
pub trait PetalSurface {
	/// Opaque per-petal visual.
	type Handle;

	/// Current size of the drawing area.
	fn viewport(&self) -> Viewport;

	/// Create and attach a new petal visual.
	fn create(&mut self, helix: Helix, halo: bool) -> Result<Self::Handle, PageError>;

	/// Detach and drop a petal visual.
	fn remove(&mut self, handle: Self::Handle);

	/// Write a pose to a petal visual. Pure style update.
	fn apply(&mut self, handle: &Self::Handle, pose: &PetalPose);
}

/// Petals as `<div class="petal">` children of the overlay element.
pub struct DomSurface {
	document: Document,
	overlay: HtmlElement,
	petal_width: f64,
	petal_height: f64,
}

impl DomSurface {
	pub fn new(
		document: Document,
		overlay: HtmlElement,
		config: &HelixConfig,
	) -> Self {
		Self {
			document,
			overlay,
			petal_width: config.petal_width,
			petal_height: config.petal_height,
		}
	}
}

impl PetalSurface for DomSurface {
	type Handle = HtmlElement;

	fn viewport(&self) -> Viewport {
		Viewport::new(
			self.overlay.client_width() as f64,
			self.overlay.client_height() as f64,
		)
	}

	fn create(&mut self, helix: Helix, halo: bool) -> Result<HtmlElement, PageError> {
		let el: HtmlElement = self
			.document
			.create_element("div")
			.map_err(|e| PageError::CreateElement(PageError::js(&e)))?
			.unchecked_into();

		let strand = match helix {
			Helix::A => "helix-a",
			Helix::B => "helix-b",
		};
		el.set_class_name(&if halo {
			format!("petal {strand} halo")
		} else {
			format!("petal {strand}")
		});

		let style = el.style();
		let _ = style.set_property("width", &format!("{}px", self.petal_width));
		let _ = style.set_property("height", &format!("{}px", self.petal_height));
		// Position is carried entirely by the transform.
		let _ = style.set_property("left", "0px");
		let _ = style.set_property("top", "0px");

		self.overlay
			.append_child(&el)
			.map_err(|e| PageError::AttachElement(PageError::js(&e)))?;
		Ok(el)
	}

	fn remove(&mut self, handle: HtmlElement) {
		handle.remove();
	}

	fn apply(&mut self, handle: &HtmlElement, pose: &PetalPose) {
		let style = handle.style();
		let _ = style.set_property("transform", &pose.css_transform());
		let _ = style.set_property("opacity", &pose.opacity.to_string());
		if let Some(hue) = pose.hue {
			let _ = style.set_property("filter", &format!("hue-rotate({}deg)", hue));
		}
	}
}
