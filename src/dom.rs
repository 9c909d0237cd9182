//! Thin accessors for the browser globals.

use web_sys::{Document, HtmlElement, Window};

use crate::error::PageError;

pub fn window() -> Result<Window, PageError> {
	web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
	window()?.document().ok_or(PageError::NoDocument)
}

pub fn body() -> Option<HtmlElement> {
	document().ok()?.body()
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
pub fn now() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map(|p| p.now())
		.unwrap_or(0.0)
}
