//! Host notifications that drive the animation.
//!
//! The simulation never touches `requestAnimationFrame` or window listeners
//! directly. A [`Ticker`] delivers [`TickEvent`]s to a single subscriber;
//! [`FrameTicker`] is the browser implementation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::dom;

/// A notification from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickEvent {
	/// A display frame, with its timestamp in ms.
	Frame { now: f64 },
	/// The window changed size at `now` (same clock as frames).
	Resize { now: f64 },
}

pub type TickHandler = Box<dyn FnMut(TickEvent)>;

/// Per-frame and resize notifications, delivered to one subscriber at a time.
pub trait Ticker {
	/// Start delivering events to `handler`, replacing any previous subscriber.
	fn subscribe(&mut self, handler: TickHandler);

	/// Stop delivering events.
	fn unsubscribe(&mut self);
}

/// `requestAnimationFrame` loop plus a window `resize` listener.
pub struct FrameTicker {
	window: Window,
	handler: Rc<RefCell<Option<TickHandler>>>,
	frame_cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
	frame_id: Rc<Cell<Option<i32>>>,
	resize_cb: Option<Closure<dyn FnMut()>>,
}

impl FrameTicker {
	pub fn new(window: Window) -> Self {
		Self {
			window,
			handler: Rc::new(RefCell::new(None)),
			frame_cb: Rc::new(RefCell::new(None)),
			frame_id: Rc::new(Cell::new(None)),
			resize_cb: None,
		}
	}
}

impl Ticker for FrameTicker {
	fn subscribe(&mut self, handler: TickHandler) {
		self.unsubscribe();
		*self.handler.borrow_mut() = Some(handler);

		let (handler_frame, frame_inner, frame_id, window) = (
			self.handler.clone(),
			self.frame_cb.clone(),
			self.frame_id.clone(),
			self.window.clone(),
		);
		*self.frame_cb.borrow_mut() = Some(Closure::new(move |now: f64| {
			match handler_frame.borrow_mut().as_mut() {
				Some(h) => h(TickEvent::Frame { now }),
				None => return,
			}
			if let Some(ref cb) = *frame_inner.borrow() {
				frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(ref cb) = *self.frame_cb.borrow() {
			self.frame_id.set(
				self.window
					.request_animation_frame(cb.as_ref().unchecked_ref())
					.ok(),
			);
		}

		let handler_resize = self.handler.clone();
		let resize_cb: Closure<dyn FnMut()> = Closure::new(move || {
			if let Some(h) = handler_resize.borrow_mut().as_mut() {
				h(TickEvent::Resize { now: dom::now() });
			}
		});
		let _ = self
			.window
			.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
		self.resize_cb = Some(resize_cb);
	}

	fn unsubscribe(&mut self) {
		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		if let Some(cb) = self.resize_cb.take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		self.frame_cb.borrow_mut().take();
		self.handler.borrow_mut().take();
	}
}

impl Drop for FrameTicker {
	fn drop(&mut self) {
		self.unsubscribe();
	}
}
