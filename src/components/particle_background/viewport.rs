//! Window size tracking for the fullscreen canvas.

use web_sys::{HtmlCanvasElement, Window};

/// Current drawing surface dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Window inner width.
	pub width: f64,
	/// Window inner height.
	pub height: f64,
}

impl Viewport {
	/// Dimensions of `width` x `height`.
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Read the window's inner size. `None` if either dimension is unavailable.
	pub fn from_window(window: &Window) -> Option<Self> {
		let width = window.inner_width().ok()?.as_f64()?;
		let height = window.inner_height().ok()?.as_f64()?;
		Some(Self { width, height })
	}

	/// Size the canvas backing store to match. This clears the canvas.
	pub fn apply_to(&self, canvas: &HtmlCanvasElement) {
		canvas.set_width(self.width.max(0.0) as u32);
		canvas.set_height(self.height.max(0.0) as u32);
	}
}
