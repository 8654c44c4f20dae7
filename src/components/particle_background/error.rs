//! Reasons the background can fail to start.
//!
//! None of these are fatal: the background is decorative, so the component
//! logs the error and renders an idle canvas.

use std::fmt::{self, Display};

/// Why the background degraded to an idle canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum MountError {
	/// No global `window` (not running in a browser).
	NoWindow,
	/// `getContext("2d")` threw.
	Context(String),
	/// The browser returned no 2D context.
	ContextUnavailable,
	/// The window reported no usable inner size.
	Viewport,
}

impl Display for MountError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MountError::NoWindow => write!(f, "no window available"),
			MountError::Context(s) => write!(f, "failed to acquire 2d context: {s}"),
			MountError::ContextUnavailable => write!(f, "2d context unavailable"),
			MountError::Viewport => write!(f, "could not read window size"),
		}
	}
}

impl std::error::Error for MountError {}
