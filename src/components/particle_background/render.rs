//! Per-frame render loop for the particle background.
//!
//! Physics and drawing are interleaved per particle, in collection order:
//! 1. Backdrop gradient over the whole surface
//! 2. For each particle: integrate, draw its circle, then draw connection
//!    lines to every other particle within range
//!
//! Connection lines therefore see a mix of this frame's and last frame's
//! positions, and each close pair is stroked twice (once from each side).

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;
use super::settings::SimulationSettings;
use super::theme::{Color, GradientStop, Theme};
use super::viewport::Viewport;

/// Drawing surface the render loop paints onto.
///
/// Implemented for the browser's 2D canvas context. Tests use recorders.
pub trait Painter {
	/// Fill `(0, 0)..(width, height)` with a linear gradient running from the
	/// top-left corner to the bottom-right corner.
	fn fill_gradient(&mut self, width: f64, height: f64, stops: &[GradientStop]);
	/// Fill a circle of `radius` centered on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Stroke a straight line `width` pixels wide.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

impl Painter for CanvasRenderingContext2d {
	fn fill_gradient(&mut self, width: f64, height: f64, stops: &[GradientStop]) {
		let gradient = self.create_linear_gradient(0.0, 0.0, width, height);
		for stop in stops {
			let _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
		}

		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.stroke();
	}
}

/// Stroke alpha for a connection of length `distance`, or `None` when the
/// particles are too far apart to be connected.
pub fn connection_alpha(distance: f64, settings: &SimulationSettings) -> Option<f64> {
	let radius = settings.connection_radius;
	if distance < radius {
		Some((radius - distance) / radius * settings.connection_opacity)
	} else {
		None
	}
}

/// Advances the field by one frame and draws it. Returns the number of
/// connection lines stroked.
pub fn render<P: Painter + ?Sized>(
	field: &mut ParticleField,
	pointer: (f64, f64),
	viewport: Viewport,
	settings: &SimulationSettings,
	theme: &Theme,
	painter: &mut P,
) -> usize {
	let (width, height) = (viewport.width, viewport.height);
	painter.fill_gradient(width, height, &theme.background.stops);

	let particles = &mut field.particles;
	let mut connections = 0;

	for i in 0..particles.len() {
		particles[i].integrate(pointer, width, height, settings);
		let p = particles[i];

		painter.fill_circle(p.x, p.y, p.size, p.color);

		for (j, other) in particles.iter().enumerate() {
			if i == j {
				continue;
			}
			if let Some(alpha) = connection_alpha(p.distance_to(other), settings) {
				painter.stroke_line(
					(p.x, p.y),
					(other.x, other.y),
					theme.connection.color.with_alpha(alpha),
					theme.connection.line_width,
				);
				connections += 1;
			}
		}
	}

	connections
}

#[cfg(test)]
pub(crate) mod recording {
	use super::*;

	/// One recorded drawing call.
	#[derive(Clone, Debug, PartialEq)]
	pub enum Op {
		Gradient {
			width: f64,
			height: f64,
			stops: Vec<GradientStop>,
		},
		Circle {
			x: f64,
			y: f64,
			radius: f64,
			color: Color,
		},
		Line {
			from: (f64, f64),
			to: (f64, f64),
			color: Color,
			width: f64,
		},
	}

	/// Painter that records every call instead of drawing.
	#[derive(Default)]
	pub struct RecordingPainter {
		pub ops: Vec<Op>,
	}

	impl RecordingPainter {
		pub fn lines(&self) -> Vec<&Op> {
			self.ops
				.iter()
				.filter(|op| matches!(op, Op::Line { .. }))
				.collect()
		}

		pub fn circles(&self) -> usize {
			self.ops
				.iter()
				.filter(|op| matches!(op, Op::Circle { .. }))
				.count()
		}
	}

	impl Painter for RecordingPainter {
		fn fill_gradient(&mut self, width: f64, height: f64, stops: &[GradientStop]) {
			self.ops.push(Op::Gradient {
				width,
				height,
				stops: stops.to_vec(),
			});
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
			self.ops.push(Op::Circle {
				x,
				y,
				radius,
				color,
			});
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
			self.ops.push(Op::Line {
				from,
				to,
				color,
				width,
			});
		}
	}
}
