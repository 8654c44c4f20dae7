//! Per-instance background state bound to the component's mount lifecycle.
//!
//! Everything the render loop reads (viewport, pointer, particles) lives here
//! and is passed to the frame step by reference. Once [`BackgroundState::teardown`]
//! has run, the state ignores further events and never draws again, so a
//! late resize, pointer move or animation frame is harmless.

use log::debug;

use super::particles::ParticleField;
use super::render::{self, Painter};
use super::settings::SimulationSettings;
use super::theme::Theme;
use super::viewport::Viewport;

/// Whether the animation loop should request another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
	/// Still mounted; schedule the next frame.
	Continue,
	/// Torn down; let the loop end.
	Stop,
}

/// Particle field, pointer and viewport for one mounted background.
pub struct BackgroundState {
	/// Current drawing surface size.
	pub viewport: Viewport,
	/// Last known pointer position in viewport coordinates.
	pub pointer: (f64, f64),
	/// Particles being simulated.
	pub field: ParticleField,
	/// Physics and density parameters.
	pub settings: SimulationSettings,
	/// Colors used when drawing.
	pub theme: Theme,
	rng: fastrand::Rng,
	active: bool,
	frames: u64,
	/// Connection lines drawn in the most recent frame.
	last_connections: usize,
}

impl BackgroundState {
	/// Seed a field for `viewport` and start in the active state.
	pub fn new(
		viewport: Viewport,
		settings: SimulationSettings,
		theme: Theme,
		mut rng: fastrand::Rng,
	) -> Self {
		let field = ParticleField::new(
			viewport.width,
			viewport.height,
			&settings,
			&theme.palette,
			&mut rng,
		);
		debug!(
			"particle-backdrop: seeded {} particles for {}x{}",
			field.len(),
			viewport.width,
			viewport.height
		);

		Self {
			viewport,
			pointer: (0.0, 0.0),
			field,
			settings,
			theme,
			rng,
			active: true,
			frames: 0,
			last_connections: 0,
		}
	}

	/// Adopt new viewport dimensions and reseed the field.
	///
	/// Returns `false` (and does nothing) after teardown.
	pub fn resize(&mut self, viewport: Viewport) -> bool {
		if !self.active {
			return false;
		}
		self.viewport = viewport;
		self.field.resize(
			viewport.width,
			viewport.height,
			&self.settings,
			&self.theme.palette,
			&mut self.rng,
		);
		debug!(
			"particle-backdrop: reseeded {} particles for {}x{}",
			self.field.len(),
			viewport.width,
			viewport.height
		);
		true
	}

	/// Record the latest pointer position. Ignored after teardown.
	pub fn set_pointer(&mut self, x: f64, y: f64) -> bool {
		if !self.active {
			return false;
		}
		self.pointer = (x, y);
		true
	}

	/// Run one animation frame: advance physics and draw onto `painter`.
	///
	/// After teardown nothing is drawn and [`FrameOutcome::Stop`] is returned.
	pub fn frame<P: Painter + ?Sized>(&mut self, painter: &mut P) -> FrameOutcome {
		if !self.active {
			return FrameOutcome::Stop;
		}
		self.last_connections = render::render(
			&mut self.field,
			self.pointer,
			self.viewport,
			&self.settings,
			&self.theme,
			painter,
		);
		self.frames += 1;
		FrameOutcome::Continue
	}

	/// Mark the state as unmounted. Returns `true` only on the first call.
	pub fn teardown(&mut self) -> bool {
		let was_active = self.active;
		self.active = false;
		was_active
	}

	/// False once [`teardown`](Self::teardown) has run.
	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Frames drawn since mount.
	pub fn frame_count(&self) -> u64 {
		self.frames
	}

	/// Connection lines drawn in the most recent frame.
	pub fn last_connections(&self) -> usize {
		self.last_connections
	}
}
