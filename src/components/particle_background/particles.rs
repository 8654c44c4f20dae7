//! Particle entities and the field that owns them.
//!
//! Physics is split into small steps ([`Particle::advance`],
//! [`Particle::attract_to`], [`Particle::collide`], [`Particle::damp`]) that
//! the render loop runs in order for each particle, interleaved with drawing.

use super::settings::SimulationSettings;
use super::theme::{Color, ParticlePalette};

/// A single floating particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in surface pixels.
	pub x: f64,
	/// Vertical position in surface pixels.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub vx: f64,
	/// Vertical velocity, pixels per frame.
	pub vy: f64,
	/// Circle radius, fixed at creation.
	pub size: f64,
	/// Fixed at creation, within (0, 1].
	pub opacity: f64,
	/// Fill color, one of the palette entries.
	pub color: Color,
}

impl Particle {
	/// Move by one frame's worth of velocity.
	pub fn advance(&mut self) {
		self.x += self.vx;
		self.y += self.vy;
	}

	/// Pull towards the pointer when within `radius`.
	///
	/// Force falls off linearly from `strength` at the pointer to zero at
	/// `radius`. A particle exactly under the pointer gets no force.
	pub fn attract_to(&mut self, px: f64, py: f64, radius: f64, strength: f64) {
		let (dx, dy) = (px - self.x, py - self.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < radius && dist > 0.0 {
			let force = (radius - dist) / radius;
			self.vx += dx / dist * force * strength;
			self.vy += dy / dist * force * strength;
		}
	}

	/// Bounce off the surface edges, clamping the position back inside.
	pub fn collide(&mut self, width: f64, height: f64) {
		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
			self.x = self.x.clamp(0.0, width.max(0.0));
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
			self.y = self.y.clamp(0.0, height.max(0.0));
		}
	}

	/// Scale velocity by `factor`.
	pub fn damp(&mut self, factor: f64) {
		self.vx *= factor;
		self.vy *= factor;
	}

	/// Full physics update for one frame: advance, attract, collide, damp.
	pub fn integrate(
		&mut self,
		pointer: (f64, f64),
		width: f64,
		height: f64,
		settings: &SimulationSettings,
	) {
		self.advance();
		self.attract_to(
			pointer.0,
			pointer.1,
			settings.interaction_radius,
			settings.attraction_strength,
		);
		self.collide(width, height);
		self.damp(settings.damping);
	}

	/// Euclidean distance between the two centers.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}

	/// Velocity magnitude.
	pub fn speed(&self) -> f64 {
		(self.vx * self.vx + self.vy * self.vy).sqrt()
	}
}

/// Ordered collection of particles sized to the drawing surface.
///
/// The field is rebuilt from scratch whenever the surface changes size;
/// particles do not survive a resize.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	/// Particles in draw order.
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// A freshly seeded field for a `width` x `height` surface.
	pub fn new(
		width: f64,
		height: f64,
		settings: &SimulationSettings,
		palette: &ParticlePalette,
		rng: &mut fastrand::Rng,
	) -> Self {
		Self {
			particles: Self::regenerate(width, height, settings, palette, rng),
			width,
			height,
		}
	}

	/// Wrap an existing set of particles for a surface of the given size.
	pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
		}
	}

	/// Build a fresh set of particles for a `width` x `height` surface.
	pub fn regenerate(
		width: f64,
		height: f64,
		settings: &SimulationSettings,
		palette: &ParticlePalette,
		rng: &mut fastrand::Rng,
	) -> Vec<Particle> {
		let count = settings.particle_count(width, height);
		let mut particles = Vec::with_capacity(count);

		for _ in 0..count {
			particles.push(Particle {
				x: rng.f64() * width,
				y: rng.f64() * height,
				vx: (rng.f64() - 0.5) * 2.0 * settings.max_speed,
				vy: (rng.f64() - 0.5) * 2.0 * settings.max_speed,
				size: settings.size_min + rng.f64() * (settings.size_max - settings.size_min),
				opacity: settings.opacity_min
					+ rng.f64() * (settings.opacity_max - settings.opacity_min),
				color: palette.pick(rng),
			});
		}

		particles
	}

	/// Replace every particle with a new set for the given surface size.
	pub fn resize(
		&mut self,
		width: f64,
		height: f64,
		settings: &SimulationSettings,
		palette: &ParticlePalette,
		rng: &mut fastrand::Rng,
	) {
		self.particles = Self::regenerate(width, height, settings, palette, rng);
		self.width = width;
		self.height = height;
	}

	/// Surface width the field was seeded for.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height the field was seeded for.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True when the surface was too small for any particle.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
