//! Simulation parameters for the particle background.
//!
//! The physics and density constants are fixed in code; the defaults are the
//! tuned values of the portfolio backdrop. A page may only lower the particle
//! ceiling at runtime, through [`SettingsOverride`], which can never raise the
//! count above what the constants produce.

use serde::Deserialize;

/// Physics and density parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationSettings {
	/// Surface area (px²) per particle. Count = floor(w * h / divisor).
	pub density_divisor: f64,
	/// Optional hard cap on particle count. `None` keeps the count uncapped.
	pub max_particles: Option<usize>,
	/// Pointer attraction radius in px.
	pub interaction_radius: f64,
	/// Velocity added per frame at zero distance from the pointer.
	pub attraction_strength: f64,
	/// Maximum distance in px at which two particles are connected.
	pub connection_radius: f64,
	/// Stroke alpha of a connection at zero distance.
	pub connection_opacity: f64,
	/// Multiplicative velocity decay applied every frame.
	pub damping: f64,
	/// Initial velocity per axis is uniform in [-max_speed, max_speed).
	pub max_speed: f64,
	/// Smallest particle radius (inclusive).
	pub size_min: f64,
	/// Largest particle radius (exclusive).
	pub size_max: f64,
	/// Lowest particle opacity (inclusive).
	pub opacity_min: f64,
	/// Highest particle opacity (exclusive).
	pub opacity_max: f64,
}

impl Default for SimulationSettings {
	fn default() -> Self {
		Self {
			density_divisor: 15000.0,
			max_particles: None,
			interaction_radius: 100.0,
			attraction_strength: 0.01,
			connection_radius: 120.0,
			connection_opacity: 0.1,
			damping: 0.99,
			max_speed: 0.25,
			size_min: 1.0,
			size_max: 3.0,
			opacity_min: 0.2,
			opacity_max: 0.7,
		}
	}
}

/// Runtime adjustments a page may supply as JSON.
///
/// Only the particle ceiling is adjustable. Any other field is rejected.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SettingsOverride {
	/// Upper bound on the particle count.
	pub max_particles: Option<usize>,
}

impl SimulationSettings {
	/// Apply a page override on top of these settings.
	pub fn with_override(self, over: SettingsOverride) -> Self {
		Self {
			max_particles: over.max_particles.or(self.max_particles),
			..self
		}
	}

	/// Number of particles for a surface of the given size.
	///
	/// Degenerate (zero, negative or non-finite) dimensions give zero.
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		if !(width > 0.0 && height > 0.0) || !(width * height).is_finite() {
			return 0;
		}
		let count = (width * height / self.density_divisor).floor() as usize;
		match self.max_particles {
			Some(cap) => count.min(cap),
			None => count,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn count_follows_area_over_divisor() {
		let settings = SimulationSettings::default();
		assert_eq!(settings.particle_count(300.0, 300.0), 6);
		assert_eq!(settings.particle_count(1920.0, 1080.0), 138);
		assert_eq!(settings.particle_count(100.0, 100.0), 0);
	}

	#[test]
	fn degenerate_dimensions_give_no_particles() {
		let settings = SimulationSettings::default();
		assert_eq!(settings.particle_count(0.0, 800.0), 0);
		assert_eq!(settings.particle_count(-300.0, 300.0), 0);
		assert_eq!(settings.particle_count(-300.0, -300.0), 0);
		assert_eq!(settings.particle_count(f64::NAN, 300.0), 0);
	}

	#[test]
	fn cap_limits_count() {
		let settings = SimulationSettings {
			max_particles: Some(50),
			..Default::default()
		};
		assert_eq!(settings.particle_count(1920.0, 1080.0), 50);
		assert_eq!(settings.particle_count(300.0, 300.0), 6);
	}

	#[test]
	fn override_sets_only_the_cap() {
		let over: SettingsOverride = serde_json::from_str(r#"{ "max_particles": 200 }"#).unwrap();
		let settings = SimulationSettings::default().with_override(over);
		assert_eq!(settings.max_particles, Some(200));
		assert_eq!(settings.density_divisor, 15000.0);
		assert_eq!(settings.damping, 0.99);
	}

	#[test]
	fn empty_override_keeps_existing_cap() {
		let settings = SimulationSettings {
			max_particles: Some(80),
			..Default::default()
		}
		.with_override(SettingsOverride::default());
		assert_eq!(settings.max_particles, Some(80));
	}

	#[test]
	fn override_rejects_physics_fields() {
		assert!(serde_json::from_str::<SettingsOverride>(r#"{ "density_divisor": 1e-9 }"#).is_err());
		assert!(serde_json::from_str::<SettingsOverride>(r#"{ "damping": 2.0 }"#).is_err());
	}
}
