//! Animated particle background component.
//!
//! Renders a fullscreen canvas behind page content with:
//! - A particle field sized to the viewport and reseeded on every resize
//! - Pointer attraction within a fixed radius, bouncing off the edges
//! - Faint connection lines between nearby particles
//! - Decorative gradient overlays
//!
//! The simulation ([`BackgroundState`]) is independent of the browser and
//! draws through the [`Painter`] trait, so it can run against any surface.
//!
//! # Example
//!
//! ```ignore
//! use particle_backdrop::{ParticleBackground, SimulationSettings};
//!
//! let settings = SimulationSettings { max_particles: Some(300), ..Default::default() };
//! view! { <ParticleBackground settings=settings /> }
//! ```

mod component;
mod error;
mod lifecycle;
mod particles;
mod render;
pub mod settings;
mod state;
pub mod theme;
mod viewport;

pub use component::ParticleBackground;
pub use error::MountError;
pub use lifecycle::{Registration, Teardown};
pub use particles::{Particle, ParticleField};
pub use render::{Painter, connection_alpha, render};
pub use settings::{SettingsOverride, SimulationSettings};
pub use state::{BackgroundState, FrameOutcome};
pub use theme::{Color, GradientStop, Theme};
pub use viewport::Viewport;
