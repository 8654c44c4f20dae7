//! particle-backdrop: Animated particle background for a single-page portfolio.
//!
//! This crate provides a WASM canvas component that fills the viewport with
//! drifting particles, pulls them towards the mouse, and links nearby
//! particles with faint connection lines.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_background::{
	BackgroundState, FrameOutcome, Painter, ParticleBackground, SettingsOverride, SimulationSettings,
	Theme,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-backdrop: logging initialized");
}

/// Parse a settings override on top of the built-in constants.
///
/// Only `max_particles` may be supplied; invalid JSON or any other field
/// leaves the defaults untouched.
pub fn parse_settings(json_text: &str) -> SimulationSettings {
	match serde_json::from_str::<SettingsOverride>(json_text) {
		Ok(over) => SimulationSettings::default().with_override(over),
		Err(e) => {
			warn!("particle-backdrop: ignoring settings override: {}", e);
			SimulationSettings::default()
		}
	}
}

/// Load a settings override from a script element with id="background-settings".
fn load_settings() -> Option<SimulationSettings> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("background-settings")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	let settings = parse_settings(&json_text);
	info!(
		"particle-backdrop: loaded settings override (max_particles = {:?})",
		settings.max_particles
	);
	Some(settings)
}

/// Main application component.
/// Mounts the particle background behind the page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let settings = load_settings().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground settings=settings />
		<main class="portfolio-content" style="position: relative; z-index: 10;">
			<h1>"Portfolio"</h1>
			<p class="subtitle">"Move the mouse to pull the particles."</p>
		</main>
	}
}
