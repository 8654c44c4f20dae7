//! Leptos component wrapping the particle background canvas.
//!
//! The component creates a fullscreen canvas, wires window `resize` and
//! `mousemove` listeners into [`BackgroundState`], and drives it with a
//! `requestAnimationFrame` loop. Unmounting cancels the pending frame and
//! removes both listeners exactly once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::error::MountError;
use super::lifecycle::{Registration, Teardown};
use super::settings::SimulationSettings;
use super::state::{BackgroundState, FrameOutcome};
use super::theme::Theme;
use super::viewport::Viewport;

type AnimateCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A window event listener, removed on release.
struct WindowListener<F: ?Sized> {
	window: Window,
	event: &'static str,
	callback: Closure<F>,
}

impl<F: ?Sized> WindowListener<F> {
	fn attach(window: &Window, event: &'static str, callback: Closure<F>) -> Self {
		let _ = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
		Self {
			window: window.clone(),
			event,
			callback,
		}
	}
}

impl<F: ?Sized> Registration for WindowListener<F> {
	fn release(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

/// The self-rescheduling frame callback and its pending request id.
struct AnimationFrame {
	window: Window,
	frame_id: Rc<Cell<Option<i32>>>,
	animate: AnimateCallback,
}

impl Registration for AnimationFrame {
	fn release(&mut self) {
		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		// Breaks the closure's reference to itself.
		self.animate.borrow_mut().take();
	}
}

/// Acquire the 2D context, seed the state and start the animation loop.
fn mount(
	canvas: HtmlCanvasElement,
	settings: SimulationSettings,
	theme: Theme,
) -> Result<Teardown, MountError> {
	let window = web_sys::window().ok_or(MountError::NoWindow)?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(|e| MountError::Context(format!("{:?}", e)))?
		.ok_or(MountError::ContextUnavailable)?
		.dyn_into()
		.map_err(|_| MountError::ContextUnavailable)?;

	let viewport = Viewport::from_window(&window).ok_or(MountError::Viewport)?;
	viewport.apply_to(&canvas);

	let state = Rc::new(RefCell::new(BackgroundState::new(
		viewport,
		settings,
		theme,
		fastrand::Rng::new(),
	)));
	info!(
		"particle-backdrop: mounted {}x{} with {} particles",
		viewport.width,
		viewport.height,
		state.borrow().field.len()
	);
	let mut teardown = Teardown::new(state.clone());

	let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
	let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		let Some(viewport) = Viewport::from_window(&win) else {
			warn!("particle-backdrop: resize without readable window size, keeping previous");
			return;
		};
		if state_resize.borrow_mut().resize(viewport) {
			viewport.apply_to(&canvas_resize);
		}
	});
	teardown.register(Box::new(WindowListener::attach(&window, "resize", on_resize)));

	let state_pointer = state.clone();
	let on_pointer_move: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
		state_pointer
			.borrow_mut()
			.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
	});
	teardown.register(Box::new(WindowListener::attach(
		&window,
		"mousemove",
		on_pointer_move,
	)));

	let animate: AnimateCallback = Rc::new(RefCell::new(None));
	let frame_id = Rc::new(Cell::new(None));
	let (state_anim, animate_inner, frame_inner) =
		(state.clone(), animate.clone(), frame_id.clone());
	let mut painter = ctx;
	*animate.borrow_mut() = Some(Closure::new(move || {
		frame_inner.set(None);

		// Canvas removed from the document without a cleanup pass.
		if !canvas.is_connected() {
			state_anim.borrow_mut().teardown();
			return;
		}
		if state_anim.borrow_mut().frame(&mut painter) == FrameOutcome::Stop {
			return;
		}

		if let Some(ref cb) = *animate_inner.borrow() {
			if let Some(win) = web_sys::window() {
				frame_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}
	}));
	if let Some(ref cb) = *animate.borrow() {
		frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
	}

	teardown.register(Box::new(AnimationFrame {
		window,
		frame_id,
		animate,
	}));

	Ok(teardown)
}

/// Fullscreen animated particle background.
///
/// Renders behind page content (`z-index: 0`, no pointer events). Particles
/// drift, bounce off the viewport edges, lean towards the mouse and link up
/// with faint teal lines when close. Set `overlays = false` to render the bare
/// canvas without the decorative gradient layers.
#[component]
pub fn ParticleBackground(
	#[prop(default = SimulationSettings::default())] settings: SimulationSettings,
	#[prop(default = true)] overlays: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted: Rc<RefCell<Option<Teardown>>> = Rc::new(RefCell::new(None));
	let mounted_init = mounted.clone();
	let started = Cell::new(false);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if started.replace(true) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();

		match mount(canvas, settings.clone(), Theme::default()) {
			Ok(m) => *mounted_init.borrow_mut() = Some(m),
			Err(e) => warn!("particle-backdrop: background disabled: {}", e),
		}
	});

	let mounted_cleanup = SendWrapper::new(mounted);
	on_cleanup(move || {
		if let Some(mut teardown) = mounted_cleanup.borrow_mut().take() {
			teardown.run();
		}
	});

	view! {
		<div
			class="particle-background"
			style="position: fixed; inset: 0; width: 100%; height: 100%; pointer-events: none; z-index: 0; overflow: hidden;"
		>
			<canvas
				node_ref=canvas_ref
				class="particle-background-canvas"
				style="position: absolute; inset: 0; width: 100%; height: 100%; display: block;"
			/>
			{overlays.then(|| view! { <Overlays /> })}
		</div>
	}
}

/// Slow drift for the gradient orbs.
const FLOAT_KEYFRAMES: &str = "\
@keyframes particle-backdrop-float { 0%, 100% { transform: translate(0, 0); } 50% { transform: translate(0, -20px); } }
@keyframes particle-backdrop-float-slow { 0%, 100% { transform: translate(0, 0) scale(1); } 50% { transform: translate(30px, -30px) scale(1.05); } }
@keyframes particle-backdrop-float-reverse { 0%, 100% { transform: translate(0, 0); } 50% { transform: translate(-30px, 20px); } }
.particle-background .orb-cyan { animation: particle-backdrop-float-slow 20s ease-in-out infinite; }
.particle-background .orb-pink { animation: particle-backdrop-float-reverse 15s ease-in-out infinite; }
.particle-background .orb-lime { animation: particle-backdrop-float 10s ease-in-out infinite; }
@media (prefers-reduced-motion: reduce) { .particle-background .orb { animation: none; } }
";

/// Fractal-noise grain, blended over everything beneath it.
const NOISE_STYLE: &str = "position: absolute; inset: 0; opacity: 0.015; mix-blend-mode: overlay; \
background-image: url(\"data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='200' height='200'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E\");";

/// Static decorative layers drawn over the canvas.
#[component]
fn Overlays() -> impl IntoView {
	view! {
		<style>{FLOAT_KEYFRAMES}</style>
		<div style="position: absolute; inset: 0; background: linear-gradient(to bottom right, rgba(17, 24, 39, 0.35), rgba(88, 28, 135, 0.2), rgba(17, 24, 39, 0.35));" />
		<div
			class="orb orb-cyan"
			style="position: absolute; top: -6rem; left: -6rem; width: 24rem; height: 24rem; border-radius: 9999px; filter: blur(64px); background: linear-gradient(to bottom right, rgba(6, 182, 212, 0.3), rgba(147, 51, 234, 0.25));"
		/>
		<div
			class="orb orb-pink"
			style="position: absolute; top: 50%; right: -6rem; width: 20rem; height: 20rem; border-radius: 9999px; filter: blur(64px); background: linear-gradient(to bottom right, rgba(236, 72, 153, 0.25), rgba(249, 115, 22, 0.2));"
		/>
		<div
			class="orb orb-lime"
			style="position: absolute; bottom: -6rem; left: 33%; width: 18rem; height: 18rem; border-radius: 9999px; filter: blur(64px); background: linear-gradient(to bottom right, rgba(132, 204, 22, 0.15), rgba(34, 211, 238, 0.15));"
		/>
		<div style="position: absolute; inset: 0; opacity: 0.03; background-size: 50px 50px; background-image: linear-gradient(rgba(0, 255, 255, 0.3) 1px, transparent 1px), linear-gradient(90deg, rgba(0, 255, 255, 0.3) 1px, transparent 1px);" />
		<div class="noise" style=NOISE_STYLE />
		<div style="position: absolute; inset: 0; background: radial-gradient(circle, transparent 0%, transparent 50%, rgba(17, 24, 39, 0.6) 100%);" />
		<div style="position: absolute; top: 0; left: 0; right: 0; height: 8rem; background: linear-gradient(to bottom, rgba(17, 24, 39, 0.9), transparent);" />
	}
}
