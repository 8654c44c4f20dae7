//! Unmount bookkeeping for the background.
//!
//! Every browser resource acquired at mount (window listeners, the pending
//! animation frame) is held as a [`Registration`]. [`Teardown::run`] stops the
//! state and releases each registration exactly once; later calls do nothing.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use super::state::BackgroundState;

/// A resource that has to be given back when the background unmounts.
pub trait Registration {
	/// Detach or cancel the resource. Called at most once.
	fn release(&mut self);
}

/// Owns the mounted state and everything registered on its behalf.
pub struct Teardown {
	state: Rc<RefCell<BackgroundState>>,
	registrations: Vec<Box<dyn Registration>>,
	done: bool,
}

impl Teardown {
	/// Start tracking a freshly mounted background.
	pub fn new(state: Rc<RefCell<BackgroundState>>) -> Self {
		Self {
			state,
			registrations: Vec::new(),
			done: false,
		}
	}

	/// Track another resource. Released immediately if teardown already ran.
	pub fn register(&mut self, mut registration: Box<dyn Registration>) {
		if self.done {
			registration.release();
			return;
		}
		self.registrations.push(registration);
	}

	/// Stop the state and release every registration, most recent first.
	///
	/// Returns `false` if teardown had already run.
	pub fn run(&mut self) -> bool {
		if self.done {
			return false;
		}
		self.done = true;

		let frames = {
			let mut state = self.state.borrow_mut();
			state.teardown();
			state.frame_count()
		};
		while let Some(mut registration) = self.registrations.pop() {
			registration.release();
		}
		info!(
			"particle-backdrop: background unmounted after {} frames",
			frames
		);
		true
	}

	/// Whether [`run`](Self::run) has completed.
	pub fn is_done(&self) -> bool {
		self.done
	}

	/// Number of resources still held.
	pub fn pending(&self) -> usize {
		self.registrations.len()
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::collections::HashMap;

	use super::*;
	use crate::components::particle_background::render::recording::RecordingPainter;
	use crate::components::particle_background::settings::SimulationSettings;
	use crate::components::particle_background::state::FrameOutcome;
	use crate::components::particle_background::theme::Theme;
	use crate::components::particle_background::viewport::Viewport;

	type Handler = Box<dyn Fn(f64, f64)>;

	/// Stand-in for the browser window: named listeners and one pending frame.
	#[derive(Default)]
	struct FakeWindow {
		listeners: RefCell<HashMap<&'static str, Handler>>,
		pending_frame: Cell<Option<i32>>,
		next_frame: Cell<i32>,
		removed: RefCell<Vec<&'static str>>,
		cancelled: RefCell<Vec<i32>>,
	}

	impl FakeWindow {
		fn listen(&self, event: &'static str, handler: Handler) {
			self.listeners.borrow_mut().insert(event, handler);
		}

		fn dispatch(&self, event: &'static str, x: f64, y: f64) -> bool {
			match self.listeners.borrow().get(event) {
				Some(handler) => {
					handler(x, y);
					true
				}
				None => false,
			}
		}

		fn request_frame(&self) -> i32 {
			let id = self.next_frame.get() + 1;
			self.next_frame.set(id);
			self.pending_frame.set(Some(id));
			id
		}

		/// Runs the pending frame callback, if one is scheduled.
		fn fire_frame(&self, state: &RefCell<BackgroundState>, painter: &mut RecordingPainter) {
			if self.pending_frame.take().is_none() {
				return;
			}
			if state.borrow_mut().frame(painter) == FrameOutcome::Continue {
				self.request_frame();
			}
		}
	}

	struct Listener {
		window: Rc<FakeWindow>,
		event: &'static str,
	}

	impl Registration for Listener {
		fn release(&mut self) {
			self.window.listeners.borrow_mut().remove(self.event);
			self.window.removed.borrow_mut().push(self.event);
		}
	}

	struct Frame {
		window: Rc<FakeWindow>,
	}

	impl Registration for Frame {
		fn release(&mut self) {
			if let Some(id) = self.window.pending_frame.take() {
				self.window.cancelled.borrow_mut().push(id);
			}
		}
	}

	/// Mounts a background against the fake window the same way the component
	/// does against the real one.
	fn mount(window: &Rc<FakeWindow>) -> (Rc<RefCell<BackgroundState>>, Teardown) {
		let state = Rc::new(RefCell::new(BackgroundState::new(
			Viewport::new(600.0, 600.0),
			SimulationSettings::default(),
			Theme::default(),
			fastrand::Rng::with_seed(17),
		)));
		let mut teardown = Teardown::new(state.clone());

		let on_resize = state.clone();
		window.listen(
			"resize",
			Box::new(move |w, h| {
				on_resize.borrow_mut().resize(Viewport::new(w, h));
			}),
		);
		teardown.register(Box::new(Listener {
			window: window.clone(),
			event: "resize",
		}));

		let on_move = state.clone();
		window.listen(
			"mousemove",
			Box::new(move |x, y| {
				on_move.borrow_mut().set_pointer(x, y);
			}),
		);
		teardown.register(Box::new(Listener {
			window: window.clone(),
			event: "mousemove",
		}));

		window.request_frame();
		teardown.register(Box::new(Frame {
			window: window.clone(),
		}));

		(state, teardown)
	}

	#[test]
	fn mounted_background_reacts_to_events_and_frames() {
		let window = Rc::new(FakeWindow::default());
		let (state, _teardown) = mount(&window);
		let mut painter = RecordingPainter::default();

		assert!(window.dispatch("mousemove", 40.0, 50.0));
		assert!(window.dispatch("resize", 1500.0, 1000.0));
		window.fire_frame(&state, &mut painter);
		window.fire_frame(&state, &mut painter);

		assert_eq!(state.borrow().pointer, (40.0, 50.0));
		assert_eq!(state.borrow().field.len(), 100);
		assert_eq!(state.borrow().frame_count(), 2);
		assert!(window.pending_frame.get().is_some());
	}

	#[test]
	fn unmount_removes_listeners_and_cancels_frame() {
		let window = Rc::new(FakeWindow::default());
		let (state, mut teardown) = mount(&window);
		let mut painter = RecordingPainter::default();
		window.fire_frame(&state, &mut painter);
		let pending = window.pending_frame.get();
		assert!(pending.is_some());

		assert!(teardown.run());

		assert!(window.listeners.borrow().is_empty());
		assert_eq!(*window.removed.borrow(), vec!["mousemove", "resize"]);
		assert_eq!(*window.cancelled.borrow(), vec![pending.unwrap_or_default()]);
		assert_eq!(window.pending_frame.get(), None);
		assert_eq!(teardown.pending(), 0);
		assert!(!state.borrow().is_active());
	}

	#[test]
	fn events_after_unmount_neither_reseed_nor_draw() {
		let window = Rc::new(FakeWindow::default());
		let (state, mut teardown) = mount(&window);
		let mut painter = RecordingPainter::default();
		window.fire_frame(&state, &mut painter);
		let drawn = painter.ops.len();
		let particles = state.borrow().field.particles.clone();

		teardown.run();

		assert!(!window.dispatch("resize", 1920.0, 1080.0));
		assert!(!window.dispatch("mousemove", 5.0, 5.0));
		window.fire_frame(&state, &mut painter);

		assert_eq!(painter.ops.len(), drawn);
		assert_eq!(state.borrow().field.particles, particles);
		assert_eq!(state.borrow().pointer, (0.0, 0.0));
		assert_eq!(window.pending_frame.get(), None);
	}

	#[test]
	fn second_teardown_releases_nothing() {
		let window = Rc::new(FakeWindow::default());
		let (_state, mut teardown) = mount(&window);

		assert!(teardown.run());
		assert!(teardown.is_done());
		assert!(!teardown.run());

		assert_eq!(window.removed.borrow().len(), 2);
		assert_eq!(window.cancelled.borrow().len(), 1);
	}

	#[test]
	fn registering_after_teardown_releases_at_once() {
		let window = Rc::new(FakeWindow::default());
		let (_state, mut teardown) = mount(&window);
		teardown.run();

		window.listen("resize", Box::new(|_, _| {}));
		teardown.register(Box::new(Listener {
			window: window.clone(),
			event: "resize",
		}));

		assert!(window.listeners.borrow().is_empty());
		assert_eq!(teardown.pending(), 0);
	}
}
