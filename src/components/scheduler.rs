//! Frame scheduling.
//!
//! Anything animated implements [`FrameTask`]. In the browser an
//! [`AnimationLoop`] drives it from `requestAnimationFrame`; in tests a
//! [`ManualScheduler`] feeds it synthetic ticks.

/// What a task wants after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
	/// Schedule another frame.
	Continue,
	/// Finished; do not call again.
	Done,
}

/// One step of an animation.
pub trait FrameTask {
	/// Run a frame at `now` milliseconds.
	fn frame(&mut self, now: f64) -> FrameControl;
}

impl<F: FnMut(f64) -> FrameControl> FrameTask for F {
	fn frame(&mut self, now: f64) -> FrameControl {
		self(now)
	}
}

/// Deterministic scheduler: frames run only when [`ManualScheduler::tick`] is called.
pub struct ManualScheduler<T> {
	task: T,
	running: bool,
	now: f64,
	frames: usize,
}

impl<T: FrameTask> ManualScheduler<T> {
	/// Stopped scheduler at time zero.
	pub fn new(task: T) -> Self {
		Self {
			task,
			running: false,
			now: 0.0,
			frames: 0,
		}
	}

	/// Let ticks run frames.
	pub fn start(&mut self) {
		self.running = true;
	}

	/// Ignore ticks until started again.
	pub fn stop(&mut self) {
		self.running = false;
	}

	/// Whether frames are still being requested.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Advance the clock by `dt` ms and run one frame if running.
	/// Returns whether a frame ran.
	pub fn tick(&mut self, dt: f64) -> bool {
		if !self.running {
			return false;
		}
		self.now += dt;
		self.frames += 1;
		if self.task.frame(self.now) == FrameControl::Done {
			self.running = false;
		}
		true
	}

	/// Tick until the task finishes or `max_frames` elapse; returns frames run.
	pub fn run_until_done(&mut self, dt: f64, max_frames: usize) -> usize {
		let start = self.frames;
		while self.frames - start < max_frames && self.tick(dt) {}
		self.frames - start
	}

	/// Frames run so far.
	pub fn frames(&self) -> usize {
		self.frames
	}

	/// The driven task.
	pub fn task(&self) -> &T {
		&self.task
	}

	/// The driven task.
	pub fn task_mut(&mut self) -> &mut T {
		&mut self.task
	}
}

#[cfg(target_arch = "wasm32")]
pub use browser::AnimationLoop;

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::cell::{Cell, RefCell};
	use std::rc::Rc;

	use leptos::leptos_dom::helpers::{AnimationFrameRequestHandle, request_animation_frame_with_handle};
	use log::warn;

	use super::{FrameControl, FrameTask};

	struct LoopState {
		running: Cell<bool>,
		pending: Cell<Option<AnimationFrameRequestHandle>>,
	}

	/// Drives a shared [`FrameTask`] once per display refresh until stopped or done.
	///
	/// Dropping the loop stops it.
	pub struct AnimationLoop {
		state: Rc<LoopState>,
	}

	impl AnimationLoop {
		/// Request the first frame for `task`.
		pub fn start<T: FrameTask + 'static>(task: Rc<RefCell<T>>) -> Self {
			let state = Rc::new(LoopState {
				running: Cell::new(true),
				pending: Cell::new(None),
			});
			schedule(task, state.clone());
			Self { state }
		}

		pub fn is_running(&self) -> bool {
			self.state.running.get()
		}

		/// Cancel the pending frame; the task is not called again.
		pub fn stop(&self) {
			self.state.running.set(false);
			if let Some(handle) = self.state.pending.take() {
				handle.cancel();
			}
		}
	}

	impl Drop for AnimationLoop {
		fn drop(&mut self) {
			self.stop();
		}
	}

	fn schedule<T: FrameTask + 'static>(task: Rc<RefCell<T>>, state: Rc<LoopState>) {
		let frame_state = state.clone();
		let request = request_animation_frame_with_handle(move || {
			frame_state.pending.set(None);
			if !frame_state.running.get() {
				return;
			}
			let control = task.borrow_mut().frame(js_sys::Date::now());
			match control {
				FrameControl::Continue => schedule(task, frame_state),
				FrameControl::Done => frame_state.running.set(false),
			}
		});

		match request {
			Ok(handle) => state.pending.set(Some(handle)),
			Err(e) => {
				warn!("portfolio-fx: requestAnimationFrame failed: {:?}", e);
				state.running.set(false);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ticks_are_ignored_until_started() {
		let mut calls = 0;
		let mut scheduler = ManualScheduler::new(|_now: f64| {
			calls += 1;
			FrameControl::Continue
		});
		assert!(!scheduler.tick(16.0));
		scheduler.start();
		assert!(scheduler.tick(16.0));
		assert!(scheduler.tick(16.0));
		scheduler.stop();
		assert!(!scheduler.tick(16.0));
		assert_eq!(scheduler.frames(), 2);
		drop(scheduler);
		assert_eq!(calls, 2);
	}

	#[test]
	fn clock_advances_by_tick_length() {
		let mut seen = Vec::new();
		let mut scheduler = ManualScheduler::new(|now: f64| {
			seen.push(now);
			FrameControl::Continue
		});
		scheduler.start();
		scheduler.run_until_done(10.0, 3);
		drop(scheduler);
		assert_eq!(seen, vec![10.0, 20.0, 30.0]);
	}

	#[test]
	fn done_stops_the_scheduler() {
		let mut remaining = 3;
		let mut scheduler = ManualScheduler::new(move |_now: f64| {
			remaining -= 1;
			if remaining == 0 {
				FrameControl::Done
			} else {
				FrameControl::Continue
			}
		});
		scheduler.start();
		assert_eq!(scheduler.run_until_done(16.0, 100), 3);
		assert!(!scheduler.is_running());
	}
}
