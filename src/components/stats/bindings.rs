//! Starts the stat count-ups once `#stats` scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::{Document, Element, Event, Window};

use super::counter::{CountUp, CountUpTask, StatsTrigger, TextSink, parse_target};
use crate::components::scheduler::AnimationLoop;
use crate::config::StatsConfig;
use crate::dom::{self, Listener};

impl TextSink for Element {
	fn set_text(&mut self, text: &str) {
		self.set_text_content(Some(text));
	}
}

/// Armed stats counter; after it fires it owns one running loop per stat.
pub struct StatsCounter {
	animations: Rc<RefCell<Vec<AnimationLoop>>>,
	_listener: Listener,
}

impl StatsCounter {
	/// `None` when the page has no `.stat-number[data-count]`.
	pub fn mount(window: &Window, document: &Document, config: &StatsConfig) -> Option<Self> {
		let stats = dom::query_all(document, ".stat-number[data-count]");
		if stats.is_empty() {
			return None;
		}
		debug!("portfolio-fx: {} stat counters armed", stats.len());

		let animations = Rc::new(RefCell::new(Vec::new()));
		let mut trigger = StatsTrigger::new(config);
		let config = config.clone();
		let doc = document.clone();
		let running = animations.clone();

		let listener = Listener::new(window, "scroll", move |_: Event| {
			if trigger.has_fired() {
				return;
			}
			let (Some(win), Some(section)) = (web_sys::window(), doc.get_element_by_id("stats")) else {
				return;
			};
			let (_, viewport_h) = dom::viewport_size(&win);
			let top = section.get_bounding_client_rect().top();
			if trigger.check(top, viewport_h) {
				let started = stats.iter().filter_map(|el| start_count(el, &config));
				running.borrow_mut().extend(started);
			}
		});

		Some(Self {
			animations,
			_listener: listener,
		})
	}

	/// Ignore ticks until started again.
	pub fn stop(&self) {
		for animation in self.animations.borrow().iter() {
			animation.stop();
		}
	}
}

/// Returns `None` when the first frame already reached the target.
fn start_count(el: &Element, config: &StatsConfig) -> Option<AnimationLoop> {
	let raw = el.get_attribute("data-count").unwrap_or_default();
	let target = parse_target(&raw).unwrap_or_else(|| {
		warn!("portfolio-fx: data-count {:?} is not a number", raw);
		0
	});

	let mut task = CountUpTask {
		count: CountUp::new(target, config),
		sink: el.clone(),
	};
	// The first frame is drawn synchronously so the zero state never flashes.
	let first = task.count.step();
	task.sink.set_text(&first);

	if task.count.is_finished() {
		return None;
	}
	Some(AnimationLoop::start(Rc::new(RefCell::new(task))))
}
