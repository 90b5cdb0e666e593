//! One-shot count-up animation for the stats strip.

use crate::components::scheduler::{FrameControl, FrameTask};
use crate::config::StatsConfig;
use crate::format::thousands;

/// Fires once, the first time the stats section rises far enough into view.
#[derive(Clone, Debug)]
pub struct StatsTrigger {
	offset: f64,
	fired: bool,
}

impl StatsTrigger {
	/// Armed trigger for the stats section.
	pub fn new(config: &StatsConfig) -> Self {
		Self {
			offset: config.trigger_offset,
			fired: false,
		}
	}

	/// Returns `true` exactly once: on the first call where the section's
	/// viewport-relative `section_top` is above `viewport_height - offset`.
	pub fn check(&mut self, section_top: f64, viewport_height: f64) -> bool {
		if self.fired || section_top >= viewport_height - self.offset {
			return false;
		}
		self.fired = true;
		true
	}

	/// Whether the counters have been started.
	pub fn has_fired(&self) -> bool {
		self.fired
	}
}

/// Leading decimal digits of `raw`, the way a `data-count` attribute is read.
pub fn parse_target(raw: &str) -> Option<u64> {
	let trimmed = raw.trim_start();
	let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
	let end = unsigned
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(unsigned.len());
	unsigned[..end].parse().ok()
}

/// Count from zero to `target` in fixed per-frame increments.
#[derive(Clone, Debug)]
pub struct CountUp {
	target: u64,
	increment: f64,
	current: f64,
	finished: bool,
}

impl CountUp {
	/// Count from zero to `target`.
	pub fn new(target: u64, config: &StatsConfig) -> Self {
		Self {
			target,
			increment: target as f64 / config.frames(),
			current: 0.0,
			finished: false,
		}
	}

	/// Advance one frame and return the text to display.
	pub fn step(&mut self) -> String {
		if !self.finished {
			self.current += self.increment;
			// A non-positive increment would never arrive.
			if self.current >= self.target as f64 || self.increment <= 0.0 {
				self.finished = true;
			}
		}
		self.text()
	}

	/// Text for the current value.
	pub fn text(&self) -> String {
		if self.finished {
			format!("{}+", thousands(self.target))
		} else {
			thousands(self.current.floor() as u64)
		}
	}

	/// Whether the final text has been produced.
	pub fn is_finished(&self) -> bool {
		self.finished
	}
}

/// Something that can display a counter's text.
pub trait TextSink {
	/// Replace the displayed text.
	fn set_text(&mut self, text: &str);
}

impl TextSink for String {
	fn set_text(&mut self, text: &str) {
		self.clear();
		self.push_str(text);
	}
}

/// A [`CountUp`] bound to where its text goes.
pub struct CountUpTask<S> {
	/// The count being shown.
	pub count: CountUp,
	/// Where each frame's text goes.
	pub sink: S,
}

impl<S: TextSink> FrameTask for CountUpTask<S> {
	fn frame(&mut self, _now: f64) -> FrameControl {
		let text = self.count.step();
		self.sink.set_text(&text);
		if self.count.is_finished() {
			FrameControl::Done
		} else {
			FrameControl::Continue
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::scheduler::ManualScheduler;
	use proptest::prelude::*;

	#[test]
	fn trigger_fires_once() {
		let mut trigger = StatsTrigger::new(&StatsConfig::default());
		assert!(!trigger.check(950.0, 1000.0));
		assert!(!trigger.check(900.0, 1000.0));
		assert!(trigger.check(899.0, 1000.0));
		assert!(!trigger.check(100.0, 1000.0));
		assert!(!trigger.check(-400.0, 1000.0));
		assert!(trigger.has_fired());
	}

	#[test]
	fn parses_like_a_data_attribute() {
		assert_eq!(parse_target("150"), Some(150));
		assert_eq!(parse_target(" 50+"), Some(50));
		assert_eq!(parse_target("1,200"), Some(1));
		assert_eq!(parse_target("+7"), Some(7));
		assert_eq!(parse_target("lots"), None);
		assert_eq!(parse_target(""), None);
	}

	#[test]
	fn count_up_finishes_with_plus_suffix() {
		let mut scheduler = ManualScheduler::new(CountUpTask {
			count: CountUp::new(1234, &StatsConfig::default()),
			sink: String::new(),
		});
		scheduler.start();
		let frames = scheduler.run_until_done(16.0, 1000);

		// 2000ms / 16ms per frame, give or take float accumulation.
		assert!((125..=126).contains(&frames));
		assert!(!scheduler.is_running());
		assert_eq!(scheduler.task().sink, "1,234+");
	}

	#[test]
	fn intermediate_frames_floor_and_group() {
		let mut count = CountUp::new(12_500, &StatsConfig::default());
		assert_eq!(count.step(), "100");
		for _ in 0..9 {
			count.step();
		}
		assert_eq!(count.text(), "1,000");
	}

	#[test]
	fn zero_target_finishes_immediately() {
		let mut count = CountUp::new(0, &StatsConfig::default());
		assert_eq!(count.step(), "0+");
		assert!(count.is_finished());
	}

	proptest! {
		#[test]
		fn text_never_decreases_and_ends_at_target(target in 0u64..10_000_000) {
			let mut count = CountUp::new(target, &StatsConfig::default());
			let mut last = 0u64;
			for _ in 0..200 {
				let text = count.step();
				if count.is_finished() {
					prop_assert_eq!(text, format!("{}+", thousands(target)));
					break;
				}
				let shown: u64 = text.replace(',', "").parse().unwrap();
				prop_assert!(shown >= last && shown < target);
				last = shown;
			}
			prop_assert!(count.is_finished());
		}
	}
}
