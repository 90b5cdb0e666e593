//! Scroll-position rules, free of any DOM access.

/// Vertical extent of a page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
	/// Element id, without `#`.
	pub id: String,
	/// Offset from the document top.
	pub top: f64,
	/// Rendered height.
	pub height: f64,
}

impl SectionBounds {
	/// Bounds for section `id`.
	pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
		Self {
			id: id.into(),
			top,
			height,
		}
	}

	fn contains(&self, position: f64) -> bool {
		position >= self.top && position < self.top + self.height
	}
}

/// Whether the navbar should be in its compact `scrolled` state.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
	scroll_y > threshold
}

/// Id of the section containing `scroll_y + offset`. The last match wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
	let position = scroll_y + offset;
	sections
		.iter()
		.rev()
		.find(|s| s.contains(position))
		.map(|s| s.id.as_str())
}

/// Whether a nav link `href` points at section `id`.
pub fn link_targets(href: &str, id: &str) -> bool {
	href.strip_prefix('#') == Some(id)
}

/// Scroll progress as a percentage in `[0, 100]`. A page that cannot scroll reads 0.
pub fn progress_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
	let scrollable = document_height - viewport_height;
	if scrollable <= 0.0 || !scrollable.is_finite() {
		return 0.0;
	}
	(scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Scroll offset that puts a target's top just below the navbar.
pub fn anchor_offset(target_top: f64, navbar_height: f64) -> f64 {
	target_top - navbar_height
}

/// One-way reveal state for a fixed list of elements.
#[derive(Clone, Debug)]
pub struct RevealTracker {
	revealed: Vec<bool>,
	reveal_point: f64,
}

impl RevealTracker {
	/// Track `len` elements, none revealed yet.
	pub fn new(len: usize, reveal_point: f64) -> Self {
		Self {
			revealed: vec![false; len],
			reveal_point,
		}
	}

	/// Check the viewport-relative `tops` of every element (same order as at
	/// construction) and return the indices revealed by this check.
	pub fn check<I>(&mut self, tops: I, viewport_height: f64) -> Vec<usize>
	where
		I: IntoIterator<Item = f64>,
	{
		let line = viewport_height - self.reveal_point;
		let mut newly = Vec::new();
		for (i, top) in tops.into_iter().enumerate() {
			let Some(revealed) = self.revealed.get_mut(i) else {
				break;
			};
			if !*revealed && top < line {
				*revealed = true;
				newly.push(i);
			}
		}
		newly
	}

	/// Out-of-range indices read as not revealed.
	pub fn is_revealed(&self, index: usize) -> bool {
		self.revealed.get(index).copied().unwrap_or(false)
	}

	/// Whether every element has been revealed.
	pub fn all_revealed(&self) -> bool {
		self.revealed.iter().all(|r| *r)
	}
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
	open: bool,
}

impl MobileMenu {
	/// Flip the menu; returns the new open state.
	pub fn toggle(&mut self) -> bool {
		self.open = !self.open;
		self.open
	}

	/// Close the menu; a closed menu stays closed.
	pub fn close(&mut self) {
		self.open = false;
	}

	/// Whether the menu is open.
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// `overflow` for `<body>`: scrolling is locked while the menu is open.
	pub fn body_overflow(&self) -> &'static str {
		if self.open { "hidden" } else { "" }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn page() -> Vec<SectionBounds> {
		vec![
			SectionBounds::new("home", 0.0, 800.0),
			SectionBounds::new("about", 800.0, 600.0),
			SectionBounds::new("projects", 1400.0, 1200.0),
		]
	}

	#[test]
	fn navbar_compacts_past_threshold() {
		assert!(!is_scrolled(0.0, 50.0));
		assert!(!is_scrolled(50.0, 50.0));
		assert!(is_scrolled(50.5, 50.0));
	}

	#[test]
	fn active_section_uses_offset_and_half_open_bounds() {
		let sections = page();
		assert_eq!(active_section(&sections, 0.0, 100.0), Some("home"));
		assert_eq!(active_section(&sections, 699.0, 100.0), Some("home"));
		assert_eq!(active_section(&sections, 700.0, 100.0), Some("about"));
		assert_eq!(active_section(&sections, 2500.0, 100.0), None);
	}

	#[test]
	fn overlapping_sections_pick_the_last() {
		let sections = vec![
			SectionBounds::new("a", 0.0, 1000.0),
			SectionBounds::new("b", 500.0, 1000.0),
		];
		assert_eq!(active_section(&sections, 600.0, 0.0), Some("b"));
	}

	#[test]
	fn links_match_by_fragment() {
		assert!(link_targets("#about", "about"));
		assert!(!link_targets("about", "about"));
		assert!(!link_targets("#about-me", "about"));
	}

	#[test]
	fn progress_edges() {
		assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
		assert_eq!(progress_percent(2000.0, 3000.0, 1000.0), 100.0);
		assert_eq!(progress_percent(500.0, 3000.0, 1000.0), 25.0);
		assert_eq!(progress_percent(0.0, 1000.0, 1000.0), 0.0);
		assert_eq!(progress_percent(2400.0, 3000.0, 1000.0), 100.0);
	}

	#[test]
	fn anchor_accounts_for_navbar() {
		assert_eq!(anchor_offset(1400.0, 72.0), 1328.0);
		assert_eq!(anchor_offset(1400.0, 0.0), 1400.0);
	}

	#[test]
	fn reveal_is_one_way() {
		let mut tracker = RevealTracker::new(3, 150.0);
		assert_eq!(tracker.check([100.0, 900.0, 2000.0], 1000.0), vec![0]);
		assert_eq!(tracker.check([-500.0, 849.0, 1500.0], 1000.0), vec![1]);
		// Scrolling back up never hides anything.
		assert!(tracker.check([600.0, 1400.0, 2500.0], 1000.0).is_empty());
		assert!(tracker.is_revealed(0) && tracker.is_revealed(1));
		assert!(!tracker.is_revealed(2));
		assert!(!tracker.all_revealed());
	}

	#[test]
	fn mobile_menu_locks_body_scroll_while_open() {
		let mut menu = MobileMenu::default();
		assert!(menu.toggle());
		assert_eq!(menu.body_overflow(), "hidden");
		menu.close();
		assert_eq!(menu.body_overflow(), "");
		assert!(menu.toggle());
		assert!(!menu.toggle());
	}

	proptest! {
		#[test]
		fn progress_is_monotone_and_bounded(
			doc in 1.0f64..20_000.0,
			view in 1.0f64..5_000.0,
			a in 0.0f64..20_000.0,
			b in 0.0f64..20_000.0,
		) {
			let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
			let p_lo = progress_percent(lo, doc, view);
			let p_hi = progress_percent(hi, doc, view);
			prop_assert!((0.0..=100.0).contains(&p_lo));
			prop_assert!(p_lo <= p_hi);
		}
	}
}
