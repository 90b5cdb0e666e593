//! Category filter over a fixed set of project cards.
//!
//! A filter change happens in two phases per card: an immediate `begin_*`
//! and, once its delay elapses, a `finish_*`. Each change bumps the card's
//! generation, so a delayed finish from an earlier change is dropped.

use std::time::Duration;

use crate::config::FilterConfig;

/// Filter key that matches every card.
pub const ALL: &str = "all";

/// Whether a card tagged `category` passes `filter`.
pub fn matches(filter: &str, category: &str) -> bool {
	filter == ALL || filter == category
}

/// A project card the filter can show or hide.
pub trait CardView {
	/// The card's `data-category`.
	fn category(&self) -> &str;
	/// Bring the card back into layout in its pre-entrance state.
	fn begin_show(&self);
	/// Play the entrance.
	fn finish_show(&self);
	/// Start fading the card out.
	fn begin_hide(&self);
	/// Drop the card from layout.
	fn finish_hide(&self);
}

/// What a filter change did to one card, and when its second phase is due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardTransition {
	/// Fade in after `delay`.
	Show {
		/// Card position in document order.
		index: usize,
		/// Stagger before the entrance.
		delay: Duration,
		/// Card generation this transition belongs to.
		generation: u64,
	},
	/// Remove from layout after `removal_delay`.
	Hide {
		/// Card position in document order.
		index: usize,
		/// Time the fade-out gets before removal.
		removal_delay: Duration,
		/// Card generation this transition belongs to.
		generation: u64,
	},
}

impl CardTransition {
	/// Card the transition applies to.
	pub fn index(&self) -> usize {
		match *self {
			Self::Show { index, .. } | Self::Hide { index, .. } => index,
		}
	}

	/// Wait before [`PortfolioFilter::finish`] should run.
	pub fn delay(&self) -> Duration {
		match *self {
			Self::Show { delay, .. } => delay,
			Self::Hide { removal_delay, .. } => removal_delay,
		}
	}

	/// Generation [`PortfolioFilter::finish`] checks against.
	pub fn generation(&self) -> u64 {
		match *self {
			Self::Show { generation, .. } | Self::Hide { generation, .. } => generation,
		}
	}
}

/// Active category plus visibility and generation per card.
pub struct PortfolioFilter<C> {
	active: String,
	cards: Vec<C>,
	visible: Vec<bool>,
	generations: Vec<u64>,
	config: FilterConfig,
}

impl<C: CardView> PortfolioFilter<C> {
	/// Start with every card visible under [`ALL`].
	pub fn new(cards: Vec<C>, config: FilterConfig) -> Self {
		let visible = vec![true; cards.len()];
		let generations = vec![0; cards.len()];
		Self {
			active: ALL.to_string(),
			cards,
			visible,
			generations,
			config,
		}
	}

	/// Category selected last.
	pub fn active(&self) -> &str {
		&self.active
	}

	/// Cards in document order.
	pub fn cards(&self) -> &[C] {
		&self.cards
	}

	/// Out-of-range indices read as hidden.
	pub fn is_visible(&self, index: usize) -> bool {
		self.visible.get(index).copied().unwrap_or(false)
	}

	/// Indices of cards visible under the active filter.
	pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
		self.visible
			.iter()
			.enumerate()
			.filter_map(|(i, shown)| shown.then_some(i))
	}

	/// Switch to `category` and begin a transition on every card.
	///
	/// Every card gets a transition, even one whose visibility is unchanged,
	/// so shown cards replay their staggered entrance. The caller runs
	/// [`Self::finish`] for each returned transition after its delay.
	pub fn select(&mut self, category: &str) -> Vec<CardTransition> {
		self.active = category.to_string();

		let mut transitions = Vec::with_capacity(self.cards.len());
		for (index, card) in self.cards.iter().enumerate() {
			let shown = matches(&self.active, card.category());
			self.visible[index] = shown;
			self.generations[index] += 1;
			let generation = self.generations[index];

			let transition = if shown {
				card.begin_show();
				CardTransition::Show {
					index,
					delay: self.config.stagger(index),
					generation,
				}
			} else {
				card.begin_hide();
				CardTransition::Hide {
					index,
					removal_delay: self.config.hide_delay(),
					generation,
				}
			};
			transitions.push(transition);
		}
		transitions
	}

	/// Complete `transition` unless a later [`Self::select`] superseded it.
	/// Returns whether the card was touched.
	pub fn finish(&self, transition: &CardTransition) -> bool {
		let index = transition.index();
		let (Some(card), Some(&current)) = (self.cards.get(index), self.generations.get(index)) else {
			return false;
		};
		if current != transition.generation() {
			return false;
		}
		match transition {
			CardTransition::Show { .. } => card.finish_show(),
			CardTransition::Hide { .. } => card.finish_hide(),
		}
		true
	}
}
