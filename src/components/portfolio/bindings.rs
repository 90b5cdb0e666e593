//! `.filter-btn` / `.project-card` wiring.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use web_sys::{Document, Element, Event, HtmlElement};

use super::filter::{ALL, CardView, PortfolioFilter};
use crate::config::FilterConfig;
use crate::dom::{self, Listener};

/// A project card element.
pub struct DomCard {
	el: HtmlElement,
	category: String,
}

impl DomCard {
	fn new(el: HtmlElement) -> Self {
		let category = el.get_attribute("data-category").unwrap_or_default();
		Self { el, category }
	}
}

impl CardView for DomCard {
	fn category(&self) -> &str {
		&self.category
	}

	fn begin_show(&self) {
		dom::set_style(&self.el, "display", "block");
		dom::set_style(&self.el, "opacity", "0");
		dom::set_style(&self.el, "transform", "translateY(20px)");
	}

	fn finish_show(&self) {
		dom::set_style(&self.el, "transition", "all 0.4s ease");
		dom::set_style(&self.el, "opacity", "1");
		dom::set_style(&self.el, "transform", "translateY(0)");
	}

	fn begin_hide(&self) {
		dom::set_style(&self.el, "transition", "all 0.3s ease");
		dom::set_style(&self.el, "opacity", "0");
		dom::set_style(&self.el, "transform", "scale(0.95)");
	}

	fn finish_hide(&self) {
		dom::set_style(&self.el, "display", "none");
	}
}

/// Filter buttons bound to the project grid.
pub struct PortfolioControls {
	_listeners: Vec<Listener>,
}

impl PortfolioControls {
	/// `None` when the page has no filter buttons or no cards.
	pub fn mount(document: &Document, config: &FilterConfig) -> Option<Self> {
		let buttons = dom::query_all(document, ".filter-btn");
		let cards: Vec<DomCard> = dom::query_all_html(document, ".project-card")
			.into_iter()
			.map(DomCard::new)
			.collect();
		if buttons.is_empty() || cards.is_empty() {
			debug!("portfolio-fx: no filter buttons or project cards");
			return None;
		}
		info!("portfolio-fx: {} project cards, {} filters", cards.len(), buttons.len());

		let filter = Rc::new(RefCell::new(PortfolioFilter::new(cards, config.clone())));
		let buttons = Rc::new(buttons);

		let listeners = buttons
			.iter()
			.map(|button| {
				let (filter, buttons, clicked) = (filter.clone(), buttons.clone(), button.clone());
				Listener::new(button, "click", move |_: Event| {
					select(&buttons, &clicked, &filter);
				})
			})
			.collect();

		Some(Self {
			_listeners: listeners,
		})
	}
}

fn select(buttons: &[Element], clicked: &Element, filter: &Rc<RefCell<PortfolioFilter<DomCard>>>) {
	for button in buttons {
		dom::set_class(button, "active", false);
	}
	dom::set_class(clicked, "active", true);

	let category = clicked
		.get_attribute("data-filter")
		.unwrap_or_else(|| ALL.to_string());
	let transitions = filter.borrow_mut().select(&category);
	for transition in transitions {
		let filter = filter.clone();
		// Stale timers are left to fire; `finish` ignores them.
		let _ = dom::after(transition.delay(), move || {
			filter.borrow().finish(&transition);
		});
	}
	debug!("portfolio-fx: filter {} shows {} cards", category, filter.borrow().visible().count());
}
