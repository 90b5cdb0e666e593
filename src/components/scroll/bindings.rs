//! DOM wiring for navbar, progress bar, reveal and smooth scroll.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::effects::{
	MobileMenu, RevealTracker, SectionBounds, active_section, anchor_offset, is_scrolled, link_targets,
	progress_percent,
};
use crate::config::ScrollConfig;
use crate::dom::{self, Listener};

const ACTIVE: &str = "active";

/// Sticky navbar: `scrolled` state, active-link tracking and the mobile menu.
pub struct Navbar {
	_listeners: Vec<Listener>,
}

impl Navbar {
	/// `None` without a `#navbar`.
	pub fn mount(window: &Window, document: &Document, config: &ScrollConfig) -> Option<Self> {
		let Some(navbar) = document.get_element_by_id("navbar") else {
			debug!("portfolio-fx: no #navbar");
			return None;
		};
		let mut listeners = Vec::new();

		let links = dom::query_all(document, ".nav-link");
		let threshold = config.scrolled_threshold;
		let offset = config.section_offset;
		let doc = document.clone();
		listeners.push(Listener::new(window, "scroll", move |_: Event| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let y = dom::scroll_y(&win);
			dom::set_class(&navbar, "scrolled", is_scrolled(y, threshold));
			highlight_active_link(&doc, &links, y, offset);
		}));

		if let Some(menu) = mount_mobile_menu(document) {
			listeners.extend(menu);
		}

		Some(Self {
			_listeners: listeners,
		})
	}
}

fn section_bounds(document: &Document) -> Vec<SectionBounds> {
	dom::query_all_html(document, "section[id]")
		.into_iter()
		.map(|s| SectionBounds::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
		.collect()
}

fn highlight_active_link(document: &Document, links: &[Element], scroll_y: f64, offset: f64) {
	let sections = section_bounds(document);
	let Some(active) = active_section(&sections, scroll_y, offset) else {
		return;
	};
	for link in links {
		let href = link.get_attribute("href").unwrap_or_default();
		dom::set_class(link, ACTIVE, link_targets(&href, active));
	}
}

fn mount_mobile_menu(document: &Document) -> Option<Vec<Listener>> {
	let toggle = document.get_element_by_id("mobileMenuToggle")?;
	let menu_el = document.get_element_by_id("mobileMenu")?;
	let body = document.body()?;
	let state = Rc::new(Cell::new(MobileMenu::default()));

	let apply = {
		let (toggle, menu_el, body) = (toggle.clone(), menu_el.clone(), body.clone());
		move |menu: MobileMenu| {
			dom::set_class(&toggle, ACTIVE, menu.is_open());
			dom::set_class(&menu_el, ACTIVE, menu.is_open());
			dom::set_style(&body, "overflow", menu.body_overflow());
		}
	};

	let mut listeners = Vec::new();
	{
		let (state, apply) = (state.clone(), apply.clone());
		listeners.push(Listener::new(&toggle, "click", move |_: Event| {
			let mut menu = state.get();
			menu.toggle();
			state.set(menu);
			apply(menu);
		}));
	}

	let inner_links = menu_el.query_selector_all(".nav-link").ok()?;
	for i in 0..inner_links.length() {
		let Some(link) = inner_links.get(i) else {
			continue;
		};
		let (state, apply) = (state.clone(), apply.clone());
		listeners.push(Listener::new(&link, "click", move |_: Event| {
			let mut menu = state.get();
			menu.close();
			state.set(menu);
			apply(menu);
		}));
	}

	Some(listeners)
}

/// Width of `#scrollProgress` tracks how far down the page the reader is.
pub struct ScrollProgress {
	_listener: Listener,
}

impl ScrollProgress {
	/// `None` without a `#scrollProgress` bar.
	pub fn mount(window: &Window, document: &Document) -> Option<Self> {
		let bar = dom::html_by_id(document, "scrollProgress")?;
		let doc = document.clone();
		let listener = Listener::new(window, "scroll", move |_: Event| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (_, viewport_h) = dom::viewport_size(&win);
			let pct = progress_percent(dom::scroll_y(&win), dom::document_height(&doc), viewport_h);
			dom::set_style(&bar, "width", &format!("{pct}%"));
		});
		Some(Self { _listener: listener })
	}
}

const REVEAL_SELECTOR: &str = ".reveal, .reveal-left, .reveal-right, .reveal-scale, .stagger-reveal";

/// Adds `revealed` to tracked elements as they scroll into view.
pub struct ScrollReveal {
	_listener: Listener,
}

impl ScrollReveal {
	/// `None` when nothing on the page is marked for reveal.
	pub fn mount(window: &Window, document: &Document, config: &ScrollConfig) -> Option<Self> {
		let elements = dom::query_all(document, REVEAL_SELECTOR);
		if elements.is_empty() {
			return None;
		}
		let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len(), config.reveal_point)));
		let elements = Rc::new(elements);

		let check = {
			let (tracker, elements) = (tracker.clone(), elements.clone());
			move |win: &Window| {
				let (_, viewport_h) = dom::viewport_size(win);
				let tops = elements.iter().map(|el| el.get_bounding_client_rect().top());
				for i in tracker.borrow_mut().check(tops, viewport_h) {
					dom::set_class(&elements[i], "revealed", true);
				}
			}
		};

		check(window);
		let listener = Listener::new(window, "scroll", move |_: Event| {
			if let Some(win) = web_sys::window() {
				check(&win);
			}
		});
		debug!("portfolio-fx: tracking {} reveal elements", elements.len());
		Some(Self { _listener: listener })
	}
}

/// Animated scrolling for in-page `#fragment` links.
pub struct SmoothScroll {
	_listeners: Vec<Listener>,
}

impl SmoothScroll {
	/// Hook every `a[href^="#"]` on the page.
	pub fn mount(document: &Document) -> Self {
		let listeners = dom::query_all(document, "a[href^=\"#\"]")
			.into_iter()
			.map(|anchor| {
				let href = anchor.get_attribute("href").unwrap_or_default();
				Listener::new(&anchor, "click", move |ev: Event| {
					ev.prevent_default();
					scroll_to_fragment(&href);
				})
			})
			.collect();
		Self {
			_listeners: listeners,
		}
	}
}

fn scroll_to_fragment(href: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	let Some(target) = document
		.query_selector(href)
		.ok()
		.flatten()
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	else {
		return;
	};

	let navbar_height = dom::html_by_id(&document, "navbar")
		.map(|nav| nav.offset_height() as f64)
		.unwrap_or(0.0);

	let options = ScrollToOptions::new();
	options.set_top(anchor_offset(target.offset_top() as f64, navbar_height));
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}
