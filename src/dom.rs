//! Browser glue shared by the component bindings.

use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

/// An event listener that unregisters itself when dropped.
pub struct Listener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
	pub fn new<E, F>(target: &EventTarget, event: &'static str, mut handler: F) -> Self
	where
		E: JsCast + 'static,
		F: FnMut(E) + 'static,
	{
		let callback =
			Closure::<dyn FnMut(Event)>::new(move |ev: Event| handler(ev.unchecked_into::<E>()));
		if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
			warn!("portfolio-fx: failed to listen for {}: {:?}", event, e);
		}
		Self {
			target: target.clone(),
			event,
			callback,
		}
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

/// Run `cb` after `delay`, returning a handle that can cancel it.
pub fn after(delay: Duration, cb: impl FnOnce() + 'static) -> Option<TimeoutHandle> {
	match set_timeout_with_handle(cb, delay) {
		Ok(handle) => Some(handle),
		Err(e) => {
			warn!("portfolio-fx: setTimeout failed: {:?}", e);
			None
		}
	}
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
	let Ok(nodes) = root.query_selector_all(selector) else {
		warn!("portfolio-fx: bad selector {:?}", selector);
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|i| nodes.get(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Like [`query_all`], keeping only HTML elements.
pub fn query_all_html(root: &Document, selector: &str) -> Vec<HtmlElement> {
	query_all(root, selector)
		.into_iter()
		.filter_map(|el| el.dyn_into::<HtmlElement>().ok())
		.collect()
}

pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
	document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn scroll_y(window: &Window) -> f64 {
	window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
	let width = window
		.inner_width()
		.ok()
		.and_then(|value| value.as_f64())
		.unwrap_or(0.0);
	let height = window
		.inner_height()
		.ok()
		.and_then(|value| value.as_f64())
		.unwrap_or(0.0);
	(width, height)
}

pub fn document_height(document: &Document) -> f64 {
	document
		.document_element()
		.map(|root| root.scroll_height() as f64)
		.unwrap_or(0.0)
}

pub fn set_class(el: &Element, class: &str, on: bool) {
	let classes = el.class_list();
	let _ = if on {
		classes.add_1(class)
	} else {
		classes.remove_1(class)
	};
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
	let _ = el.style().set_property(property, value);
}
