//! portfolio-fx: client-side behaviour for a static portfolio site.
//!
//! This crate provides the WASM layer behind the page: a pointer-reactive
//! particle hero, scroll effects, a project filter, animated stats, a copy
//! button, a contact form stub and a per-page view counter.

pub mod components;
pub mod config;
#[cfg(target_arch = "wasm32")]
mod dom;
pub mod format;
#[cfg(target_arch = "wasm32")]
mod site;

pub use config::SiteConfig;
#[cfg(target_arch = "wasm32")]
pub use site::Site;

#[cfg(target_arch = "wasm32")]
pub use browser::{init_logging, load_site_config, start, teardown};

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::cell::RefCell;

	use log::{Level, debug, info};
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::{Document, HtmlScriptElement, Window};

	use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
	use crate::site::Site;

	thread_local! {
		static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
	}

	/// Initialize logging and panic hooks for the WASM target.
	pub fn init_logging() {
		let _ = console_log::init_with_level(Level::Debug);
		console_error_panic_hook::set_once();
		info!("portfolio-fx: logging initialized");
	}

	/// Load overrides from a script element with id="site-config".
	/// Expected format: JSON matching [`SiteConfig`], any subset of fields.
	pub fn load_site_config(document: &Document) -> SiteConfig {
		let Some(script) = document
			.get_element_by_id(CONFIG_ELEMENT_ID)
			.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
		else {
			debug!("portfolio-fx: no #{}, using defaults", CONFIG_ELEMENT_ID);
			return SiteConfig::default();
		};
		match script.text() {
			Ok(text) => SiteConfig::from_json(&text),
			Err(_) => SiteConfig::default(),
		}
	}

	fn mount(window: &Window, document: &Document) {
		let config = load_site_config(document);
		let site = Site::mount(window, document, &config);
		if let Some(previous) = SITE.with(|slot| slot.borrow_mut().replace(site)) {
			previous.teardown();
		}
	}

	/// Mount the site now, or once the DOM is parsed if it is still loading.
	pub fn start() {
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};

		if document.ready_state() != "loading" {
			mount(&window, &document);
			return;
		}

		let on_ready = Closure::once_into_js(move || {
			if let Some(document) = window.document() {
				mount(&window, &document);
			}
		});
		let _ = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
	}

	/// Remove everything [`start`] installed. Exposed to the page as `teardown()`.
	#[wasm_bindgen]
	pub fn teardown() {
		if let Some(site) = SITE.with(|slot| slot.borrow_mut().take()) {
			site.teardown();
		}
	}
}
