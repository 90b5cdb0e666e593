//! Copy-email button and the static contact form.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use js_sys::{Array, Function, Promise, Reflect};
use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Event, FormData, HtmlDocument, HtmlElement, HtmlFormElement, HtmlTextAreaElement, Window};

use super::feedback::{ACKNOWLEDGEMENT, COPIED_CLASS, CopyFeedback, describe_fields};
use crate::config::CopyConfig;
use crate::dom::{self, Listener};

/// Global the page's `onclick` handler calls.
const COPY_GLOBAL: &str = "copyEmail";

/// Exposes `window.copyEmail()`, which copies `#emailAddress` and flashes `#copyEmail`.
pub struct CopyButton {
	window: Window,
	_callback: Closure<dyn FnMut()>,
}

impl CopyButton {
	/// Install `window.copyEmail`; removed again on drop.
	pub fn mount(window: &Window, config: &CopyConfig) -> Self {
		let feedback = Rc::new(RefCell::new(CopyFeedback::default()));
		let delay = Duration::from_millis(config.feedback_ms);
		let callback = Closure::<dyn FnMut()>::new(move || copy_email(feedback.clone(), delay));

		if let Err(e) = Reflect::set(window, &JsValue::from_str(COPY_GLOBAL), callback.as_ref()) {
			error!("portfolio-fx: could not expose {}: {:?}", COPY_GLOBAL, e);
		}
		Self {
			window: window.clone(),
			_callback: callback,
		}
	}
}

impl Drop for CopyButton {
	fn drop(&mut self) {
		let _ = Reflect::delete_property(&self.window, &JsValue::from_str(COPY_GLOBAL));
	}
}

fn copy_email(feedback: Rc<RefCell<CopyFeedback>>, delay: Duration) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let (Some(address), Some(button)) = (
		document.get_element_by_id("emailAddress"),
		dom::html_by_id(&document, "copyEmail"),
	) else {
		return;
	};
	let text = address.text_content().unwrap_or_default();

	spawn_local(async move {
		if let Err(e) = write_clipboard(&text).await {
			error!("portfolio-fx: failed to copy: {:?}", e);
			legacy_copy(&document, &text);
		}
		flash_copied(&button, &feedback, delay);
	});
}

async fn write_clipboard(text: &str) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let navigator: JsValue = window.navigator().into();
	let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
	let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
	let promise: Promise = write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
	JsFuture::from(promise).await?;
	Ok(())
}

/// Copy through a throwaway `<textarea>` and `execCommand`, for browsers
/// without the async clipboard.
fn legacy_copy(document: &Document, text: &str) {
	let Some(body) = document.body() else {
		return;
	};
	let Some(area) = document
		.create_element("textarea")
		.ok()
		.and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
	else {
		return;
	};
	area.set_value(text);
	if body.append_child(&area).is_err() {
		return;
	}
	area.select();
	if let Err(e) = document.unchecked_ref::<HtmlDocument>().exec_command("copy") {
		error!("portfolio-fx: execCommand copy failed: {:?}", e);
	}
	let _ = body.remove_child(&area);
}

fn flash_copied(button: &HtmlElement, feedback: &Rc<RefCell<CopyFeedback>>, delay: Duration) {
	let generation = {
		let mut state = feedback.borrow_mut();
		let generation = state.copied();
		button.set_text_content(Some(state.label()));
		generation
	};
	dom::set_class(button, COPIED_CLASS, true);

	let (button, feedback) = (button.clone(), feedback.clone());
	dom::after(delay, move || {
		let mut state = feedback.borrow_mut();
		if state.revert(generation) {
			button.set_text_content(Some(state.label()));
			dom::set_class(&button, COPIED_CLASS, false);
		}
	});
}

/// `#contactForm`: acknowledges locally and resets. Nothing is submitted.
pub struct ContactForm {
	_listener: Listener,
}

impl ContactForm {
	/// `None` without a `#contactForm`.
	pub fn mount(document: &Document) -> Option<Self> {
		let form = document
			.get_element_by_id("contactForm")?
			.dyn_into::<HtmlFormElement>()
			.ok()?;

		let target = form.clone();
		let listener = Listener::new(&target, "submit", move |ev: Event| {
			ev.prevent_default();
			debug!("portfolio-fx: contact form with {}", describe_fields(field_names(&form)));
			if let Some(win) = web_sys::window() {
				let _ = win.alert_with_message(ACKNOWLEDGEMENT);
			}
			form.reset();
		});
		Some(Self { _listener: listener })
	}
}

fn field_names(form: &HtmlFormElement) -> Vec<String> {
	let Ok(data) = FormData::new_with_form(form) else {
		return Vec::new();
	};
	let Ok(Some(entries)) = js_sys::try_iter(&data) else {
		return Vec::new();
	};
	entries
		.filter_map(Result::ok)
		.filter_map(|entry| Array::from(&entry).get(0).as_string())
		.collect()
}
