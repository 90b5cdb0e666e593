//! Fetches the page-view count into `#pageViews`.

use gloo_net::http::Request;
use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, Window};

use super::counter::{CounterDisplay, CounterResponse, TrafficError, check_status, counter_url};
use crate::config::TrafficConfig;
use crate::dom;

async fn fetch_count(url: &str) -> Result<u64, TrafficError> {
	let response = Request::get(url)
		.send()
		.await
		.map_err(|e| TrafficError::Network(e.to_string()))?;
	check_status(response.status())?;
	let body = response
		.json::<CounterResponse>()
		.await
		.map_err(|e| TrafficError::Decode(e.to_string()))?;
	Ok(body.count)
}

#[component]
fn ViewCounterBadge(count: String) -> impl IntoView {
	view! {
		<span class="view-counter-badge">
			<i class="fas fa-eye"></i>
			<span class="view-count-number">{count}</span>
		</span>
	}
}

fn show(el: HtmlElement, display: CounterDisplay) {
	match display {
		CounterDisplay::Visible(count) => {
			el.set_inner_html("");
			leptos::mount::mount_to(el.clone(), move || view! { <ViewCounterBadge count=count /> }).forget();
			dom::set_class(&el, "visible", true);
		}
		CounterDisplay::Hidden => dom::set_style(&el, "display", "none"),
	}
}

/// Fire the single counter request for this page, if the page has a counter.
///
/// No retry and no timeout: a hung request leaves the element as authored.
pub fn spawn_traffic_counter(window: &Window, document: &Document, config: &TrafficConfig) {
	let Some(el) = dom::html_by_id(document, "pageViews") else {
		return;
	};
	let pathname = window.location().pathname().unwrap_or_default();
	let url = counter_url(config, &pathname);

	spawn_local(async move {
		let result = fetch_count(&url).await;
		match &result {
			Ok(count) => info!("Traffic: {}", count),
			Err(e @ TrafficError::Status(_)) => warn!("portfolio-fx: {}", e),
			Err(e) => error!("portfolio-fx: {}", e),
		}
		show(el, CounterDisplay::from_result(&result));
	});
}
