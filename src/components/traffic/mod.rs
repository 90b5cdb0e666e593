//! Per-page view counter.

#[cfg(target_arch = "wasm32")]
mod bindings;
mod counter;

#[cfg(target_arch = "wasm32")]
pub use bindings::spawn_traffic_counter;
pub use counter::{CounterDisplay, CounterResponse, TrafficError, check_status, counter_url, page_key};
