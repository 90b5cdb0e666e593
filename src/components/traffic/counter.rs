//! Page-view counter backed by counterapi.dev.
//!
//! Each page has its own counter keyed by its path. Hitting the `/up`
//! endpoint increments and returns the new count in one request.

use std::fmt;

use serde::Deserialize;

use crate::config::TrafficConfig;
use crate::format::thousands;

/// Counter key for a document path: `/blog/post.html` -> `page__blog_post`.
pub fn page_key(pathname: &str) -> String {
	let flattened = pathname.replace('/', "_").replacen(".html", "", 1);
	if flattened.is_empty() {
		"page_home".to_string()
	} else {
		format!("page_{flattened}")
	}
}

/// Increment-and-read URL for `pathname`.
pub fn counter_url(config: &TrafficConfig, pathname: &str) -> String {
	format!(
		"{}/{}/{}/up",
		config.endpoint.trim_end_matches('/'),
		config.namespace,
		page_key(pathname)
	)
}

/// Response body of the `/up` endpoint. Other fields are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct CounterResponse {
	/// Count after this visit.
	pub count: u64,
}

/// Why no count could be shown.
#[derive(Debug)]
pub enum TrafficError {
	/// The API answered with a non-2xx status.
	Status(u16),
	/// The request never produced a response.
	Network(String),
	/// The body was not a counter response.
	Decode(String),
}

impl fmt::Display for TrafficError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Status(code) => write!(f, "traffic counter API returned HTTP {}", code),
			Self::Network(msg) => write!(f, "traffic counter request failed: {}", msg),
			Self::Decode(msg) => write!(f, "traffic counter response unreadable: {}", msg),
		}
	}
}

impl std::error::Error for TrafficError {}

/// Reject non-2xx answers before the body is decoded.
pub fn check_status(status: u16) -> Result<(), TrafficError> {
	if (200..300).contains(&status) {
		Ok(())
	} else {
		Err(TrafficError::Status(status))
	}
}

/// What the `#pageViews` element should end up as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterDisplay {
	/// Show the badge with this formatted count.
	Visible(String),
	/// Suppress the element entirely.
	Hidden,
}

impl CounterDisplay {
	/// Badge for a fetched count, hidden on any failure.
	pub fn from_result(result: &Result<u64, TrafficError>) -> Self {
		match result {
			Ok(count) => Self::Visible(thousands(*count)),
			Err(_) => Self::Hidden,
		}
	}
}
