//! Site-wide tunables.
//!
//! Every value defaults to what the stock site ships with. A page may override
//! any subset by embedding JSON in a `<script id="site-config">` element; see
//! [`SiteConfig::from_json`].

use std::time::Duration;

use log::warn;
use serde::Deserialize;

use crate::components::particles::{Color, violet_palette};

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Complete configuration, one group per component.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Particle hero.
	pub particles: ParticleConfig,
	/// Navbar, progress bar and reveal.
	pub scroll: ScrollConfig,
	/// Project card filter timings.
	pub filter: FilterConfig,
	/// Stat count-up.
	pub stats: StatsConfig,
	/// Copy-email button.
	pub copy: CopyConfig,
	/// Page-view counter.
	pub traffic: TrafficConfig,
}

impl SiteConfig {
	/// Parse overrides, falling back to defaults on malformed input.
	pub fn from_json(text: &str) -> Self {
		match serde_json::from_str::<SiteConfig>(text) {
			Ok(config) => config,
			Err(e) => {
				warn!("portfolio-fx: ignoring malformed site config: {}", e);
				Self::default()
			}
		}
	}
}

/// Particle hero configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
	/// Id of the `<canvas>` to draw on.
	pub canvas_id: String,
	/// Upper bound on the particle count regardless of canvas area.
	pub max_count: usize,
	/// Canvas pixels per particle.
	pub area_per_particle: f64,
	/// Smallest disc radius, in pixels.
	pub min_radius: f64,
	/// Largest disc radius (exclusive), in pixels.
	pub max_radius: f64,
	/// Velocity components are drawn from `[-speed/2, speed/2)`.
	pub speed: f64,
	/// Lower bound of per-particle opacity.
	pub min_opacity: f64,
	/// Upper bound (exclusive) of per-particle opacity.
	pub max_opacity: f64,
	/// Pairs closer than this are joined by a line.
	pub line_distance: f64,
	/// Stroke width of link lines.
	pub line_width: f64,
	/// Line opacity at distance zero.
	pub line_max_opacity: f64,
	/// Link line colour; its alpha is replaced per link.
	pub line_color: Color,
	/// Particles inside this distance of the pointer are pushed away.
	pub pointer_radius: f64,
	/// Displacement per frame at the pointer, falling off linearly to zero at `pointer_radius`.
	pub pointer_force: f64,
	/// Shadow blur of the glow pass.
	pub glow_blur: f64,
	/// Particle colours, picked uniformly. Must not be empty to spawn anything.
	pub palette: Vec<Color>,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			canvas_id: "particles-canvas".into(),
			max_count: 80,
			area_per_particle: 15_000.0,
			min_radius: 1.0,
			max_radius: 3.0,
			speed: 0.5,
			min_opacity: 0.3,
			max_opacity: 0.8,
			line_distance: 150.0,
			line_width: 0.5,
			line_max_opacity: 0.3,
			line_color: Color::rgb(139, 92, 246),
			pointer_radius: 150.0,
			pointer_force: 2.0,
			glow_blur: 15.0,
			palette: violet_palette(),
		}
	}
}

/// Navbar, progress bar and reveal thresholds, all in CSS pixels.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
	/// Scroll offset past which the navbar gets its `scrolled` class.
	pub scrolled_threshold: f64,
	/// Added to the scroll offset when picking the active section.
	pub section_offset: f64,
	/// Distance above the viewport bottom at which elements reveal.
	pub reveal_point: f64,
}

impl Default for ScrollConfig {
	fn default() -> Self {
		Self {
			scrolled_threshold: 50.0,
			section_offset: 100.0,
			reveal_point: 150.0,
		}
	}
}

/// Portfolio filter timings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
	/// Per-card delay before a shown card fades in.
	pub stagger_ms: u64,
	/// Delay before a hidden card leaves the layout.
	pub hide_delay_ms: u64,
}

impl FilterConfig {
	/// Entrance delay for the card at `index`.
	pub fn stagger(&self, index: usize) -> Duration {
		Duration::from_millis(self.stagger_ms.saturating_mul(index as u64))
	}

	pub fn hide_delay(&self) -> Duration {
		Duration::from_millis(self.hide_delay_ms)
	}
}

impl Default for FilterConfig {
	fn default() -> Self {
		Self {
			stagger_ms: 50,
			hide_delay_ms: 300,
		}
	}
}

/// Count-up animation for `.stat-number` elements.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
	/// Planned length of the count-up.
	pub duration_ms: f64,
	/// Assumed frame length used to size each increment.
	pub frame_interval_ms: f64,
	/// The counters fire once the stats section is this far above the viewport bottom.
	pub trigger_offset: f64,
}

impl StatsConfig {
	/// Number of frames the count-up is planned to take.
	pub fn frames(&self) -> f64 {
		self.duration_ms / self.frame_interval_ms
	}
}

impl Default for StatsConfig {
	fn default() -> Self {
		Self {
			duration_ms: 2000.0,
			frame_interval_ms: 16.0,
			trigger_offset: 100.0,
		}
	}
}

/// Copy-email button.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
	/// How long the button reads "Copied!".
	pub feedback_ms: u64,
}

impl Default for CopyConfig {
	fn default() -> Self {
		Self { feedback_ms: 2000 }
	}
}

/// Remote page-view counter.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TrafficConfig {
	/// Counter API base URL, without a trailing slash.
	pub endpoint: String,
	/// Counter namespace the per-page keys live under.
	pub namespace: String,
}

impl Default for TrafficConfig {
	fn default() -> Self {
		Self {
			endpoint: "https://api.counterapi.dev/v1".into(),
			namespace: "snixrs-portfolio".into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_yields_defaults() {
		let config = SiteConfig::from_json("{}");
		assert_eq!(config.particles.max_count, 80);
		assert_eq!(config.scroll.reveal_point, 150.0);
		assert_eq!(config.traffic.namespace, "snixrs-portfolio");
	}

	#[test]
	fn partial_overrides_keep_other_defaults() {
		let config = SiteConfig::from_json(
			r##"{ "particles": { "max_count": 20, "palette": ["#ffffff"] }, "filter": { "stagger_ms": 10 } }"##,
		);
		assert_eq!(config.particles.max_count, 20);
		assert_eq!(config.particles.palette, vec![Color::rgb(255, 255, 255)]);
		assert_eq!(config.particles.line_distance, 150.0);
		assert_eq!(config.filter.stagger(3), Duration::from_millis(30));
		assert_eq!(config.filter.hide_delay(), Duration::from_millis(300));
	}

	#[test]
	fn malformed_json_falls_back() {
		let config = SiteConfig::from_json("{ not json");
		assert_eq!(config.stats.duration_ms, 2000.0);
		let config = SiteConfig::from_json(r#"{ "particles": { "line_color": "purple" } }"#);
		assert_eq!(config.particles.line_color, Color::rgb(139, 92, 246));
	}

	#[test]
	fn stats_frames_from_duration() {
		assert_eq!(StatsConfig::default().frames(), 125.0);
	}
}
