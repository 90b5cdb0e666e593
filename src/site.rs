//! Owns every mounted component for the lifetime of the page.

use log::info;
use web_sys::{Document, Window};

use crate::components::contact::{ContactForm, CopyButton};
use crate::components::particles::ParticleCanvas;
use crate::components::portfolio::PortfolioControls;
use crate::components::scroll::{Navbar, ScrollProgress, ScrollReveal, SmoothScroll};
use crate::components::stats::StatsCounter;
use crate::components::traffic::spawn_traffic_counter;
use crate::config::SiteConfig;
use crate::dom;

/// All page behaviour. Components whose elements are missing stay `None`.
pub struct Site {
	particles: Option<ParticleCanvas>,
	navbar: Option<Navbar>,
	progress: Option<ScrollProgress>,
	reveal: Option<ScrollReveal>,
	_smooth_scroll: SmoothScroll,
	portfolio: Option<PortfolioControls>,
	stats: Option<StatsCounter>,
	contact: Option<ContactForm>,
	_copy: CopyButton,
}

impl Site {
	/// Mount every component against the current document.
	pub fn mount(window: &Window, document: &Document, config: &SiteConfig) -> Self {
		let seed = js_sys::Date::now() as u64;

		let site = Self {
			particles: ParticleCanvas::mount(window, document, &config.particles, seed),
			navbar: Navbar::mount(window, document, &config.scroll),
			progress: ScrollProgress::mount(window, document),
			reveal: ScrollReveal::mount(window, document, &config.scroll),
			_smooth_scroll: SmoothScroll::mount(document),
			portfolio: PortfolioControls::mount(document, &config.filter),
			stats: StatsCounter::mount(window, document, &config.stats),
			contact: ContactForm::mount(document),
			_copy: CopyButton::mount(window, &config.copy),
		};
		spawn_traffic_counter(window, document, &config.traffic);

		if let Some(body) = document.body() {
			dom::set_class(&body, "loaded", true);
		}
		info!("portfolio-fx: mounted ({})", site.summary());
		site
	}

	fn summary(&self) -> String {
		let parts = [
			("particles", self.particles.is_some()),
			("navbar", self.navbar.is_some()),
			("progress", self.progress.is_some()),
			("reveal", self.reveal.is_some()),
			("portfolio", self.portfolio.is_some()),
			("stats", self.stats.is_some()),
			("contact", self.contact.is_some()),
		];
		parts
			.iter()
			.filter(|(_, on)| *on)
			.map(|(name, _)| *name)
			.collect::<Vec<_>>()
			.join(", ")
	}

	/// Stop all animation and remove every listener and global this site added.
	pub fn teardown(self) {
		if let Some(particles) = &self.particles {
			particles.stop();
		}
		if let Some(stats) = &self.stats {
			stats.stop();
		}
		drop(self);
		info!("portfolio-fx: torn down");
	}
}
