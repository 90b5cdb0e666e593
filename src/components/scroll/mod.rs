//! Scroll-driven page effects: navbar state, active link, mobile menu,
//! progress bar, reveal-on-scroll and smooth anchor scrolling.

#[cfg(target_arch = "wasm32")]
mod bindings;
mod effects;

#[cfg(target_arch = "wasm32")]
pub use bindings::{Navbar, ScrollProgress, ScrollReveal, SmoothScroll};
pub use effects::{
	MobileMenu, RevealTracker, SectionBounds, active_section, anchor_offset, is_scrolled, link_targets,
	progress_percent,
};
