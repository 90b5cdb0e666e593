//! Project grid filtering.

#[cfg(target_arch = "wasm32")]
mod bindings;
mod filter;

#[cfg(target_arch = "wasm32")]
pub use bindings::{DomCard, PortfolioControls};
pub use filter::{ALL, CardTransition, CardView, PortfolioFilter, matches};
