//! Pointer-reactive particle background for the hero section.
//!
//! - [`ParticleField`] owns the particles and steps the physics
//! - [`render`] draws a frame onto any [`Surface`]
//! - `ParticleCanvas` (wasm only) binds both to a `<canvas>` and the window
//!
//! # Example
//!
//! ```
//! use portfolio_fx::components::particles::ParticleField;
//! use portfolio_fx::config::ParticleConfig;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
//! let mut field = ParticleField::new(ParticleConfig::default(), 1280.0, 720.0, &mut rng);
//! field.set_pointer(Some((640.0, 360.0)));
//! field.update();
//! assert_eq!(field.particles.len(), 61);
//! ```

#[cfg(target_arch = "wasm32")]
mod canvas;
mod field;
mod render;
mod theme;

#[cfg(target_arch = "wasm32")]
pub use canvas::ParticleCanvas;
pub use field::{Particle, ParticleField, particle_count};
pub use render::{Surface, link_opacity, render};
pub use theme::{Color, InvalidColor, violet_palette};
