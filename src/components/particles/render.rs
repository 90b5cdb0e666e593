//! Drawing the particle field.
//!
//! Rendering goes through [`Surface`] so the same pass can target a canvas 2D
//! context in the browser or a recorder in tests. Two passes for z-ordering:
//! 1. Connecting lines between nearby pairs
//! 2. Glowing particle discs on top

use super::field::ParticleField;
use super::theme::Color;
use crate::config::ParticleConfig;

/// Minimal drawing target for the particle hero.
pub trait Surface {
	/// Erase a `width` x `height` area starting at the origin.
	fn clear(&mut self, width: f64, height: f64);
	/// Stroke a straight segment. `color.a` carries the opacity.
	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
	/// Fill a disc with a blurred glow in its own color. `color.a` carries the opacity.
	fn glow_disc(&mut self, center: (f64, f64), radius: f64, color: Color, blur: f64);
}

/// Opacity of the line joining two particles `distance` apart, if one is drawn.
pub fn link_opacity(config: &ParticleConfig, distance: f64) -> Option<f64> {
	if distance < config.line_distance {
		Some((1.0 - distance / config.line_distance) * config.line_max_opacity)
	} else {
		None
	}
}

/// Renders one complete frame of the field.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	surface.clear(field.width(), field.height());
	draw_links(field, surface);
	draw_particles(field, surface);
}

fn draw_links<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	let config = field.config();
	let particles = &field.particles;

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let distance = (dx * dx + dy * dy).sqrt();

			if let Some(opacity) = link_opacity(config, distance) {
				surface.line(
					(a.x, a.y),
					(b.x, b.y),
					config.line_color.with_alpha(opacity),
					config.line_width,
				);
			}
		}
	}
}

fn draw_particles<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	let blur = field.config().glow_blur;
	for p in &field.particles {
		surface.glow_disc((p.x, p.y), p.radius, p.color.with_alpha(p.opacity), blur);
	}
}

#[cfg(test)]
mod tests {
	use super::super::field::Particle;
	use super::*;
	use rand::SeedableRng;
	use rand_pcg::Pcg32;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear(f64, f64),
		Line { opacity: f64 },
		Disc { opacity: f64, blur: f64 },
	}

	#[derive(Default)]
	struct Recorder(Vec<Op>);

	impl Surface for Recorder {
		fn clear(&mut self, width: f64, height: f64) {
			self.0.push(Op::Clear(width, height));
		}

		fn line(&mut self, _from: (f64, f64), _to: (f64, f64), color: Color, _width: f64) {
			self.0.push(Op::Line { opacity: color.a });
		}

		fn glow_disc(&mut self, _center: (f64, f64), _radius: f64, color: Color, blur: f64) {
			self.0.push(Op::Disc {
				opacity: color.a,
				blur,
			});
		}
	}

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: 1.5,
			color: Color::rgb(167, 139, 250),
			opacity: 0.6,
		}
	}

	#[test]
	fn link_opacity_falls_off_linearly() {
		let config = ParticleConfig::default();
		assert_eq!(link_opacity(&config, 0.0), Some(0.3));
		assert!((link_opacity(&config, 75.0).unwrap() - 0.15).abs() < 1e-12);
		assert_eq!(link_opacity(&config, 150.0), None);
		assert_eq!(link_opacity(&config, 400.0), None);
	}

	#[test]
	fn frame_clears_then_links_then_discs() {
		let mut rng = Pcg32::seed_from_u64(3);
		let mut field = ParticleField::new(ParticleConfig::default(), 500.0, 500.0, &mut rng);
		field.particles = vec![at(10.0, 10.0), at(10.0, 85.0), at(400.0, 400.0)];

		let mut recorder = Recorder::default();
		render(&field, &mut recorder);

		assert_eq!(
			recorder.0,
			vec![
				Op::Clear(500.0, 500.0),
				Op::Line { opacity: 0.15 },
				Op::Disc { opacity: 0.6, blur: 15.0 },
				Op::Disc { opacity: 0.6, blur: 15.0 },
				Op::Disc { opacity: 0.6, blur: 15.0 },
			]
		);
	}

	#[test]
	fn every_close_pair_is_linked_once() {
		let mut rng = Pcg32::seed_from_u64(3);
		let mut field = ParticleField::new(ParticleConfig::default(), 500.0, 500.0, &mut rng);
		field.particles = vec![at(0.0, 0.0), at(1.0, 0.0), at(2.0, 0.0), at(3.0, 0.0)];

		let mut recorder = Recorder::default();
		render(&field, &mut recorder);
		let lines = recorder
			.0
			.iter()
			.filter(|op| matches!(op, Op::Line { .. }))
			.count();
		assert_eq!(lines, 6);
	}
}
