//! Ambient particle simulation for the hero background.

use rand::Rng;

use super::theme::Color;
use crate::config::ParticleConfig;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Position, in canvas pixels.
	pub x: f64,
	/// See [`Particle::x`].
	pub y: f64,
	/// Velocity, in pixels per frame.
	pub vx: f64,
	/// See [`Particle::vx`].
	pub vy: f64,
	/// Disc radius.
	pub radius: f64,
	/// Base color; alpha comes from `opacity`.
	pub color: Color,
	/// Fill opacity in `[min_opacity, max_opacity)`.
	pub opacity: f64,
}

/// Number of particles for a `width` x `height` canvas.
pub fn particle_count(config: &ParticleConfig, width: f64, height: f64) -> usize {
	let area = width.max(0.0) * height.max(0.0);
	let by_area = (area / config.area_per_particle).floor();
	// Saturating cast: a zero divisor gives +inf and falls back to the cap.
	(by_area as usize).min(config.max_count)
}

/// Uniform sample in `[lo, hi)`; `lo` when the range is empty.
fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	lo + rng.random::<f64>() * (hi - lo).max(0.0)
}

/// Owns the particle set and the pointer that repels it.
///
/// The set is fixed in size between resizes; [`ParticleField::resize`]
/// throws it away and rolls a new one.
pub struct ParticleField {
	/// Live particles, in spawn order.
	pub particles: Vec<Particle>,
	pointer: Option<(f64, f64)>,
	width: f64,
	height: f64,
	config: ParticleConfig,
}

impl ParticleField {
	/// Spawn a field sized for `width` x `height`.
	pub fn new<R: Rng + ?Sized>(config: ParticleConfig, width: f64, height: f64, rng: &mut R) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			pointer: None,
			width: 0.0,
			height: 0.0,
			config,
		};
		field.resize(width, height, rng);
		field
	}

	fn spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Particle {
		let c = &self.config;
		let half_speed = c.speed / 2.0;
		let color_idx = (rng.random::<f64>() * c.palette.len() as f64) as usize;

		Particle {
			x: sample(rng, 0.0, self.width),
			y: sample(rng, 0.0, self.height),
			radius: sample(rng, c.min_radius, c.max_radius),
			color: c.palette.get(color_idx).copied().unwrap_or(c.line_color),
			vx: sample(rng, -half_speed, half_speed),
			vy: sample(rng, -half_speed, half_speed),
			opacity: sample(rng, c.min_opacity, c.max_opacity).clamp(0.0, 1.0),
		}
	}

	/// Adopt new bounds and regenerate every particle.
	pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);

		let count = particle_count(&self.config, self.width, self.height);
		let particles = (0..count).map(|_| self.spawn(rng)).collect();
		self.particles = particles;
	}

	/// Set or clear the repelling pointer, in canvas coordinates.
	pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
		self.pointer = pointer;
	}

	/// Last known pointer position.
	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}

	/// Canvas width.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Canvas height.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Settings the field was built with.
	pub fn config(&self) -> &ParticleConfig {
		&self.config
	}

	/// Advance one frame: pointer repulsion, integration, then wall bounce.
	pub fn update(&mut self) {
		let (w, h) = (self.width, self.height);
		let radius = self.config.pointer_radius;
		let strength = self.config.pointer_force;

		for p in &mut self.particles {
			if let Some((mx, my)) = self.pointer {
				let (dx, dy) = (mx - p.x, my - p.y);
				let distance = (dx * dx + dy * dy).sqrt();

				// At distance zero there is no direction to push along.
				if distance > 0.0 && distance < radius {
					let force = (radius - distance) / radius;
					p.x -= (dx / distance) * force * strength;
					p.y -= (dy / distance) * force * strength;
				}
			}

			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > w {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > h {
				p.vy = -p.vy;
			}

			p.x = p.x.clamp(0.0, w);
			p.y = p.y.clamp(0.0, h);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::theme::violet_palette;
	use super::*;
	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand_pcg::Pcg32;

	fn field(width: f64, height: f64, seed: u64) -> ParticleField {
		let mut rng = Pcg32::seed_from_u64(seed);
		ParticleField::new(ParticleConfig::default(), width, height, &mut rng)
	}

	fn lone_particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			radius: 2.0,
			color: Color::rgb(139, 92, 246),
			opacity: 0.5,
		}
	}

	#[test]
	fn count_is_area_based_and_capped() {
		let config = ParticleConfig::default();
		assert_eq!(particle_count(&config, 300.0, 200.0), 4);
		assert_eq!(particle_count(&config, 1920.0, 1080.0), 80);
		assert_eq!(particle_count(&config, 0.0, 1080.0), 0);
		assert_eq!(particle_count(&config, -10.0, 1080.0), 0);
	}

	#[test]
	fn spawned_particles_respect_ranges() {
		let f = field(800.0, 600.0, 7);
		assert_eq!(f.particles.len(), 32);
		for p in &f.particles {
			assert!((1.0..3.0).contains(&p.radius));
			assert!((0.3..0.8).contains(&p.opacity));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
			assert!(violet_palette().contains(&p.color));
		}
	}

	#[test]
	fn resize_regenerates_from_scratch() {
		let mut rng = Pcg32::seed_from_u64(1);
		let mut f = ParticleField::new(ParticleConfig::default(), 800.0, 600.0, &mut rng);
		let before = f.particles.clone();
		f.resize(300.0, 200.0, &mut rng);
		assert_eq!(f.particles.len(), 4);
		assert!(f.particles.iter().all(|p| !before.contains(p)));
		assert_eq!((f.width(), f.height()), (300.0, 200.0));
	}

	#[test]
	fn same_seed_same_field() {
		assert_eq!(field(640.0, 480.0, 42).particles, field(640.0, 480.0, 42).particles);
	}

	#[test]
	fn wall_hit_reverses_velocity_and_clamps() {
		let mut f = field(100.0, 100.0, 0);
		f.particles = vec![lone_particle(99.9, 0.1, 0.25, -0.25)];
		f.update();
		let p = &f.particles[0];
		assert_eq!((p.x, p.y), (100.0, 0.0));
		assert_eq!((p.vx, p.vy), (-0.25, 0.25));
	}

	#[test]
	fn pointer_pushes_particles_away() {
		let mut f = field(400.0, 400.0, 0);
		f.particles = vec![lone_particle(200.0, 200.0, 0.0, 0.0)];
		f.set_pointer(Some((150.0, 200.0)));
		f.update();
		// (150 - 50) / 150 * 2 along +x
		let p = &f.particles[0];
		assert!((p.x - (200.0 + 4.0 / 3.0)).abs() < 1e-9);
		assert_eq!(p.y, 200.0);
	}

	#[test]
	fn pointer_outside_radius_or_cleared_has_no_effect() {
		let mut f = field(400.0, 400.0, 0);
		f.particles = vec![lone_particle(200.0, 200.0, 0.0, 0.0)];
		f.set_pointer(Some((0.0, 0.0)));
		f.update();
		assert_eq!((f.particles[0].x, f.particles[0].y), (200.0, 200.0));

		f.set_pointer(None);
		f.update();
		assert_eq!((f.particles[0].x, f.particles[0].y), (200.0, 200.0));
	}

	#[test]
	fn pointer_on_top_of_particle_is_ignored() {
		let mut f = field(400.0, 400.0, 0);
		f.particles = vec![lone_particle(200.0, 200.0, 0.0, 0.0)];
		f.set_pointer(Some((200.0, 200.0)));
		f.update();
		assert!(f.particles[0].x.is_finite());
		assert_eq!((f.particles[0].x, f.particles[0].y), (200.0, 200.0));
	}

	proptest! {
		#[test]
		fn creation_count_and_bounds(w in 0.0f64..4000.0, h in 0.0f64..3000.0, seed: u64) {
			let f = field(w, h, seed);
			prop_assert_eq!(f.particles.len(), ((w * h / 15_000.0).floor() as usize).min(80));
			for p in &f.particles {
				prop_assert!(p.x >= 0.0 && p.x < w);
				prop_assert!(p.y >= 0.0 && p.y < h);
			}
		}

		#[test]
		fn updates_stay_in_bounds(
			w in 150.0f64..2000.0,
			h in 150.0f64..2000.0,
			seed: u64,
			pointer in proptest::option::of((-100.0f64..2100.0, -100.0f64..2100.0)),
			frames in 1usize..200,
		) {
			let mut f = field(w, h, seed);
			f.set_pointer(pointer);
			for _ in 0..frames {
				f.update();
				for p in &f.particles {
					prop_assert!(p.x >= 0.0 && p.x <= w);
					prop_assert!(p.y >= 0.0 && p.y <= h);
					prop_assert!((0.0..=1.0).contains(&p.opacity));
				}
			}
		}
	}
}
