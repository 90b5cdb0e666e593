//! Binds the particle field to the hero `<canvas>`.
//!
//! The canvas fills the viewport. A resize regenerates the field, the window
//! pointer repels particles, and an [`AnimationLoop`] updates and redraws
//! every display frame.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, MouseEvent, Window};

use super::field::ParticleField;
use super::render::{Surface, render};
use super::theme::Color;
use crate::components::scheduler::{AnimationLoop, FrameControl, FrameTask};
use crate::config::ParticleConfig;
use crate::dom::{Listener, viewport_size};

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.begin_path();
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn glow_disc(&mut self, center: (f64, f64), radius: f64, color: Color, blur: f64) {
		let solid = color.to_css_rgb();
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&solid);
		self.set_global_alpha(color.a);
		self.fill();

		self.set_shadow_blur(blur);
		self.set_shadow_color(&solid);
		self.fill();
		self.set_shadow_blur(0.0);
		self.set_global_alpha(1.0);
	}
}

/// Field plus the context it is drawn to.
struct Scene {
	field: ParticleField,
	ctx: CanvasRenderingContext2d,
	rng: Pcg32,
}

impl FrameTask for Scene {
	fn frame(&mut self, _now: f64) -> FrameControl {
		self.field.update();
		render(&self.field, &mut self.ctx);
		FrameControl::Continue
	}
}

/// Running particle hero. Dropping it stops the animation and unhooks its listeners.
pub struct ParticleCanvas {
	animation: AnimationLoop,
	_listeners: Vec<Listener>,
}

impl ParticleCanvas {
	/// Start the hero on the canvas named by `config.canvas_id`.
	///
	/// Returns `None`, doing nothing, when the canvas or its 2D context is unavailable.
	pub fn mount(window: &Window, document: &Document, config: &ParticleConfig, seed: u64) -> Option<Self> {
		let Some(canvas) = document
			.get_element_by_id(&config.canvas_id)
			.and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
		else {
			debug!("portfolio-fx: no #{} canvas, particles disabled", config.canvas_id);
			return None;
		};
		let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

		let (w, h) = fit_to_viewport(window, &canvas);
		let mut rng = Pcg32::seed_from_u64(seed);
		let field = ParticleField::new(config.clone(), w, h, &mut rng);
		info!("portfolio-fx: {} particles on {}x{}", field.particles.len(), w, h);

		let scene = Rc::new(RefCell::new(Scene { field, ctx, rng }));

		let scene_resize = scene.clone();
		let resize = Listener::new(window, "resize", move |_: Event| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (w, h) = fit_to_viewport(&win, &canvas);
			let mut scene = scene_resize.borrow_mut();
			let Scene { field, rng, .. } = &mut *scene;
			field.resize(w, h, rng);
			debug!("portfolio-fx: resized to {}x{}, {} particles", w, h, field.particles.len());
		});

		let scene_move = scene.clone();
		let pointer_move = Listener::new(window, "mousemove", move |ev: MouseEvent| {
			let pointer = (ev.client_x() as f64, ev.client_y() as f64);
			scene_move.borrow_mut().field.set_pointer(Some(pointer));
		});

		let scene_out = scene.clone();
		let pointer_out = Listener::new(window, "mouseout", move |_: MouseEvent| {
			scene_out.borrow_mut().field.set_pointer(None);
		});

		Some(Self {
			animation: AnimationLoop::start(scene),
			_listeners: vec![resize, pointer_move, pointer_out],
		})
	}

	/// Whether frames are still being requested.
	pub fn is_running(&self) -> bool {
		self.animation.is_running()
	}

	/// Stop animating. Listeners stay until drop.
	pub fn stop(&self) {
		self.animation.stop();
	}
}

fn fit_to_viewport(window: &Window, canvas: &HtmlCanvasElement) -> (f64, f64) {
	let (w, h) = viewport_size(window);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(canvas.width() as f64, canvas.height() as f64)
}
