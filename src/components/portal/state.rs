//! Scene state shared by the frame loop and the event handlers.
//!
//! One [`SceneState`] exists per mounted effect. Event handlers write to it
//! (pointer moves, resizes) and the animation loop reads and mutates it once
//! per frame. Everything runs on the browser's main thread, so a resize is a
//! single `&mut` call that swaps populations and dimensions together before
//! the next frame can observe either.

use rand::Rng;

use super::physics;
use super::population::{create_debris, create_particles};
use super::theme::Theme;
use super::tracker;
use super::types::{Debris, Particle, Point};

/// Smoothed portal focus.
#[derive(Clone, Debug, Default)]
pub struct PortalState {
	/// Where the glow and ring are drawn this frame.
	pub current: Point,
	/// Where the portal is heading (the latest pointer position).
	pub target: Point,
}

/// Last pointer position reported by the window.
#[derive(Clone, Debug, Default)]
pub struct PointerState {
	pub position: Point,
}

/// Everything the effect simulates and draws.
#[derive(Clone, Debug)]
pub struct SceneState {
	pub width: f64,
	pub height: f64,
	pub particles: Vec<Particle>,
	pub debris: Vec<Debris>,
	pub portal: PortalState,
	pub pointer: PointerState,
}

impl SceneState {
	/// Builds a fresh scene with the portal resting at the surface center.
	pub fn new<R: Rng>(theme: &Theme, width: f64, height: f64, rng: &mut R) -> Self {
		let center = Point::new(width / 2.0, height / 2.0);

		Self {
			width,
			height,
			particles: create_particles(rng, &theme.particles, width, height),
			debris: create_debris(rng, &theme.debris, width, height),
			portal: PortalState {
				current: center,
				target: center,
			},
			pointer: PointerState::default(),
		}
	}

	/// Replaces both populations and the stored dimensions in one go.
	/// Portal and pointer state carry over.
	pub fn resize<R: Rng>(&mut self, theme: &Theme, width: f64, height: f64, rng: &mut R) {
		let particles = create_particles(rng, &theme.particles, width, height);
		let debris = create_debris(rng, &theme.debris, width, height);

		self.width = width;
		self.height = height;
		self.particles = particles;
		self.debris = debris;
	}

	/// Records a pointer move; it becomes the portal's new target.
	pub fn pointer_move(&mut self, x: f64, y: f64) {
		let position = Point::new(x, y);
		self.pointer.position = position;
		self.portal.target = position;
	}

	/// Advances the portal center, then the physics, by one frame.
	pub fn tick(&mut self, theme: &Theme) {
		self.portal.current =
			tracker::advance(self.portal.target, self.portal.current, theme.portal.smoothing);
		let (pointer, center) = (self.pointer.position, self.portal.current);
		physics::step(self, pointer, center, &theme.forces);
	}
}
