//! Randomized particle and debris populations.
//!
//! Both factories are pure functions of a random source and the surface size,
//! so callers pick the source: `rand::thread_rng()` in the browser, a seeded
//! generator in tests.

use std::f64::consts::TAU;

use rand::Rng;

use super::theme::{DebrisStyle, ParticleStyle};
use super::types::{Accent, Debris, DebrisShape, Particle};

/// Uniform sample from `[lo, hi)`. Collapses to `lo` on an empty range
/// instead of panicking, so a zero-area surface still gets a population.
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

/// Creates `style.count` particles scattered over a `width` x `height` surface.
pub fn create_particles<R: Rng>(
	rng: &mut R,
	style: &ParticleStyle,
	width: f64,
	height: f64,
) -> Vec<Particle> {
	(0..style.count)
		.map(|_| Particle {
			x: uniform(rng, 0.0, width),
			y: uniform(rng, 0.0, height),
			radius: uniform(rng, style.radius_min, style.radius_max),
			vx: uniform(rng, -style.max_speed, style.max_speed),
			vy: uniform(rng, -style.max_speed, style.max_speed),
			opacity: uniform(rng, style.opacity_min, style.opacity_max),
			hue: uniform(rng, style.hue_min, style.hue_max),
		})
		.collect()
}

/// Creates `style.count` debris items scattered over a `width` x `height` surface.
pub fn create_debris<R: Rng>(
	rng: &mut R,
	style: &DebrisStyle,
	width: f64,
	height: f64,
) -> Vec<Debris> {
	(0..style.count)
		.map(|_| Debris {
			x: uniform(rng, 0.0, width),
			y: uniform(rng, 0.0, height),
			size: uniform(rng, style.size_min, style.size_max),
			vx: uniform(rng, -style.max_speed, style.max_speed),
			vy: uniform(rng, -style.max_speed, style.max_speed),
			rotation: uniform(rng, 0.0, TAU),
			rotation_speed: uniform(rng, -style.max_rotation_speed, style.max_rotation_speed),
			shape: DebrisShape::ALL[rng.gen_range(0..DebrisShape::ALL.len())],
			opacity: uniform(rng, style.opacity_min, style.opacity_max),
			accent: if rng.gen_bool(0.5) {
				Accent::Primary
			} else {
				Accent::Secondary
			},
		})
		.collect()
}
