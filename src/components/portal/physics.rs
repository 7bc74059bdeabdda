//! Per-frame motion of particles and debris.
//!
//! Particles feel two radial fields: repulsion from the pointer and
//! attraction to the smoothed portal center. Velocities are never damped,
//! so a long session gets steadily livelier. Debris ignores both fields and
//! simply drifts and spins.

use super::state::SceneState;
use super::theme::ForceStyle;
use super::types::{Debris, Particle, Point};

/// Advances every particle and debris item by one frame.
pub fn step(scene: &mut SceneState, pointer: Point, portal_center: Point, forces: &ForceStyle) {
	let (width, height) = (scene.width, scene.height);

	for d in &mut scene.debris {
		step_debris(d, width, height);
	}
	for p in &mut scene.particles {
		step_particle(p, pointer, portal_center, forces, width, height);
	}
}

fn step_debris(d: &mut Debris, width: f64, height: f64) {
	d.x += d.vx;
	d.y += d.vy;
	d.rotation += d.rotation_speed;

	d.x = wrap_with_margin(d.x, width, d.size);
	d.y = wrap_with_margin(d.y, height, d.size);
}

fn step_particle(
	p: &mut Particle,
	pointer: Point,
	portal_center: Point,
	forces: &ForceStyle,
	width: f64,
	height: f64,
) {
	let pos = p.position();
	let (rx, ry) = repulsion(pos, pointer, forces);
	let (ax, ay) = attraction(pos, portal_center, forces);

	p.vx += rx + ax;
	p.vy += ry + ay;

	p.x = wrap(p.x + p.vx, width);
	p.y = wrap(p.y + p.vy, height);
}

/// Velocity change pushing a particle at `pos` away from the pointer.
pub fn repulsion(pos: Point, pointer: Point, forces: &ForceStyle) -> (f64, f64) {
	let (x, y) = radial(pos, pointer, forces.repel_radius, forces.repel_strength);
	(-x, -y)
}

/// Velocity change pulling a particle at `pos` toward the portal center.
pub fn attraction(pos: Point, center: Point, forces: &ForceStyle) -> (f64, f64) {
	radial(pos, center, forces.attract_radius, forces.attract_strength)
}

/// Linear falloff field: full `strength` at the source, zero at `radius`.
/// A particle sitting exactly on the source has no direction and gets no force.
fn radial(pos: Point, source: Point, radius: f64, strength: f64) -> (f64, f64) {
	let (dx, dy) = (source.x - pos.x, source.y - pos.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if !(dist > 0.0 && dist < radius) {
		return (0.0, 0.0);
	}

	let force = (radius - dist) / radius * strength;
	(dx / dist * force, dy / dist * force)
}

/// Edge-to-edge wrap into `[0, extent)`. A collapsed axis pins to 0.
fn wrap(v: f64, extent: f64) -> f64 {
	if extent <= 0.0 {
		return 0.0;
	}
	if (0.0..extent).contains(&v) {
		return v;
	}
	// rem_euclid can round up to `extent` for tiny negative inputs
	let w = v.rem_euclid(extent);
	if w >= extent { 0.0 } else { w }
}

/// Wrap that lets an item fully leave the surface before it reappears on the
/// opposite side, keeping it within `[-margin, extent + margin]`.
fn wrap_with_margin(v: f64, extent: f64, margin: f64) -> f64 {
	if v < -margin {
		extent + margin
	} else if v > extent + margin {
		-margin
	} else {
		v
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::super::theme::Theme;
	use super::*;

	fn scene(width: f64, height: f64, seed: u64) -> SceneState {
		let mut rng = StdRng::seed_from_u64(seed);
		SceneState::new(&Theme::default(), width, height, &mut rng)
	}

	#[test]
	fn particles_stay_on_surface() {
		let mut s = scene(800.0, 600.0, 42);
		let forces = ForceStyle::default();
		let center = Point::new(400.0, 300.0);

		for frame in 0..2000 {
			let pointer = Point::new((frame % 800) as f64, (frame % 600) as f64);
			step(&mut s, pointer, center, &forces);
			for p in &s.particles {
				assert!((0.0..800.0).contains(&p.x), "x = {}", p.x);
				assert!((0.0..600.0).contains(&p.y), "y = {}", p.y);
			}
		}
	}

	#[test]
	fn debris_stays_within_margin() {
		let mut s = scene(300.0, 200.0, 5);
		for d in &mut s.debris {
			// exaggerate drift so every item crosses an edge many times
			d.vx *= 40.0;
			d.vy *= 40.0;
		}
		let forces = ForceStyle::default();

		for _ in 0..5000 {
			step(&mut s, Point::default(), Point::default(), &forces);
			for d in &s.debris {
				assert!(d.x >= -d.size && d.x <= 300.0 + d.size);
				assert!(d.y >= -d.size && d.y <= 200.0 + d.size);
			}
		}
	}

	#[test]
	fn debris_rotates_and_drifts() {
		let mut s = scene(800.0, 600.0, 9);
		let before = s.debris.clone();
		step(&mut s, Point::default(), Point::default(), &ForceStyle::default());

		for (b, a) in before.iter().zip(&s.debris) {
			assert_eq!(a.rotation, b.rotation + b.rotation_speed);
			assert_eq!(a.vx, b.vx);
			assert_eq!(a.vy, b.vy);
		}
	}

	#[test]
	fn fixed_attributes_never_change() {
		let mut s = scene(800.0, 600.0, 13);
		let (particles, debris) = (s.particles.clone(), s.debris.clone());
		let forces = ForceStyle::default();

		for frame in 0..500 {
			let pointer = Point::new(frame as f64, 300.0);
			step(&mut s, pointer, Point::new(400.0, 300.0), &forces);
		}

		for (b, a) in particles.iter().zip(&s.particles) {
			assert_eq!((a.radius, a.opacity, a.hue), (b.radius, b.opacity, b.hue));
		}
		for (b, a) in debris.iter().zip(&s.debris) {
			assert_eq!((a.size, a.opacity, a.rotation_speed), (b.size, b.opacity, b.rotation_speed));
			assert_eq!((a.shape, a.accent), (b.shape, b.accent));
		}
		assert_eq!(s.particles.len(), 100);
		assert_eq!(s.debris.len(), 15);
	}

	#[test]
	fn no_repulsion_outside_radius() {
		let forces = ForceStyle::default();
		let pos = Point::new(100.0, 100.0);

		assert_eq!(repulsion(pos, Point::new(250.0, 100.0), &forces), (0.0, 0.0));
		assert_eq!(repulsion(pos, Point::new(500.0, 500.0), &forces), (0.0, 0.0));
	}

	#[test]
	fn repulsion_points_away_from_pointer() {
		let forces = ForceStyle::default();
		let (dx, dy) = repulsion(Point::new(100.0, 100.0), Point::new(175.0, 100.0), &forces);

		assert!((dx - -0.005).abs() < 1e-12);
		assert_eq!(dy, 0.0);
	}

	#[test]
	fn attraction_points_toward_portal() {
		let forces = ForceStyle::default();
		let (dx, dy) = attraction(Point::new(0.0, 0.0), Point::new(0.0, 150.0), &forces);

		assert_eq!(dx, 0.0);
		assert!((dy - 0.0075).abs() < 1e-12);
		assert_eq!(attraction(Point::new(0.0, 0.0), Point::new(0.0, 300.0), &forces), (0.0, 0.0));
	}

	#[test]
	fn particle_on_pointer_stays_finite() {
		let mut s = scene(800.0, 600.0, 1);
		let spot = Point::new(200.0, 200.0);
		for p in &mut s.particles {
			p.x = spot.x;
			p.y = spot.y;
		}

		step(&mut s, spot, spot, &ForceStyle::default());

		for p in &s.particles {
			assert!(p.vx.is_finite() && p.vy.is_finite());
			assert!(p.x.is_finite() && p.y.is_finite());
		}
	}

	#[test]
	fn far_pointer_leaves_only_portal_pull() {
		let mut s = scene(800.0, 600.0, 21);
		let forces = ForceStyle::default();
		let pointer = Point::new(-1000.0, -1000.0);
		let center = Point::new(400.0, 300.0);
		let before = s.particles.clone();

		step(&mut s, pointer, center, &forces);

		for (b, a) in before.iter().zip(&s.particles) {
			let (ax, ay) = attraction(b.position(), center, &forces);
			assert_eq!(a.vx, b.vx + ax);
			assert_eq!(a.vy, b.vy + ay);
			if b.position().distance_to(center) >= 300.0 {
				assert_eq!((a.vx, a.vy), (b.vx, b.vy));
			}
		}
	}

	#[test]
	fn wrap_edges() {
		assert_eq!(wrap(-0.5, 800.0), 799.5);
		assert_eq!(wrap(800.0, 800.0), 0.0);
		assert_eq!(wrap(801.0, 800.0), 1.0);
		assert!(wrap(-1e-20, 800.0) < 800.0);
		assert_eq!(wrap(5.0, 0.0), 0.0);
	}

	#[test]
	fn margin_wrap_reenters_opposite_side() {
		assert_eq!(wrap_with_margin(-11.0, 800.0, 10.0), 810.0);
		assert_eq!(wrap_with_margin(811.0, 800.0, 10.0), -10.0);
		assert_eq!(wrap_with_margin(-10.0, 800.0, 10.0), -10.0);
	}
}
