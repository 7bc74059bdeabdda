//! Frame rendering for the portal effect.
//!
//! Layers are painted back to front:
//! 1. Debris (rotated, glowing polygons)
//! 2. Particles, each followed by its lines to later particles
//! 3. Portal glow, then the pulsing ring on top

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, TAU};

use super::state::SceneState;
use super::surface::Surface;
use super::theme::{Hsla, ParticleStyle, PortalStyle, Theme};
use super::types::{Debris, DebrisShape, Particle};

/// Renders the complete scene. Always clears the whole surface first; a
/// surface with no area gets nothing else.
pub fn render<S: Surface>(surface: &S, scene: &SceneState, theme: &Theme, time: f64) {
	surface.clear(scene.width, scene.height);
	if scene.width <= 0.0 || scene.height <= 0.0 {
		return;
	}

	for d in &scene.debris {
		draw_debris(surface, d, theme);
	}
	draw_particles(surface, &scene.particles, &theme.particles);
	draw_portal(surface, scene, &theme.portal, time);
}

/// Line alpha between two particles `distance` apart: linear fade from
/// `connection_alpha` at zero to exactly 0 at `connection_distance`.
pub fn connection_alpha(distance: f64, style: &ParticleStyle) -> f64 {
	if distance >= style.connection_distance {
		return 0.0;
	}
	style.connection_alpha * (1.0 - distance / style.connection_distance)
}

/// Ring radius at `time` seconds.
pub fn ring_radius(time: f64, style: &PortalStyle) -> f64 {
	style.ring_radius + style.ring_pulse * time.sin()
}

/// Ring hue in degrees at `time` seconds.
pub fn ring_hue(time: f64, style: &PortalStyle) -> f64 {
	style.ring_hue + style.ring_hue_swing * (time * style.ring_hue_rate).sin()
}

/// Outline of a debris shape centered on the origin, before rotation.
///
/// Triangle and hexagon are inscribed in a circle of diameter `size`; the
/// square has side `size`.
pub fn shape_vertices(shape: DebrisShape, size: f64) -> Vec<(f64, f64)> {
	let r = size / 2.0;
	match shape {
		DebrisShape::Square => vec![(-r, -r), (r, -r), (r, r), (-r, r)],
		DebrisShape::Triangle => (0..3)
			.map(|i| {
				let angle = -FRAC_PI_2 + i as f64 * TAU / 3.0;
				(r * angle.cos(), r * angle.sin())
			})
			.collect(),
		DebrisShape::Hexagon => (0..6)
			.map(|i| {
				let angle = i as f64 * FRAC_PI_3;
				(r * angle.cos(), r * angle.sin())
			})
			.collect(),
	}
}

fn draw_debris<S: Surface>(surface: &S, d: &Debris, theme: &Theme) {
	let color = theme.accent(d.accent).to_css();

	surface.save();
	surface.translate(d.x, d.y);
	surface.rotate(d.rotation);
	surface.set_global_alpha(d.opacity);
	surface.set_fill(&color);
	surface.set_stroke(&color, theme.debris.outline_width);
	surface.set_glow(&color, theme.debris.glow_blur);

	surface.begin_path();
	let vertices = shape_vertices(d.shape, d.size);
	for (i, &(x, y)) in vertices.iter().enumerate() {
		if i == 0 {
			surface.move_to(x, y);
		} else {
			surface.line_to(x, y);
		}
	}
	surface.close_path();
	surface.fill();
	surface.stroke();

	surface.restore();
}

fn draw_particles<S: Surface>(surface: &S, particles: &[Particle], style: &ParticleStyle) {
	for (i, p) in particles.iter().enumerate() {
		let color = Hsla::new(p.hue, style.saturation, style.lightness, p.opacity);
		surface.begin_path();
		surface.circle(p.x, p.y, p.radius);
		surface.set_fill(&color.to_css());
		surface.fill();

		for other in &particles[i + 1..] {
			let distance = p.position().distance_to(other.position());
			if distance >= style.connection_distance {
				continue;
			}

			let alpha = connection_alpha(distance, style);
			surface.begin_path();
			surface.move_to(p.x, p.y);
			surface.line_to(other.x, other.y);
			surface.set_stroke(&color.with_alpha(alpha).to_css(), style.connection_width);
			surface.stroke();
		}
	}
}

fn draw_portal<S: Surface>(surface: &S, scene: &SceneState, style: &PortalStyle, time: f64) {
	let center = scene.portal.current;

	let glow = Hsla::new(style.glow_hue, style.saturation, style.lightness, style.glow_alpha);
	surface.fill_radial_glow(
		center.x,
		center.y,
		style.glow_radius,
		&glow.to_css(),
		&glow.with_alpha(0.0).to_css(),
	);

	let ring = Hsla::new(
		ring_hue(time, style),
		style.saturation,
		style.lightness,
		style.ring_alpha,
	);
	surface.begin_path();
	surface.circle(center.x, center.y, ring_radius(time, style));
	surface.set_stroke(&ring.to_css(), style.ring_width);
	surface.stroke();
}
