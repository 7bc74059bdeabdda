//! Visual theming and tuning for the portal effect.
//!
//! Every knob of the effect lives here with its default value. A page may
//! override any subset through embedded JSON (see [`crate::load_theme`]);
//! anything left out keeps its default.

use serde::Deserialize;

use super::types::Accent;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Hue/saturation/lightness color, the space particles and the portal live in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	/// Degrees.
	pub h: f64,
	/// Percent.
	pub s: f64,
	/// Percent.
	pub l: f64,
	pub a: f64,
}

impl Hsla {
	pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
		Self { h, s, l, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

/// Foreground particle population and look.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Number of particles. Connections cost O(count²) per frame.
	pub count: usize,
	pub radius_min: f64,
	pub radius_max: f64,
	/// Each velocity component is drawn from `[-max_speed, max_speed)`.
	pub max_speed: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	pub hue_min: f64,
	pub hue_max: f64,
	pub saturation: f64,
	pub lightness: f64,
	/// Pairs closer than this are joined by a line.
	pub connection_distance: f64,
	/// Line alpha for two coincident particles.
	pub connection_alpha: f64,
	pub connection_width: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 100,
			radius_min: 0.5,
			radius_max: 2.5,
			max_speed: 0.25,
			opacity_min: 0.2,
			opacity_max: 0.7,
			hue_min: 180.0,
			hue_max: 240.0,
			saturation: 70.0,
			lightness: 60.0,
			connection_distance: 100.0,
			connection_alpha: 0.2,
			connection_width: 0.5,
		}
	}
}

/// Background debris population and look.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DebrisStyle {
	pub count: usize,
	pub size_min: f64,
	pub size_max: f64,
	pub max_speed: f64,
	/// Radians per frame.
	pub max_rotation_speed: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	pub primary: Color,
	pub secondary: Color,
	pub glow_blur: f64,
	pub outline_width: f64,
}

impl Default for DebrisStyle {
	fn default() -> Self {
		Self {
			count: 15,
			size_min: 5.0,
			size_max: 20.0,
			max_speed: 0.15,
			max_rotation_speed: 0.015,
			opacity_min: 0.2,
			opacity_max: 0.6,
			primary: Color::rgb(0, 255, 255),
			secondary: Color::rgb(255, 0, 255),
			glow_blur: 5.0,
			outline_width: 1.0,
		}
	}
}

/// Pointer repulsion and portal attraction.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ForceStyle {
	pub repel_radius: f64,
	pub repel_strength: f64,
	pub attract_radius: f64,
	pub attract_strength: f64,
}

impl Default for ForceStyle {
	fn default() -> Self {
		Self {
			repel_radius: 150.0,
			repel_strength: 0.01,
			attract_radius: 300.0,
			attract_strength: 0.015,
		}
	}
}

/// The glow and pulsing ring around the portal center.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PortalStyle {
	/// Fraction of the remaining gap to the pointer closed each frame.
	pub smoothing: f64,
	pub glow_radius: f64,
	pub glow_hue: f64,
	pub glow_alpha: f64,
	pub ring_radius: f64,
	pub ring_pulse: f64,
	pub ring_hue: f64,
	pub ring_hue_swing: f64,
	/// Hue oscillation rate relative to the radius pulse.
	pub ring_hue_rate: f64,
	pub ring_alpha: f64,
	pub ring_width: f64,
	pub saturation: f64,
	pub lightness: f64,
}

impl Default for PortalStyle {
	fn default() -> Self {
		Self {
			smoothing: 0.05,
			glow_radius: 200.0,
			glow_hue: 180.0,
			glow_alpha: 0.12,
			ring_radius: 120.0,
			ring_pulse: 10.0,
			ring_hue: 180.0,
			ring_hue_swing: 60.0,
			ring_hue_rate: 0.5,
			ring_alpha: 0.6,
			ring_width: 2.0,
			saturation: 100.0,
			lightness: 50.0,
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
	pub particles: ParticleStyle,
	pub debris: DebrisStyle,
	pub forces: ForceStyle,
	pub portal: PortalStyle,
}

impl Theme {
	/// Parses a partial theme from JSON, filling gaps with defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	pub fn accent(&self, accent: Accent) -> Color {
		match accent {
			Accent::Primary => self.debris.primary,
			Accent::Secondary => self.debris.secondary,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hsla_css() {
		assert_eq!(Hsla::new(200.0, 70.0, 60.0, 0.5).to_css(), "hsla(200, 70%, 60%, 0.5)");
	}

	#[test]
	fn color_css() {
		assert_eq!(Color::rgb(0, 255, 255).to_css(), "#00ffff");
		let translucent = Color { a: 0.5, ..Color::rgb(255, 0, 255) };
		assert_eq!(translucent.to_css(), "rgba(255, 0, 255, 0.5)");
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let theme = Theme::from_json(r#"{ "portal": { "ring_radius": 80 } }"#).unwrap();
		assert_eq!(theme.portal.ring_radius, 80.0);
		assert_eq!(theme.portal.smoothing, 0.05);
		assert_eq!(theme.particles.count, 100);
		assert_eq!(theme.debris.count, 15);
	}

	#[test]
	fn accent_color_override() {
		let theme =
			Theme::from_json(r#"{ "debris": { "secondary": { "r": 1, "g": 2, "b": 3 } } }"#)
				.unwrap();
		assert_eq!(theme.debris.secondary, Color::rgb(1, 2, 3));
		assert_eq!(theme.debris.primary, Color::rgb(0, 255, 255));
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(Theme::from_json("{ particles: ").is_err());
	}
}
