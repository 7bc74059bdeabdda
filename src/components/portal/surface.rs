//! The drawing primitives the renderer needs from a 2D surface.
//!
//! Implemented for the browser's `CanvasRenderingContext2d`; tests plug in a
//! recording surface instead.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

/// A 2D drawing target with canvas-like path and state semantics.
///
/// Colors are CSS color strings. `save`/`restore` bracket changes to the
/// transform, alpha and glow.
pub trait Surface {
	fn clear(&self, width: f64, height: f64);
	fn save(&self);
	fn restore(&self);
	fn translate(&self, x: f64, y: f64);
	fn rotate(&self, angle: f64);
	fn set_global_alpha(&self, alpha: f64);
	/// Soft shadow of `blur` pixels drawn under subsequent shapes.
	fn set_glow(&self, color: &str, blur: f64);
	fn set_fill(&self, color: &str);
	fn set_stroke(&self, color: &str, width: f64);
	fn begin_path(&self);
	fn move_to(&self, x: f64, y: f64);
	fn line_to(&self, x: f64, y: f64);
	fn close_path(&self);
	/// Adds a full circle to the current path.
	fn circle(&self, x: f64, y: f64, radius: f64);
	fn fill(&self);
	fn stroke(&self);
	/// Fills a disc of `radius` with a radial gradient from `inner` at the
	/// center to `outer` at the rim.
	fn fill_radial_glow(&self, x: f64, y: f64, radius: f64, inner: &str, outer: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn save(&self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn translate(&self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn rotate(&self, angle: f64) {
		let _ = CanvasRenderingContext2d::rotate(self, angle);
	}

	fn set_global_alpha(&self, alpha: f64) {
		CanvasRenderingContext2d::set_global_alpha(self, alpha);
	}

	fn set_glow(&self, color: &str, blur: f64) {
		self.set_shadow_color(color);
		self.set_shadow_blur(blur);
	}

	fn set_fill(&self, color: &str) {
		self.set_fill_style_str(color);
	}

	fn set_stroke(&self, color: &str, width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
	}

	fn begin_path(&self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn move_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn line_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::line_to(self, x, y);
	}

	fn close_path(&self) {
		CanvasRenderingContext2d::close_path(self);
	}

	fn circle(&self, x: f64, y: f64, radius: f64) {
		let _ = self.arc(x, y, radius, 0.0, TAU);
	}

	fn fill(&self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn stroke(&self) {
		CanvasRenderingContext2d::stroke(self);
	}

	fn fill_radial_glow(&self, x: f64, y: f64, radius: f64, inner: &str, outer: &str) {
		let Ok(gradient) = self.create_radial_gradient(x, y, 0.0, x, y, radius) else {
			return;
		};
		let _ = gradient.add_color_stop(0.0, inner);
		let _ = gradient.add_color_stop(1.0, outer);

		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		CanvasRenderingContext2d::begin_path(self);
		let _ = self.arc(x, y, radius, 0.0, TAU);
		CanvasRenderingContext2d::fill(self);
	}
}
