//! Scene entities: particles, debris and the points they move between.

/// A 2D position or displacement in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance_to(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// A foreground point light, pushed by the pointer and pulled by the portal.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub vx: f64,
	pub vy: f64,
	pub opacity: f64,
	/// Hue in degrees, fixed at creation.
	pub hue: f64,
}

impl Particle {
	pub fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

/// Outline of a debris item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebrisShape {
	Square,
	Triangle,
	Hexagon,
}

impl DebrisShape {
	pub const ALL: [DebrisShape; 3] = [Self::Square, Self::Triangle, Self::Hexagon];
}

/// Which of the two theme accent colors a debris item is drawn in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
	Primary,
	Secondary,
}

/// A background polygon drifting and spinning at constant rates.
#[derive(Clone, Debug)]
pub struct Debris {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub vx: f64,
	pub vy: f64,
	/// Current angle in radians.
	pub rotation: f64,
	pub rotation_speed: f64,
	pub shape: DebrisShape,
	pub opacity: f64,
	pub accent: Accent,
}
