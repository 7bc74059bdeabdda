//! Exponential smoothing of the portal center toward the pointer.

use super::types::Point;

/// Moves `current` a fraction `k` of the way to `target`, per axis.
///
/// With `k` in `(0, 1)` and a fixed target the remaining gap after `n`
/// calls is `gap0 * (1 - k)^n`, so the center glides and never jumps.
pub fn advance(target: Point, current: Point, k: f64) -> Point {
	Point::new(
		current.x + (target.x - current.x) * k,
		current.y + (target.y - current.y) * k,
	)
}
