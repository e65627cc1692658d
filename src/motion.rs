//! Cursor paths.
//!
//! A glide is the list of positions the cursor visits on its way to the
//! button, one `set_cursor_pos` per entry. The final entry is always the
//! exact target.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::constants::MIN_GLIDE_DISTANCE;
use crate::model::Point;

/// Shape of a glide.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MotionStyle {
    /// Quadratic Bézier with a random sideways bend.
    #[default]
    Bezier,
    /// Straight line in equal integer steps.
    Linear,
}

/// Build a glide from `from` to `to`.
///
/// `bend` in [-1, 1] only affects [`MotionStyle::Bezier`].
pub fn glide_path(style: MotionStyle, from: Point, to: Point, bend: f64, steps: u32) -> Vec<Point> {
    match style {
        MotionStyle::Bezier => bezier_path(from, to, bend, steps),
        MotionStyle::Linear => linear_path(from, to, steps),
    }
}

/// Random sideways bend, uniform in [-1, 1].
pub fn random_bend<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(-1.0..=1.0)
}

/// Quadratic Bézier from `from` to `to`.
///
/// The control point sits on the perpendicular through the midpoint, offset
/// by `bend * distance / 3`. Paths shorter than two pixels collapse to the
/// target.
pub fn bezier_path(from: Point, to: Point, bend: f64, steps: u32) -> Vec<Point> {
    let dx = (to.x - from.x) as f64;
    let dy = (to.y - from.y) as f64;
    let dist = from.distance_to(to);

    if dist < MIN_GLIDE_DISTANCE || steps == 0 {
        return vec![to];
    }

    let perp_x = -dy / dist;
    let perp_y = dx / dist;
    let amplitude = bend.clamp(-1.0, 1.0) * dist / 3.0;

    let (x0, y0) = (from.x as f64, from.y as f64);
    let (x2, y2) = (to.x as f64, to.y as f64);
    let cx = x0 + dx / 2.0 + perp_x * amplitude;
    let cy = y0 + dy / 2.0 + perp_y * amplitude;

    (1..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let inv = 1.0 - t;
            // B(t) = (1-t)²·P0 + 2·(1-t)·t·P1 + t²·P2
            let x = inv * inv * x0 + 2.0 * inv * t * cx + t * t * x2;
            let y = inv * inv * y0 + 2.0 * inv * t * cy + t * t * y2;
            Point::new(x.round() as i32, y.round() as i32)
        })
        .collect()
}

/// Straight glide in `steps` equal integer increments.
pub fn linear_path(from: Point, to: Point, steps: u32) -> Vec<Point> {
    if steps == 0 {
        return vec![to];
    }
    let n = steps as i64;
    (1..=n)
        .map(|i| {
            let x = from.x as i64 + (to.x - from.x) as i64 * i / n;
            let y = from.y as i64 + (to.y - from.y) as i64 * i / n;
            Point::new(x as i32, y as i32)
        })
        .collect()
}
