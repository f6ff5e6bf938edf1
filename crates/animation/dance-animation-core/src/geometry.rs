//! Canvas-space points.

use serde::{Deserialize, Serialize};

/// 2D point in canvas pixels. Origin top-left, y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Round fractional coordinates half away from zero.
    #[inline]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }

    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Midpoint of a `width` x `height` canvas, using integer division.
    #[inline]
    pub const fn canvas_center(width: u32, height: u32) -> Self {
        Self {
            x: (width / 2) as i32,
            y: (height / 2) as i32,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(Point::from_f64(2.5, -2.5), Point::new(3, -3));
        assert_eq!(Point::from_f64(33.000000000000004, 24.0), Point::new(33, 24));
    }

    #[test]
    fn center_of_default_canvas() {
        assert_eq!(Point::canvas_center(400, 400), Point::new(200, 200));
        assert_eq!(Point::canvas_center(641, 480), Point::new(320, 240));
    }
}
