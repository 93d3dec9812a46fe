use serde::{Deserialize, Serialize};

/// A point in client (viewport-relative page) coordinates, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn into_parts(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Axis-aligned box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Position of `point` inside this box as percentages of its size.
    ///
    /// Returns `None` for an empty or non-finite box, where the ratio has no meaning.
    pub fn percent_of(&self, point: Point) -> Option<Point> {
        let usable = |extent: f64| extent.is_finite() && extent > 0.0;
        if !usable(self.width) || !usable(self.height) {
            return None;
        }

        Some(Point {
            x: (point.x - self.left) / self.width * 100.0,
            y: (point.y - self.top) / self.height * 100.0,
        })
    }
}
