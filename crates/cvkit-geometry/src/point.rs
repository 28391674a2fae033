use serde::{Deserialize, Serialize};

/// A point in image space with integer coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point2i {
    /// Column coordinate.
    pub x: i64,
    /// Row coordinate.
    pub y: i64,
}

impl Point2i {
    /// Create a new point from its coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The homogeneous coordinates `(x, y, 1)` of the point.
    pub const fn homogeneous(&self) -> [i64; 3] {
        [self.x, self.y, 1]
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2i) -> f64 {
        let dx = (i128::from(self.x) - i128::from(other.x)) as f64;
        let dy = (i128::from(self.y) - i128::from(other.y)) as f64;
        dx.hypot(dy)
    }
}

impl From<(i64, i64)> for Point2i {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point2i {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: x as i64,
            y: y as i64,
        }
    }
}

impl From<[i64; 2]> for Point2i {
    fn from([x, y]: [i64; 2]) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point2i {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
