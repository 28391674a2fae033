use crate::{error::GeometryError, point::Point2i};

/// Cross product of two integer 3-vectors.
///
/// Applied to the homogeneous coordinates of two points it yields the line
/// through both; applied to two lines it yields their intersection.
///
/// Evaluated in `i128`, which holds every result for `i64` inputs exactly.
pub fn cross(a: &[i64; 3], b: &[i64; 3]) -> [i128; 3] {
    let [a0, a1, a2] = a.map(i128::from);
    let [b0, b1, b2] = b.map(i128::from);
    [a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0]
}

/// A 2d line `a * x + b * y + c = 0` in homogeneous coordinates.
///
/// The normal `(a, b)` is guaranteed to be non-zero, so the point-to-line
/// distance is always defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomogeneousLine {
    a: f64,
    b: f64,
    c: f64,
    norm: f64,
}

impl HomogeneousLine {
    /// Create a line from its coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFiniteCoefficients`] if any coefficient is not finite and
    /// [`GeometryError::DegenerateLine`] if `a` and `b` are both zero.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, GeometryError> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(GeometryError::NonFiniteCoefficients);
        }
        let norm = a.hypot(b);
        if norm == 0.0 {
            return Err(GeometryError::DegenerateLine);
        }
        Ok(Self { a, b, c, norm })
    }

    /// The line through two points, `cross((x1, y1, 1), (x2, y2, 1))`.
    ///
    /// The cross product is evaluated exactly in integer arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateLine`] when the two points coincide.
    pub fn through(p: &Point2i, q: &Point2i) -> Result<Self, GeometryError> {
        let [a, b, c] = cross(&p.homogeneous(), &q.homogeneous());
        if a == 0 && b == 0 {
            return Err(GeometryError::DegenerateLine);
        }
        Self::new(a as f64, b as f64, c as f64)
    }

    /// The coefficients `[a, b, c]`.
    pub fn coefficients(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// The length of the normal vector, `sqrt(a^2 + b^2)`.
    pub fn normal_norm(&self) -> f64 {
        self.norm
    }

    /// Perpendicular distance from an integer point to the line.
    #[inline]
    pub fn distance(&self, p: &Point2i) -> f64 {
        self.distance_f64(p.x as f64, p.y as f64)
    }

    /// Perpendicular distance from `(x, y)` to the line.
    #[inline]
    pub fn distance_f64(&self, x: f64, y: f64) -> f64 {
        (self.a * x + self.b * y + self.c).abs() / self.norm
    }

    /// The same line scaled to a unit normal.
    ///
    /// The sign is chosen so that `a > 0`, or `a == 0` and `b > 0`, which makes
    /// two normalized representations of the same line compare equal.
    pub fn normalized(&self) -> Self {
        let sign = if self.a < 0.0 || (self.a == 0.0 && self.b < 0.0) {
            -1.0
        } else {
            1.0
        };
        let s = sign / self.norm;
        Self {
            a: self.a * s,
            b: self.b * s,
            c: self.c * s,
            norm: 1.0,
        }
    }

    /// Clip the infinite line to the pixel rectangle `[0, width - 1] x [0, height - 1]`.
    ///
    /// Returns the two border crossings that lie farthest apart, or `None` if the line
    /// misses the rectangle.
    pub fn clip_to_rect(&self, width: u32, height: u32) -> Option<([f64; 2], [f64; 2])> {
        if width == 0 || height == 0 {
            return None;
        }
        const EPS: f64 = 1e-9;
        let xmax = (width - 1) as f64;
        let ymax = (height - 1) as f64;

        let mut hits: Vec<[f64; 2]> = Vec::with_capacity(4);
        if self.b != 0.0 {
            for x in [0.0, xmax] {
                let y = -(self.a * x + self.c) / self.b;
                if (-EPS..=ymax + EPS).contains(&y) {
                    hits.push([x, y.clamp(0.0, ymax)]);
                }
            }
        }
        if self.a != 0.0 {
            for y in [0.0, ymax] {
                let x = -(self.b * y + self.c) / self.a;
                if (-EPS..=xmax + EPS).contains(&x) {
                    hits.push([x.clamp(0.0, xmax), y]);
                }
            }
        }

        let mut best: Option<([f64; 2], [f64; 2])> = hits.first().map(|&p| (p, p));
        let mut best_dist = 0.0;
        for (i, p) in hits.iter().enumerate() {
            for q in hits.iter().skip(i + 1) {
                let d = (p[0] - q[0]).powi(2) + (p[1] - q[1]).powi(2);
                if d > best_dist {
                    best_dist = d;
                    best = Some((*p, *q));
                }
            }
        }
        best
    }
}
