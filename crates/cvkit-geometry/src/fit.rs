use crate::{error::GeometryError, line::HomogeneousLine, point::Point2i};

/// Fit a line to a set of points using total least squares (orthogonal regression).
///
/// Minimizes the sum of squared perpendicular distances: the line passes through the
/// centroid and its normal is the eigenvector of the smallest eigenvalue of the 2x2
/// scatter matrix. The returned line has a unit normal.
///
/// # Errors
///
/// * [`GeometryError::InsufficientPoints`] for fewer than two points.
/// * [`GeometryError::DegenerateLine`] when all points coincide.
pub fn fit_line_tls(points: &[Point2i]) -> Result<HomogeneousLine, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::InsufficientPoints {
            required: 2,
            actual: points.len(),
        });
    }

    let n = points.len() as f64;
    let (sum_x, sum_y) = points.iter().fold((0.0, 0.0), |(sx, sy), p| {
        (sx + p.x as f64, sy + p.y as f64)
    });
    let (mx, my) = (sum_x / n, sum_y / n);

    // scatter matrix | sxx sxy |
    //                | sxy syy |
    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for p in points {
        let dx = p.x as f64 - mx;
        let dy = p.y as f64 - my;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx + syy <= f64::EPSILON {
        return Err(GeometryError::DegenerateLine);
    }

    // principal direction of the scatter, the normal is perpendicular to it
    let theta = 0.5 * (2.0 * sxy).atan2(sxx - syy);
    let (sin, cos) = theta.sin_cos();
    let (a, b) = (-sin, cos);
    let c = -(a * mx + b * my);

    Ok(HomogeneousLine::new(a, b, c)?.normalized())
}
