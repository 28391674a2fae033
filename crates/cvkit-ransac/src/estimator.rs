use crate::{error::LineRansacError, params::LineRansacParams};
use cvkit_geometry::{fit_line_tls, HomogeneousLine, Point2i};
use rand::prelude::*;
use rand::SeedableRng;

/// A line accepted by the estimator.
#[derive(Clone, Debug, PartialEq)]
pub struct LineModel {
    /// The two sampled points defining the line.
    pub points: [Point2i; 2],
    /// Indices of the sampled points in the input slice.
    pub sample_indices: [usize; 2],
    /// The line through the two sampled points.
    pub line: HomogeneousLine,
    /// Indices of the inliers of `line`, in ascending order.
    pub inliers: Vec<usize>,
    /// The 1-based iteration at which the line was accepted.
    pub iterations: usize,
    /// Total least squares refit over the inliers, when refinement is enabled.
    pub refined: Option<HomogeneousLine>,
}

impl LineModel {
    /// Number of inliers supporting the line.
    pub fn inlier_count(&self) -> usize {
        self.inliers.len()
    }
}

/// Whether `p` supports `line`: its distance must be strictly below `threshold`.
#[inline]
pub fn is_inlier(line: &HomogeneousLine, p: &Point2i, threshold: f64) -> bool {
    line.distance(p) < threshold
}

/// Count the points whose distance to `line` is strictly below `threshold`.
pub fn count_inliers(points: &[Point2i], line: &HomogeneousLine, threshold: f64) -> usize {
    points
        .iter()
        .filter(|p| is_inlier(line, p, threshold))
        .count()
}

fn classify_inliers(
    points: &[Point2i],
    line: &HomogeneousLine,
    threshold: f64,
    inliers: &mut Vec<usize>,
) {
    inliers.clear();
    for (idx, p) in points.iter().enumerate() {
        if is_inlier(line, p, threshold) {
            inliers.push(idx);
        }
    }
}

/// Estimate a line with RANSAC, seeding the random source from the parameters.
///
/// Uses [`LineRansacParams::random_seed`] when set and OS entropy otherwise.
/// See [`fit_line_ransac_with_rng`] for the algorithm.
pub fn fit_line_ransac(
    points: &[Point2i],
    params: &LineRansacParams,
) -> Result<LineModel, LineRansacError> {
    let mut rng = match params.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let mut tr = rand::rng();
            StdRng::from_rng(&mut tr)
        }
    };
    fit_line_ransac_with_rng(points, params, &mut rng)
}

/// Estimate a line with RANSAC using a caller-provided random source.
///
/// Each iteration samples two distinct indices, builds the line through the two points
/// and counts the points closer than `distance_threshold`. The first hypothesis with at
/// least `min_inliers` inliers is returned; later iterations are not explored.
///
/// Samples whose points coincide are skipped. Nothing is drawn from `rng` when the
/// input has fewer than two points.
///
/// # Errors
///
/// * [`LineRansacError::InsufficientInput`] for fewer than two points.
/// * [`LineRansacError::InvalidParams`] when the parameters fail validation.
/// * [`LineRansacError::NoModelFound`] when the iteration budget is exhausted.
pub fn fit_line_ransac_with_rng<R: Rng>(
    points: &[Point2i],
    params: &LineRansacParams,
    rng: &mut R,
) -> Result<LineModel, LineRansacError> {
    let n = points.len();
    if n < 2 {
        return Err(LineRansacError::InsufficientInput {
            required: 2,
            actual: n,
        });
    }
    params.validate()?;

    let mut inliers = Vec::with_capacity(n);
    let mut best_inlier_count = 0usize;

    for iteration in 1..=params.max_iterations {
        let i1 = rng.random_range(0..n);
        let mut i2 = rng.random_range(0..n);
        while i2 == i1 {
            i2 = rng.random_range(0..n);
        }
        let (p1, p2) = (points[i1], points[i2]);

        let line = match HomogeneousLine::through(&p1, &p2) {
            Ok(line) => line,
            Err(_) => {
                log::trace!("skipping degenerate sample {p1} {p2} at iteration {iteration}");
                continue;
            }
        };

        classify_inliers(points, &line, params.distance_threshold, &mut inliers);
        if inliers.len() >= params.min_inliers {
            log::debug!(
                "found a line through {p1} {p2} with {} inliers after {iteration} iterations",
                inliers.len()
            );
            let refined = if params.refine {
                refine_line(points, &inliers)
            } else {
                None
            };
            return Ok(LineModel {
                points: [p1, p2],
                sample_indices: [i1, i2],
                line,
                inliers,
                iterations: iteration,
                refined,
            });
        }
        best_inlier_count = best_inlier_count.max(inliers.len());
    }

    log::debug!(
        "no line reached {} inliers in {} iterations, best had {best_inlier_count}",
        params.min_inliers,
        params.max_iterations
    );
    Err(LineRansacError::NoModelFound {
        iterations: params.max_iterations,
        best_inlier_count,
    })
}

fn refine_line(points: &[Point2i], inliers: &[usize]) -> Option<HomogeneousLine> {
    let support = inliers.iter().map(|&i| points[i]).collect::<Vec<_>>();
    match fit_line_tls(&support) {
        Ok(line) => Some(line),
        Err(e) => {
            log::warn!("line refinement failed on {} inliers: {e}", support.len());
            None
        }
    }
}
