use crate::{
    error::LineRansacError,
    estimator::{fit_line_ransac_with_rng, LineModel},
    params::LineRansacParams,
};
use cvkit_geometry::Point2i;
use rand::prelude::*;
use rand::SeedableRng;

/// Extract up to `max_lines` lines by running the estimator repeatedly and removing the
/// inliers of each accepted line before the next round.
///
/// Seeds the random source from the parameters like [`crate::fit_line_ransac`].
pub fn extract_lines(
    points: &[Point2i],
    params: &LineRansacParams,
    max_lines: usize,
) -> Result<Vec<LineModel>, LineRansacError> {
    let mut rng = match params.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let mut tr = rand::rng();
            StdRng::from_rng(&mut tr)
        }
    };
    extract_lines_with_rng(points, params, max_lines, &mut rng)
}

/// Successive line extraction with a caller-provided random source.
///
/// Stops when `max_lines` lines were found, fewer than two points remain, or a round
/// ends without a model. Indices in the returned models refer to `points`.
///
/// # Errors
///
/// [`LineRansacError::InsufficientInput`] when `points` has fewer than two points and
/// [`LineRansacError::InvalidParams`] for invalid parameters. Running out of lines is
/// not an error.
pub fn extract_lines_with_rng<R: Rng>(
    points: &[Point2i],
    params: &LineRansacParams,
    max_lines: usize,
    rng: &mut R,
) -> Result<Vec<LineModel>, LineRansacError> {
    if points.len() < 2 {
        return Err(LineRansacError::InsufficientInput {
            required: 2,
            actual: points.len(),
        });
    }
    params.validate()?;

    let mut remaining: Vec<usize> = (0..points.len()).collect();
    let mut lines = Vec::new();

    while lines.len() < max_lines && remaining.len() >= 2 {
        let subset = remaining.iter().map(|&i| points[i]).collect::<Vec<_>>();
        let mut model = match fit_line_ransac_with_rng(&subset, params, rng) {
            Ok(model) => model,
            Err(LineRansacError::NoModelFound { .. }) => break,
            Err(e) => return Err(e),
        };

        // map subset indices back to the input; both stay sorted
        model.inliers = model.inliers.iter().map(|&i| remaining[i]).collect();
        model.sample_indices = model.sample_indices.map(|i| remaining[i]);
        remaining.retain(|i| model.inliers.binary_search(i).is_err());

        log::debug!(
            "line {} has {} inliers, {} points left",
            lines.len(),
            model.inlier_count(),
            remaining.len()
        );
        lines.push(model);
    }

    Ok(lines)
}
