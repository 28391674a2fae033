use argh::FromArgs;
use image::Rgb;
use imageproc::{
    drawing::draw_line_segment_mut,
    edges::canny,
    hough::{detect_lines, LineDetectionOptions, PolarLine},
};
use std::path::PathBuf;

use cvkit::geometry::{GeometryError, HomogeneousLine};

#[derive(FromArgs)]
/// Detect straight lines on the Canny edges of an image
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output image (default: hough_lines.png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"hough_lines.png\")")]
    output_path: PathBuf,

    /// path to the edge map output (default: edges.png)
    #[argh(option, short = 'e', default = "PathBuf::from(\"edges.png\")")]
    edges_path: PathBuf,

    /// low hysteresis threshold of the edge detector (default: 100)
    #[argh(option, default = "100.0")]
    low_threshold: f32,

    /// high hysteresis threshold of the edge detector (default: 200)
    #[argh(option, default = "200.0")]
    high_threshold: f32,

    /// minimum number of votes for a line (default: 50)
    #[argh(option, short = 'v', default = "50")]
    vote_threshold: u32,

    /// radius of the non-maximum suppression in the accumulator (default: 8)
    #[argh(option, default = "8")]
    suppression_radius: u32,
}

/// The line `x * cos(theta) + y * sin(theta) = r` of a Hough accumulator peak.
fn polar_to_line(polar: &PolarLine) -> Result<HomogeneousLine, GeometryError> {
    let theta = (polar.angle_in_degrees as f64).to_radians();
    HomogeneousLine::new(theta.cos(), theta.sin(), -(polar.r as f64))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let image = image::open(&args.image_path)?;
    log::info!("image size: {}x{}", image.width(), image.height());

    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();

    let edges = canny(&gray, args.low_threshold, args.high_threshold);
    edges.save(&args.edges_path)?;

    let options = LineDetectionOptions {
        vote_threshold: args.vote_threshold,
        suppression_radius: args.suppression_radius,
    };
    let polar_lines = detect_lines(&edges, options);
    log::info!("detected {} lines", polar_lines.len());

    let mut result = image.to_rgb8();
    for polar in &polar_lines {
        let line = polar_to_line(polar)?;
        let Some((start, end)) = line.clip_to_rect(width, height) else {
            log::debug!("line {polar:?} misses the image");
            continue;
        };
        draw_line_segment_mut(
            &mut result,
            (start[0] as f32, start[1] as f32),
            (end[0] as f32, end[1] as f32),
            Rgb([255, 0, 0]),
        );
    }
    result.save(&args.output_path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_polar_vertical_line() -> Result<(), GeometryError> {
        let line = polar_to_line(&PolarLine {
            r: 30.0,
            angle_in_degrees: 0,
        })?;
        let (p, q) = line.clip_to_rect(100, 50).expect("x = 30 crosses the image");
        assert_abs_diff_eq!(p[0], 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(q[0], 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!((p[1] - q[1]).abs(), 49.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_polar_horizontal_and_outside() -> Result<(), GeometryError> {
        let horizontal = polar_to_line(&PolarLine {
            r: 20.0,
            angle_in_degrees: 90,
        })?;
        assert_abs_diff_eq!(horizontal.distance_f64(75.0, 20.0), 0.0, epsilon = 1e-9);
        let (p, q) = horizontal
            .clip_to_rect(100, 50)
            .expect("y = 20 crosses the image");
        assert_abs_diff_eq!(p[1], 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!((p[0] - q[0]).abs(), 99.0, epsilon = 1e-9);

        let outside = polar_to_line(&PolarLine {
            r: 500.0,
            angle_in_degrees: 45,
        })?;
        assert!(outside.clip_to_rect(100, 50).is_none());
        Ok(())
    }
}
