use argh::FromArgs;
use image::{Rgb, RgbImage};
use imageproc::{
    contours::{find_contours, Contour},
    drawing::draw_line_segment_mut,
};
use std::path::PathBuf;

use cvkit::{
    events::LabelTable,
    geometry::Point2i,
    ransac::{extract_lines, LineRansacParams},
};

#[derive(FromArgs)]
/// Fit lines to the contour points of an image with RANSAC
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output image with the fitted lines (default: ransac_lines.png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"ransac_lines.png\")")]
    output_path: PathBuf,

    /// path to the output image with the contours (default: contours.png)
    #[argh(option, short = 'c', default = "PathBuf::from(\"contours.png\")")]
    contours_path: PathBuf,

    /// path to a JSON file with the estimator parameters
    #[argh(option, short = 'p')]
    params_path: Option<PathBuf>,

    /// random seed, overrides the parameters file
    #[argh(option, short = 's')]
    seed: Option<u64>,

    /// maximum number of lines to extract (default: 1)
    #[argh(option, short = 'n', default = "1")]
    num_lines: usize,

    /// refit the accepted lines on their inliers
    #[argh(switch, short = 'r')]
    refine: bool,
}

/// All contour points merged into one candidate set, contour by contour.
fn contour_points(contours: &[Contour<i32>]) -> Vec<Point2i> {
    contours
        .iter()
        .flat_map(|contour| contour.points.iter())
        .map(|p| Point2i::from((p.x, p.y)))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the image
    let image = image::open(&args.image_path)?;
    log::info!("image width: {}", image.width());
    log::info!("image height: {}", image.height());
    log::info!("image channels: {}", image.color().channel_count());

    // any non-zero pixel is foreground for the contour tracer
    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();

    // locate the contours and merge them into a single point set
    let contours = find_contours::<i32>(&gray);
    let points = contour_points(&contours);
    log::info!("{} contours, {} points", contours.len(), points.len());

    // draw the contours, one palette color each
    let palette = LabelTable::default();
    let mut image_contours = RgbImage::new(width, height);
    for (i, contour) in contours.iter().enumerate() {
        let color = Rgb(palette.color(i));
        for p in &contour.points {
            image_contours.put_pixel(p.x as u32, p.y as u32, color);
        }
    }
    image_contours.save(&args.contours_path)?;

    let mut params = match &args.params_path {
        Some(path) => LineRansacParams::from_json_file(path)?,
        None => LineRansacParams::default(),
    };
    if args.seed.is_some() {
        params.random_seed = args.seed;
    }
    params.refine |= args.refine;
    log::debug!("ransac parameters: {params:?}");

    let lines = extract_lines(&points, &params, args.num_lines)?;
    if lines.is_empty() {
        log::warn!(
            "no line with {} inliers after {} iterations",
            params.min_inliers,
            params.max_iterations
        );
    }

    // draw the sampled segment of each model, and the refined line across the image
    let mut image_result = RgbImage::new(width, height);
    for (i, model) in lines.iter().enumerate() {
        let [p1, p2] = model.points;
        log::info!(
            "FOUND A GOOD MODEL: {p1} {p2} ({} inliers, iteration {})",
            model.inlier_count(),
            model.iterations
        );
        draw_line_segment_mut(
            &mut image_result,
            (p1.x as f32, p1.y as f32),
            (p2.x as f32, p2.y as f32),
            Rgb([255, 0, 0]),
        );

        if let Some((start, end)) = model
            .refined
            .and_then(|line| line.clip_to_rect(width, height))
        {
            draw_line_segment_mut(
                &mut image_result,
                (start[0] as f32, start[1] as f32),
                (end[0] as f32, end[1] as f32),
                Rgb(palette.color(i + 1)),
            );
        }
    }
    image_result.save(&args.output_path)?;
    log::info!(
        "wrote {} and {}",
        args.contours_path.display(),
        args.output_path.display()
    );

    Ok(())
}
