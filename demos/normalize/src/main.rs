use argh::FromArgs;
use image::GrayImage;
use std::path::PathBuf;

#[derive(FromArgs)]
/// Stretch the intensities of a grayscale image to a target range
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the normalized output (default: normalized.png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"normalized.png\")")]
    output_path: PathBuf,

    /// path to the grayscale input written before normalization (default: gray.png)
    #[argh(option, short = 'g', default = "PathBuf::from(\"gray.png\")")]
    gray_path: PathBuf,

    /// lower bound of the output range (default: 0)
    #[argh(option, default = "0")]
    min: u8,

    /// upper bound of the output range (default: 255)
    #[argh(option, default = "255")]
    max: u8,
}

/// The smallest and largest pixel values, or `None` for an empty image.
fn find_min_max(image: &GrayImage) -> Option<(u8, u8)> {
    let first = *image.as_raw().first()?;
    Some(
        image
            .as_raw()
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Map `[min_val, max_val]` of the image linearly onto `[min, max]`, rounding to the nearest
/// integer. A constant image maps to `min`.
fn normalize_min_max(image: &GrayImage, min: u8, max: u8) -> GrayImage {
    let mut out = GrayImage::new(image.width(), image.height());
    let Some((min_val, max_val)) = find_min_max(image) else {
        return out;
    };
    let range = (max_val - min_val) as f64;
    let span = max as f64 - min as f64;
    for (src, dst) in image.as_raw().iter().zip(out.iter_mut()) {
        let v = if range > 0.0 {
            (*src - min_val) as f64 * span / range + min as f64
        } else {
            min as f64
        };
        *dst = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let gray = image::open(&args.image_path)?.to_luma8();
    gray.save(&args.gray_path)?;

    let Some((min_val, max_val)) = find_min_max(&gray) else {
        return Err("empty image".into());
    };
    log::info!("Minimum value: {min_val}");
    log::info!("Maximum value: {max_val}");

    let normalized = normalize_min_max(&gray, args.min, args.max);
    if let Some((min_val, max_val)) = find_min_max(&normalized) {
        log::info!("Minimum value: {min_val}");
        log::info!("Maximum value: {max_val}");
    }

    normalized.save(&args.output_path)?;
    log::info!("wrote {}", args.output_path.display());

    Ok(())
}
