use argh::FromArgs;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;
use std::path::PathBuf;

const NUM_BINS: usize = 256;
const PLOT_WIDTH: u32 = 512;
const PLOT_HEIGHT: u32 = 400;

#[derive(FromArgs)]
/// Plot the per-channel color histogram of an image
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output plot (default: histogram.png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"histogram.png\")")]
    output_path: PathBuf,
}

/// Count the pixel values of each channel, in R, G, B order.
fn channel_histograms(image: &RgbImage) -> [[u32; NUM_BINS]; 3] {
    let mut hist = [[0u32; NUM_BINS]; 3];
    for pixel in image.pixels() {
        for (ch, &value) in pixel.0.iter().enumerate() {
            hist[ch][value as usize] += 1;
        }
    }
    hist
}

/// Min-max normalize the bin counts to `[0, max_value]`.
fn normalize(hist: &[u32; NUM_BINS], max_value: f32) -> [f32; NUM_BINS] {
    let min = hist.iter().copied().min().unwrap_or(0) as f32;
    let max = hist.iter().copied().max().unwrap_or(0) as f32;
    let range = max - min;
    let mut out = [0.0; NUM_BINS];
    if range > 0.0 {
        for (o, &h) in out.iter_mut().zip(hist.iter()) {
            *o = (h as f32 - min) / range * max_value;
        }
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let image = image::open(&args.image_path)?.to_rgb8();
    log::info!("image size: {}x{}", image.width(), image.height());

    let hist = channel_histograms(&image);

    let mut plot = RgbImage::new(PLOT_WIDTH, PLOT_HEIGHT);
    let bin_w = (PLOT_WIDTH as f32 / NUM_BINS as f32).round();
    let bottom = PLOT_HEIGHT as f32 - 1.0;

    // blue first, red on top
    let channels = [(2, Rgb([0, 0, 255])), (1, Rgb([0, 255, 0])), (0, Rgb([255, 0, 0]))];
    for (ch, color) in channels {
        let values = normalize(&hist[ch], bottom);
        for i in 1..NUM_BINS {
            let start = (bin_w * (i - 1) as f32, bottom - values[i - 1]);
            let end = (bin_w * i as f32, bottom - values[i]);
            // two pixels thick
            draw_line_segment_mut(&mut plot, start, end, color);
            draw_line_segment_mut(&mut plot, (start.0, start.1 - 1.0), (end.0, end.1 - 1.0), color);
        }
    }

    plot.save(&args.output_path)?;
    log::info!("wrote {}", args.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_histograms() {
        let mut image = RgbImage::new(2, 1);
        image.put_pixel(0, 0, Rgb([10, 20, 30]));
        image.put_pixel(1, 0, Rgb([10, 0, 255]));
        let hist = channel_histograms(&image);
        assert_eq!(hist[0][10], 2);
        assert_eq!(hist[1][20], 1);
        assert_eq!(hist[1][0], 1);
        assert_eq!(hist[2][255], 1);
        assert_eq!(hist.iter().map(|h| h.iter().sum::<u32>()).sum::<u32>(), 6);
    }

    #[test]
    fn test_normalize() {
        let mut hist = [0u32; NUM_BINS];
        hist[5] = 4;
        hist[6] = 2;
        let values = normalize(&hist, 100.0);
        assert_eq!(values[5], 100.0);
        assert_eq!(values[6], 50.0);
        assert_eq!(values[0], 0.0);

        // a flat histogram stays at the bottom
        assert!(normalize(&[7; NUM_BINS], 100.0).iter().all(|&v| v == 0.0));
    }
}
