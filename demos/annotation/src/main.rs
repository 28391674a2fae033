use argh::FromArgs;
use image::{imageops, Rgb, RgbImage};
use imageproc::{
    drawing::{draw_hollow_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut},
    rect::Rect,
};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Crop a region of interest and annotate an image with basic shapes
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the annotated output (default: annotated.png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"annotated.png\")")]
    output_path: PathBuf,

    /// path to the cropped region of interest (default: roi.png)
    #[argh(option, short = 'r', default = "PathBuf::from(\"roi.png\")")]
    roi_path: PathBuf,

    /// side of the centered region of interest in pixels (default: 200)
    #[argh(option, default = "200")]
    roi_size: u32,

    /// radius of the circle in pixels (default: 100)
    #[argh(option, default = "100")]
    radius: i32,

    /// stroke thickness in pixels (default: 3)
    #[argh(option, default = "3")]
    thickness: u32,
}

/// The centered `size x size` square, shrunk to fit the image.
fn centered_roi(width: u32, height: u32, size: u32) -> (u32, u32, u32, u32) {
    let w = size.min(width);
    let h = size.min(height);
    ((width - w) / 2, (height - h) / 2, w, h)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut image = image::open(&args.image_path)?.to_rgb8();
    let (width, height) = image.dimensions();
    log::info!("image size: {width}x{height}");

    let (x, y, w, h) = centered_roi(width, height, args.roi_size);
    if w == 0 || h == 0 {
        return Err("empty image".into());
    }
    imageops::crop_imm(&image, x, y, w, h)
        .to_image()
        .save(&args.roi_path)?;
    log::info!("roi at ({x}, {y}) size {w}x{h}");

    draw_annotations(&mut image, (x, y, w, h), args.radius, args.thickness);

    image.save(&args.output_path)?;
    log::info!("wrote {}", args.output_path.display());

    Ok(())
}

/// Outline the region, circle the image center and cross the corners.
fn draw_annotations(image: &mut RgbImage, roi: (u32, u32, u32, u32), radius: i32, thickness: u32) {
    let (width, height) = image.dimensions();
    let (x, y, w, h) = roi;
    let cx = (width / 2) as i32;
    let cy = (height / 2) as i32;
    let (xmax, ymax) = ((width - 1) as f32, (height - 1) as f32);

    for t in 0..thickness {
        let ti = t as i32;
        // grows outwards from the region border
        if w + 2 * t > 0 && h + 2 * t > 0 {
            let rect = Rect::at(x as i32 - ti, y as i32 - ti).of_size(w + 2 * t, h + 2 * t);
            draw_hollow_rect_mut(image, rect, Rgb([255, 0, 0]));
        }
        if radius + ti > 0 {
            draw_hollow_circle_mut(image, (cx, cy), radius + ti, Rgb([0, 0, 255]));
        }
        let o = t as f32;
        draw_line_segment_mut(image, (o, 0.0), (xmax, ymax - o), Rgb([0, 0, 0]));
        draw_line_segment_mut(image, (xmax - o, 0.0), (0.0, ymax - o), Rgb([0, 0, 0]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_roi() {
        assert_eq!(centered_roi(640, 480, 200), (220, 140, 200, 200));
        assert_eq!(centered_roi(100, 300, 200), (0, 50, 100, 200));
    }

    #[test]
    fn test_draw_annotations() {
        let mut image = RgbImage::from_pixel(400, 400, Rgb([128, 128, 128]));
        let roi = centered_roi(400, 400, 200);
        draw_annotations(&mut image, roi, 100, 3);

        // rectangle border in red, diagonals in black
        assert_eq!(image.get_pixel(100, 150), &Rgb([255, 0, 0]));
        assert_eq!(image.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(200, 100), &Rgb([0, 0, 255]));
        // the inside of the circle is untouched off the diagonals
        assert_eq!(image.get_pixel(200, 150), &Rgb([128, 128, 128]));
    }
}
