use argh::FromArgs;
use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};
use imageproc::{
    drawing::draw_hollow_rect_mut,
    rect::Rect,
    template_matching::{find_extremes, match_template, MatchTemplateMethod},
};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Locate a template inside a scene image with normalized cross-correlation
struct Args {
    /// path to the scene image
    #[argh(option, short = 's')]
    scene_path: PathBuf,

    /// path to the template image
    #[argh(option, short = 't')]
    template_path: PathBuf,

    /// path to the annotated scene (default: match.png)
    #[argh(option, short = 'o', default = "PathBuf::from(\"match.png\")")]
    output_path: PathBuf,

    /// path to the normalized search result (default: search_result.png)
    #[argh(option, short = 'r', default = "PathBuf::from(\"search_result.png\")")]
    result_path: PathBuf,

    /// stroke thickness of the match rectangle in pixels (default: 3)
    #[argh(option, default = "3")]
    thickness: u32,
}

/// Top-left corner of the best match of `template` in `scene`, with the correlation map.
///
/// Returns `None` when the template does not fit inside the scene.
fn best_match(
    scene: &GrayImage,
    template: &GrayImage,
) -> Option<((u32, u32), ImageBuffer<Luma<f32>, Vec<f32>>)> {
    let (sw, sh) = scene.dimensions();
    let (tw, th) = template.dimensions();
    if tw == 0 || th == 0 || tw > sw || th > sh {
        return None;
    }
    let result = match_template(
        scene,
        template,
        MatchTemplateMethod::CrossCorrelationNormalized,
    );
    let extremes = find_extremes(&result);
    Some((extremes.max_value_location, result))
}

/// Min-max stretch of the correlation map to an 8-bit image.
fn to_gray(result: &ImageBuffer<Luma<f32>, Vec<f32>>) -> GrayImage {
    let extremes = find_extremes(result);
    let range = extremes.max_value - extremes.min_value;
    GrayImage::from_fn(result.width(), result.height(), |x, y| {
        let v = result.get_pixel(x, y)[0];
        if range > 0.0 {
            Luma([((v - extremes.min_value) / range * 255.0).round() as u8])
        } else {
            Luma([0])
        }
    })
}

/// Outline a `width x height` box at `corner`, growing outwards with the thickness.
fn draw_match(image: &mut RgbImage, corner: (u32, u32), size: (u32, u32), thickness: u32) {
    let (x, y) = (corner.0 as i32, corner.1 as i32);
    for t in 0..thickness {
        let ti = t as i32;
        let rect = Rect::at(x - ti, y - ti).of_size(size.0 + 2 * t, size.1 + 2 * t);
        draw_hollow_rect_mut(image, rect, Rgb([255, 0, 0]));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let scene = image::open(&args.scene_path)?;
    let template = image::open(&args.template_path)?;
    log::info!("scene size: {}x{}", scene.width(), scene.height());
    log::info!("template size: {}x{}", template.width(), template.height());

    let Some((location, result)) = best_match(&scene.to_luma8(), &template.to_luma8()) else {
        return Err("the template must be non-empty and fit inside the scene".into());
    };
    log::info!("best match at ({}, {})", location.0, location.1);

    to_gray(&result).save(&args.result_path)?;

    let mut annotated = scene.to_rgb8();
    let size = (template.width(), template.height());
    draw_match(&mut annotated, location, size, args.thickness);
    annotated.save(&args.output_path)?;
    log::info!("wrote {}", args.output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textured_scene(width: u32, height: u32) -> GrayImage {
        let mut state = 12345u32;
        GrayImage::from_fn(width, height, |_, _| {
            state = state.wrapping_mul(1103515245).wrapping_add(12345);
            Luma([(state >> 16) as u8])
        })
    }

    #[test]
    fn test_best_match_finds_crop() {
        let scene = textured_scene(64, 48);
        let template = image::imageops::crop_imm(&scene, 21, 13, 12, 9).to_image();
        let (location, result) = best_match(&scene, &template).expect("template fits");
        assert_eq!(location, (21, 13));
        assert_eq!(result.dimensions(), (53, 40));
    }

    #[test]
    fn test_template_too_large() {
        let scene = textured_scene(10, 10);
        assert!(best_match(&scene, &textured_scene(11, 4)).is_none());
        assert!(best_match(&scene, &GrayImage::new(0, 0)).is_none());
    }

    #[test]
    fn test_result_stretched_to_full_range() {
        let scene = textured_scene(40, 30);
        let template = image::imageops::crop_imm(&scene, 5, 5, 8, 8).to_image();
        let (_, result) = best_match(&scene, &template).expect("template fits");
        let gray = to_gray(&result);
        assert_eq!(gray.get_pixel(5, 5), &Luma([255]));
        assert_eq!(gray.pixels().map(|p| p[0]).min(), Some(0));
    }

    #[test]
    fn test_draw_match() {
        let mut image = RgbImage::new(50, 50);
        draw_match(&mut image, (10, 10), (20, 15), 3);
        assert_eq!(image.get_pixel(10, 10), &Rgb([255, 0, 0]));
        assert_eq!(image.get_pixel(8, 8), &Rgb([255, 0, 0]));
        assert_eq!(image.get_pixel(29, 24), &Rgb([255, 0, 0]));
        assert_eq!(image.get_pixel(15, 15), &Rgb([0, 0, 0]));
    }
}
