use crate::error::Error;
use image::DynamicImage;

const R_WEIGHT: f64 = 0.299;
const G_WEIGHT: f64 = 0.587;
const B_WEIGHT: f64 = 0.114;

/// Mean perceptual luminance of the frame, mapped into [1.0, 100.0].
///
/// A single-color frame is valid input: all-black scores 1.0 and all-white
/// scores 100.0.
pub fn analyze(image: &DynamicImage) -> Result<f64, Error> {
    let rgb = image.to_rgb8();
    let pixels = rgb.width() as u64 * rgb.height() as u64;
    if pixels == 0 {
        return Err(Error::EmptyFrame);
    }

    let total: f64 = rgb
        .pixels()
        .map(|pixel| {
            R_WEIGHT * pixel.0[0] as f64 / 255.0
                + G_WEIGHT * pixel.0[1] as f64 / 255.0
                + B_WEIGHT * pixel.0[2] as f64 / 255.0
        })
        .sum();

    Ok(total / pixels as f64 * 99.0 + 1.0)
}
