use crate::{Error, Result};
use image::RgbImage;

/// Per-pixel, per-channel `|a - b|` of two equally sized images.
pub fn absolute_difference(a: &RgbImage, b: &RgbImage) -> Result<RgbImage> {
    if a.dimensions() != b.dimensions() {
        return Err(Error::DimensionMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }

    let (width, height) = a.dimensions();
    let mut result = RgbImage::new(width, height);

    for ((pixel, pa), pb) in result.pixels_mut().zip(a.pixels()).zip(b.pixels()) {
        for i in 0..3 {
            pixel[i] = pa[i].abs_diff(pb[i]);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_identical_images() {
        let img = RgbImage::from_pixel(100, 100, Rgb([255, 0, 0]));
        let diff = absolute_difference(&img, &img).unwrap();
        assert!(diff.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_difference_is_symmetric() {
        let a = RgbImage::from_fn(8, 8, |x, y| Rgb([(x * 30) as u8, (y * 30) as u8, 200]));
        let b = RgbImage::from_fn(8, 8, |x, y| Rgb([(y * 25) as u8, 100, (x * 20) as u8]));

        let ab = absolute_difference(&a, &b).unwrap();
        let ba = absolute_difference(&b, &a).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.get_pixel(3, 1).0, [65, 70, 140]);
    }

    #[test]
    fn test_black_vs_white() {
        let black = RgbImage::from_pixel(50, 50, Rgb([0, 0, 0]));
        let white = RgbImage::from_pixel(50, 50, Rgb([255, 255, 255]));
        let diff = absolute_difference(&black, &white).unwrap();
        assert!(diff.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = absolute_difference(&RgbImage::new(2, 3), &RgbImage::new(3, 2)).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                left: (2, 3),
                right: (3, 2)
            }
        ));
    }
}
