use crate::{DEFAULT_ENHANCEMENT_FACTOR, Effect, Error, Result};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;

/// Brightness enhancement configuration
///
/// Each channel is multiplied by `factor`, clamped to [0, 255] and truncated.
/// A factor of zero or below turns the image black.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct EnhanceConfig {
    #[derivative(Default(value = "DEFAULT_ENHANCEMENT_FACTOR"))]
    factor: f32,
}

impl EnhanceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }
}

impl Effect for EnhanceConfig {
    fn apply(&self, image: &mut RgbImage) -> Result<()> {
        if !self.factor.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "enhancement factor must be finite, got {}",
                self.factor
            )));
        }

        for pixel in image.pixels_mut() {
            for i in 0..3 {
                let new_val = pixel[i] as f32 * self.factor;
                pixel[i] = new_val.clamp(0.0, 255.0) as u8;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_default_factor() {
        assert_eq!(EnhanceConfig::new().factor(), 20.0);
        assert_eq!(EnhanceConfig::new().with_factor(2.5).factor(), 2.5);
    }

    #[test]
    fn test_multiplies_channels() {
        let mut img = RgbImage::from_pixel(2, 2, Rgb([1, 5, 12]));
        EnhanceConfig::new().apply(&mut img).unwrap();
        assert!(img.pixels().all(|p| p.0 == [20, 100, 240]));
    }

    #[test]
    fn test_truncates_fractional_results() {
        let mut img = RgbImage::from_pixel(1, 1, Rgb([3, 7, 10]));
        EnhanceConfig::new().with_factor(1.5).apply(&mut img).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [4, 10, 15]);
    }

    #[test]
    fn test_clamps_large_factor() {
        let mut img = RgbImage::from_pixel(3, 3, Rgb([0, 1, 255]));
        EnhanceConfig::new().with_factor(1000.0).apply(&mut img).unwrap();
        assert!(img.pixels().all(|p| p.0 == [0, 255, 255]));
    }

    #[test]
    fn test_negative_factor_is_black() {
        let mut img = RgbImage::from_pixel(3, 3, Rgb([9, 90, 200]));
        EnhanceConfig::new().with_factor(-4.0).apply(&mut img).unwrap();
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_non_finite_factor_is_rejected() {
        let mut img = RgbImage::new(1, 1);
        for factor in [f32::NAN, f32::INFINITY] {
            let err = EnhanceConfig::new().with_factor(factor).apply(&mut img).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter(_)));
        }
    }
}
