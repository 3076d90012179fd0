//! Two-image difference analysis.
//!
//! The pipeline runs in a fixed order:
//! 1. both input paths are checked for existence before anything is decoded
//! 2. both images are decoded to 8-bit RGB
//! 3. the larger-area image is resized to the other's dimensions (Lanczos3)
//! 4. the absolute per-channel difference is computed
//! 5. the difference is multiplied by the enhancement factor and clamped
//! 6. the result is written as PNG, overwriting any existing file

use crate::{
    DEFAULT_ENHANCEMENT_FACTOR, Effect, EnhanceConfig, Error, ImageSlot, Result,
    difference, loader,
    resize::{self, ResizeDecision},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::ImageFormat;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct DiffAnalyzer {
    #[derivative(Default(value = "DEFAULT_ENHANCEMENT_FACTOR"))]
    enhancement_factor: f32,
}

/// What a successful analysis did.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffReport {
    pub dimensions_a: (u32, u32),
    pub dimensions_b: (u32, u32),
    pub output_dimensions: (u32, u32),
    pub resize: ResizeDecision,
    pub output_path: PathBuf,
}

impl DiffAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enhancement_factor(&self) -> f32 {
        self.enhancement_factor
    }

    pub fn try_analyze<P, Q, R>(&self, path_a: P, path_b: Q, output_path: R) -> Result<DiffReport>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        R: AsRef<Path>,
    {
        let (path_a, path_b, output_path) =
            (path_a.as_ref(), path_b.as_ref(), output_path.as_ref());

        loader::ensure_exists(ImageSlot::A, path_a)?;
        loader::ensure_exists(ImageSlot::B, path_b)?;

        let image_a = loader::load_rgb(ImageSlot::A, path_a)?;
        let image_b = loader::load_rgb(ImageSlot::B, path_b)?;
        let (dimensions_a, dimensions_b) = (image_a.dimensions(), image_b.dimensions());

        let (image_a, image_b, resize) = resize::reconcile(image_a, image_b)?;
        if let Some((width, height)) = resize.target() {
            log::info!("Comparing at {width}x{height}");
        }

        let mut result = difference::absolute_difference(&image_a, &image_b)?;
        EnhanceConfig::new()
            .with_factor(self.enhancement_factor)
            .apply(&mut result)?;

        result
            .save_with_format(output_path, ImageFormat::Png)
            .map_err(|source| Error::Encode {
                path: output_path.to_path_buf(),
                source,
            })?;

        Ok(DiffReport {
            dimensions_a,
            dimensions_b,
            output_dimensions: result.dimensions(),
            resize,
            output_path: output_path.to_path_buf(),
        })
    }

    /// Run the analysis and collapse the outcome to success or failure.
    ///
    /// Every error is logged; the caller only learns whether it worked.
    pub fn analyze<P, Q, R>(&self, path_a: P, path_b: Q, output_path: R) -> bool
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        R: AsRef<Path>,
    {
        match self.try_analyze(path_a, path_b, output_path) {
            Ok(report) => {
                log::info!(
                    "Analysis completed successfully. Result saved to: {}",
                    report.output_path.display()
                );
                true
            }
            Err(e @ Error::MissingFile { .. }) => {
                log::error!("{e}");
                false
            }
            Err(e) => {
                log::error!("Unexpected error during analysis: {e}");
                false
            }
        }
    }
}

/// Compare the images at `path_a` and `path_b` and write the enhanced
/// difference map to `output_path` as PNG.
pub fn analyze<P, Q, R>(path_a: P, path_b: Q, output_path: R, enhancement_factor: f32) -> bool
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    DiffAnalyzer::new()
        .with_enhancement_factor(enhancement_factor)
        .analyze(path_a, path_b, output_path)
}
