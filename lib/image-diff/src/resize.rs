use crate::{Error, Result};
use fast_image_resize::{
    FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image as FrImage,
};
use image::RgbImage;

/// Outcome of reconciling the sizes of the two compared images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDecision {
    None,
    ResizeA { from: (u32, u32), to: (u32, u32) },
    ResizeB { from: (u32, u32), to: (u32, u32) },
}

impl ResizeDecision {
    pub fn target(&self) -> Option<(u32, u32)> {
        match self {
            ResizeDecision::None => None,
            ResizeDecision::ResizeA { to, .. } | ResizeDecision::ResizeB { to, .. } => Some(*to),
        }
    }
}

/// Resize to exactly `target_width` x `target_height` with a Lanczos3 filter.
pub fn resize_exact(image: &RgbImage, target_width: u32, target_height: u32) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    if width == target_width && height == target_height {
        return Ok(image.clone());
    }

    let src_image = FrImage::from_vec_u8(width, height, image.as_raw().clone(), PixelType::U8x3)?;
    let mut dst_image = FrImage::new(target_width, target_height, PixelType::U8x3);
    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    Resizer::new().resize(&src_image, &mut dst_image, &options)?;

    RgbImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| Error::ImageProcessing("Failed to create resized image".to_string()))
}

/// Bring both images to the same dimensions.
///
/// The image with the larger pixel area is resized to the other one's exact
/// dimensions. When the areas are equal but the shapes differ, `b` is resized
/// to the dimensions of `a`.
pub fn reconcile(a: RgbImage, b: RgbImage) -> Result<(RgbImage, RgbImage, ResizeDecision)> {
    let (dim_a, dim_b) = (a.dimensions(), b.dimensions());
    if dim_a == dim_b {
        return Ok((a, b, ResizeDecision::None));
    }

    log::warn!("Images have different dimensions, resizing before comparison");
    log::warn!("  - original dimensions A: {}x{}", dim_a.0, dim_a.1);
    log::warn!("  - original dimensions B: {}x{}", dim_b.0, dim_b.1);

    if area(dim_a) > area(dim_b) {
        log::info!(
            "  - resizing image A to the dimensions of image B ({}x{})",
            dim_b.0,
            dim_b.1
        );
        let a = resize_exact(&a, dim_b.0, dim_b.1)?;
        Ok((a, b, ResizeDecision::ResizeA { from: dim_a, to: dim_b }))
    } else {
        log::info!(
            "  - resizing image B to the dimensions of image A ({}x{})",
            dim_a.0,
            dim_a.1
        );
        let b = resize_exact(&b, dim_a.0, dim_a.1)?;
        Ok((a, b, ResizeDecision::ResizeB { from: dim_b, to: dim_a }))
    }
}

fn area((width, height): (u32, u32)) -> u64 {
    width as u64 * height as u64
}
