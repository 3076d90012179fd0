mod logger;

use image_diff::DEFAULT_ENHANCEMENT_FACTOR;

// Inputs can be any supported raster format; the result is always PNG.
const IMAGE_A: &str = "image_a.jpg";
const IMAGE_B: &str = "image_b.jpg";
const OUTPUT: &str = "difference_analysis.png";
const ENHANCEMENT_FACTOR: f32 = DEFAULT_ENHANCEMENT_FACTOR;

fn main() {
    logger::init();

    log::info!("Comparing {IMAGE_A} with {IMAGE_B}");

    if !image_diff::analyze(IMAGE_A, IMAGE_B, OUTPUT, ENHANCEMENT_FACTOR) {
        std::process::exit(1);
    }
}
