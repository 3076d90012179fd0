use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use image_diff::DiffAnalyzer;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // A gradient and a slightly shifted, half-size copy of it
    let original = RgbImage::from_fn(320, 240, |x, y| {
        Rgb([(x * 255 / 319) as u8, (y * 255 / 239) as u8, 128])
    });
    let altered = RgbImage::from_fn(160, 120, |x, y| {
        let mark = (60..80).contains(&x) && (40..60).contains(&y);
        let blue = if mark { 160 } else { 128 };
        Rgb([(x * 255 / 159) as u8, (y * 255 / 119) as u8, blue])
    });

    let original_path = output_dir.join("original.png");
    let altered_path = output_dir.join("altered.png");
    original.save(&original_path)?;
    altered.save(&altered_path)?;

    for factor in [1.0, 5.0, 20.0, 100.0] {
        let output_path = output_dir.join(format!("diff_x{}.png", factor));
        let report = DiffAnalyzer::new()
            .with_enhancement_factor(factor)
            .try_analyze(&original_path, &altered_path, &output_path)
            .with_context(|| output_path.to_string_lossy().to_string())?;

        log::info!("factor {factor}: {:?}", report.resize);
        println!("✓ Generated {}", output_path.display());
    }

    println!("\n✓ All difference maps generated successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
