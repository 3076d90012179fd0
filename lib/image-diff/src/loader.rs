use crate::{Error, ImageSlot, Result};
use image::{ImageReader, RgbImage};
use std::path::Path;

pub fn ensure_exists(slot: ImageSlot, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::MissingFile {
            slot,
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Decode an image file into 8-bit RGB.
///
/// The format is sniffed from the file content, so a JPEG saved with a
/// `.png` extension still decodes. Alpha is dropped rather than composited.
pub fn load_rgb(slot: ImageSlot, path: &Path) -> Result<RgbImage> {
    let read_error = |source| Error::Read {
        slot,
        path: path.to_path_buf(),
        source,
    };

    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(read_error)?
        .decode()
        .map_err(|source| Error::Decode {
            slot,
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "Decoded image {slot} from {}: {}x{} {:?}",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(decoded.to_rgb8())
}
