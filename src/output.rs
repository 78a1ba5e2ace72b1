//! File naming, directory setup, and image encoding.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::RgbImage;

use crate::error::GenError;
use crate::params::OutputFormat;

/// JPEG quality used for `jpg`/`jpeg` output.
pub const JPEG_QUALITY: u8 = 95;

/// Output filename for an image index: `image_<index>.<ext>`.
#[must_use]
pub fn image_filename(index: u32, format: OutputFormat) -> String {
    format!("image_{index}.{}", format.extension())
}

/// Create `dir` and any missing parents. An existing directory is fine.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<(), GenError> {
    std::fs::create_dir_all(dir)
        .map_err(|source| GenError::CreateDir { path: dir.to_path_buf(), source })
}

/// Encode `img` in the requested format and write it to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoding fails.
pub fn save_image(img: &RgbImage, format: OutputFormat, path: &Path) -> Result<(), GenError> {
    let encode_err = |source| GenError::Encode { path: path.to_path_buf(), source };
    let write_err = |source| GenError::Write { path: path.to_path_buf(), source };

    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    if format.is_jpeg() {
        let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
        img.write_with_encoder(encoder).map_err(encode_err)?;
    } else {
        let encoder = PngEncoder::new(&mut writer);
        img.write_with_encoder(encoder).map_err(encode_err)?;
    }
    std::io::Write::flush(&mut writer).map_err(write_err)?;
    Ok(())
}
