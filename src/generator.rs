//! Fixture image generation: one checkerboard image per index.

use std::path::{Path, PathBuf};

use image::RgbImage;
use rand::Rng;

use crate::error::GenError;
use crate::glyphs::draw_label;
use crate::output::{ensure_dir, image_filename, save_image};
use crate::params::{font_size, tile_size, OutputFormat};
use crate::pattern::{draw_checkerboard, random_color_pair};

/// Everything needed to produce one image file.
#[derive(Debug, Clone)]
pub struct ImageSpec<'a> {
    /// Width in pixels, at least 1.
    pub width: u32,
    /// Height in pixels, at least 1.
    pub height: u32,
    /// Label drawn on the image and used in the filename.
    pub index: u32,
    /// Directory the file is written into.
    pub output_dir: &'a Path,
    /// Encoding of the written file.
    pub format: OutputFormat,
}

/// Paint the checkerboard and centered index label for `spec`.
pub fn render<R: Rng + ?Sized>(spec: &ImageSpec<'_>, rng: &mut R) -> RgbImage {
    let (base, alt) = random_color_pair(rng);

    let mut canvas = RgbImage::from_pixel(spec.width, spec.height, base);
    draw_checkerboard(&mut canvas, tile_size(spec.width), alt);
    draw_label(&mut canvas, &spec.index.to_string(), font_size(spec.height));
    canvas
}

/// Render one image and write it to `<output_dir>/image_<index>.<ext>`.
///
/// The output directory is created if missing. An existing file with the
/// same name is overwritten.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn generate<R: Rng + ?Sized>(spec: &ImageSpec<'_>, rng: &mut R) -> Result<PathBuf, GenError> {
    ensure_dir(spec.output_dir)?;

    let canvas = render(spec, rng);
    let path = spec.output_dir.join(image_filename(spec.index, spec.format));
    save_image(&canvas, spec.format, &path)?;
    log::debug!("wrote {} ({}x{})", path.display(), spec.width, spec.height);
    Ok(path)
}

/// Generate `count` images with indices `0..count`, in order.
///
/// Stops at the first failure; later indices are not written.
///
/// # Errors
///
/// Returns the first error hit by [`generate`].
pub fn generate_batch<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    count: u32,
    output_dir: &Path,
    format: OutputFormat,
    rng: &mut R,
) -> Result<Vec<PathBuf>, GenError> {
    ensure_dir(output_dir)?;
    (0..count)
        .map(|index| {
            let spec = ImageSpec { width, height, index, output_dir, format };
            generate(&spec, &mut *rng)
        })
        .collect()
}
