//! Argument policy: formats, dimensions, and derived geometry.

use std::path::PathBuf;

/// Number of checkerboard tiles across the image width.
const TILES_ACROSS: u32 = 5;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless PNG.
    Png,
    /// JPEG written with a `.jpg` extension.
    Jpg,
    /// JPEG written with a `.jpeg` extension.
    Jpeg,
}

impl OutputFormat {
    /// File extension, identical to the lowercase format tag.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
        }
    }

    /// Whether this format is encoded as JPEG.
    #[must_use]
    pub fn is_jpeg(self) -> bool {
        matches!(self, Self::Jpg | Self::Jpeg)
    }
}

/// Parse an output format, ignoring case.
///
/// # Errors
///
/// Returns an error if the format is not one of `png`, `jpg`, `jpeg`.
pub fn parse_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_ascii_lowercase().as_str() {
        "png" => Ok(OutputFormat::Png),
        "jpg" => Ok(OutputFormat::Jpg),
        "jpeg" => Ok(OutputFormat::Jpeg),
        _ => Err(format!("Unsupported format '{format}'. Valid: png, jpg, jpeg")),
    }
}

/// Parse an image dimension in pixels.
///
/// # Errors
///
/// Returns an error unless the value is a positive integer.
pub fn parse_dimension(value: &str) -> Result<u32, String> {
    let n: u32 = value.parse().map_err(|e| format!("'{value}' is not a valid dimension: {e}"))?;
    if n == 0 {
        return Err("dimension must be at least 1 pixel".to_string());
    }
    Ok(n)
}

/// Greatest common divisor.
fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Reduced aspect ratio formatted as `<a>to<b>`.
#[must_use]
pub fn aspect_ratio(width: u32, height: u32) -> String {
    let g = gcd(width, height).max(1);
    format!("{}to{}", width / g, height / g)
}

/// Default output directory: `<a>to<b>_<width>by<height>`.
#[must_use]
pub fn default_output_dir(width: u32, height: u32) -> PathBuf {
    PathBuf::from(format!("{}_{width}by{height}", aspect_ratio(width, height)))
}

/// Edge length of a checkerboard tile; never zero.
#[must_use]
pub fn tile_size(width: u32) -> u32 {
    (width / TILES_ACROSS).max(1)
}

/// Label font size, 30% of the image height.
#[must_use]
pub fn font_size(height: u32) -> u32 {
    // u64 so very tall images don't overflow
    u32::try_from(u64::from(height) * 3 / 10).unwrap_or(u32::MAX)
}
