//! Index label rendering with a built-in bitmap digit face.
//!
//! Glyphs are 5x7 cells scaled by a whole-number factor. The label is
//! placed by its measured ink box, so digits with empty columns (like `1`)
//! still land visually centered.

use image::{Rgb, RgbImage};

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, including one column of spacing.
const ADVANCE: u32 = GLYPH_WIDTH + 1;
/// Nominal line height in glyph units; one row below the digits.
const LINE_HEIGHT: u32 = GLYPH_HEIGHT + 1;

/// Outline thickness in pixels.
const STROKE_WIDTH: i64 = 2;

const FILL: Rgb<u8> = Rgb([255, 255, 255]);
const STROKE: Rgb<u8> = Rgb([0, 0, 0]);

/// Row bitmaps for `0`-`9`, most significant of the low five bits is leftmost.
const DIGITS: [[u8; GLYPH_HEIGHT as usize]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

/// Measured extent of lit pixels in a [`TextMask`]; `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBounds {
    /// First lit column.
    pub left: u32,
    /// First lit row.
    pub top: u32,
    /// One past the last lit column.
    pub right: u32,
    /// One past the last lit row.
    pub bottom: u32,
}

impl InkBounds {
    /// Width of the ink box.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Height of the ink box.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Rasterized coverage of a text string.
#[derive(Debug, Clone)]
pub struct TextMask {
    width: u32,
    height: u32,
    lit: Vec<bool>,
}

impl TextMask {
    /// Rasterize `text` so that its line height approximates `font_size` pixels.
    ///
    /// Characters other than ASCII digits advance the pen but draw nothing.
    #[must_use]
    pub fn render(text: &str, font_size: u32) -> Self {
        let scale = (font_size / LINE_HEIGHT).max(1);
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        let width = (chars.saturating_mul(ADVANCE).saturating_sub(1)).saturating_mul(scale);
        let height = GLYPH_HEIGHT * scale;
        let mut lit = vec![false; width as usize * height as usize];

        for (i, ch) in text.chars().enumerate() {
            let Some(rows) = ch.to_digit(10).map(|d| &DIGITS[d as usize]) else {
                continue;
            };
            let pen_x = i as u32 * ADVANCE * scale;
            for (gy, bits) in (0u32..).zip(rows.iter()) {
                for gx in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - gx)) == 0 {
                        continue;
                    }
                    for sy in 0..scale {
                        let y = gy * scale + sy;
                        let row = y as usize * width as usize;
                        for sx in 0..scale {
                            let x = pen_x + gx * scale + sx;
                            lit[row + x as usize] = true;
                        }
                    }
                }
            }
        }

        Self { width, height, lit }
    }

    /// Bounding box of the covered pixels, or `None` for an empty mask.
    #[must_use]
    pub fn ink_bounds(&self) -> Option<InkBounds> {
        let mut bounds: Option<InkBounds> = None;
        for (x, y) in self.lit_pixels() {
            let b = bounds.get_or_insert(InkBounds { left: x, top: y, right: x + 1, bottom: y + 1 });
            b.left = b.left.min(x);
            b.top = b.top.min(y);
            b.right = b.right.max(x + 1);
            b.bottom = b.bottom.max(y + 1);
        }
        bounds
    }

    fn lit_pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width.max(1) as usize;
        self.lit
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(move |(i, _)| ((i % width) as u32, (i / width) as u32))
    }
}

/// Draw `text` centered on the canvas: white fill with a black outline.
///
/// Centering uses the measured ink box. Pixels falling outside the canvas are
/// dropped. A `font_size` smaller than one glyph cell draws nothing, so the
/// label never grows past the requested size.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn draw_label(canvas: &mut RgbImage, text: &str, font_size: u32) {
    if font_size < GLYPH_HEIGHT {
        return;
    }
    let mask = TextMask::render(text, font_size);
    let Some(ink) = mask.ink_bounds() else {
        return;
    };

    let (width, height) = canvas.dimensions();
    let origin_x = (i64::from(width) - i64::from(ink.width())).div_euclid(2) - i64::from(ink.left);
    let origin_y = (i64::from(height) - i64::from(ink.height())).div_euclid(2) - i64::from(ink.top);

    let mut put = |x: i64, y: i64, color: Rgb<u8>| {
        if (0..i64::from(width)).contains(&x) && (0..i64::from(height)).contains(&y) {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    };

    let reach = STROKE_WIDTH * STROKE_WIDTH;
    for (mx, my) in mask.lit_pixels() {
        let (cx, cy) = (origin_x + i64::from(mx), origin_y + i64::from(my));
        for dy in -STROKE_WIDTH..=STROKE_WIDTH {
            for dx in -STROKE_WIDTH..=STROKE_WIDTH {
                if dx * dx + dy * dy <= reach {
                    put(cx + dx, cy + dy, STROKE);
                }
            }
        }
    }
    for (mx, my) in mask.lit_pixels() {
        put(origin_x + i64::from(mx), origin_y + i64::from(my), FILL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Rgb<u8> = Rgb([128, 128, 128]);

    fn bounds_of(canvas: &RgbImage, color: Rgb<u8>) -> Option<InkBounds> {
        let mut bounds: Option<InkBounds> = None;
        for (x, y, px) in canvas.enumerate_pixels() {
            if *px == color {
                let b = bounds.get_or_insert(InkBounds { left: x, top: y, right: x + 1, bottom: y + 1 });
                b.left = b.left.min(x);
                b.top = b.top.min(y);
                b.right = b.right.max(x + 1);
                b.bottom = b.bottom.max(y + 1);
            }
        }
        bounds
    }

    fn assert_centered(canvas: &RgbImage, ink: InkBounds) {
        let (w, h) = canvas.dimensions();
        let left_margin = i64::from(ink.left);
        let right_margin = i64::from(w) - i64::from(ink.right);
        let top_margin = i64::from(ink.top);
        let bottom_margin = i64::from(h) - i64::from(ink.bottom);
        assert!((left_margin - right_margin).abs() <= 1, "horizontal {ink:?}");
        assert!((top_margin - bottom_margin).abs() <= 1, "vertical {ink:?}");
    }

    #[test]
    fn mask_scales_with_font_size() {
        let small = TextMask::render("8", 8);
        assert_eq!((small.width, small.height), (5, 7));

        let large = TextMask::render("8", 30);
        assert_eq!((large.width, large.height), (15, 21));
    }

    #[test]
    fn multi_digit_mask_has_spacing() {
        let mask = TextMask::render("88", 8);
        assert_eq!(mask.width, 11);
        assert!(!mask.lit[3 * 11 + 5]);
        assert!(mask.lit[11 + 6]);
    }

    #[test]
    fn ink_bounds_skip_empty_columns() {
        // `1` has nothing in its last column
        let mask = TextMask::render("1", 8);
        let ink = mask.ink_bounds().unwrap();
        assert_eq!(ink, InkBounds { left: 1, top: 0, right: 4, bottom: 7 });
    }

    #[test]
    fn ink_bounds_empty_text() {
        assert!(TextMask::render("", 30).ink_bounds().is_none());
        assert!(TextMask::render(" ", 30).ink_bounds().is_none());
    }

    #[test]
    fn label_fill_is_centered() {
        for text in ["0", "1", "42", "117"] {
            let mut canvas = RgbImage::from_pixel(200, 100, GREY);
            draw_label(&mut canvas, text, 30);
            let fill = bounds_of(&canvas, FILL).expect("label drawn");
            assert_centered(&canvas, fill);
        }
    }

    #[test]
    fn label_has_outline() {
        let mut canvas = RgbImage::from_pixel(100, 100, GREY);
        draw_label(&mut canvas, "7", 30);
        let fill = bounds_of(&canvas, FILL).unwrap();
        let stroke = bounds_of(&canvas, STROKE).unwrap();
        assert_eq!(stroke.left, fill.left - 2);
        assert_eq!(stroke.top, fill.top - 2);
        assert_eq!(stroke.right, fill.right + 2);
        assert_eq!(stroke.bottom, fill.bottom + 2);
    }

    #[test]
    fn oversized_label_is_clipped() {
        let mut canvas = RgbImage::from_pixel(10, 100, GREY);
        draw_label(&mut canvas, "12345", 30);
        assert!(bounds_of(&canvas, FILL).is_some());
    }

    #[test]
    fn label_height_stays_within_font_size() {
        for h in 4..=26 {
            let size = crate::params::font_size(h);
            let mut canvas = RgbImage::from_pixel(40, h, GREY);
            draw_label(&mut canvas, "8", size);
            if let Some(fill) = bounds_of(&canvas, FILL) {
                assert!(fill.height() <= size, "height {h}: {} rows for font size {size}", fill.height());
            }
        }
    }

    #[test]
    fn small_font_sizes_draw_nothing() {
        let mut canvas = RgbImage::from_pixel(40, 10, GREY);
        draw_label(&mut canvas, "8", 3);
        assert!(canvas.pixels().all(|px| *px == GREY));
    }

    #[test]
    fn zero_font_size_draws_nothing() {
        let mut canvas = RgbImage::from_pixel(3, 3, GREY);
        draw_label(&mut canvas, "0", 0);
        assert!(canvas.pixels().all(|px| *px == GREY));
    }
}
