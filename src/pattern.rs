//! Checkerboard painting.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use rand::Rng;

/// Draw two independent random colors, each channel uniform over `0..=255`.
pub fn random_color_pair<R: Rng + ?Sized>(rng: &mut R) -> (Rgb<u8>, Rgb<u8>) {
    (random_color(rng), random_color(rng))
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb<u8> {
    Rgb([rng.gen(), rng.gen(), rng.gen()])
}

/// Paint every odd-parity `tile x tile` square with `color`.
///
/// The even squares keep whatever the canvas already holds. Squares on the
/// right and bottom edges are clipped to the canvas.
#[allow(clippy::cast_possible_wrap)]
pub fn draw_checkerboard(canvas: &mut RgbImage, tile: u32, color: Rgb<u8>) {
    let tile = tile.max(1);
    let (width, height) = canvas.dimensions();

    for (ty, y) in (0..height).step_by(tile as usize).enumerate() {
        for (tx, x) in (0..width).step_by(tile as usize).enumerate() {
            if (tx + ty) % 2 == 1 {
                // canvas dimensions are far below i32::MAX for any buffer we can allocate
                let rect = Rect::at(x as i32, y as i32).of_size(tile, tile);
                draw_filled_rect_mut(canvas, rect, color);
            }
        }
    }
}
