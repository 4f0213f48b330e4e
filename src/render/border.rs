use image::RgbaImage;

use crate::foundation::core::Rgba8;

/// Draw `width` one-pixel rings inward from each edge.
///
/// Top and bottom rows are drawn first, then left and right columns, so
/// corners are covered by both passes. Widths past the half-size of the canvas
/// simply paint everything.
pub(crate) fn draw_border(img: &mut RgbaImage, width: u32, color: Rgba8) {
    let (w, h) = img.dimensions();
    if width == 0 || w == 0 || h == 0 {
        return;
    }
    let px = image::Rgba::from(color);

    for i in 0..width.min(h) {
        for x in 0..w {
            img.put_pixel(x, i, px);
            img.put_pixel(x, h - 1 - i, px);
        }
    }
    for i in 0..width.min(w) {
        for y in 0..h {
            img.put_pixel(i, y, px);
            img.put_pixel(w - 1 - i, y, px);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/border.rs"]
mod tests;
