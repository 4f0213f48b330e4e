use image::RgbaImage;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

use crate::{
    color::resolve::interpolate, config::model::ResolvedBackground, foundation::core::Rgba8,
};

/// Fill the whole canvas with the background.
pub(crate) fn fill_background(img: &mut RgbaImage, background: &ResolvedBackground) {
    match background {
        ResolvedBackground::Solid(color) => fill_solid(img, *color),
        ResolvedBackground::Tiled { colors, tile_size } => fill_tiled(img, colors, *tile_size),
        ResolvedBackground::Noise {
            colors,
            tile_size,
            seed,
        } => fill_noise(img, colors, *tile_size, *seed),
        ResolvedBackground::Gradient { colors, angle_deg } => {
            fill_gradient(img, colors, *angle_deg)
        }
    }
}

fn fill_solid(img: &mut RgbaImage, color: Rgba8) {
    let px = image::Rgba::from(color);
    for p in img.pixels_mut() {
        *p = px;
    }
}

fn fill_tiled(img: &mut RgbaImage, colors: &[Rgba8], tile_size: u32) {
    let mut index = 0usize;
    fill_tiles(img, tile_size, || {
        let c = colors
            .get(index % colors.len().max(1))
            .copied()
            .unwrap_or(Rgba8::GRAY);
        index += 1;
        c
    });
}

fn fill_noise(img: &mut RgbaImage, colors: &[Rgba8], tile_size: u32, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    fill_tiles(img, tile_size, || {
        if colors.is_empty() {
            return Rgba8::GRAY;
        }
        colors[rng.gen_range(0..colors.len())]
    });
}

/// Walk tiles in row-major order, clipping the last row and column to the
/// canvas. `pick` is called once per tile.
fn fill_tiles(img: &mut RgbaImage, tile_size: u32, mut pick: impl FnMut() -> Rgba8) {
    let (w, h) = img.dimensions();
    let tile = tile_size.max(1);
    let mut y0 = 0;
    while y0 < h {
        let y1 = y0.saturating_add(tile).min(h);
        let mut x0 = 0;
        while x0 < w {
            let x1 = x0.saturating_add(tile).min(w);
            let px = image::Rgba::from(pick());
            for y in y0..y1 {
                for x in x0..x1 {
                    img.put_pixel(x, y, px);
                }
            }
            x0 = x1;
        }
        y0 = y1;
    }
}

/// Linear gradient across the canvas.
///
/// The angle is measured clockwise from "top to bottom"; 90 runs left to
/// right. Each pixel is projected onto the direction and normalized over the
/// projections of the four corners.
fn fill_gradient(img: &mut RgbaImage, colors: &[Rgba8], angle_deg: f64) {
    let (w, h) = img.dimensions();
    let rad = angle_deg.to_radians();
    let (dx, dy) = (rad.sin(), rad.cos());

    let (wf, hf) = (f64::from(w), f64::from(h));
    let corners = [0.0, wf * dx, hf * dy, wf * dx + hf * dy];
    let min = corners.iter().copied().fold(f64::INFINITY, f64::min);
    let max = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let row_len = w as usize * 4;
    if row_len == 0 {
        return;
    }
    img.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let t = if span > 0.0 {
                    ((x as f64 * dx + y as f64 * dy - min) / span).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                px.copy_from_slice(&gradient_color(colors, t).to_array());
            }
        });
}

/// Color at `t` in `[0, 1]` along evenly spaced stops.
pub(crate) fn gradient_color(colors: &[Rgba8], t: f64) -> Rgba8 {
    match colors {
        [] => Rgba8::GRAY,
        [only] => *only,
        _ => {
            let segments = (colors.len() - 1) as f64;
            let pos = t.clamp(0.0, 1.0) * segments;
            let idx = pos.floor() as usize;
            if idx >= colors.len() - 1 {
                return colors[colors.len() - 1];
            }
            interpolate(colors[idx], colors[idx + 1], pos - idx as f64)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
