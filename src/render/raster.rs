use image::RgbaImage;
use rand::Rng;

use super::{background::fill_background, border::draw_border, font::FontProvider, text};
use crate::{
    config::model::{ImageConfig, ResolvedImage},
    foundation::error::{ImagenError, ImagenResult},
};

/// Largest canvas, in pixels, that will be allocated.
pub const MAX_CANVAS_PIXELS: u64 = 1 << 26;

#[tracing::instrument(skip_all, fields(width = image.width, height = image.height))]
/// Rasterize a resolved image: background, then border, then text.
///
/// The output is fully covered by the background before the later stages run.
/// Canvases above [`MAX_CANVAS_PIXELS`] are rejected before allocation.
pub fn render(image: &ResolvedImage, fonts: &FontProvider) -> ImagenResult<RgbaImage> {
    if image.width == 0 || image.height == 0 {
        return Err(ImagenError::invalid_size(
            format!("{}x{}", image.width, image.height),
            "width and height must be positive",
        ));
    }
    let pixels = u64::from(image.width) * u64::from(image.height);
    if pixels > MAX_CANVAS_PIXELS {
        return Err(ImagenError::render(format!(
            "canvas {}x{} exceeds the {MAX_CANVAS_PIXELS} pixel limit",
            image.width, image.height
        )));
    }

    let mut img = RgbaImage::new(image.width, image.height);
    fill_background(&mut img, &image.background);

    if image.border_width > 0 {
        draw_border(&mut img, image.border_width, image.border_color);
    }

    let label = text::substitute_placeholders(&image.text, image.width, image.height);
    text::draw_text(
        &mut img,
        &label,
        image.text_size_pt,
        image.text_color,
        fonts.face(),
    );

    Ok(img)
}

/// Resolve `config` with `rng` and render it.
pub fn generate<R: Rng + ?Sized>(
    config: &ImageConfig,
    rng: &mut R,
    fonts: &FontProvider,
) -> ImagenResult<RgbaImage> {
    let resolved = config.resolve(rng)?;
    render(&resolved, fonts)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
