//! PNG/JPEG encoding of rendered canvases.

use std::io::Cursor;

use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::foundation::error::{ImagenError, ImagenResult};

const JPEG_QUALITY: u8 = 90;

/// Supported output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless PNG with alpha.
    Png,
    /// JPEG at quality 90; alpha is dropped.
    Jpeg,
}

impl OutputFormat {
    /// `png`, `jpeg` or `jpg`, case-insensitive.
    pub fn from_token(token: &str) -> ImagenResult<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            _ => Err(ImagenError::unsupported_format(token)),
        }
    }

    /// MIME type of the encoded bytes.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// MIME type for a raw format token; unknown tokens report `image/png`.
pub fn content_type(token: &str) -> &'static str {
    OutputFormat::from_token(token).map_or("image/png", OutputFormat::mime)
}

/// Encode `img` in the format named by `token`.
pub fn encode(img: &RgbaImage, token: &str) -> ImagenResult<Vec<u8>> {
    let format = OutputFormat::from_token(token)?;
    let (width, height) = img.dimensions();
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Png => {
            image::codecs::png::PngEncoder::new(Cursor::new(&mut buffer))
                .write_image(img.as_raw(), width, height, ExtendedColorType::Rgba8)
                .map_err(|e| ImagenError::Other(anyhow::anyhow!("failed to encode PNG: {e}")))?;
        }
        OutputFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(img.clone()).to_rgb8();
            image::codecs::jpeg::JpegEncoder::new_with_quality(
                Cursor::new(&mut buffer),
                JPEG_QUALITY,
            )
            .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(|e| ImagenError::Other(anyhow::anyhow!("failed to encode JPEG: {e}")))?;
        }
    }
    Ok(buffer)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/codec.rs"]
mod tests;
