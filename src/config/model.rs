use rand::Rng;
use serde::Serialize;

use crate::{
    color::resolve::ColorSpec,
    foundation::{
        core::Rgba8,
        error::{ImagenError, ImagenResult},
    },
};

/// Tile edge used by tiled/noise definitions that do not name one.
pub const DEFAULT_TILE_SIZE: u32 = 36;
/// Tile edge substituted for a zero tile size.
pub const FALLBACK_TILE_SIZE: u32 = 16;

/// Background style of an image.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BackgroundSpec {
    /// Uniform fill.
    Solid {
        /// Fill color.
        color: ColorSpec,
    },
    /// Square tiles colored round-robin in row-major order.
    Tiled {
        /// Palette, at least two entries.
        colors: Vec<ColorSpec>,
        /// Tile edge in pixels.
        tile_size: u32,
    },
    /// Square tiles, each colored by an independent random pick from the palette.
    Noise {
        /// Palette, at least two entries.
        colors: Vec<ColorSpec>,
        /// Tile edge in pixels.
        tile_size: u32,
    },
    /// Multi-stop linear gradient.
    Gradient {
        /// Stops, evenly spaced, at least two entries.
        colors: Vec<ColorSpec>,
        /// Direction in degrees, clockwise: 0 = top to bottom, 90 = left to right.
        angle_deg: f64,
    },
}

impl BackgroundSpec {
    /// Solid fill.
    pub fn solid(color: impl Into<ColorSpec>) -> Self {
        Self::Solid {
            color: color.into(),
        }
    }

    /// Round-robin tiles. Rejects fewer than two colors.
    pub fn tiled(colors: Vec<ColorSpec>, tile_size: u32) -> ImagenResult<Self> {
        require_two("tiled", &colors)?;
        Ok(Self::Tiled {
            colors,
            tile_size: effective_tile_size(tile_size),
        })
    }

    /// Random tiles. Rejects fewer than two colors.
    pub fn noise(colors: Vec<ColorSpec>, tile_size: u32) -> ImagenResult<Self> {
        require_two("noise", &colors)?;
        Ok(Self::Noise {
            colors,
            tile_size: effective_tile_size(tile_size),
        })
    }

    /// Linear gradient. Rejects fewer than two colors.
    pub fn gradient(colors: Vec<ColorSpec>, angle_deg: f64) -> ImagenResult<Self> {
        require_two("gradient", &colors)?;
        Ok(Self::Gradient { colors, angle_deg })
    }

    /// Mode name as used in logs and batch output.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::Solid { .. } => "solid",
            Self::Tiled { .. } => "tiled",
            Self::Noise { .. } => "noise",
            Self::Gradient { .. } => "gradient",
        }
    }

    /// Return `true` if any color is the deferred `random` token.
    pub fn has_random(&self) -> bool {
        match self {
            Self::Solid { color } => color.is_random(),
            Self::Tiled { colors, .. }
            | Self::Noise { colors, .. }
            | Self::Gradient { colors, .. } => colors.iter().any(|c| c.is_random()),
        }
    }

    fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> ResolvedBackground {
        fn palette<R: Rng + ?Sized>(colors: &[ColorSpec], rng: &mut R) -> Vec<Rgba8> {
            colors.iter().map(|c| c.resolve(rng)).collect()
        }

        match self {
            Self::Solid { color } => ResolvedBackground::Solid(color.resolve(rng)),
            Self::Tiled { colors, tile_size } => ResolvedBackground::Tiled {
                colors: palette(colors, rng),
                tile_size: *tile_size,
            },
            Self::Noise { colors, tile_size } => ResolvedBackground::Noise {
                colors: palette(colors, rng),
                tile_size: *tile_size,
                seed: rng.r#gen(),
            },
            Self::Gradient { colors, angle_deg } => ResolvedBackground::Gradient {
                colors: palette(colors, rng),
                angle_deg: *angle_deg,
            },
        }
    }
}

impl Default for BackgroundSpec {
    fn default() -> Self {
        Self::solid(Rgba8::GRAY)
    }
}

fn require_two(mode: &'static str, colors: &[ColorSpec]) -> ImagenResult<()> {
    if colors.len() < 2 {
        return Err(ImagenError::InsufficientColors {
            mode,
            got: colors.len(),
        });
    }
    Ok(())
}

fn effective_tile_size(tile_size: u32) -> u32 {
    if tile_size == 0 {
        FALLBACK_TILE_SIZE
    } else {
        tile_size
    }
}

/// Border drawn on all four edges. Width 0 disables it; no clamping is done.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BorderSpec {
    /// Ring count in pixels.
    pub width: u32,
    /// Border color.
    pub color: ColorSpec,
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self {
            width: 0,
            color: ColorSpec::Resolved(Rgba8::BLACK),
        }
    }
}

/// Overlay text.
///
/// `{w}` and `{h}` in `text` are replaced with the canvas size at render time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextSpec {
    /// Literal text with placeholders; empty disables the text stage.
    pub text: String,
    /// Font size in points (72 dpi, so points equal pixels).
    pub size_pt: f64,
    /// Explicit color, otherwise white.
    pub color: Option<ColorSpec>,
    /// Requested rotation in degrees. Carried through the model; text is drawn unrotated.
    pub angle_deg: f64,
}

impl Default for TextSpec {
    fn default() -> Self {
        Self {
            text: "{w}x{h}".to_owned(),
            size_pt: 20.0,
            color: None,
            angle_deg: 0.0,
        }
    }
}

/// Complete description of one image to render.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageConfig {
    /// Canvas width in pixels, > 0.
    pub width: u32,
    /// Canvas height in pixels, > 0.
    pub height: u32,
    /// Background style.
    pub background: BackgroundSpec,
    /// Border, width 0 for none.
    pub border: BorderSpec,
    /// Overlay text.
    pub text: TextSpec,
    /// Output format token (`png`, `jpeg`, `jpg`); validated by the encoder.
    pub format: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 192,
            background: BackgroundSpec::default(),
            border: BorderSpec::default(),
            text: TextSpec::default(),
            format: "png".to_owned(),
        }
    }
}

impl ImageConfig {
    /// Resolve every deferred color for one render.
    ///
    /// Each call draws fresh values for `random` tokens and a fresh noise seed;
    /// fixed colors come through unchanged.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> ImagenResult<ResolvedImage> {
        if self.width == 0 || self.height == 0 {
            return Err(ImagenError::invalid_size(
                format!("{}x{}", self.width, self.height),
                "width and height must be positive",
            ));
        }
        Ok(ResolvedImage {
            width: self.width,
            height: self.height,
            background: self.background.resolve(rng),
            border_width: self.border.width,
            border_color: self.border.color.resolve(rng),
            text: self.text.text.clone(),
            text_size_pt: self.text.size_pt,
            text_color: self.text.color.map(|c| c.resolve(rng)),
            text_angle_deg: self.text.angle_deg,
        })
    }
}

/// Background with every color fixed.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedBackground {
    /// Uniform fill.
    Solid(Rgba8),
    /// Round-robin tiles.
    Tiled {
        /// Palette.
        colors: Vec<Rgba8>,
        /// Tile edge in pixels.
        tile_size: u32,
    },
    /// Random tiles, drawn from an RNG seeded with `seed`.
    Noise {
        /// Palette.
        colors: Vec<Rgba8>,
        /// Tile edge in pixels.
        tile_size: u32,
        /// Seed for the per-tile picks.
        seed: u64,
    },
    /// Multi-stop linear gradient.
    Gradient {
        /// Stops.
        colors: Vec<Rgba8>,
        /// Direction in degrees.
        angle_deg: f64,
    },
}

/// Render input: an [`ImageConfig`] with every color resolved.
///
/// Rendering a `ResolvedImage` is deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedImage {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background.
    pub background: ResolvedBackground,
    /// Border ring count.
    pub border_width: u32,
    /// Border color.
    pub border_color: Rgba8,
    /// Text with placeholders still in place.
    pub text: String,
    /// Font size in points.
    pub text_size_pt: f64,
    /// Explicit text color.
    pub text_color: Option<Rgba8>,
    /// Requested text rotation (not applied).
    pub text_angle_deg: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
