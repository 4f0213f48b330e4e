//! Sub-grammars shared by the batch and URL front ends.

use serde::Serialize;

use crate::{
    color::resolve::ColorSpec,
    config::model::{BackgroundSpec, BorderSpec, DEFAULT_TILE_SIZE},
    foundation::error::{ImagenError, ImagenResult},
};

const TEXT_COLOR_MARKER: &str = ":t:";

/// Parse `WxH` into positive pixel dimensions.
pub fn parse_size(input: &str) -> ImagenResult<(u32, u32)> {
    let parts: Vec<&str> = input.split('x').collect();
    let [w, h] = parts.as_slice() else {
        return Err(ImagenError::invalid_size(input, "size must be in format WxH"));
    };

    let dim = |s: &str, name: &str| -> ImagenResult<u32> {
        let v: i64 = s
            .parse()
            .map_err(|_| ImagenError::invalid_size(input, format!("invalid {name} {s:?}")))?;
        if v <= 0 {
            return Err(ImagenError::invalid_size(
                input,
                "width and height must be positive",
            ));
        }
        u32::try_from(v)
            .map_err(|_| ImagenError::invalid_size(input, format!("{name} {v} is too large")))
    };

    Ok((dim(*w, "width")?, dim(*h, "height")?))
}

/// Which background a color definition describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionMode {
    /// `color`
    Solid,
    /// `color1,color2[,...][:angle]`
    Gradient,
    /// `color1,color2[,...][:tilesize]`
    Tiled,
    /// `color1,color2[,...][:tilesize]`
    Noise,
}

/// One parsed background definition plus its optional text color override.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorDefinition {
    /// Background described by the definition.
    pub background: BackgroundSpec,
    /// Text color from a trailing `:t:<color>`.
    pub text_color: Option<ColorSpec>,
}

/// Parse `colors[:extra][:t:textcolor]` for the given mode.
///
/// `extra` is the gradient angle (float degrees) or the tile size (integer
/// pixels, non-positive values become [`crate::FALLBACK_TILE_SIZE`]).
/// Solid definitions take no `extra`.
pub fn parse_definition(value: &str, mode: DefinitionMode) -> ImagenResult<ColorDefinition> {
    let (main, text_color) = match value.split_once(TEXT_COLOR_MARKER) {
        Some((main, text)) => {
            if text.contains(TEXT_COLOR_MARKER) {
                return Err(ImagenError::invalid_segment(
                    value,
                    "more than one text color override",
                ));
            }
            (main, Some(ColorSpec::parse(text)?))
        }
        None => (value, None),
    };

    let background = match mode {
        DefinitionMode::Solid => BackgroundSpec::solid(ColorSpec::parse(main)?),
        DefinitionMode::Gradient => {
            let (colors, extra) = split_colors_and_extra(value, main)?;
            let angle_deg = match extra {
                Some(s) => parse_f64(value, s, "gradient angle")?,
                None => 0.0,
            };
            BackgroundSpec::gradient(parse_color_list(colors, "gradient")?, angle_deg)?
        }
        DefinitionMode::Tiled | DefinitionMode::Noise => {
            let name = if mode == DefinitionMode::Tiled {
                "tiled"
            } else {
                "noise"
            };
            let (colors, extra) = split_colors_and_extra(value, main)?;
            let tile_size = match extra {
                Some(s) => parse_tile_size(value, s)?,
                None => DEFAULT_TILE_SIZE,
            };
            let colors = parse_color_list(colors, name)?;
            if mode == DefinitionMode::Tiled {
                BackgroundSpec::tiled(colors, tile_size)?
            } else {
                BackgroundSpec::noise(colors, tile_size)?
            }
        }
    };

    Ok(ColorDefinition {
        background,
        text_color,
    })
}

fn split_colors_and_extra<'a>(
    segment: &str,
    main: &'a str,
) -> ImagenResult<(&'a str, Option<&'a str>)> {
    let mut parts = main.split(':');
    let colors = parts.next().unwrap_or_default();
    let extra = parts.next();
    if parts.next().is_some() {
        return Err(ImagenError::invalid_segment(
            segment,
            "expected colors[:value][:t:color]",
        ));
    }
    Ok((colors, extra))
}

/// Comma-separated color list; the count is checked before colors are parsed.
fn parse_color_list(list: &str, mode: &'static str) -> ImagenResult<Vec<ColorSpec>> {
    let tokens: Vec<&str> = list.split(',').collect();
    if tokens.len() < 2 {
        return Err(ImagenError::InsufficientColors {
            mode,
            got: tokens.len(),
        });
    }
    tokens.into_iter().map(ColorSpec::parse).collect()
}

fn parse_tile_size(segment: &str, s: &str) -> ImagenResult<u32> {
    let v: i64 = s.trim().parse().map_err(|_| {
        ImagenError::invalid_segment(segment, format!("invalid tile size {s:?}"))
    })?;
    // Zero maps to the fallback size in `BackgroundSpec`.
    Ok(u32::try_from(v.max(0)).unwrap_or(u32::MAX))
}

pub(crate) fn parse_f64(segment: &str, s: &str, what: &str) -> ImagenResult<f64> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| ImagenError::invalid_segment(segment, format!("invalid {what} {s:?}")))?;
    if !v.is_finite() {
        return Err(ImagenError::invalid_segment(
            segment,
            format!("{what} must be finite"),
        ));
    }
    Ok(v)
}

/// Parse a border value `width[,color]`.
///
/// With `require_color` the color part is mandatory (batch form `width,color`).
/// A missing color keeps black.
pub(crate) fn parse_border(value: &str, require_color: bool) -> ImagenResult<BorderSpec> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() > 2 || (require_color && parts.len() != 2) {
        return Err(ImagenError::invalid_segment(
            value,
            "border must be in format width,color",
        ));
    }

    let width: i64 = parts[0].parse().map_err(|_| {
        ImagenError::invalid_segment(value, format!("invalid border width {:?}", parts[0]))
    })?;
    let width = u32::try_from(width)
        .map_err(|_| ImagenError::invalid_segment(value, "border width must be >= 0"))?;

    let mut border = BorderSpec {
        width,
        ..BorderSpec::default()
    };
    if let Some(color) = parts.get(1) {
        border.color = ColorSpec::parse(color)?;
    }
    Ok(border)
}

/// Split on commas that are outside double quotes.
///
/// Quotes are kept in the output and there is no escaping. Empty parts are
/// dropped.
pub fn split_quoted(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in s.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

#[cfg(test)]
#[path = "../../tests/unit/parse/common.rs"]
mod tests;
