//! Path grammar used by the on-demand server.
//!
//! `/[WxH]/<prefix>:<value>/...` where the prefix is one of
//! `c` (solid), `g` (gradient), `t` (tiled, or text when the value starts with
//! `"`), `n` (noise), `f` (format) and `b` (border).

use rand::Rng;

use crate::{
    color::resolve::ColorSpec,
    config::model::{ImageConfig, TextSpec},
    foundation::error::{ImagenError, ImagenResult},
    parse::common::{
        ColorDefinition, DefinitionMode, parse_border, parse_definition, parse_f64, parse_size,
        split_quoted,
    },
};

/// Parse a decoded request path into an [`ImageConfig`].
///
/// Every background segment (`c`, `g`, `t`, `n`) is a candidate; one is picked
/// uniformly at random with `rng`. Any malformed segment fails the whole path.
pub fn parse_url_path<R: Rng + ?Sized>(path: &str, rng: &mut R) -> ImagenResult<ImageConfig> {
    let mut config = ImageConfig::default();
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        return Ok(config);
    }

    let mut candidates: Vec<ColorDefinition> = Vec::new();

    for (i, segment) in path.split('/').enumerate() {
        if segment.is_empty() {
            continue;
        }

        if i == 0 && !segment.contains(':') {
            let (width, height) = parse_size(segment)?;
            config.width = width;
            config.height = height;
            continue;
        }

        let mut chars = segment.chars();
        let (Some(prefix), Some(':')) = (chars.next(), chars.next()) else {
            return Err(ImagenError::invalid_segment(
                segment,
                "expected <prefix>:<value>",
            ));
        };
        let value = chars.as_str();
        if value.is_empty() {
            return Err(ImagenError::invalid_segment(segment, "empty value"));
        }

        match prefix {
            'c' => candidates.push(parse_definition(value, DefinitionMode::Solid)?),
            'g' => candidates.push(parse_definition(value, DefinitionMode::Gradient)?),
            't' if value.starts_with('"') => parse_text(&mut config.text, value)?,
            't' => candidates.push(parse_definition(value, DefinitionMode::Tiled)?),
            'n' => candidates.push(parse_definition(value, DefinitionMode::Noise)?),
            'f' => config.format = value.to_owned(),
            'b' => config.border = parse_border(value, false)?,
            other => {
                return Err(ImagenError::invalid_segment(
                    segment,
                    format!("unknown parameter prefix {other:?}"),
                ));
            }
        }
    }

    if !candidates.is_empty() {
        let picked = candidates.swap_remove(rng.gen_range(0..candidates.len()));
        tracing::debug!(
            mode = picked.background.mode_name(),
            "selected background candidate"
        );
        config.background = picked.background;
        if let Some(color) = picked.text_color {
            config.text.color = Some(color);
        }
    }

    Ok(config)
}

/// `"text"[,s:<size>][,c:<color>][,a:<angle>]`
fn parse_text(text: &mut TextSpec, value: &str) -> ImagenResult<()> {
    let parts = split_quoted(value);
    let Some((literal, options)) = parts.split_first() else {
        return Err(ImagenError::invalid_segment(value, "empty text"));
    };
    text.text = literal.trim_matches('"').to_owned();

    for part in options {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let Some((key, val)) = part.split_once(':') else {
            return Err(ImagenError::invalid_segment(
                part,
                "expected s:<size>, c:<color> or a:<angle>",
            ));
        };
        match key {
            "s" => {
                let size = parse_f64(part, val, "text size")?;
                if size <= 0.0 {
                    return Err(ImagenError::invalid_segment(part, "text size must be > 0"));
                }
                text.size_pt = size;
            }
            "c" => text.color = Some(ColorSpec::parse(val)?),
            "a" => text.angle_deg = parse_f64(part, val, "text angle")?,
            _ => {
                return Err(ImagenError::invalid_segment(
                    part,
                    format!("unknown text parameter {key:?}"),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/parse/url.rs"]
mod tests;
