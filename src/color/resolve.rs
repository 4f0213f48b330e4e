use rand::Rng;

use crate::{
    color::names,
    foundation::{
        core::Rgba8,
        error::{ImagenError, ImagenResult},
    },
};

const RANDOM_TOKEN: &str = "random";

/// Resolve a color token to a concrete color.
///
/// Accepts a color name, `RRGGBB` / `#RRGGBB`, or `random` (case-insensitive,
/// surrounding whitespace ignored). `random` draws every channel uniformly from
/// `rng` with alpha 255; each call is an independent draw.
pub fn resolve_token<R: Rng + ?Sized>(token: &str, rng: &mut R) -> ImagenResult<Rgba8> {
    let norm = token.trim().to_ascii_lowercase();
    if norm == RANDOM_TOKEN {
        return Ok(random_color(rng));
    }
    resolve_fixed(&norm)
}

/// Resolve a non-random token. `norm` is trimmed and lowercase.
fn resolve_fixed(norm: &str) -> ImagenResult<Rgba8> {
    let hex = norm.strip_prefix('#').unwrap_or(norm);
    if let Some(c) = parse_hex6(hex) {
        return Ok(c);
    }
    names::lookup(hex).ok_or_else(|| ImagenError::invalid_color(hex))
}

fn parse_hex6(s: &str) -> Option<Rgba8> {
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
    Some(Rgba8::rgb(byte(0)?, byte(2)?, byte(4)?))
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgba8 {
    Rgba8::rgb(rng.r#gen(), rng.r#gen(), rng.r#gen())
}

/// A color as written in a config: either already resolved or the deferred
/// `random` token.
///
/// `Random` is resolved again on every render, so images that share a
/// definition each get their own draw. Callers that need one stable color
/// across renders must keep the resolved [`Rgba8`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    /// Fixed color.
    Resolved(Rgba8),
    /// The `random` token.
    Random,
}

impl ColorSpec {
    /// Parse and validate a token. Non-random tokens are resolved immediately.
    pub fn parse(token: &str) -> ImagenResult<Self> {
        let norm = token.trim().to_ascii_lowercase();
        if norm == RANDOM_TOKEN {
            return Ok(Self::Random);
        }
        resolve_fixed(&norm).map(Self::Resolved)
    }

    /// Concrete color for one render.
    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> Rgba8 {
        match self {
            Self::Resolved(c) => c,
            Self::Random => random_color(rng),
        }
    }

    /// Return `true` for the deferred `random` token.
    pub fn is_random(self) -> bool {
        matches!(self, Self::Random)
    }
}

impl From<Rgba8> for ColorSpec {
    fn from(c: Rgba8) -> Self {
        Self::Resolved(c)
    }
}

impl serde::Serialize for ColorSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Resolved(c) => serializer.serialize_str(&c.to_hex()),
            Self::Random => serializer.serialize_str(RANDOM_TOKEN),
        }
    }
}

/// Linear per-channel blend from `c1` (`t = 0`) to `c2` (`t = 1`).
///
/// Alpha is blended like the color channels. Results are rounded to the
/// nearest integer, so `t` values that land on a stop within float error
/// return that stop exactly.
pub fn interpolate(c1: Rgba8, c2: Rgba8, t: f64) -> Rgba8 {
    fn lerp(a: u8, b: u8, t: f64) -> u8 {
        let v = f64::from(a) + t * (f64::from(b) - f64::from(a));
        v.round().clamp(0.0, 255.0) as u8
    }

    Rgba8 {
        r: lerp(c1.r, c2.r, t),
        g: lerp(c1.g, c2.g, t),
        b: lerp(c1.b, c2.b, t),
        a: lerp(c1.a, c2.a, t),
    }
}

/// Photographic negative of the color channels; alpha is kept.
pub fn invert(c: Rgba8) -> Rgba8 {
    Rgba8 {
        r: 255 - c.r,
        g: 255 - c.g,
        b: 255 - c.b,
        a: c.a,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/resolve.rs"]
mod tests;
