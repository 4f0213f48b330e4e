//! Rasterization of a [`crate::ResolvedImage`] into an RGBA buffer.
//!
//! Stages run in a fixed order: background, border, text.

pub(crate) mod background;
mod bitmap;
pub(crate) mod border;
pub(crate) mod font;
pub(crate) mod raster;
pub(crate) mod text;
