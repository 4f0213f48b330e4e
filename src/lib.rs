//! Imagen generates placeholder raster images.
//!
//! An image is described by an [`ImageConfig`]: canvas size, one background
//! style (solid, tiled, gradient or noise), an optional border and an overlay
//! text with an auto-contrast outline. Configs come from one of two small
//! grammars:
//!
//! - the **batch** grammar ([`BatchRequest`]), flag-style values such as
//!   `red,blue:45:t:white`, expanded into every size x definition x round,
//! - the **URL** grammar ([`parse_url_path`]), slash-separated segments such as
//!   `/400x300/g:red,blue:90/t:"hello",s:26/f:jpeg`.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: strings -> [`ImageConfig`] (colors validated, `random` deferred)
//! 2. **Resolve**: [`ImageConfig`] + RNG -> [`ResolvedImage`] (fresh random draws per render)
//! 3. **Render**: [`ResolvedImage`] -> `image::RgbaImage` (background, border, text)
//! 4. **Encode**: PNG or JPEG bytes
//!
//! Every random decision (the `random` color token, noise tiles, the URL
//! background pick) takes an injected [`rand::Rng`], so seeded runs are
//! reproducible.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod batch;
mod color;
mod config;
mod encode;
mod foundation;
mod parse;
mod render;
mod server;

pub use batch::plan::{BatchItem, BatchRequest, number_filename};
pub use batch::run::{WrittenImage, run_batch};
pub use color::resolve::{ColorSpec, interpolate, invert, resolve_token};
pub use config::model::{
    BackgroundSpec, BorderSpec, DEFAULT_TILE_SIZE, FALLBACK_TILE_SIZE, ImageConfig, ResolvedBackground,
    ResolvedImage, TextSpec,
};
pub use encode::codec::{OutputFormat, content_type, encode};
pub use foundation::core::Rgba8;
pub use foundation::error::{ImagenError, ImagenResult};
pub use parse::common::{ColorDefinition, DefinitionMode, parse_definition, parse_size, split_quoted};
pub use parse::url::parse_url_path;
pub use render::font::{FontFace, FontProvider};
pub use render::raster::{MAX_CANVAS_PIXELS, generate, render};
pub use server::handler::{Response, handle_path};
pub use server::listen::{normalize_listen_addr, serve};
