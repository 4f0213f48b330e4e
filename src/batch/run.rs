use std::path::PathBuf;

use anyhow::Context;
use rand::Rng;

use super::plan::BatchRequest;
use crate::{
    encode::codec::encode,
    foundation::error::ImagenResult,
    render::{font::FontProvider, raster::generate},
};

/// A file written by [`run_batch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenImage {
    /// Output path.
    pub path: PathBuf,
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Background mode name.
    pub mode: &'static str,
}

/// Plan, render and write every image of a batch, in order.
///
/// The whole plan is validated before the first file is written. Rendering
/// stops at the first error; files already written are kept. `on_written` is
/// called after each file lands on disk.
pub fn run_batch<R: Rng + ?Sized>(
    request: &BatchRequest,
    rng: &mut R,
    fonts: &FontProvider,
    mut on_written: impl FnMut(&WrittenImage),
) -> ImagenResult<Vec<WrittenImage>> {
    let items = request.plan()?;
    tracing::debug!(count = items.len(), "batch planned");

    let mut written = Vec::with_capacity(items.len());
    for item in items {
        let img = generate(&item.config, rng, fonts)?;
        let bytes = encode(&img, &item.config.format)?;
        std::fs::write(&item.filename, &bytes)
            .with_context(|| format!("failed to write image to {}", item.filename))?;
        tracing::info!(
            file = %item.filename,
            round = item.round,
            bytes = bytes.len(),
            "image written"
        );

        let out = WrittenImage {
            path: PathBuf::from(item.filename),
            width: item.width,
            height: item.height,
            mode: item.mode,
        };
        on_written(&out);
        written.push(out);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/batch/run.rs"]
mod tests;
