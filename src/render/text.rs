use std::borrow::Cow;

use image::RgbaImage;

use super::{bitmap, font::FontFace};
use crate::{
    color::resolve::invert,
    foundation::{
        core::Rgba8,
        error::{ImagenError, ImagenResult},
    },
};

/// The eight one-pixel neighbours drawn in the outline color.
const OUTLINE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Replace `{w}` and `{h}` with the canvas size.
pub(crate) fn substitute_placeholders(text: &str, width: u32, height: u32) -> String {
    text.replace("{w}", &width.to_string())
        .replace("{h}", &height.to_string())
}

/// Draw centered text with a one-pixel halo in the inverted color.
///
/// `color` defaults to white. A TrueType face that cannot be used for this
/// canvas falls back to the bitmap face.
pub(crate) fn draw_text(
    img: &mut RgbaImage,
    text: &str,
    size_pt: f64,
    color: Option<Rgba8>,
    face: &FontFace,
) {
    if text.is_empty() {
        return;
    }
    let color = color.unwrap_or(Rgba8::WHITE);
    let outline = invert(color);

    if let FontFace::TrueType { bytes, path } = face {
        match draw_vector(img, text, size_pt as f32, color, outline, bytes) {
            Ok(()) => return,
            Err(e) => {
                tracing::debug!(font = %path.display(), error = %e, "vector text failed, using bitmap face")
            }
        }
    }
    draw_bitmap(img, text, size_pt, color, outline);
}

fn anchor(canvas: (u32, u32), text: (f64, f64)) -> (f64, f64) {
    (
        (f64::from(canvas.0) - text.0) / 2.0,
        (f64::from(canvas.1) + text.1) / 2.0,
    )
}

fn passes(color: Rgba8, outline: Rgba8) -> impl Iterator<Item = ((i32, i32), Rgba8)> {
    OUTLINE_OFFSETS
        .into_iter()
        .map(move |off| (off, outline))
        .chain(std::iter::once(((0, 0), color)))
}

fn draw_bitmap(img: &mut RgbaImage, text: &str, size_pt: f64, color: Rgba8, outline: Rgba8) {
    let scale = bitmap::scale_for(size_pt, img.height());
    let (tw, th) = bitmap::measure(text, scale);
    let (x, y) = anchor(img.dimensions(), (tw as f64, th as f64));
    let (x, y) = (x.floor() as i64, y.floor() as i64);

    for ((dx, dy), c) in passes(color, outline) {
        bitmap::draw(img, text, x + i64::from(dx), y + i64::from(dy), scale, c);
    }
}

fn draw_vector(
    img: &mut RgbaImage,
    text: &str,
    size_px: f32,
    color: Rgba8,
    outline: Rgba8,
    font_bytes: &[u8],
) -> ImagenResult<()> {
    let (w, h) = img.dimensions();
    let (Ok(cw), Ok(ch)) = (u16::try_from(w), u16::try_from(h)) else {
        return Err(ImagenError::render(format!(
            "canvas {w}x{h} exceeds vector text limits"
        )));
    };

    // An em box taller than the canvas can only be clipped.
    let size_px = size_px.min(f32::from(ch));
    let layout = layout_plain(text, font_bytes, size_px)?;
    let Some(first) = layout.lines().next() else {
        return Ok(());
    };
    let metrics = first.metrics();
    let (baseline, ascent) = (f64::from(metrics.baseline), f64::from(metrics.ascent));
    let (x, y) = anchor((w, h), (f64::from(layout.width()), ascent));

    let font = vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
        0,
    );
    let mut ctx = vello_cpu::RenderContext::new(cw, ch);
    for ((dx, dy), c) in passes(color, outline) {
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            x + f64::from(dx),
            y + f64::from(dy) - baseline,
        )));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
    ctx.flush();

    let mut layer = vello_cpu::Pixmap::new(cw, ch);
    ctx.render_to_pixmap(&mut layer);
    composite_over(img, layer.data_as_u8_slice());
    Ok(())
}

fn layout_plain(text: &str, font_bytes: &[u8], size_px: f32) -> ImagenResult<parley::Layout<()>> {
    if !size_px.is_finite() || size_px <= 0.0 {
        return Err(ImagenError::render("text size must be finite and > 0"));
    }

    let mut font_ctx = parley::FontContext::default();
    let mut layout_ctx: parley::LayoutContext<()> = parley::LayoutContext::new();
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
    let family_id = families
        .first()
        .map(|(id, _)| *id)
        .ok_or_else(|| ImagenError::render("no font families registered from font bytes"))?;
    let family_name = font_ctx
        .collection
        .family_name(family_id)
        .ok_or_else(|| ImagenError::render("registered font family has no name"))?
        .to_string();

    let mut builder = layout_ctx.ranged_builder(&mut font_ctx, text, 1.0, true);
    builder.push_default(parley::style::StyleProperty::FontStack(
        parley::style::FontStack::Source(Cow::Owned(family_name)),
    ));
    builder.push_default(parley::style::StyleProperty::FontSize(size_px));
    let mut layout: parley::Layout<()> = builder.build(text);
    layout.break_all_lines(None);
    Ok(layout)
}

/// Source-over a premultiplied RGBA layer onto a straight-alpha canvas.
fn composite_over(img: &mut RgbaImage, layer: &[u8]) {
    for (dst, src) in img.chunks_exact_mut(4).zip(layer.chunks_exact(4)) {
        let sa = u16::from(src[3]);
        if sa == 0 {
            continue;
        }
        let inv = 255 - sa;
        let da = u16::from(dst[3]);
        let out_a = sa + mul_div255(da, inv);
        for i in 0..3 {
            let dst_pm = mul_div255(u16::from(dst[i]), da);
            let out_pm = u16::from(src[i]) + mul_div255(dst_pm, inv);
            dst[i] = ((u32::from(out_pm) * 255 + u32::from(out_a) / 2) / u32::from(out_a))
                .min(255) as u8;
        }
        dst[3] = out_a.min(255) as u8;
    }
}

fn mul_div255(x: u16, y: u16) -> u16 {
    ((u32::from(x) * u32::from(y) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
