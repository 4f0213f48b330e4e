use rand::Rng;

use crate::{
    encode::codec::{content_type, encode},
    parse::url::parse_url_path,
    render::{font::FontProvider, raster::generate},
};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// An HTTP response before it is written to the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Status code.
    pub status: u16,
    /// `Content-Type` header value.
    pub content_type: &'static str,
    /// Body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Plain-text response.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN,
            body: body.into().into_bytes(),
        }
    }

    /// Reason phrase for the status line.
    pub fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            400 => "Bad Request",
            405 => "Method Not Allowed",
            500 => "Internal Server Error",
            _ => "Unknown",
        }
    }

    /// Serialize status line, headers and (unless `head_only`) the body.
    pub fn to_http(&self, head_only: bool) -> Vec<u8> {
        let mut out = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nCache-Control: no-store\r\nConnection: close\r\n\r\n",
            self.status,
            self.reason(),
            self.content_type,
            self.body.len()
        )
        .into_bytes();
        if !head_only {
            out.extend_from_slice(&self.body);
        }
        out
    }
}

/// Render the image described by a decoded request path.
///
/// Parse failures answer 400, render or encode failures 500.
pub fn handle_path<R: Rng + ?Sized>(path: &str, rng: &mut R, fonts: &FontProvider) -> Response {
    let config = match parse_url_path(path, rng) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path, error = %e, "rejected request path");
            return Response::text(400, format!("Invalid URL: {e}"));
        }
    };

    match generate(&config, rng, fonts).and_then(|img| encode(&img, &config.format)) {
        Ok(body) => {
            tracing::debug!(
                path,
                width = config.width,
                height = config.height,
                mode = config.background.mode_name(),
                bytes = body.len(),
                "image served"
            );
            Response {
                status: 200,
                content_type: content_type(&config.format),
                body,
            }
        }
        Err(e) => {
            tracing::warn!(path, error = %e, "image generation failed");
            Response::text(500, format!("Failed to generate image: {e}"))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/server/handler.rs"]
mod tests;
