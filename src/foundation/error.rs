/// Convenience result type used across Imagen.
pub type ImagenResult<T> = Result<T, ImagenError>;

/// Top-level error taxonomy.
///
/// Every variant except [`ImagenError::Render`] and [`ImagenError::Other`] is a
/// deterministic input-validation failure raised while parsing.
#[derive(thiserror::Error, Debug)]
pub enum ImagenError {
    /// Unknown color name or malformed hex value.
    #[error("invalid color: {token}")]
    InvalidColor {
        /// The offending token, normalized (trimmed, lowercase).
        token: String,
    },

    /// Size is not `WxH` or a dimension is not a positive integer.
    #[error("invalid size {input:?}: {reason}")]
    InvalidSize {
        /// Raw size input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Malformed mini-language segment, unknown prefix or bad numeric field.
    #[error("invalid segment {segment:?}: {reason}")]
    InvalidSegment {
        /// Raw segment text.
        segment: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Tiled, gradient and noise backgrounds need at least two colors.
    #[error("{mode} requires at least 2 colors, got {got}")]
    InsufficientColors {
        /// Background mode name.
        mode: &'static str,
        /// Number of colors supplied.
        got: usize,
    },

    /// Output format token is neither png nor jpeg/jpg.
    #[error("unsupported format: {format}")]
    UnsupportedFormat {
        /// Raw format token.
        format: String,
    },

    /// Failure while rasterizing an otherwise valid config.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImagenError {
    /// Build an [`ImagenError::InvalidColor`] value.
    pub fn invalid_color(token: impl Into<String>) -> Self {
        Self::InvalidColor {
            token: token.into(),
        }
    }

    /// Build an [`ImagenError::InvalidSize`] value.
    pub fn invalid_size(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSize {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Build an [`ImagenError::InvalidSegment`] value.
    pub fn invalid_segment(segment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSegment {
            segment: segment.into(),
            reason: reason.into(),
        }
    }

    /// Build an [`ImagenError::UnsupportedFormat`] value.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Build an [`ImagenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Return `true` for errors caused by the request itself (HTTP 4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidColor { .. }
                | Self::InvalidSize { .. }
                | Self::InvalidSegment { .. }
                | Self::InsufficientColors { .. }
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
