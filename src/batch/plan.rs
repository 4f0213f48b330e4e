//! Expansion of batch flags into one [`ImageConfig`] per output file.

use serde::Serialize;

use crate::{
    color::resolve::ColorSpec,
    config::model::{BackgroundSpec, BorderSpec, ImageConfig, TextSpec},
    encode::codec::OutputFormat,
    foundation::error::{ImagenError, ImagenResult},
    parse::common::{DefinitionMode, parse_border, parse_definition, parse_size},
};

/// Raw batch parameters, as collected from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchRequest {
    /// `WxH` strings; empty means `256x192`.
    pub sizes: Vec<String>,
    /// Background definitions in flag order; empty means solid gray.
    pub definitions: Vec<(DefinitionMode, String)>,
    /// `width,color`.
    pub border: Option<String>,
    /// Overlay text with `{w}`/`{h}` placeholders.
    pub text: String,
    /// Text size in points.
    pub text_size: f64,
    /// Default text color, used when a definition has no `:t:` override.
    pub text_color: Option<String>,
    /// Text angle in degrees.
    pub text_angle: f64,
    /// Output filename template with `{w}`, `{h}`, `{nr}` placeholders.
    pub filename: String,
    /// `png`, `jpeg` or `jpg`.
    pub format: String,
    /// Number of rounds over every size and definition.
    pub rounds: u32,
}

impl Default for BatchRequest {
    fn default() -> Self {
        let text = TextSpec::default();
        Self {
            sizes: Vec::new(),
            definitions: Vec::new(),
            border: None,
            text: text.text,
            text_size: text.size_pt,
            text_color: None,
            text_angle: text.angle_deg,
            filename: "image.png".to_owned(),
            format: "png".to_owned(),
            rounds: 1,
        }
    }
}

/// One planned output image.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchItem {
    /// Round, starting at 1.
    pub round: u32,
    /// Sequence number over the whole batch, starting at 1.
    pub number: usize,
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Background mode name.
    pub mode: &'static str,
    /// Final output path.
    pub filename: String,
    /// Image to render. `random` colors are still deferred.
    pub config: ImageConfig,
}

impl BatchRequest {
    /// Validate every input and enumerate rounds x sizes x definitions.
    ///
    /// Nothing is rendered or written here, so a bad size or format fails the
    /// batch before any file exists.
    pub fn plan(&self) -> ImagenResult<Vec<BatchItem>> {
        if self.rounds == 0 {
            return Err(ImagenError::invalid_segment(
                self.rounds.to_string(),
                "number of runs must be >= 1",
            ));
        }
        OutputFormat::from_token(&self.format)?;
        if !self.text_size.is_finite() || self.text_size <= 0.0 {
            return Err(ImagenError::invalid_segment(
                self.text_size.to_string(),
                "text size must be > 0",
            ));
        }

        let sizes = if self.sizes.is_empty() {
            vec![(256, 192)]
        } else {
            self.sizes
                .iter()
                .map(|s| parse_size(s))
                .collect::<ImagenResult<Vec<_>>>()?
        };

        let definitions = if self.definitions.is_empty() {
            vec![(BackgroundSpec::default(), None)]
        } else {
            self.definitions
                .iter()
                .map(|(mode, value)| {
                    parse_definition(value, *mode).map(|d| (d.background, d.text_color))
                })
                .collect::<ImagenResult<Vec<_>>>()?
        };

        let border = match &self.border {
            Some(b) => parse_border(b, true)?,
            None => BorderSpec::default(),
        };
        let default_text_color = self
            .text_color
            .as_deref()
            .map(ColorSpec::parse)
            .transpose()?;

        let total = self.rounds as usize * sizes.len() * definitions.len();
        let mut items = Vec::with_capacity(total);
        for round in 1..=self.rounds {
            for &(width, height) in &sizes {
                for (background, text_color) in &definitions {
                    let number = items.len() + 1;
                    items.push(BatchItem {
                        round,
                        number,
                        width,
                        height,
                        mode: background.mode_name(),
                        filename: number_filename(&self.filename, number, total, width, height),
                        config: ImageConfig {
                            width,
                            height,
                            background: background.clone(),
                            border,
                            text: TextSpec {
                                text: self.text.clone(),
                                size_pt: self.text_size,
                                color: text_color.or(default_text_color),
                                angle_deg: self.text_angle,
                            },
                            format: self.format.clone(),
                        },
                    });
                }
            }
        }
        Ok(items)
    }
}

/// Output filename for image `number` of `total`.
///
/// With more than one image, `-NNNN` goes before the last `.` (or at the end).
/// `{w}`, `{h}` and `{nr}` are substituted afterwards.
pub fn number_filename(template: &str, number: usize, total: usize, width: u32, height: u32) -> String {
    let numbered = if total > 1 {
        match template.rfind('.') {
            Some(idx) => format!("{}-{number:04}{}", &template[..idx], &template[idx..]),
            None => format!("{template}-{number:04}"),
        }
    } else {
        template.to_owned()
    };
    numbered
        .replace("{w}", &width.to_string())
        .replace("{h}", &height.to_string())
        .replace("{nr}", &number.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/batch/plan.rs"]
mod tests;
