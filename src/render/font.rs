use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Font used by the text stage.
#[derive(Clone, Debug)]
pub enum FontFace {
    /// TrueType/OpenType font loaded from disk.
    TrueType {
        /// File the bytes were read from.
        path: PathBuf,
        /// Raw font file.
        bytes: Arc<Vec<u8>>,
    },
    /// Built-in 5x7 bitmap face.
    Bitmap,
}

impl FontFace {
    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::TrueType { path, .. } => path.display().to_string(),
            Self::Bitmap => "built-in bitmap".to_owned(),
        }
    }
}

/// Font discovered once at startup and shared read-only by every render.
#[derive(Clone, Debug)]
pub struct FontProvider {
    face: FontFace,
}

impl FontProvider {
    /// Try the usual system font locations for the current OS.
    pub fn system() -> Self {
        Self::with_paths(system_font_paths())
    }

    /// Use the first path that reads and parses as a font, else the bitmap face.
    ///
    /// Load failures are logged and never returned.
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for p in paths {
            let p = p.as_ref();
            match load_font(p) {
                Ok(bytes) => {
                    tracing::info!(path = %p.display(), "loaded font");
                    return Self {
                        face: FontFace::TrueType {
                            path: p.to_path_buf(),
                            bytes: Arc::new(bytes),
                        },
                    };
                }
                Err(e) => tracing::debug!(path = %p.display(), error = %e, "font not usable"),
            }
        }
        tracing::warn!("no system font found, using built-in bitmap face");
        Self::bitmap_only()
    }

    /// Always use the built-in bitmap face.
    pub fn bitmap_only() -> Self {
        Self {
            face: FontFace::Bitmap,
        }
    }

    /// The selected face.
    pub fn face(&self) -> &FontFace {
        &self.face
    }
}

impl Default for FontProvider {
    fn default() -> Self {
        Self::bitmap_only()
    }
}

fn load_font(path: &Path) -> anyhow::Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    let mut font_ctx = parley::FontContext::default();
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
    if families.is_empty() {
        anyhow::bail!("no font families in file");
    }
    Ok(bytes)
}

fn system_font_paths() -> Vec<&'static str> {
    if cfg!(target_os = "macos") {
        vec![
            "/System/Library/Fonts/Helvetica.ttc",
            "/System/Library/Fonts/SFNSText.ttf",
            "/System/Library/Fonts/SFNS.ttf",
            "/Library/Fonts/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
        ]
    } else if cfg!(target_os = "windows") {
        vec![r"C:\Windows\Fonts\arial.ttf", r"C:\Windows\Fonts\calibri.ttf"]
    } else {
        vec![
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/font.rs"]
mod tests;
