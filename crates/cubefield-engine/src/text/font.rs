use std::fmt;
use std::path::{Path, PathBuf};

/// Error returned when no usable font face can be loaded.
#[derive(Debug, Clone)]
pub enum FontLoadError {
    /// None of the candidate paths could be read.
    NotFound { tried: Vec<PathBuf> },
    /// The bytes were read but are not a valid TrueType/OpenType face.
    Parse { path: Option<PathBuf>, reason: String },
}

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontLoadError::NotFound { tried } => {
                write!(f, "font load error: no readable font among {} candidate(s)", tried.len())?;
                for p in tried {
                    write!(f, "\n  tried {}", p.display())?;
                }
                Ok(())
            }
            FontLoadError::Parse { path: Some(p), reason } => {
                write!(f, "font load error: {}: {reason}", p.display())
            }
            FontLoadError::Parse { path: None, reason } => write!(f, "font load error: {reason}"),
        }
    }
}

impl std::error::Error for FontLoadError {}

/// A parsed font face.
pub struct FontFace {
    font: fontdue::Font,
}

impl FontFace {
    /// Parses a TrueType or OpenType face from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError::Parse { path: None, reason: e.to_string() })?;
        Ok(Self { font })
    }

    /// Loads the first candidate that can be read.
    ///
    /// A readable but malformed file is an error rather than a reason to keep
    /// searching.
    pub fn load_first<P: AsRef<Path>>(candidates: &[P]) -> Result<Self, FontLoadError> {
        for path in candidates {
            let path = path.as_ref();
            let Ok(bytes) = std::fs::read(path) else {
                log::debug!("font candidate {} not readable", path.display());
                continue;
            };

            return Self::from_bytes(&bytes)
                .map(|face| {
                    log::info!("loaded font {}", path.display());
                    face
                })
                .map_err(|e| match e {
                    FontLoadError::Parse { reason, .. } => FontLoadError::Parse {
                        path: Some(path.to_path_buf()),
                        reason,
                    },
                    other => other,
                });
        }

        Err(FontLoadError::NotFound {
            tried: candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
        })
    }

    /// True when the face maps `c` to a real glyph (index 0 is `.notdef`).
    pub fn has_glyph(&self, c: char) -> bool {
        self.font.lookup_glyph_index(c) != 0
    }

    pub(crate) fn rasterize(&self, c: char, px: f32) -> (fontdue::Metrics, Vec<u8>) {
        self.font.rasterize(c, px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = FontFace::from_bytes(b"definitely not a font").err();
        assert!(matches!(err, Some(FontLoadError::Parse { path: None, .. })));
    }

    #[test]
    fn missing_candidates_report_every_path() {
        let paths = ["/nonexistent/a.ttf", "/nonexistent/b.ttf"];
        let err = FontFace::load_first(&paths).err();
        match err {
            Some(FontLoadError::NotFound { tried }) => assert_eq!(tried.len(), 2),
            _ => panic!("expected NotFound"),
        }
    }

    #[test]
    fn not_found_display_lists_paths() {
        let err = FontLoadError::NotFound { tried: vec![PathBuf::from("/x/y.ttf")] };
        assert!(err.to_string().contains("/x/y.ttf"));
    }
}
