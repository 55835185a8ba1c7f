use thiserror::Error;

/// Errors from loading fonts and rasterizing text.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("font not found: {0}")]
    FontNotFound(String),

    #[error("failed to parse font: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),

    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to rasterize {text:?}: {reason}")]
    Rasterize { text: String, reason: String },
}

/// The recorded reason why no font is available for text rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("font unavailable: {reason}")]
pub struct FontUnavailable {
    pub reason: String,
}

impl From<TextError> for FontUnavailable {
    fn from(err: TextError) -> Self {
        Self {
            reason: err.to_string(),
        }
    }
}
