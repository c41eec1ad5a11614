use thiserror::Error;

/// Why a raw template could not be normalized.
#[derive(Debug, Error)]
pub enum ParseCause {
    #[error("invalid JSON: {0}")]
    Json(serde_json::Error),

    #[error("Invalid template configuration")]
    InvalidShape,

    /// Typed decoding failed after the shape check passed. Mistyped
    /// optional fields are read as absent, so this is not expected in
    /// practice.
    #[error("invalid template field: {0}")]
    Decode(serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template parsing failed: {source}")]
    Parsing {
        #[from]
        source: ParseCause,
    },
}

impl TemplateError {
    pub fn cause(&self) -> &ParseCause {
        match self {
            TemplateError::Parsing { source } => source,
        }
    }
}
