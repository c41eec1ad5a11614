use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("unknown value kind: {0}")]
    UnknownValueKind(String),
}
