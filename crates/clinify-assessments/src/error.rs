use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("unknown assessment: {0}")]
    UnknownAssessment(String),

    #[error("{assessment_id}: responses must be a JSON object")]
    NotAnObject { assessment_id: String },

    #[error("{assessment_id}: invalid answer {value} for '{item_id}'")]
    InvalidResponse {
        assessment_id: String,
        item_id: String,
        value: String,
    },
}
