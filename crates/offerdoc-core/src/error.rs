use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown template variant: {0}")]
    UnknownVariant(String),

    #[error("form field is not a string: {0}")]
    NonStringField(String),
}
