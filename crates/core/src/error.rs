use thiserror::Error;
use varscope_api::ApiError;

#[derive(Error, Debug)]
pub enum VarscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid descriptor `{descriptor}`: {reason}")]
    Descriptor { descriptor: String, reason: String },
    #[error("Model inconsistency: {0}")]
    Model(String),
    #[error(
        "Ambiguous live range for slot {slot} in {method}{}",
        .index.map(|i| format!(" at instruction {i}")).unwrap_or_default()
    )]
    AmbiguousLiveRange {
        method: String,
        slot: u16,
        /// `None` when the lookup had no instruction to disambiguate by.
        index: Option<usize>,
    },
    #[error("Lock poisoned: {0}")]
    Poisoned(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ApiError> for VarscopeError {
    fn from(err: ApiError) -> Self {
        VarscopeError::Model(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VarscopeError>;
