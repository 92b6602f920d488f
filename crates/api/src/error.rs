#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid method reference: {0}")]
    InvalidMethodRef(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
