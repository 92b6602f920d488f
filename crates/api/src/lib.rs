pub mod diagnostics;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use diagnostics::{MissedSuggestion, MissingParameterMapping, NamingDiagnostics, NoopDiagnostics};
pub use error::{ApiError, ApiResult};
pub use models::*;
