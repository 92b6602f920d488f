pub mod config;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod program;

pub use error::{Result, VarscopeError};
