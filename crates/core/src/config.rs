use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Receiver keyword used for slot 0 of instance methods.
pub const DEFAULT_RECEIVER_NAME: &str = "this";

/// Settings for one naming pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NamingConfig {
    /// Worker threads; `None` lets the pool pick the available parallelism.
    pub threads: Option<usize>,
    pub receiver_name: String,
    /// Honor names from the program's name mapping before inferring.
    pub use_declared_names: bool,
    /// Rows shown per table in the diagnostics summary.
    pub report_limit: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            threads: None,
            receiver_name: DEFAULT_RECEIVER_NAME.to_string(),
            use_declared_names: true,
            report_limit: 20,
        }
    }
}

impl NamingConfig {
    /// Load a JSON config file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        if threads.is_some() {
            self.threads = threads;
        }
        self
    }

    pub fn with_declared_names(mut self, enabled: bool) -> Self {
        self.use_declared_names = enabled;
        self
    }
}
