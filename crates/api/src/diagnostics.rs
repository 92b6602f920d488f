//! Reporting hooks for the naming pass.
//!
//! Events are informational only: nothing the collector does feeds back into
//! naming decisions.

use crate::models::MethodRef;
use serde::{Deserialize, Serialize};

/// A producing call that no suggester recognised.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MissedSuggestion {
    /// Name of the invoked method.
    pub method_name: String,
    /// Owner of the invoked method.
    pub owner: String,
    /// Descriptor of the invoked method.
    pub descriptor: String,
}

/// A parameter named by type inference because no declared name existed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MissingParameterMapping {
    pub method: MethodRef,
    pub parameter_index: usize,
    /// Source-like rendering of the parameter type, e.g. `java.util.List[]`.
    pub type_text: String,
}

/// Sink for naming diagnostics. Implementations must tolerate concurrent calls.
pub trait NamingDiagnostics: Send + Sync {
    fn missed_suggestion(&self, event: MissedSuggestion);

    fn missing_parameter_mapping(&self, event: MissingParameterMapping);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDiagnostics;

impl NamingDiagnostics for NoopDiagnostics {
    fn missed_suggestion(&self, _event: MissedSuggestion) {}

    fn missing_parameter_mapping(&self, _event: MissingParameterMapping) {}
}
