//! Lexical scope graph naming.
//!
//! Every method is named after its lexical parent (the method enclosing its
//! lambda or local class), so captured variables keep the outer name and
//! new names never collide with anything visible from the outer scope.
//!
//! # Locking
//!
//! Each method carries two locks. The naming lock is held for a whole
//! [`NamingEngine::ensure_named`] call and is taken child before parent. The
//! state lock guards names and scope; when several are held at once they are
//! taken parent before child, and no naming lock is ever requested while a
//! state lock is held.

mod backprop;
mod builder;
mod capture;

use crate::naming::strategy::{Suggester, build_suggestion_chain};
use std::sync::Arc;
use varscope_api::NamingDiagnostics;
use varscope_core::config::NamingConfig;
use varscope_core::program::Program;

/// Names every local of a [`Program`] in place.
///
/// Shared by reference between worker threads; all mutable state lives in the
/// program's per-method cells.
pub struct NamingEngine<'p> {
    program: &'p Program,
    chain: Box<dyn Suggester>,
    diagnostics: Arc<dyn NamingDiagnostics>,
    receiver_name: String,
    use_declared_names: bool,
}

impl<'p> NamingEngine<'p> {
    pub fn new(
        program: &'p Program,
        config: &NamingConfig,
        diagnostics: Arc<dyn NamingDiagnostics>,
    ) -> Self {
        Self {
            program,
            chain: Box::new(build_suggestion_chain()),
            diagnostics,
            receiver_name: config.receiver_name.clone(),
            use_declared_names: config.use_declared_names,
        }
    }
}
