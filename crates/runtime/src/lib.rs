//! Parallel driver for the naming pass.
//!
//! One task per class is scheduled over a fixed rayon pool. Tasks share the
//! [`Program`] by reference; a task may recurse into methods owned by another
//! class when naming a lambda or local class, which the engine's per-method
//! locks make safe.

use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use varscope_api::{NamingDiagnostics, ProgramModel};
use varscope_core::config::NamingConfig;
use varscope_core::diagnostics::DiagnosticsCollector;
use varscope_core::program::Program;
use varscope_core::{Result, VarscopeError};
use varscope_java::NamingEngine;

/// A class whose task aborted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassFailure {
    pub class: String,
    pub error: String,
}

/// Outcome of one pass over a program.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NamingReport {
    pub named_classes: usize,
    pub failures: Vec<ClassFailure>,
}

impl NamingReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Everything a caller gets back from [`NamingRuntime::name_model`].
pub struct NamingOutcome {
    pub model: ProgramModel,
    pub report: NamingReport,
    pub diagnostics: Arc<DiagnosticsCollector>,
}

pub struct NamingRuntime {
    config: NamingConfig,
    pool: rayon::ThreadPool,
}

impl NamingRuntime {
    pub fn new(config: NamingConfig) -> Result<Self> {
        let mut builder = rayon::ThreadPoolBuilder::new()
            .thread_name(|index| format!("varscope-naming-{index}"));
        if let Some(threads) = config.threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| VarscopeError::Internal(format!("failed to start worker pool: {e}")))?;
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Name every class of `program` in place.
    ///
    /// A failing class does not stop the others; its error is reported in
    /// [`NamingReport::failures`].
    pub fn run(&self, program: &Program, diagnostics: Arc<dyn NamingDiagnostics>) -> NamingReport {
        let engine = NamingEngine::new(program, &self.config, diagnostics);
        info!(
            "Naming {} classes on {} threads",
            program.classes().len(),
            self.threads()
        );

        let results: Vec<(String, Result<()>)> = self.pool.install(|| {
            program
                .classes()
                .par_iter()
                .map(|class| (class.name.clone(), engine.name_class(class.id)))
                .collect()
        });

        let mut report = NamingReport::default();
        for (class, result) in results {
            match result {
                Ok(()) => report.named_classes += 1,
                Err(e) => {
                    warn!("Naming failed for {}: {}", class, e);
                    report.failures.push(ClassFailure {
                        class,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Naming complete: {} classes named, {} failed",
            report.named_classes,
            report.failures.len()
        );
        report
    }

    /// Hydrate `model`, name it, and write the names back.
    pub fn name_model(&self, model: ProgramModel) -> Result<NamingOutcome> {
        let program = Program::hydrate(model)?;
        let diagnostics = Arc::new(DiagnosticsCollector::new());
        let report = self.run(&program, diagnostics.clone());
        Ok(NamingOutcome {
            model: program.to_model()?,
            report,
            diagnostics,
        })
    }
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(varscope_core::logging::init_logging(component, to_stderr))
}
