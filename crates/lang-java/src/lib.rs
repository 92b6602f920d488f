//! Naming inference for local variables of compiled JVM methods.
//!
//! Given a hydrated [`varscope_core::program::Program`], the
//! [`NamingEngine`] assigns every parameter and local variable table entry a
//! stable, collision-free name, keeping captured variables consistent across
//! lambdas and local classes.

pub mod naming;

pub use naming::{NamingEngine, SuggestContext, Suggester, TypeNamer, build_suggestion_chain};
