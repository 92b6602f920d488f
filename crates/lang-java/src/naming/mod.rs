//! Local variable naming for compiled method bodies.
//!
//! # Architecture
//!
//! ```text
//! NamingEngine::ensure_named   →  outer scope first, then parameters and locals
//!       │
//!       ▼
//! unwrap::producer_before      →  instruction that produced a stored value
//!       │
//!       ▼
//! Suggester (trait)            →  combines via or_else(); first match wins
//!       │
//!       ▼
//! TypeNamer                    →  fallback from the static type
//!       │
//!       ▼
//! allocator::finalize          →  keyword escaping and numeric suffixes
//! ```

pub mod allocator;
pub mod context;
pub mod scope;
pub mod strategy;
pub mod text;
pub mod type_namer;
pub mod unwrap;

pub use context::SuggestContext;
pub use scope::NamingEngine;
pub use strategy::{Suggester, build_suggestion_chain};
pub use type_namer::TypeNamer;
