use super::method_ref::MethodRef;
use serde::{Deserialize, Serialize};

/// The inner side of a closure link.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClosureTarget {
    /// A lambda body method; captured values arrive as its leading parameters.
    Lambda { method: MethodRef },
    /// A local (or anonymous) class; captured values arrive through its constructors.
    LocalClass { class: String },
}

/// One captured variable: inner slot receives the value of outer slot.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotCapture {
    pub inner: u16,
    pub outer: u16,
}

/// Lexical edge from an inner scope to the method that encloses it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClosureLink {
    pub target: ClosureTarget,
    pub outer: MethodRef,
    #[serde(default)]
    pub captures: Vec<SlotCapture>,
    /// Index of the creating instruction (`invokedynamic` / `new`) in the outer method.
    #[serde(default)]
    pub site: Option<usize>,
}

impl ClosureLink {
    pub fn is_lambda(&self) -> bool {
        matches!(self.target, ClosureTarget::Lambda { .. })
    }

    /// Inner slot that receives `outer_slot`, if this link captures it.
    pub fn inner_slot_for(&self, outer_slot: u16) -> Option<u16> {
        self.captures
            .iter()
            .find(|c| c.outer == outer_slot)
            .map(|c| c.inner)
    }

    /// Outer slot feeding `inner_slot`, if this link captures it.
    pub fn outer_slot_for(&self, inner_slot: u16) -> Option<u16> {
        self.captures
            .iter()
            .find(|c| c.inner == inner_slot)
            .map(|c| c.outer)
    }
}
