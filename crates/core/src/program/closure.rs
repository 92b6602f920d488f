use super::{ClassId, ClosureId, MethodId};
use varscope_api::ClosureLink;

/// The inner scope of a hydrated closure link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosureScope {
    Lambda(MethodId),
    LocalClass(ClassId),
}

#[derive(Debug, Clone)]
pub struct ClosureInfo {
    pub id: ClosureId,
    pub link: ClosureLink,
    pub outer: MethodId,
    pub scope: ClosureScope,
    /// Methods that receive captured values in their slots: the lambda body,
    /// or every constructor of the local class.
    pub receivers: Vec<MethodId>,
}

impl ClosureInfo {
    pub fn is_lambda(&self) -> bool {
        matches!(self.scope, ClosureScope::Lambda(_))
    }

    /// A lambda whose link points back at itself (recursive lambdas).
    pub fn is_self_link(&self) -> bool {
        self.scope == ClosureScope::Lambda(self.outer)
    }

    pub fn inner_slot_for(&self, outer_slot: u16) -> Option<u16> {
        self.link.inner_slot_for(outer_slot)
    }
}
