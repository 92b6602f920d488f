use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Authoritative variable names supplied by an external mapping source.
///
/// Keys are method references in their textual form (see [`super::MethodRef`]),
/// values map a local variable slot to its declared name.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct NameMapping {
    pub methods: BTreeMap<String, BTreeMap<u16, String>>,
}

impl NameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, method: impl Into<String>, slot: u16, name: impl Into<String>) {
        self.methods
            .entry(method.into())
            .or_default()
            .insert(slot, name.into());
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
