//! Captured variables shared between a lambda and its enclosing method.

use std::collections::HashSet;
use varscope_core::program::{ClosureInfo, MethodDecl, MethodState};
use varscope_core::{Result, VarscopeError};

/// Entries and parameters of an inner method named by capture inheritance.
#[derive(Debug, Default)]
pub(crate) struct CapturedSlots {
    pub entries: HashSet<usize>,
    pub parameters: HashSet<usize>,
}

/// Name and descriptor of the outer variable at `slot` that `link` captures.
///
/// With a creation site the entry live there wins. Without one the slot must
/// have a single table entry, otherwise the lookup is ambiguous.
pub(crate) fn outer_binding(
    outer: &MethodDecl,
    outer_state: &MethodState,
    link: &ClosureInfo,
    slot: u16,
) -> Result<Option<(String, String)>> {
    let entry = match link.link.site {
        Some(site) => outer.local_at(slot, site)?,
        None => {
            let mut entries = outer.locals.iter().filter(|l| l.slot == slot);
            match (entries.next(), entries.next()) {
                (Some(_), Some(_)) => {
                    return Err(VarscopeError::AmbiguousLiveRange {
                        method: outer.key.to_string(),
                        slot,
                        index: None,
                    });
                }
                (entry, _) => entry,
            }
        }
    };

    Ok(match entry {
        Some(local) => outer_state
            .local_names
            .get(local.index)
            .cloned()
            .flatten()
            .map(|name| (name, local.descriptor.clone())),
        None => outer.parameter_index_of_slot(slot).and_then(|index| {
            let name = outer_state.parameter_names.get(index).cloned().flatten()?;
            Some((name, outer.signature.parameters[index].descriptor()))
        }),
    })
}

/// Copy outer names onto the lambda's captured slots.
///
/// A slot whose inner and outer descriptors differ is left alone and named as
/// a fresh variable.
pub(crate) fn inherit_captures(
    link: &ClosureInfo,
    outer: &MethodDecl,
    outer_state: &MethodState,
    inner: &MethodDecl,
    inner_state: &mut MethodState,
) -> Result<CapturedSlots> {
    let mut captured = CapturedSlots::default();
    for capture in &link.link.captures {
        let Some((name, descriptor)) = outer_binding(outer, outer_state, link, capture.outer)?
        else {
            continue;
        };

        let mut inherited = false;
        for local in inner
            .locals
            .iter()
            .filter(|l| l.slot == capture.inner && l.descriptor == descriptor)
        {
            inner_state.local_names[local.index] = Some(name.clone());
            captured.entries.insert(local.index);
            inherited = true;
        }
        if let Some(index) = inner.parameter_index_of_slot(capture.inner) {
            if inner.signature.parameters[index].descriptor() == descriptor {
                inner_state.parameter_names[index] = Some(name.clone());
                captured.parameters.insert(index);
                inherited = true;
            }
        }
        if inherited {
            inner_state.scope.insert(name);
        }
    }
    Ok(captured)
}
