//! Retroactive renames of captured variables.

use super::NamingEngine;
use super::capture::outer_binding;
use crate::naming::allocator;
use std::collections::HashSet;
use tracing::debug;
use varscope_core::Result;
use varscope_core::program::{ClosureId, ClosureInfo, ClosureScope, MethodId, MethodState};

impl NamingEngine<'_> {
    /// Rename outer locals captured by a local class when one of the class's
    /// visible fields would shadow them.
    ///
    /// Runs for `method` of the local class before it seeds its scope, so it
    /// inherits the corrected names.
    pub(crate) fn resolve_field_clashes(&self, method: MethodId, link: &ClosureInfo) -> Result<()> {
        let ClosureScope::LocalClass(class) = link.scope else {
            return Ok(());
        };
        let fields = self.program.visible_field_names(class);
        if fields.is_empty() || link.link.captures.is_empty() {
            return Ok(());
        }

        let outer_cell = self.program.method(link.outer);
        let clashing: Vec<u16> = {
            let outer_state = outer_cell.lock_state()?;
            let mut slots = Vec::new();
            for capture in &link.link.captures {
                if let Some((name, _)) =
                    outer_binding(outer_cell.decl(), &outer_state, link, capture.outer)?
                {
                    if fields.contains(&name) {
                        slots.push(capture.outer);
                    }
                }
            }
            slots
        };
        if clashing.is_empty() {
            return Ok(());
        }

        // Lambdas the rename will reach must hold their own names first, so
        // the new name can be checked against them.
        let mut sharing = Vec::new();
        for &slot in &clashing {
            self.collect_sharing(link.outer, slot, &mut sharing);
        }
        for &(receiver, _) in &sharing {
            if receiver != method {
                self.ensure_named(receiver)?;
            }
        }

        let mut outer_state = outer_cell.lock_state()?;
        for slot in clashing {
            // Another local class may already have renamed it.
            let Some((old, _)) = outer_binding(outer_cell.decl(), &outer_state, link, slot)? else {
                continue;
            };
            if !fields.contains(&old) {
                continue;
            }

            let mut taken: HashSet<String> = fields.clone();
            let mut reached = Vec::new();
            self.collect_sharing(link.outer, slot, &mut reached);
            for (receiver, _) in reached {
                let state = self.program.method(receiver).lock_state()?;
                taken.extend(state.scope.iter().map(str::to_string));
            }

            let new =
                allocator::finalize_with(&old, &mut outer_state.scope, |name| taken.contains(name));
            debug!(
                "renaming captured `{}` to `{}` in {} (shadowed by a field of {})",
                old,
                new,
                outer_cell.decl().key,
                self.program.class(class).name
            );
            self.propagate_rename(link.outer, &mut outer_state, slot, &old, &new, Some(link.id))?;
        }
        Ok(())
    }

    /// Every lambda body that shares `slot` of `method` through capture,
    /// with the slot it sees it at, recursively.
    ///
    /// Local-class links are not followed: their methods never inherit
    /// captured names.
    fn collect_sharing(&self, method: MethodId, slot: u16, out: &mut Vec<(MethodId, u16)>) {
        for closure in self.program.closures_enclosed_by(method) {
            if !closure.is_lambda() || closure.is_self_link() {
                continue;
            }
            let Some(inner_slot) = closure.inner_slot_for(slot) else {
                continue;
            };
            for &receiver in closure.receivers.iter().filter(|&&r| r != method) {
                if out.contains(&(receiver, inner_slot)) {
                    continue;
                }
                out.push((receiver, inner_slot));
                self.collect_sharing(receiver, inner_slot, out);
            }
        }
    }

    /// Rewrite `old` to `new` at `slot` of `method`, then in every closure
    /// enclosed by `method` that captures the slot, recursively.
    ///
    /// The caller holds `method`'s state lock; inner states are locked
    /// outer-to-inner as the recursion descends. `origin` is the closure that
    /// triggered the rename and is skipped.
    pub(crate) fn propagate_rename(
        &self,
        method: MethodId,
        state: &mut MethodState,
        slot: u16,
        old: &str,
        new: &str,
        origin: Option<ClosureId>,
    ) -> Result<()> {
        let decl = self.program.method(method).decl();
        let renamed = state.rename_slot(decl, slot, old, new);
        state.scope.insert(new);
        debug!("renamed {} entries at slot {} of {}", renamed, slot, decl.key);

        for closure in self.program.closures_enclosed_by(method) {
            if Some(closure.id) == origin || closure.is_self_link() {
                continue;
            }
            let Some(inner_slot) = closure.inner_slot_for(slot) else {
                continue;
            };
            for &receiver in closure.receivers.iter().filter(|&&r| r != method) {
                let mut inner_state = self.program.method(receiver).lock_state()?;
                self.propagate_rename(receiver, &mut inner_state, inner_slot, old, new, None)?;
            }
        }
        Ok(())
    }
}
