//! Scope graph walk: parent scopes first, then parameters, then locals.

use super::NamingEngine;
use super::capture::{CapturedSlots, inherit_captures};
use crate::naming::allocator;
use crate::naming::context::SuggestContext;
use crate::naming::type_namer::TypeNamer;
use crate::naming::unwrap::producer_before;
use std::collections::HashMap;
use tracing::debug;
use varscope_api::{MissedSuggestion, MissingParameterMapping};
use varscope_core::Result;
use varscope_core::descriptor::JavaType;
use varscope_core::program::{ClassId, LocalVariable, MethodCell, MethodDecl, MethodId, ScopedNames};

impl NamingEngine<'_> {
    /// Name every method of `class`.
    pub fn name_class(&self, class: ClassId) -> Result<()> {
        let info = self.program.class(class);
        for &method in &info.methods {
            self.ensure_named(method)?;
        }
        debug!("named {} methods of {}", info.methods.len(), info.name);
        Ok(())
    }

    /// Name the whole program on the calling thread.
    pub fn name_all(&self) -> Result<()> {
        for class in self.program.classes() {
            self.name_class(class.id)?;
        }
        Ok(())
    }

    /// Name `method`'s parameters and locals, naming its outer scopes first.
    ///
    /// Idempotent: a method whose scope is already computed is left untouched.
    pub fn ensure_named(&self, id: MethodId) -> Result<()> {
        let cell = self.program.method(id);
        let _naming = cell.lock_naming()?;
        if cell.is_scope_computed()? {
            return Ok(());
        }
        let decl = cell.decl();

        let outer = self.program.outer_link(id);
        if let Some(link) = outer {
            self.ensure_named(link.outer)?;
            if !link.is_lambda() {
                self.resolve_field_clashes(id, link)?;
            }
        }
        debug!("naming {}", decl.key);

        let captured = match outer {
            Some(link) => {
                let outer_cell = self.program.method(link.outer);
                let outer_state = outer_cell.lock_state()?;
                let mut state = cell.lock_state()?;
                state.scope = outer_state.scope.clone();
                if link.is_lambda() {
                    inherit_captures(link, outer_cell.decl(), &outer_state, decl, &mut state)?
                } else {
                    CapturedSlots::default()
                }
            }
            None => {
                // Reserved everywhere, so no local can take the receiver's name.
                let mut scope = ScopedNames::new();
                scope.insert(self.receiver_name.clone());
                cell.lock_state()?.scope = scope;
                CapturedSlots::default()
            }
        };

        self.name_parameters(cell, &captured)?;
        self.name_locals(cell, &captured)?;

        cell.lock_state()?.scope_computed = true;
        Ok(())
    }

    fn declared_name(&self, decl: &MethodDecl, slot: u16) -> Option<String> {
        if self.use_declared_names {
            decl.declared_names.get(&slot).cloned()
        } else {
            None
        }
    }

    fn name_parameters(&self, cell: &MethodCell, captured: &CapturedSlots) -> Result<()> {
        let decl = cell.decl();
        let namer = TypeNamer::new(self.program);

        if !decl.is_static() {
            cell.lock_state()?.scope.insert(self.receiver_name.clone());
        }

        for (index, ty) in decl.signature.parameters.iter().enumerate() {
            if captured.parameters.contains(&index) {
                continue;
            }
            let candidate = match self.declared_name(decl, decl.parameter_slots[index]) {
                Some(name) => name,
                None => {
                    if !decl.is_synthetic() {
                        self.diagnostics
                            .missing_parameter_mapping(MissingParameterMapping {
                                method: decl.key.clone(),
                                parameter_index: index,
                                type_text: ty.to_string(),
                            });
                    }
                    namer.name_for(ty)
                }
            };
            let mut state = cell.lock_state()?;
            let name = allocator::finalize(&candidate, &mut state.scope);
            state.parameter_names[index] = Some(name);
        }

        // Table entries for the receiver and parameters mirror those names.
        let mut state = cell.lock_state()?;
        for local in &decl.locals {
            if captured.entries.contains(&local.index) {
                continue;
            }
            if decl.is_receiver_slot(local.slot) {
                state.local_names[local.index] = Some(self.receiver_name.clone());
            } else if decl.is_parameter_entry(local) {
                let name = decl
                    .parameter_index_of_slot(local.slot)
                    .and_then(|i| state.parameter_names[i].clone());
                state.local_names[local.index] = name;
            }
        }
        Ok(())
    }

    fn name_locals(&self, cell: &MethodCell, captured: &CapturedSlots) -> Result<()> {
        let decl = cell.decl();
        let mut by_slot_and_type: HashMap<(u16, &str), String> = HashMap::new();

        for local in &decl.locals {
            if captured.entries.contains(&local.index)
                || decl.is_receiver_slot(local.slot)
                || decl.is_parameter_entry(local)
            {
                continue;
            }

            let key = (local.slot, local.descriptor.as_str());
            if let Some(name) = by_slot_and_type.get(&key) {
                cell.lock_state()?.local_names[local.index] = Some(name.clone());
                continue;
            }

            let candidate = self.local_candidate(decl, local)?;
            let mut state = cell.lock_state()?;
            let name = allocator::finalize(&candidate, &mut state.scope);
            state.local_names[local.index] = Some(name.clone());
            drop(state);
            by_slot_and_type.insert(key, name);
        }
        Ok(())
    }

    /// Declared name, else the suggestion chain, else the type fallback.
    fn local_candidate(&self, decl: &MethodDecl, local: &LocalVariable) -> Result<String> {
        if let Some(name) = self.declared_name(decl, local.slot) {
            return Ok(name);
        }

        let producer = decl
            .producing_store(local)
            .and_then(|store| producer_before(decl, store));
        if let Some(index) = producer {
            let ctx = SuggestContext::new(self.program, decl, index);
            if let Some(name) = self.chain.suggest(&ctx) {
                return Ok(name);
            }
            if let Some(call) = ctx.invoke() {
                self.diagnostics.missed_suggestion(MissedSuggestion {
                    method_name: call.name.to_string(),
                    owner: call.owner.to_string(),
                    descriptor: call.descriptor.to_string(),
                });
            }
        }

        let ty = JavaType::parse(&local.descriptor)?;
        Ok(TypeNamer::new(self.program).name_for(&ty))
    }
}
