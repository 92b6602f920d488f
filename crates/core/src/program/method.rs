use super::scope::ScopedNames;
use super::{ClassId, MethodId};
use crate::descriptor::MethodSignature;
use crate::error::{Result, VarscopeError};
use ristretto_classfile::MethodAccessFlags;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use varscope_api::{Instruction, MethodRef};

/// A local variable table row with its live range resolved to instruction indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVariable {
    /// Position in the method's table.
    pub index: usize,
    pub slot: u16,
    pub descriptor: String,
    /// First instruction index covered (the start label).
    pub start: usize,
    /// Instruction index of the end label (exclusive).
    pub end: usize,
    pub original_name: Option<String>,
}

impl LocalVariable {
    pub fn covers(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

/// Immutable, hydrated view of a method declaration.
#[derive(Debug)]
pub struct MethodDecl {
    pub id: MethodId,
    pub class: ClassId,
    pub key: MethodRef,
    pub access: u16,
    pub signature: MethodSignature,
    pub parameter_slots: Vec<u16>,
    pub instructions: Vec<Instruction>,
    pub locals: Vec<LocalVariable>,
    /// Authoritative names from the external mapping, by slot.
    pub declared_names: HashMap<u16, String>,
    /// Index of the first instruction that is not a label or line marker.
    pub entry_index: usize,
}

impl MethodDecl {
    pub fn flags(&self) -> MethodAccessFlags {
        MethodAccessFlags::from_bits_truncate(self.access)
    }

    pub fn is_static(&self) -> bool {
        self.flags().contains(MethodAccessFlags::STATIC)
    }

    pub fn is_synthetic(&self) -> bool {
        self.flags().contains(MethodAccessFlags::SYNTHETIC)
    }

    pub fn is_constructor(&self) -> bool {
        self.key.name == "<init>"
    }

    pub fn parameter_index_of_slot(&self, slot: u16) -> Option<usize> {
        self.parameter_slots.iter().position(|&s| s == slot)
    }

    /// Slot 0 of an instance method.
    pub fn is_receiver_slot(&self, slot: u16) -> bool {
        !self.is_static() && slot == 0
    }

    /// Entries live from method entry at a parameter (or receiver) slot.
    pub fn is_parameter_entry(&self, local: &LocalVariable) -> bool {
        (self.is_receiver_slot(local.slot) || self.parameter_index_of_slot(local.slot).is_some())
            && local.start <= self.entry_index
    }

    /// Entries at `slot` whose live range covers instruction `index`.
    pub fn locals_at(&self, slot: u16, index: usize) -> Vec<&LocalVariable> {
        self.locals
            .iter()
            .filter(|l| l.slot == slot && l.covers(index))
            .collect()
    }

    /// The single entry at `slot` live at `index`.
    ///
    /// Several overlapping ranges make the lookup ambiguous, which is fatal.
    pub fn local_at(&self, slot: u16, index: usize) -> Result<Option<&LocalVariable>> {
        let mut candidates = self.locals_at(slot, index);
        match candidates.len() {
            0 => Ok(None),
            1 => Ok(candidates.pop()),
            _ => Err(VarscopeError::AmbiguousLiveRange {
                method: self.key.to_string(),
                slot,
                index: Some(index),
            }),
        }
    }

    /// Source line active at instruction `index`.
    pub fn line_at(&self, index: usize) -> Option<u32> {
        let end = (index + 1).min(self.instructions.len());
        self.instructions[..end]
            .iter()
            .rev()
            .find_map(|insn| match insn {
                Instruction::Line { line } => Some(*line),
                _ => None,
            })
    }

    /// Index of the store that initialises `local`.
    ///
    /// Prefers the store right before the start label; otherwise the first
    /// store to the slot inside the live range.
    pub fn producing_store(&self, local: &LocalVariable) -> Option<usize> {
        let before = self.instructions[..local.start.min(self.instructions.len())]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, insn)| !insn.is_marker());
        if let Some((idx, Instruction::Store { slot })) = before {
            if *slot == local.slot {
                return Some(idx);
            }
        }

        let end = local.end.min(self.instructions.len());
        (local.start..end).find(|&idx| {
            matches!(self.instructions[idx], Instruction::Store { slot } if slot == local.slot)
        })
    }

    /// Closest non-marker instruction strictly before `index`.
    pub fn previous_instruction(&self, index: usize) -> Option<usize> {
        (0..index.min(self.instructions.len()))
            .rev()
            .find(|&i| !self.instructions[i].is_marker())
    }

    /// Closest non-marker instruction strictly after `index`.
    pub fn next_instruction(&self, index: usize) -> Option<usize> {
        (index + 1..self.instructions.len()).find(|&i| !self.instructions[i].is_marker())
    }
}

/// Mutable naming state of one method.
#[derive(Debug, Clone, Default)]
pub struct MethodState {
    /// Parallel to [`MethodDecl::locals`].
    pub local_names: Vec<Option<String>>,
    /// Parallel to the descriptor's parameters.
    pub parameter_names: Vec<Option<String>>,
    pub scope: ScopedNames,
    pub scope_computed: bool,
}

impl MethodState {
    /// Rename every entry at `slot` currently called `old`. Returns the number of rows changed.
    pub fn rename_slot(&mut self, decl: &MethodDecl, slot: u16, old: &str, new: &str) -> usize {
        let mut renamed = 0;
        for local in decl.locals.iter().filter(|l| l.slot == slot) {
            if let Some(name) = self.local_names.get_mut(local.index) {
                if name.as_deref() == Some(old) {
                    *name = Some(new.to_string());
                    renamed += 1;
                }
            }
        }
        if let Some(param) = decl.parameter_index_of_slot(slot) {
            if let Some(name) = self.parameter_names.get_mut(param) {
                if name.as_deref() == Some(old) {
                    *name = Some(new.to_string());
                    renamed += 1;
                }
            }
        }
        renamed
    }
}

/// A method declaration plus its lock-guarded naming state.
///
/// `naming` serialises whole naming passes over the method; `state` guards
/// the names themselves and is only ever held briefly.
#[derive(Debug)]
pub struct MethodCell {
    decl: MethodDecl,
    naming: Mutex<()>,
    state: Mutex<MethodState>,
}

impl MethodCell {
    pub(crate) fn new(decl: MethodDecl, state: MethodState) -> Self {
        Self {
            decl,
            naming: Mutex::new(()),
            state: Mutex::new(state),
        }
    }

    pub fn decl(&self) -> &MethodDecl {
        &self.decl
    }

    pub fn id(&self) -> MethodId {
        self.decl.id
    }

    pub fn lock_naming(&self) -> Result<MutexGuard<'_, ()>> {
        self.naming
            .lock()
            .map_err(|_| VarscopeError::Poisoned(format!("naming lock of {}", self.decl.key)))
    }

    pub fn lock_state(&self) -> Result<MutexGuard<'_, MethodState>> {
        self.state
            .lock()
            .map_err(|_| VarscopeError::Poisoned(format!("state of {}", self.decl.key)))
    }

    pub fn is_scope_computed(&self) -> Result<bool> {
        Ok(self.lock_state()?.scope_computed)
    }

    /// Copy of the current state, for inspection and export.
    pub fn snapshot(&self) -> Result<MethodState> {
        Ok(self.lock_state()?.clone())
    }

    /// Current name of every table entry, in table order.
    pub fn local_names(&self) -> Result<Vec<Option<String>>> {
        Ok(self.lock_state()?.local_names.clone())
    }
}
