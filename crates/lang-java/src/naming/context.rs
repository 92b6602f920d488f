//! Context handed to every suggester.

use super::unwrap::producer_before;
use varscope_api::{FieldView, Instruction, InvokeView};
use varscope_core::descriptor::MethodSignature;
use varscope_core::program::{MethodDecl, Program};

/// The producing instruction of a stored value plus what surrounds it.
///
/// Immutable; suggesters only read from it.
#[derive(Clone, Copy)]
pub struct SuggestContext<'a> {
    pub program: &'a Program,
    /// Method whose local is being named.
    pub method: &'a MethodDecl,
    /// Index of the producing instruction in `method`.
    pub index: usize,
}

impl<'a> SuggestContext<'a> {
    pub fn new(program: &'a Program, method: &'a MethodDecl, index: usize) -> Self {
        Self {
            program,
            method,
            index,
        }
    }

    /// Same method, different instruction.
    pub fn at(&self, index: usize) -> Self {
        Self { index, ..*self }
    }

    pub fn instruction(&self) -> Option<&'a Instruction> {
        self.method.instructions.get(self.index)
    }

    pub fn invoke(&self) -> Option<InvokeView<'a>> {
        self.instruction().and_then(Instruction::as_invoke)
    }

    pub fn field(&self) -> Option<FieldView<'a>> {
        self.instruction().and_then(Instruction::as_field)
    }

    /// Signature of the invoked method; `None` for non-calls or bad descriptors.
    pub fn invoke_signature(&self) -> Option<MethodSignature> {
        self.invoke()
            .and_then(|call| MethodSignature::parse(call.descriptor).ok())
    }

    /// Producer of the last argument of the call at `index`.
    pub fn last_argument(&self) -> Option<SuggestContext<'a>> {
        producer_before(self.method, self.index).map(|idx| self.at(idx))
    }

    pub fn line(&self) -> Option<u32> {
        self.method.line_at(self.index)
    }

    /// Current name of the local loaded at `index`, if that instruction is a load.
    pub fn loaded_name(&self) -> Option<String> {
        let Some(Instruction::Load { slot }) = self.instruction() else {
            return None;
        };
        let local = self
            .method
            .locals_at(*slot, self.index)
            .into_iter()
            .next();
        let cell = self.program.method(self.method.id);
        let state = cell.lock_state().ok()?;
        match local {
            Some(local) => state
                .local_names
                .get(local.index)
                .cloned()
                .flatten()
                .or_else(|| local.original_name.clone()),
            None => self
                .method
                .parameter_index_of_slot(*slot)
                .and_then(|i| state.parameter_names.get(i).cloned().flatten()),
        }
    }

    /// Nearest call on the same source line, scanning in `direction`.
    pub fn neighbour_call(&self, direction: Direction) -> Option<SuggestContext<'a>> {
        let line = self.line();
        let mut idx = self.index;
        loop {
            idx = match direction {
                Direction::Forward => self.method.next_instruction(idx)?,
                Direction::Backward => self.method.previous_instruction(idx)?,
            };
            let next = self.at(idx);
            if next.line() != line {
                return None;
            }
            if next.invoke().is_some() {
                return Some(next);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}
