//! Fluent builders for program models used by the naming tests.
#![allow(dead_code)]

use std::sync::Arc;
use varscope_api::{
    ClassKind, ClassModel, ClosureLink, ClosureTarget, FieldModel, FieldOp, Instruction,
    InvokeKind, LocalVariableEntry, MethodModel, MethodRef, NameMapping, NoopDiagnostics,
    ProgramModel, SlotCapture,
};
use varscope_core::config::NamingConfig;
use varscope_core::program::Program;
use varscope_java::NamingEngine;

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_FINAL: u16 = 0x0010;
pub const ACC_ABSTRACT: u16 = 0x0400;
pub const ACC_SYNTHETIC: u16 = 0x1000;
pub const LAMBDA: u16 = ACC_PRIVATE | ACC_STATIC | ACC_SYNTHETIC;

/// A program model built with a fluent API.
#[derive(Default)]
pub struct ModelBuilder {
    classes: Vec<ClassModel>,
    closures: Vec<ClosureLink>,
    mapping: NameMapping,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, class: ClassBuilder) -> Self {
        self.classes.push(class.model);
        self
    }

    /// `inner` is a lambda body created at instruction `site` of `outer`.
    pub fn lambda(
        mut self,
        inner: MethodRef,
        outer: MethodRef,
        captures: &[(u16, u16)],
        site: Option<usize>,
    ) -> Self {
        self.closures.push(ClosureLink {
            target: ClosureTarget::Lambda { method: inner },
            outer,
            captures: to_captures(captures),
            site,
        });
        self
    }

    pub fn local_class(
        mut self,
        class: &str,
        outer: MethodRef,
        captures: &[(u16, u16)],
        site: Option<usize>,
    ) -> Self {
        self.closures.push(ClosureLink {
            target: ClosureTarget::LocalClass {
                class: class.to_string(),
            },
            outer,
            captures: to_captures(captures),
            site,
        });
        self
    }

    pub fn declared(mut self, method: &MethodRef, slot: u16, name: &str) -> Self {
        self.mapping.insert(method.to_string(), slot, name);
        self
    }

    pub fn build(self) -> ProgramModel {
        ProgramModel {
            classes: self.classes,
            closures: self.closures,
            name_mapping: self.mapping,
        }
    }

    pub fn hydrate(self) -> Program {
        Program::hydrate(self.build()).expect("model should hydrate")
    }
}

/// `(inner, outer)` slot pairs.
fn to_captures(pairs: &[(u16, u16)]) -> Vec<SlotCapture> {
    pairs
        .iter()
        .map(|&(inner, outer)| SlotCapture { inner, outer })
        .collect()
}

pub struct ClassBuilder {
    model: ClassModel,
}

impl ClassBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            model: ClassModel {
                name: name.to_string(),
                access: ACC_PUBLIC,
                kind: ClassKind::Class,
                super_name: Some("java/lang/Object".to_string()),
                interfaces: vec![],
                record_components: vec![],
                fields: vec![],
                methods: vec![],
            },
        }
    }

    pub fn record(name: &str, components: &[&str]) -> Self {
        let mut builder = Self::new(name).kind(ClassKind::Record);
        builder.model.super_name = Some("java/lang/Record".to_string());
        builder.model.record_components = components.iter().map(|c| c.to_string()).collect();
        builder
    }

    pub fn kind(mut self, kind: ClassKind) -> Self {
        self.model.kind = kind;
        self
    }

    pub fn extends(mut self, super_name: &str) -> Self {
        self.model.super_name = Some(super_name.to_string());
        self
    }

    pub fn field(mut self, name: &str, descriptor: &str, access: u16) -> Self {
        self.model.fields.push(FieldModel {
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            access,
        });
        self
    }

    pub fn method(mut self, method: MethodBuilder) -> Self {
        self.model.methods.push(method.model);
        self
    }
}

pub struct MethodBuilder {
    model: MethodModel,
}

impl MethodBuilder {
    pub fn new(name: &str, descriptor: &str, access: u16) -> Self {
        Self {
            model: MethodModel {
                name: name.to_string(),
                descriptor: descriptor.to_string(),
                access,
                instructions: vec![],
                local_variables: vec![],
                parameters: vec![],
            },
        }
    }

    pub fn insn(mut self, insn: Instruction) -> Self {
        self.model.instructions.push(insn);
        self
    }

    pub fn label(self, id: u32) -> Self {
        self.insn(Instruction::Label { id })
    }

    pub fn line(self, line: u32) -> Self {
        self.insn(Instruction::Line { line })
    }

    pub fn load(self, slot: u16) -> Self {
        self.insn(Instruction::Load { slot })
    }

    pub fn store(self, slot: u16) -> Self {
        self.insn(Instruction::Store { slot })
    }

    pub fn other(self) -> Self {
        self.insn(Instruction::Other { opcode: 0 })
    }

    pub fn ret(self) -> Self {
        self.insn(Instruction::Return)
    }

    pub fn invoke_virtual(self, owner: &str, name: &str, descriptor: &str) -> Self {
        self.insn(invoke(InvokeKind::Virtual, owner, name, descriptor))
    }

    pub fn invoke_static(self, owner: &str, name: &str, descriptor: &str) -> Self {
        self.insn(invoke(InvokeKind::Static, owner, name, descriptor))
    }

    pub fn get_static(self, owner: &str, name: &str, descriptor: &str) -> Self {
        self.insn(field(true, owner, name, descriptor))
    }

    pub fn get_field(self, owner: &str, name: &str, descriptor: &str) -> Self {
        self.insn(field(false, owner, name, descriptor))
    }

    /// Table entry live from label `start` to label `end`.
    pub fn local(mut self, slot: u16, descriptor: &str, start: u32, end: u32) -> Self {
        self.model.local_variables.push(LocalVariableEntry {
            slot,
            descriptor: descriptor.to_string(),
            start,
            end,
            name: None,
        });
        self
    }
}

fn invoke(kind: InvokeKind, owner: &str, name: &str, descriptor: &str) -> Instruction {
    Instruction::Invoke {
        kind,
        owner: owner.to_string(),
        name: name.to_string(),
        descriptor: descriptor.to_string(),
    }
}

fn field(is_static: bool, owner: &str, name: &str, descriptor: &str) -> Instruction {
    Instruction::Field {
        op: FieldOp::Get,
        is_static,
        owner: owner.to_string(),
        name: name.to_string(),
        descriptor: descriptor.to_string(),
    }
}

pub fn method_ref(owner: &str, name: &str, descriptor: &str) -> MethodRef {
    MethodRef::new(owner, name, descriptor)
}

pub fn engine(program: &Program) -> NamingEngine<'_> {
    NamingEngine::new(program, &NamingConfig::default(), Arc::new(NoopDiagnostics))
}

/// Final table names of a method, in table order.
pub fn local_names(program: &Program, method: &MethodRef) -> Vec<String> {
    let id = program.method_id(method).expect("method exists");
    program
        .method(id)
        .local_names()
        .expect("state lock")
        .into_iter()
        .map(|n| n.unwrap_or_default())
        .collect()
}

/// Final parameter names of a method.
pub fn parameter_names(program: &Program, method: &MethodRef) -> Vec<String> {
    let id = program.method_id(method).expect("method exists");
    program
        .method(id)
        .snapshot()
        .expect("state lock")
        .parameter_names
        .into_iter()
        .map(|n| n.unwrap_or_default())
        .collect()
}
