use serde::{Deserialize, Serialize};

/// Identifier of a label instruction inside one method body.
pub type LabelId = u32;

/// Dispatch kind of a method invocation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InvokeKind {
    Virtual,
    Interface,
    Static,
    Special,
}

/// Direction of a field access.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldOp {
    Get,
    Put,
}

/// A bytecode instruction, reduced to what variable naming needs.
///
/// Only the tag and a handful of operands are kept; everything the naming
/// engine never inspects collapses into [`Instruction::Other`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    Load {
        slot: u16,
    },
    Store {
        slot: u16,
    },
    Invoke {
        kind: InvokeKind,
        owner: String,
        name: String,
        descriptor: String,
    },
    Field {
        op: FieldOp,
        is_static: bool,
        owner: String,
        name: String,
        descriptor: String,
    },
    /// `checkcast` to the given internal name or array descriptor.
    Cast {
        target: String,
    },
    Label {
        id: LabelId,
    },
    Line {
        line: u32,
    },
    Return,
    Other {
        opcode: u8,
    },
}

impl Instruction {
    /// Labels and line markers carry no runtime behaviour.
    pub fn is_marker(&self) -> bool {
        matches!(self, Instruction::Label { .. } | Instruction::Line { .. })
    }

    pub fn is_invoke(&self) -> bool {
        matches!(self, Instruction::Invoke { .. })
    }

    pub fn as_invoke(&self) -> Option<InvokeView<'_>> {
        match self {
            Instruction::Invoke {
                kind,
                owner,
                name,
                descriptor,
            } => Some(InvokeView {
                kind: *kind,
                owner,
                name,
                descriptor,
            }),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<FieldView<'_>> {
        match self {
            Instruction::Field {
                op,
                is_static,
                owner,
                name,
                descriptor,
            } => Some(FieldView {
                op: *op,
                is_static: *is_static,
                owner,
                name,
                descriptor,
            }),
            _ => None,
        }
    }
}

/// Borrowed operands of an [`Instruction::Invoke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvokeView<'a> {
    pub kind: InvokeKind,
    pub owner: &'a str,
    pub name: &'a str,
    pub descriptor: &'a str,
}

impl InvokeView<'_> {
    pub fn is_static(&self) -> bool {
        self.kind == InvokeKind::Static
    }
}

/// Borrowed operands of an [`Instruction::Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub op: FieldOp,
    pub is_static: bool,
    pub owner: &'a str,
    pub name: &'a str,
    pub descriptor: &'a str,
}

impl FieldView<'_> {
    pub fn is_read(&self) -> bool {
        self.op == FieldOp::Get
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_json_shape() {
        let insn: Instruction = serde_json::from_str(
            r#"{"op":"invoke","kind":"virtual","owner":"a/B","name":"getX","descriptor":"()I"}"#,
        )
        .unwrap();
        let view = insn.as_invoke().unwrap();
        assert_eq!(view.name, "getX");
        assert!(!view.is_static());

        let label: Instruction = serde_json::from_str(r#"{"op":"label","id":3}"#).unwrap();
        assert!(label.is_marker());
    }
}
