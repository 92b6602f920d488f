use super::closure::ClosureLink;
use super::instruction::{Instruction, LabelId};
use super::mapping::NameMapping;
use serde::{Deserialize, Serialize};

/// The whole input handed over by the hydration collaborator.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ProgramModel {
    pub classes: Vec<ClassModel>,
    #[serde(default)]
    pub closures: Vec<ClosureLink>,
    #[serde(default)]
    pub name_mapping: NameMapping,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Record,
    Enum,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClassModel {
    /// Internal name (`a/b/C`, nested classes use `$`).
    pub name: String,
    /// JVM `ACC_*` bits.
    #[serde(default)]
    pub access: u16,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub super_name: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Component names, in declaration order, when `kind` is `record`.
    #[serde(default)]
    pub record_components: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldModel>,
    #[serde(default)]
    pub methods: Vec<MethodModel>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FieldModel {
    pub name: String,
    pub descriptor: String,
    #[serde(default)]
    pub access: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MethodModel {
    pub name: String,
    pub descriptor: String,
    #[serde(default)]
    pub access: u16,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    #[serde(default)]
    pub local_variables: Vec<LocalVariableEntry>,
    /// `MethodParameters` names, one per declared parameter.
    #[serde(default)]
    pub parameters: Vec<Option<String>>,
}

/// One row of a method's local variable table.
///
/// Several entries may share a slot when the compiler reuses it for
/// variables with disjoint live ranges.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LocalVariableEntry {
    pub slot: u16,
    pub descriptor: String,
    pub start: LabelId,
    pub end: LabelId,
    #[serde(default)]
    pub name: Option<String>,
}
