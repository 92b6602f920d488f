use super::{ClassId, MethodId};
use ristretto_classfile::{ClassAccessFlags, FieldAccessFlags};
use varscope_api::{ClassKind, package_of};

/// Prefix of compiler-generated fields holding captured locals.
pub const CAPTURED_LOCAL_PREFIX: &str = "val$";
/// Prefix of compiler-generated fields holding the enclosing instance.
pub const OUTER_INSTANCE_PREFIX: &str = "this$";

#[derive(Debug, Clone)]
pub struct ClassInfo {
    pub id: ClassId,
    pub name: String,
    pub access: u16,
    pub kind: ClassKind,
    pub super_name: Option<String>,
    pub interfaces: Vec<String>,
    pub record_components: Vec<String>,
    pub fields: Vec<FieldInfo>,
    pub methods: Vec<MethodId>,
}

impl ClassInfo {
    pub fn flags(&self) -> ClassAccessFlags {
        ClassAccessFlags::from_bits_truncate(self.access)
    }

    pub fn is_record(&self) -> bool {
        self.kind == ClassKind::Record
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface || self.flags().contains(ClassAccessFlags::INTERFACE)
    }

    pub fn package(&self) -> &str {
        package_of(&self.name)
    }

    pub fn has_record_component(&self, name: &str) -> bool {
        self.is_record() && self.record_components.iter().any(|c| c == name)
    }
}

#[derive(Debug, Clone)]
pub struct FieldInfo {
    pub name: String,
    pub descriptor: String,
    pub access: u16,
}

impl FieldInfo {
    pub fn flags(&self) -> FieldAccessFlags {
        FieldAccessFlags::from_bits_truncate(self.access)
    }

    pub fn is_static(&self) -> bool {
        self.flags().contains(FieldAccessFlags::STATIC)
    }

    pub fn is_final(&self) -> bool {
        self.flags().contains(FieldAccessFlags::FINAL)
    }

    /// Synthetic capture fields (`val$x`, `this$0`) never shadow locals.
    pub fn is_capture_field(&self) -> bool {
        self.flags().contains(FieldAccessFlags::SYNTHETIC)
            || self.name.starts_with(CAPTURED_LOCAL_PREFIX)
            || self.name.starts_with(OUTER_INSTANCE_PREFIX)
    }

    /// Whether code in `package` sees this field when it is inherited.
    pub fn is_inherited_into(&self, declaring_package: &str, package: &str) -> bool {
        let flags = self.flags();
        if flags.contains(FieldAccessFlags::PRIVATE) {
            false
        } else if flags.contains(FieldAccessFlags::PUBLIC)
            || flags.contains(FieldAccessFlags::PROTECTED)
        {
            true
        } else {
            declaring_package == package
        }
    }
}
