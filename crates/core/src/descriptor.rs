//! Typed view over JVM field and method descriptors.

use crate::error::{Result, VarscopeError};
use ristretto_classfile::{BaseType, FieldType};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    pub fn descriptor_char(self) -> char {
        match self {
            Primitive::Boolean => 'Z',
            Primitive::Byte => 'B',
            Primitive::Char => 'C',
            Primitive::Short => 'S',
            Primitive::Int => 'I',
            Primitive::Long => 'J',
            Primitive::Float => 'F',
            Primitive::Double => 'D',
        }
    }

    /// Internal name of the wrapper class (`java/lang/Integer` for `int`).
    pub fn box_class(self) -> &'static str {
        match self {
            Primitive::Boolean => "java/lang/Boolean",
            Primitive::Byte => "java/lang/Byte",
            Primitive::Char => "java/lang/Character",
            Primitive::Short => "java/lang/Short",
            Primitive::Int => "java/lang/Integer",
            Primitive::Long => "java/lang/Long",
            Primitive::Float => "java/lang/Float",
            Primitive::Double => "java/lang/Double",
        }
    }

    pub fn from_box_class(internal_name: &str) -> Option<Self> {
        Some(match internal_name {
            "java/lang/Boolean" => Primitive::Boolean,
            "java/lang/Byte" => Primitive::Byte,
            "java/lang/Character" => Primitive::Char,
            "java/lang/Short" => Primitive::Short,
            "java/lang/Integer" => Primitive::Int,
            "java/lang/Long" => Primitive::Long,
            "java/lang/Float" => Primitive::Float,
            "java/lang/Double" => Primitive::Double,
            _ => return None,
        })
    }
}

/// A field type decoded from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    Primitive(Primitive),
    /// Internal class name, e.g. `java/lang/String`.
    Object(String),
    Array(Box<JavaType>),
}

impl JavaType {
    /// Parse a field descriptor such as `I`, `[J` or `Ljava/lang/String;`.
    pub fn parse(descriptor: &str) -> Result<Self> {
        // A field descriptor is the return part of `()<descriptor>`.
        let (_, ret) = parse_raw(&format!("(){descriptor}"))?;
        ret.map(|ty| Self::from_field_type(&ty))
            .ok_or_else(|| VarscopeError::Descriptor {
                descriptor: descriptor.to_string(),
                reason: "void is not a field type".to_string(),
            })
    }

    pub fn from_field_type(ty: &FieldType) -> Self {
        match ty {
            FieldType::Base(BaseType::Boolean) => JavaType::Primitive(Primitive::Boolean),
            FieldType::Base(BaseType::Byte) => JavaType::Primitive(Primitive::Byte),
            FieldType::Base(BaseType::Char) => JavaType::Primitive(Primitive::Char),
            FieldType::Base(BaseType::Short) => JavaType::Primitive(Primitive::Short),
            FieldType::Base(BaseType::Int) => JavaType::Primitive(Primitive::Int),
            FieldType::Base(BaseType::Long) => JavaType::Primitive(Primitive::Long),
            FieldType::Base(BaseType::Float) => JavaType::Primitive(Primitive::Float),
            FieldType::Base(BaseType::Double) => JavaType::Primitive(Primitive::Double),
            FieldType::Object(name) => JavaType::Object(name.clone()),
            FieldType::Array(component) => {
                JavaType::Array(Box::new(Self::from_field_type(component)))
            }
        }
    }

    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            JavaType::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, JavaType::Primitive(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, JavaType::Primitive(Primitive::Boolean))
    }

    pub fn as_object(&self) -> Option<&str> {
        match self {
            JavaType::Object(name) => Some(name),
            _ => None,
        }
    }

    /// Field descriptor text, the inverse of [`JavaType::parse`].
    pub fn descriptor(&self) -> String {
        match self {
            JavaType::Primitive(p) => p.descriptor_char().to_string(),
            JavaType::Object(name) => format!("L{name};"),
            JavaType::Array(element) => format!("[{}", element.descriptor()),
        }
    }

    /// Number of local variable slots a value of this type occupies.
    pub fn slot_size(&self) -> u16 {
        match self {
            JavaType::Primitive(Primitive::Long | Primitive::Double) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for JavaType {
    /// Source-like rendering: `int`, `java.lang.String`, `int[][]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Primitive(p) => f.write_str(p.keyword()),
            JavaType::Object(name) => f.write_str(&name.replace('/', ".")),
            JavaType::Array(element) => write!(f, "{element}[]"),
        }
    }
}

/// Parameter and return types of a method descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub parameters: Vec<JavaType>,
    /// `None` for `void`.
    pub return_type: Option<JavaType>,
}

impl MethodSignature {
    pub fn parse(descriptor: &str) -> Result<Self> {
        let (params, ret) = parse_raw(descriptor)?;
        Ok(Self {
            parameters: params.iter().map(JavaType::from_field_type).collect(),
            return_type: ret.as_ref().map(JavaType::from_field_type),
        })
    }

    pub fn returns_primitive(&self) -> bool {
        self.return_type.as_ref().is_some_and(JavaType::is_primitive)
    }

    pub fn returns_boolean(&self) -> bool {
        self.return_type.as_ref().is_some_and(JavaType::is_boolean)
    }

    /// Local variable slot of every parameter, in declaration order.
    pub fn parameter_slots(&self, is_static: bool) -> Vec<u16> {
        let mut next = if is_static { 0 } else { 1 };
        self.parameters
            .iter()
            .map(|ty| {
                let slot = next;
                next += ty.slot_size();
                slot
            })
            .collect()
    }
}

fn parse_raw(descriptor: &str) -> Result<(Vec<FieldType>, Option<FieldType>)> {
    FieldType::parse_method_descriptor(descriptor).map_err(|e| VarscopeError::Descriptor {
        descriptor: descriptor.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_types() {
        assert_eq!(
            JavaType::parse("I").unwrap(),
            JavaType::Primitive(Primitive::Int)
        );
        assert_eq!(
            JavaType::parse("[[Ljava/lang/String;").unwrap().to_string(),
            "java.lang.String[][]"
        );
        assert_eq!(
            JavaType::parse("[[Ljava/lang/String;").unwrap().descriptor(),
            "[[Ljava/lang/String;"
        );
        assert!(JavaType::parse("V").is_err());
    }

    #[test]
    fn test_parameter_slots_account_for_wide_types() {
        let sig = MethodSignature::parse("(JILjava/lang/Object;D)V").unwrap();
        assert_eq!(sig.parameter_slots(true), vec![0, 2, 3, 4]);
        assert_eq!(sig.parameter_slots(false), vec![1, 3, 4, 5]);
        assert!(sig.return_type.is_none());
    }

    #[test]
    fn test_boolean_return() {
        let sig = MethodSignature::parse("(Lnet/minecraft/world/level/block/Block;)Z").unwrap();
        assert!(sig.returns_boolean());
        assert!(sig.returns_primitive());
    }

    #[test]
    fn test_box_classes_round_trip() {
        for p in [Primitive::Int, Primitive::Boolean, Primitive::Double] {
            assert_eq!(Primitive::from_box_class(p.box_class()), Some(p));
        }
    }
}
