//! Names derived purely from a variable's static type.

use super::text::{is_upper_constant, strip_leading_non_letters, to_lower_camel};
use varscope_core::descriptor::{JavaType, Primitive};
use varscope_core::program::Program;

const LIST_TYPES: &[&str] = &[
    "java/util/List",
    "java/util/ArrayList",
    "java/util/LinkedList",
    "java/util/Vector",
    "java/util/concurrent/CopyOnWriteArrayList",
    "com/google/common/collect/ImmutableList",
    "it/unimi/dsi/fastutil/ints/IntList",
    "it/unimi/dsi/fastutil/objects/ObjectList",
];

const SET_TYPES: &[&str] = &[
    "java/util/Set",
    "java/util/HashSet",
    "java/util/LinkedHashSet",
    "java/util/TreeSet",
    "java/util/SortedSet",
    "java/util/NavigableSet",
    "java/util/EnumSet",
    "com/google/common/collect/ImmutableSet",
    "it/unimi/dsi/fastutil/ints/IntSet",
    "it/unimi/dsi/fastutil/objects/ObjectSet",
];

const MAP_TYPES: &[&str] = &[
    "java/util/Map",
    "java/util/HashMap",
    "java/util/LinkedHashMap",
    "java/util/TreeMap",
    "java/util/SortedMap",
    "java/util/NavigableMap",
    "java/util/EnumMap",
    "java/util/IdentityHashMap",
    "java/util/WeakHashMap",
    "java/util/concurrent/ConcurrentMap",
    "java/util/concurrent/ConcurrentHashMap",
    "com/google/common/collect/ImmutableMap",
    "it/unimi/dsi/fastutil/objects/Object2ObjectMap",
];

/// Domain list types that keep their own name instead of `list`.
const NAMED_LIST_TYPES: &[&str] = &["net/minecraft/core/NonNullList"];

pub struct TypeNamer<'a> {
    program: &'a Program,
}

impl<'a> TypeNamer<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self { program }
    }

    pub fn name_for(&self, ty: &JavaType) -> String {
        match ty {
            JavaType::Primitive(p) => primitive_name(*p).to_string(),
            JavaType::Array(element) => match element.as_ref() {
                JavaType::Primitive(p) => primitive_plural(*p).to_string(),
                other => format!("{}s", self.name_for(other)),
            },
            JavaType::Object(name) => self.object_name(name),
        }
    }

    fn object_name(&self, internal_name: &str) -> String {
        match internal_name {
            "java/lang/String" => return "string".to_string(),
            "java/lang/Class" => return "clazz".to_string(),
            _ => {}
        }
        if let Some(collection) = self.collection_name(internal_name) {
            return collection.to_string();
        }
        simple_name(internal_name)
    }

    fn collection_name(&self, internal_name: &str) -> Option<&'static str> {
        if NAMED_LIST_TYPES.contains(&internal_name) {
            return None;
        }
        self.program
            .supertypes(internal_name)
            .iter()
            .find_map(|ty| {
                let ty = ty.as_str();
                if LIST_TYPES.contains(&ty) {
                    Some("list")
                } else if SET_TYPES.contains(&ty) {
                    Some("set")
                } else if MAP_TYPES.contains(&ty) {
                    Some("map")
                } else {
                    None
                }
            })
    }
}

fn primitive_name(p: Primitive) -> &'static str {
    match p {
        Primitive::Int => "i",
        Primitive::Long => "l",
        Primitive::Short => "s",
        Primitive::Byte => "b",
        Primitive::Char => "c",
        Primitive::Float => "f",
        Primitive::Double => "d",
        Primitive::Boolean => "flag",
    }
}

fn primitive_plural(p: Primitive) -> &'static str {
    match p {
        Primitive::Int => "ints",
        Primitive::Long => "longs",
        Primitive::Short => "shorts",
        Primitive::Byte => "bytes",
        Primitive::Char => "chars",
        Primitive::Float => "floats",
        Primitive::Double => "doubles",
        Primitive::Boolean => "flags",
    }
}

/// Innermost identifier of an internal class name, as a variable name.
///
/// Anonymous classes (`Outer$1`) fall back to the enclosing segment.
pub fn simple_name(internal_name: &str) -> String {
    let class = internal_name.rsplit('/').next().unwrap_or(internal_name);
    let ident = class
        .rsplit('$')
        .map(strip_leading_non_letters)
        .find(|segment| !segment.is_empty())
        .unwrap_or("");

    if ident.is_empty() {
        "obj".to_string()
    } else if ident.chars().any(char::is_lowercase) {
        decapitalize(ident)
    } else if is_upper_constant(ident) {
        ident.to_lowercase()
    } else {
        to_lower_camel(ident)
    }
}

fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
