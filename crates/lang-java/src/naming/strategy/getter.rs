//! Accessor-shaped calls.

use super::Suggester;
use crate::naming::SuggestContext;
use crate::naming::text::to_lower_camel;
use crate::naming::unwrap::UNBOXING_NAMES;
use varscope_api::Instruction;

/// Longest prefixes first so `getOrCreateX` is not read as `get` + `OrCreateX`.
const GETTER_PREFIXES: &[&str] = &["getOrCreate", "get", "read", "new", "as"];

/// `level.getBlockState(pos)` suggests `blockState`.
pub struct GetterShapeSuggester;

impl Suggester for GetterShapeSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;
        GETTER_PREFIXES.iter().find_map(|prefix| {
            let rest = call.name.strip_prefix(prefix)?;
            rest.starts_with(|c: char| c.is_uppercase())
                .then(|| to_lower_camel(rest))
        })
    }
}

/// Zero-argument primitive getters whose body is just a field read:
/// `entity.health()` suggests `health`.
pub struct FluentGetterSuggester;

impl Suggester for FluentGetterSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;
        if call.is_static()
            || !call.descriptor.starts_with("()")
            || call.name == "get"
            || UNBOXING_NAMES.contains(&call.name)
        {
            return None;
        }
        if !ctx.invoke_signature()?.returns_primitive() {
            return None;
        }

        let callee = ctx
            .program
            .find_method(call.owner, call.name, call.descriptor)?
            .decl();
        if callee.is_static() {
            return None;
        }
        let body: Vec<&Instruction> = callee
            .instructions
            .iter()
            .filter(|insn| !insn.is_marker())
            .collect();
        let is_field_getter = matches!(
            body.as_slice(),
            [
                Instruction::Load { slot: 0 },
                Instruction::Field { is_static: false, .. },
                Instruction::Return,
            ]
        ) && body[1].as_field().is_some_and(|f| f.is_read());
        is_field_getter.then(|| call.name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use varscope_api::ClassKind;

    #[test]
    fn test_getter_shapes() {
        let program = host(
            vec![
                virtual_call("a/Level", "getBlockState", "(La/Pos;)La/BlockState;"),
                virtual_call("a/Entity", "getUUID", "()Ljava/util/UUID;"),
                virtual_call("a/Fixes", "getAbstractUUIDFix", "()La/Fix;"),
                virtual_call("a/Map", "getOrCreateTag", "()La/Tag;"),
                virtual_call("java/util/Optional", "get", "()Ljava/lang/Object;"),
                virtual_call("a/Channel", "getaway", "()La/Route;"),
                virtual_call("a/Buf", "readVarInt", "()I"),
                virtual_call("a/Any", "asString", "()Ljava/lang/String;"),
            ],
            vec![],
        );
        let method = program.methods().next().unwrap().decl();
        let at = |i| GetterShapeSuggester.suggest(&SuggestContext::new(&program, method, i));
        assert_eq!(at(0).as_deref(), Some("blockState"));
        assert_eq!(at(1).as_deref(), Some("uuid"));
        assert_eq!(at(2).as_deref(), Some("abstractUuidFix"));
        assert_eq!(at(3).as_deref(), Some("tag"));
        assert_eq!(at(4), None);
        assert_eq!(at(5), None);
        assert_eq!(at(6).as_deref(), Some("varInt"));
        assert_eq!(at(7).as_deref(), Some("string"));
    }

    #[test]
    fn test_fluent_getter_requires_field_body() {
        let mut entity = class("a/Entity", ClassKind::Class);
        entity.methods.push(method(
            "health",
            "()F",
            0x0001,
            vec![
                Instruction::Label { id: 0 },
                Instruction::Load { slot: 0 },
                get_field("a/Entity", "health", "F"),
                Instruction::Return,
            ],
        ));
        entity.methods.push(method(
            "speed",
            "()F",
            0x0001,
            vec![
                Instruction::Load { slot: 0 },
                virtual_call("a/Entity", "computeSpeed", "()F"),
                Instruction::Return,
            ],
        ));
        let program = host(
            vec![
                virtual_call("a/Entity", "health", "()F"),
                virtual_call("a/Entity", "speed", "()F"),
                virtual_call("java/lang/Integer", "intValue", "()I"),
            ],
            vec![entity],
        );
        let method = program.find_method("test/Host", "run", "()V").unwrap().decl();
        let at = |i| FluentGetterSuggester.suggest(&SuggestContext::new(&program, method, i));
        assert_eq!(at(0).as_deref(), Some("health"));
        assert_eq!(at(1), None);
        assert_eq!(at(2), None);
    }
}
