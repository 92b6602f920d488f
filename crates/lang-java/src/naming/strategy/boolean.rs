//! Boolean-returning predicates.

use super::Suggester;
use crate::naming::SuggestContext;
use crate::naming::text::{capitalize, capitalize_word, is_upper_constant};
use crate::naming::type_namer::TypeNamer;

const SINGLE_ARG_PREFIXES: &[&str] = &["is", "has"];
const VERB_PREFIXES: &[&str] = &["is", "has", "can", "should"];

/// `state.is(IS_SOLID)` suggests `isSolid`; `stack.is(item)` suggests `isItem`.
pub struct SingleArgBooleanSuggester;

impl Suggester for SingleArgBooleanSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;
        // Only the bare predicates; `isValid(pos)` is a verb-shaped name.
        let prefix = *SINGLE_ARG_PREFIXES.iter().find(|p| call.name == **p)?;
        let signature = ctx.invoke_signature()?;
        if !signature.returns_boolean() || signature.parameters.len() != 1 {
            return None;
        }

        if let Some(constant) = ctx
            .last_argument()
            .and_then(|arg| constant_argument(&arg))
        {
            let mut words: Vec<&str> = constant.split('_').filter(|w| !w.is_empty()).collect();
            if words.len() > 1 && words[0].eq_ignore_ascii_case(prefix) {
                words.remove(0);
            }
            let tail: String = words.iter().map(|w| capitalize_word(w)).collect();
            return Some(format!("{prefix}{tail}"));
        }

        let type_name = TypeNamer::new(ctx.program).name_for(&signature.parameters[0]);
        Some(format!("{prefix}{}", capitalize(&type_name)))
    }
}

/// Name of a `static final` upper-case constant read as the call argument.
fn constant_argument(arg: &SuggestContext) -> Option<String> {
    let field = arg.field()?;
    if !field.is_static || !field.is_read() || !is_upper_constant(field.name) {
        return None;
    }
    // Fields outside the model are taken to be final.
    let is_final = arg
        .program
        .find_field(field.owner, field.name)
        .is_none_or(|f| f.is_static() && f.is_final());
    is_final.then(|| field.name.to_string())
}

/// `canSurvive()` and friends keep their own name.
pub struct BooleanVerbSuggester;

impl Suggester for BooleanVerbSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;
        if !ctx.invoke_signature()?.returns_boolean() {
            return None;
        }
        VERB_PREFIXES.iter().find_map(|prefix| {
            call.name
                .strip_prefix(prefix)
                .filter(|rest| rest.starts_with(|c: char| c.is_uppercase()))
                .map(|_| call.name.to_string())
        })
    }
}
