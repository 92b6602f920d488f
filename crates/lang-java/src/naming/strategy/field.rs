//! Values read straight from a field.

use super::Suggester;
use crate::naming::SuggestContext;
use crate::naming::text::{constant_to_lower_camel, is_upper_constant};
use varscope_core::program::{CAPTURED_LOCAL_PREFIX, OUTER_INSTANCE_PREFIX};

/// `int size = this.size` suggests `size`; `int max = MAX_SIZE` suggests `maxSize`.
pub struct FieldReadSuggester;

impl Suggester for FieldReadSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let field = ctx.field().filter(|f| f.is_read())?;
        if field.name.starts_with(OUTER_INSTANCE_PREFIX) {
            return None;
        }
        if let Some(captured) = field.name.strip_prefix(CAPTURED_LOCAL_PREFIX) {
            return (!captured.is_empty()).then(|| captured.to_string());
        }
        if field.is_static && is_upper_constant(field.name) {
            return Some(constant_to_lower_camel(field.name));
        }
        Some(field.name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_field_reads() {
        let program = host(
            vec![
                get_field("a/Box", "size", "I"),
                get_static("a/Box", "MAX_SIZE", "I"),
                get_field("a/Box$1", "val$chunk", "La/Chunk;"),
                get_field("a/Box$1", "this$0", "La/Box;"),
            ],
            vec![],
        );
        let method = program.methods().next().unwrap().decl();
        let at = |i| FieldReadSuggester.suggest(&SuggestContext::new(&program, method, i));
        assert_eq!(at(0).as_deref(), Some("size"));
        assert_eq!(at(1).as_deref(), Some("maxSize"));
        assert_eq!(at(2).as_deref(), Some("chunk"));
        assert_eq!(at(3), None);
    }
}
