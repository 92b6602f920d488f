//! Common string operations.

use super::Suggester;
use crate::naming::SuggestContext;

const STRING: &str = "java/lang/String";
const SPLIT_OWNERS: &[&str] = &[
    STRING,
    "com/google/common/base/Splitter",
    "java/util/regex/Pattern",
    "org/apache/commons/lang3/StringUtils",
];

/// Operations whose owner is `String` unless listed in [`SPLIT_OWNERS`].
const STRING_NAMES: &[(&str, &str)] = &[
    ("substring", "sub"),
    ("trim", "trimmed"),
    ("strip", "stripped"),
    ("repeat", "repeated"),
    ("toLowerCase", "lowerCase"),
    ("toUpperCase", "upperCase"),
    ("replace", "replaced"),
    ("replaceAll", "replaced"),
    ("concat", "concatenated"),
    ("indexOf", "index"),
    ("lastIndexOf", "index"),
    ("charAt", "ch"),
    ("toCharArray", "chars"),
    ("format", "formatted"),
    ("formatted", "formatted"),
    ("join", "joined"),
];

/// `line.split(",")` suggests `parts`.
pub struct StringSuggester;

impl Suggester for StringSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;
        if matches!(call.name, "split" | "splitToList") {
            return SPLIT_OWNERS
                .contains(&call.owner)
                .then(|| "parts".to_string());
        }
        if call.owner != STRING {
            return None;
        }
        STRING_NAMES
            .iter()
            .find(|(method, _)| *method == call.name)
            .map(|(_, name)| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_split_is_owner_scoped() {
        let program = host(
            vec![
                virtual_call(STRING, "split", "(Ljava/lang/String;)[Ljava/lang/String;"),
                virtual_call("com/google/common/base/Splitter", "splitToList", "(Ljava/lang/CharSequence;)Ljava/util/List;"),
                virtual_call("a/Node", "split", "()La/Node;"),
                virtual_call(STRING, "trim", "()Ljava/lang/String;"),
                virtual_call("a/Text", "trim", "()La/Text;"),
            ],
            vec![],
        );
        let method = program.methods().next().unwrap().decl();
        let at = |i| StringSuggester.suggest(&SuggestContext::new(&program, method, i));
        assert_eq!(at(0).as_deref(), Some("parts"));
        assert_eq!(at(1).as_deref(), Some("parts"));
        assert_eq!(at(2), None);
        assert_eq!(at(3).as_deref(), Some("trimmed"));
        assert_eq!(at(4), None);
    }
}
