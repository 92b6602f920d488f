//! Finalizes candidate names against a scope.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use varscope_core::program::ScopedNames;

/// Java keywords and literals that cannot name a variable.
static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
        "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "native", "new", "package", "private", "protected", "public",
        "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
        "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
        "null", "var", "yield", "record", "_",
    ]
    .into_iter()
    .collect()
});

pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(name)
}

/// Prefix reserved words with `_`.
pub fn escape_reserved(candidate: &str) -> String {
    if is_reserved(candidate) {
        format!("_{candidate}")
    } else {
        candidate.to_string()
    }
}

/// Reserve `candidate` (or the first free `candidateN`) in `scope` and return it.
pub fn finalize(candidate: &str, scope: &mut ScopedNames) -> String {
    finalize_with(candidate, scope, |_| false)
}

/// Like [`finalize`], also skipping names for which `taken` holds.
pub fn finalize_with(
    candidate: &str,
    scope: &mut ScopedNames,
    taken: impl Fn(&str) -> bool,
) -> String {
    let base = escape_reserved(candidate);
    let is_free = |name: &str| !scope.contains(name) && !taken(name);

    let name = if is_free(&base) {
        base
    } else {
        (1u32..)
            .map(|n| format!("{base}{n}"))
            .find(|name| is_free(name))
            .unwrap_or(base)
    };
    scope.insert(name.clone());
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_name_is_kept() {
        let mut scope = ScopedNames::new();
        assert_eq!(finalize("chunk", &mut scope), "chunk");
        assert!(scope.contains("chunk"));
    }

    #[test]
    fn test_smallest_free_suffix_wins() {
        let mut scope: ScopedNames = ["pos", "pos1", "pos3"].into_iter().collect();
        assert_eq!(finalize("pos", &mut scope), "pos2");
        assert_eq!(finalize("pos", &mut scope), "pos4");
    }

    #[test]
    fn test_reserved_words_are_escaped() {
        let mut scope = ScopedNames::new();
        assert_eq!(finalize("class", &mut scope), "_class");
        assert_eq!(finalize("class", &mut scope), "_class1");
        assert_eq!(finalize("clazz", &mut scope), "clazz");
    }

    #[test]
    fn test_extra_taken_predicate() {
        let mut scope: ScopedNames = ["chunk"].into_iter().collect();
        let fields = ["chunk1"];
        let name = finalize_with("chunk", &mut scope, |n| fields.contains(&n));
        assert_eq!(name, "chunk2");
    }
}
