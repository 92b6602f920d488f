//! Identifier case conversions shared by the suggesters and the type namer.

use once_cell::sync::Lazy;
use regex::Regex;

static UPPER_CONSTANT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Z0-9]*(?:_+[A-Z0-9]+)*_*$").expect("valid constant pattern")
});

static LEADING_NON_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^A-Za-z]+").expect("valid leading pattern"));

/// `MAX_SIZE`, `FACING`, `IS_SOLID`.
pub fn is_upper_constant(name: &str) -> bool {
    UPPER_CONSTANT.is_match(name)
}

pub fn strip_leading_non_letters(name: &str) -> &str {
    match LEADING_NON_LETTERS.find(name) {
        Some(m) => &name[m.end()..],
        None => name,
    }
}

/// Split a camel-case identifier into words.
///
/// A run of capitals is one word, except its last letter when a lower-case
/// letter follows: `AbstractUUIDFix` splits into `Abstract`, `UUID`, `Fix`.
pub fn camel_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '$' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        let boundary = match i.checked_sub(1).map(|p| chars[p]) {
            Some(prev) if c.is_uppercase() => {
                let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                !prev.is_uppercase() || next_lower
            }
            _ => false,
        };
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `Word` from `word`, `WORD` or `wORD`.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join words as `lowerCamel`, collapsing capital runs.
pub fn join_lower_camel<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let word = word.as_ref();
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize_word(word));
        }
    }
    out
}

/// `BlockState` -> `blockState`, `UUID` -> `uuid`, `AbstractUUIDFix` -> `abstractUuidFix`.
pub fn to_lower_camel(name: &str) -> String {
    join_lower_camel(&camel_words(name))
}

/// `HORIZONTAL_FACING` -> `horizontalFacing`.
pub fn constant_to_lower_camel(name: &str) -> String {
    let words: Vec<&str> = name.split('_').filter(|w| !w.is_empty()).collect();
    join_lower_camel(&words)
}
