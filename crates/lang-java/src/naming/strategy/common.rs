//! Catch-all vocabulary for frequent method names.

use super::Suggester;
use crate::naming::SuggestContext;

const COMMON_NAMES: &[(&str, &str)] = &[
    ("hashCode", "hashCode"),
    ("size", "size"),
    ("length", "len"),
    ("ordinal", "ordinal"),
    ("count", "count"),
    ("name", "name"),
    ("iterator", "iterator"),
    ("stream", "stream"),
    ("keySet", "keys"),
    ("values", "values"),
    ("entrySet", "entries"),
    ("toArray", "array"),
    ("copy", "copy"),
    ("clone", "copy"),
];

/// `list.size()` suggests `size`, `text.length()` suggests `len`.
pub struct CommonNamesSuggester;

impl Suggester for CommonNamesSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;
        COMMON_NAMES
            .iter()
            .find(|(method, _)| *method == call.name)
            .map(|(_, name)| name.to_string())
    }
}
