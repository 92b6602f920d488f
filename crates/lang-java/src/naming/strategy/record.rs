//! Record component accessors.

use super::Suggester;
use crate::naming::SuggestContext;

/// `point.x()` on a record `Point(int x, int y)` suggests `x`.
pub struct RecordComponentSuggester;

impl Suggester for RecordComponentSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;
        if call.is_static() || !call.descriptor.starts_with("()") {
            return None;
        }
        let owner = ctx.program.class_by_name(call.owner)?;
        owner
            .has_record_component(call.name)
            .then(|| call.name.to_string())
    }
}
