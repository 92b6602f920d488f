//! Combinator implementations for Suggester.

use super::Suggester;
use crate::naming::SuggestContext;

/// Or-else combinator: try first, then second if first returns None.
pub struct OrElse<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrElse<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Suggester, B: Suggester> Suggester for OrElse<A, B> {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        self.first
            .suggest(ctx)
            .or_else(|| self.second.suggest(ctx))
    }
}

impl Suggester for Box<dyn Suggester> {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        self.as_ref().suggest(ctx)
    }
}
