//! Name suggestion strategies using combinator pattern.
//!
//! Each suggester implements [`Suggester`] and can be combined using
//! `or_else()`. The first suggester to return a name wins.

mod boolean;
mod combinator;
mod common;
mod coordinate;
mod field;
mod getter;
mod math;
mod pairing;
mod property;
mod random;
mod record;
mod string;

pub use boolean::{BooleanVerbSuggester, SingleArgBooleanSuggester};
pub use combinator::OrElse;
pub use common::CommonNamesSuggester;
pub use coordinate::CoordinateSuggester;
pub use field::FieldReadSuggester;
pub use getter::{FluentGetterSuggester, GetterShapeSuggester};
pub use math::MathSuggester;
pub use pairing::MinMaxPairingSuggester;
pub use property::PropertyValueSuggester;
pub use random::RandomSuggester;
pub use record::RecordComponentSuggester;
pub use string::StringSuggester;

use crate::naming::SuggestContext;

/// A name suggestion strategy.
///
/// Suggesters are stateless with respect to naming decisions: they look at
/// the producing instruction and its surroundings, never at the scope.
pub trait Suggester: Sync + Send {
    /// Candidate name for the value produced at `ctx.index`, or `None` if
    /// this suggester doesn't recognise the pattern.
    fn suggest(&self, ctx: &SuggestContext) -> Option<String>;

    /// Combine with another suggester using "or" logic.
    ///
    /// If `self` returns `None`, try `other`.
    fn or_else<S: Suggester>(self, other: S) -> OrElse<Self, S>
    where
        Self: Sized,
    {
        OrElse::new(self, other)
    }
}

/// Build the default suggestion chain.
///
/// Owner-specific tables run before generic name shapes, which run before
/// the catch-all vocabulary.
pub fn build_suggestion_chain() -> impl Suggester {
    RecordComponentSuggester
        .or_else(PropertyValueSuggester)
        .or_else(CoordinateSuggester)
        .or_else(MathSuggester)
        .or_else(RandomSuggester)
        .or_else(StringSuggester)
        .or_else(MinMaxPairingSuggester)
        .or_else(SingleArgBooleanSuggester)
        .or_else(BooleanVerbSuggester)
        .or_else(FluentGetterSuggester)
        .or_else(GetterShapeSuggester)
        .or_else(FieldReadSuggester)
        .or_else(CommonNamesSuggester)
}
