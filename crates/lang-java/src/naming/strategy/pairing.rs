//! Paired `min`/`max` calls on one source line.

use super::Suggester;
use crate::naming::SuggestContext;
use crate::naming::context::Direction;
use crate::naming::text::{capitalize, to_lower_camel};

/// `for (int y = level.getMinBuildHeight(); y < level.getMaxBuildHeight(); y++)`
/// names the bounds `minBuildHeight` and `maxBuildHeight`.
pub struct MinMaxPairingSuggester;

impl Suggester for MinMaxPairingSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;
        let (bound, rest) = split_bound(call.name)?;

        let partner = [Direction::Forward, Direction::Backward]
            .into_iter()
            .filter_map(|direction| ctx.neighbour_call(direction))
            .find_map(|other| {
                let other = other.invoke()?;
                split_bound(other.name).filter(|(b, _)| *b != bound)
            });
        let (_, partner_rest) = partner?;

        // Both sides take the suffix of the `min` call.
        let suffix = if bound == Bound::Min { rest } else { partner_rest };
        Some(to_lower_camel(&format!("{}{suffix}", bound.word())))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
}

impl Bound {
    fn word(self) -> &'static str {
        match self {
            Bound::Min => "Min",
            Bound::Max => "Max",
        }
    }
}

/// `getMinBuildHeight` -> (`Min`, `BuildHeight`); `max` -> (`Max`, ``).
fn split_bound(name: &str) -> Option<(Bound, &str)> {
    let name = name
        .strip_prefix("get")
        .filter(|rest| rest.starts_with(|c: char| c.is_uppercase()))
        .unwrap_or(name);
    let (bound, rest) = if let Some(rest) = strip_word(name, "min") {
        (Bound::Min, rest)
    } else if let Some(rest) = strip_word(name, "max") {
        (Bound::Max, rest)
    } else {
        return None;
    };
    if rest.is_empty() || rest.starts_with(|c: char| c.is_uppercase()) {
        Some((bound, rest))
    } else {
        None
    }
}

fn strip_word<'a>(name: &'a str, word: &str) -> Option<&'a str> {
    name.strip_prefix(word)
        .or_else(|| name.strip_prefix(capitalize(word).as_str()))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use varscope_api::Instruction;

    #[test]
    fn test_split_bound() {
        assert_eq!(split_bound("getMinBuildHeight"), Some((Bound::Min, "BuildHeight")));
        assert_eq!(split_bound("maxY"), Some((Bound::Max, "Y")));
        assert_eq!(split_bound("min"), Some((Bound::Min, "")));
        assert_eq!(split_bound("minute"), None);
        assert_eq!(split_bound("getX"), None);
    }

    #[test]
    fn test_pair_on_same_line() {
        let program = host(
            vec![
                Instruction::Line { line: 10 },
                Instruction::Load { slot: 0 },
                virtual_call("a/Level", "getMinBuildHeight", "()I"),
                Instruction::Store { slot: 1 },
                Instruction::Load { slot: 0 },
                virtual_call("a/Level", "getMaxBuildHeight", "()I"),
                Instruction::Store { slot: 2 },
                Instruction::Line { line: 11 },
                virtual_call("a/Level", "getMinY", "()I"),
            ],
            vec![],
        );
        let method = program.methods().next().unwrap().decl();
        let at = |i| MinMaxPairingSuggester.suggest(&SuggestContext::new(&program, method, i));
        assert_eq!(at(2).as_deref(), Some("minBuildHeight"));
        assert_eq!(at(5).as_deref(), Some("maxBuildHeight"));
        assert_eq!(at(8), None);
    }

    #[test]
    fn test_bare_min_max_share_empty_suffix() {
        let program = host(
            vec![
                Instruction::Line { line: 3 },
                static_call("java/lang/Math", "min", "(II)I"),
                static_call("java/lang/Math", "max", "(II)I"),
            ],
            vec![],
        );
        let method = program.methods().next().unwrap().decl();
        let at = |i| MinMaxPairingSuggester.suggest(&SuggestContext::new(&program, method, i));
        assert_eq!(at(1).as_deref(), Some("min"));
        assert_eq!(at(2).as_deref(), Some("max"));
    }
}
