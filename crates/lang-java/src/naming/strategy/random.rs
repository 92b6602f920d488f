//! Random number draws.

use super::Suggester;
use crate::naming::SuggestContext;
use varscope_core::descriptor::{JavaType, Primitive};

const RANDOM_TYPES: &[&str] = &[
    "java/util/Random",
    "java/util/SplittableRandom",
    "java/util/random/RandomGenerator",
    "java/util/concurrent/ThreadLocalRandom",
    "java/security/SecureRandom",
    "net/minecraft/util/RandomSource",
    "net/minecraft/world/level/levelgen/LegacyRandomSource",
    "net/minecraft/world/level/levelgen/XoroshiroRandomSource",
];

/// Static helpers that draw from a random source passed as first argument.
const SOURCE_TAKING_OWNERS: &[&str] = &["net/minecraft/util/Mth"];

/// `random.nextInt(10)` suggests `randomInt`.
pub struct RandomSuggester;

impl Suggester for RandomSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;
        let word = call.name.strip_prefix("next").filter(|w| !w.is_empty())?;
        let signature = ctx.invoke_signature()?;
        let primitive = signature.return_type.as_ref()?.as_primitive()?;

        let is_random_owner = if SOURCE_TAKING_OWNERS.contains(&call.owner) {
            matches!(
                signature.parameters.first(),
                Some(JavaType::Object(name)) if RANDOM_TYPES.contains(&name.as_str())
            )
        } else {
            ctx.program
                .supertypes(call.owner)
                .iter()
                .any(|ty| RANDOM_TYPES.contains(&ty.as_str()))
        };
        if !is_random_owner || !expected_words(primitive).contains(&word) {
            return None;
        }
        Some(format!("random{word}"))
    }
}

fn expected_words(primitive: Primitive) -> &'static [&'static str] {
    match primitive {
        Primitive::Int => &["Int", "Integer"],
        Primitive::Long => &["Long"],
        Primitive::Float => &["Float"],
        Primitive::Double => &["Double", "Gaussian"],
        Primitive::Boolean => &["Bool", "Boolean"],
        Primitive::Byte | Primitive::Char | Primitive::Short => &[],
    }
}
