//! Numeric utility classes with fixed result names.

use super::Suggester;
use crate::naming::SuggestContext;

const MATH_OWNERS: &[&str] = &["java/lang/Math", "java/lang/StrictMath"];
const MTH: &str = "net/minecraft/util/Mth";

const MATH_NAMES: &[(&str, &str)] = &[
    ("sqrt", "squareRoot"),
    ("cbrt", "cubeRoot"),
    ("round", "rounded"),
    ("floor", "floored"),
    ("ceil", "ceiled"),
    ("abs", "absolute"),
    ("pow", "power"),
    ("hypot", "hypotenuse"),
    ("signum", "sign"),
    ("atan2", "angle"),
    ("sin", "sine"),
    ("cos", "cosine"),
    ("tan", "tangent"),
    ("exp", "exponential"),
    ("log", "logarithm"),
    ("log10", "logarithm"),
    ("toRadians", "radians"),
    ("toDegrees", "degrees"),
    ("floorDiv", "quotient"),
    ("floorMod", "modulo"),
];

const MTH_NAMES: &[(&str, &str)] = &[
    ("sqrt", "squareRoot"),
    ("fastInvSqrt", "invSqrt"),
    ("floor", "floored"),
    ("lfloor", "floored"),
    ("ceil", "ceiled"),
    ("lceil", "ceiled"),
    ("abs", "absolute"),
    ("clamp", "clamped"),
    ("clampedLerp", "lerped"),
    ("lerp", "lerped"),
    ("frac", "fraction"),
    ("square", "squared"),
    ("wrapDegrees", "wrappedDegrees"),
    ("positiveModulo", "modulo"),
    ("smoothstep", "smoothed"),
    ("sin", "sine"),
    ("cos", "cosine"),
    ("atan2", "angle"),
    ("length", "length"),
    ("lengthSquared", "lengthSquared"),
];

/// `Math.sqrt(d)` suggests `squareRoot`.
pub struct MathSuggester;

impl Suggester for MathSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;
        let table = if MATH_OWNERS.contains(&call.owner) {
            MATH_NAMES
        } else if call.owner == MTH {
            MTH_NAMES
        } else {
            return None;
        };
        table
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
    fn test_math_tables() {
        let program = host(
            vec![
                static_call("java/lang/Math", "sqrt", "(D)D"),
                static_call("java/lang/StrictMath", "round", "(F)I"),
                static_call(MTH, "clamp", "(III)I"),
                static_call("java/lang/Math", "max", "(II)I"),
                static_call("a/Util", "sqrt", "(D)D"),
            ],
            vec![],
        );
        let method = program.methods().next().unwrap().decl();
        let at = |i| MathSuggester.suggest(&SuggestContext::new(&program, method, i));
        assert_eq!(at(0).as_deref(), Some("squareRoot"));
        assert_eq!(at(1).as_deref(), Some("rounded"));
        assert_eq!(at(2).as_deref(), Some("clamped"));
        assert_eq!(at(3), None);
        assert_eq!(at(4), None);
    }
}
