//! State property lookups keyed by a static property constant.

use super::Suggester;
use crate::naming::SuggestContext;
use crate::naming::text::{constant_to_lower_camel, is_upper_constant};

/// Accessor owner, accessor name and the suffix appended to the property name.
const PROPERTY_ACCESSORS: &[(&str, &str, &str)] = &[
    ("net/minecraft/world/level/block/state/StateHolder", "getValue", ""),
    ("net/minecraft/world/level/block/state/BlockState", "getValue", ""),
    (
        "net/minecraft/world/level/block/state/BlockBehaviour$BlockStateBase",
        "getValue",
        "",
    ),
    ("net/minecraft/world/level/material/FluidState", "getValue", ""),
    ("net/minecraft/world/level/block/state/StateHolder", "getOptionalValue", "Opt"),
    ("net/minecraft/world/level/block/state/BlockState", "getOptionalValue", "Opt"),
];

const PROPERTY_TYPES: &[&str] = &[
    "Lnet/minecraft/world/level/block/state/properties/Property;",
    "Lnet/minecraft/world/level/block/state/properties/BooleanProperty;",
    "Lnet/minecraft/world/level/block/state/properties/IntegerProperty;",
    "Lnet/minecraft/world/level/block/state/properties/EnumProperty;",
    "Lnet/minecraft/world/level/block/state/properties/DirectionProperty;",
];

/// `state.getValue(FACING)` suggests `facing`.
pub struct PropertyValueSuggester;

impl Suggester for PropertyValueSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;
        let (_, _, suffix) = PROPERTY_ACCESSORS
            .iter()
            .find(|(owner, name, _)| *owner == call.owner && *name == call.name)?;

        let argument = ctx.last_argument()?;
        let field = argument.field()?;
        if !field.is_static || !field.is_read() || !PROPERTY_TYPES.contains(&field.descriptor) {
            return None;
        }

        let base = if is_upper_constant(field.name) {
            constant_to_lower_camel(field.name)
        } else {
            field.name.to_string()
        };
        Some(format!("{base}{suffix}"))
    }
}
