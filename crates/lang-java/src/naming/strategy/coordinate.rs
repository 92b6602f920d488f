//! Spatial coordinate conversions between granularities.

use super::Suggester;
use crate::naming::SuggestContext;
use crate::naming::text::{camel_words, capitalize_word};
use varscope_api::Instruction;

const BLOCK_POS: &str = "net/minecraft/core/BlockPos";
const SECTION_POS: &str = "net/minecraft/core/SectionPos";
const QUART_POS: &str = "net/minecraft/core/QuartPos";
const CHUNK_POS: &str = "net/minecraft/world/level/ChunkPos";

/// Owner, method and the granularity of the returned coordinate.
const CONVERSIONS: &[(&str, &str, &str)] = &[
    (SECTION_POS, "blockToSectionCoord", "section"),
    (SECTION_POS, "posToSectionCoord", "section"),
    (SECTION_POS, "sectionToBlockCoord", "block"),
    (QUART_POS, "fromBlock", "quart"),
    (QUART_POS, "fromSection", "quart"),
    (QUART_POS, "toBlock", "block"),
    (QUART_POS, "toSection", "section"),
];

/// Packing helpers with a fixed result name: owner, method, descriptor, name.
const PACKING: &[(&str, &str, &str, &str)] = &[
    (BLOCK_POS, "asLong", "()J", "packedPos"),
    (BLOCK_POS, "asLong", "(III)J", "packedPos"),
    (BLOCK_POS, "offset", "(JIII)J", "offsetPos"),
    (SECTION_POS, "asLong", "()J", "sectionKey"),
    (SECTION_POS, "asLong", "(III)J", "sectionKey"),
    (SECTION_POS, "offset", "(JIII)J", "offsetSection"),
    (CHUNK_POS, "toLong", "()J", "chunkKey"),
    (CHUNK_POS, "asLong", "(II)J", "chunkKey"),
];

/// `SectionPos.blockToSectionCoord(minX)` suggests `sectionMinX`;
/// without an axis hint, `sectionCoord`.
pub struct CoordinateSuggester;

impl Suggester for CoordinateSuggester {
    fn suggest(&self, ctx: &SuggestContext) -> Option<String> {
        let call = ctx.invoke()?;

        if let Some((_, _, _, name)) = PACKING.iter().find(|(owner, method, desc, _)| {
            *owner == call.owner && *method == call.name && *desc == call.descriptor
        }) {
            return Some(name.to_string());
        }

        let (_, _, granularity) = CONVERSIONS
            .iter()
            .find(|(owner, method, _)| *owner == call.owner && *method == call.name)?;

        let hint = ctx
            .last_argument()
            .and_then(|arg| argument_name(&arg))
            .and_then(|name| axis_hint(&name));
        Some(match hint {
            Some(AxisHint { bound, axis }) => format!("{granularity}{bound}{axis}"),
            None => format!("{granularity}Coord"),
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
struct AxisHint {
    /// `Min`, `Max` or empty.
    bound: String,
    /// `X`, `Y` or `Z`.
    axis: String,
}

fn argument_name(arg: &SuggestContext) -> Option<String> {
    match arg.instruction()? {
        Instruction::Load { .. } => arg.loaded_name(),
        Instruction::Invoke { name, .. } | Instruction::Field { name, .. } => Some(name.clone()),
        _ => None,
    }
}

fn axis_hint(name: &str) -> Option<AxisHint> {
    let mut words = camel_words(name);
    if words.first().is_some_and(|w| w == "get") {
        words.remove(0);
    }
    let axis = words.last().map(|w| w.to_lowercase())?;
    if !matches!(axis.as_str(), "x" | "y" | "z") {
        return None;
    }
    let bound = match words.first().map(|w| w.to_lowercase()).as_deref() {
        Some(b @ ("min" | "max")) if words.len() > 1 => capitalize_word(b),
        _ => String::new(),
    };
    Some(AxisHint {
        bound,
        axis: axis.to_uppercase(),
    })
}
