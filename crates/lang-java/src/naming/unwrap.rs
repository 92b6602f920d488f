//! Finds the instruction that really produced a stored value.
//!
//! Walks backwards past casts and boxing conversions so that
//! `Integer x = (Integer) Integer.valueOf(foo.getCount())` is attributed to
//! `getCount`.

use varscope_api::Instruction;
use varscope_core::descriptor::Primitive;
use varscope_core::program::MethodDecl;

/// Producer of the value consumed by the instruction at `consumer`.
pub fn producer_before(method: &MethodDecl, consumer: usize) -> Option<usize> {
    method
        .previous_instruction(consumer)
        .and_then(|idx| unwrap_producer(method, idx))
}

/// Starting at `index`, skip conversions and return the call, field read or
/// load they wrap.
pub fn unwrap_producer(method: &MethodDecl, index: usize) -> Option<usize> {
    let mut current = index;
    loop {
        let insn = method.instructions.get(current)?;
        let transparent = match insn {
            Instruction::Label { .. } | Instruction::Line { .. } | Instruction::Cast { .. } => true,
            Instruction::Invoke { .. } => is_boxing_conversion(insn),
            Instruction::Load { .. } => return Some(current),
            Instruction::Field { .. } => {
                return insn.as_field().filter(|f| f.is_read()).map(|_| current);
            }
            _ => return None,
        };
        if !transparent {
            return Some(current);
        }
        current = method.previous_instruction(current)?;
    }
}

/// `Integer.valueOf(int)` style boxing or `Integer.intValue()` style unboxing.
pub fn is_boxing_conversion(insn: &Instruction) -> bool {
    let Some(call) = insn.as_invoke() else {
        return false;
    };
    let boxed = Primitive::from_box_class(call.owner);
    if call.is_static() {
        // valueOf(<prim>)L<owner>;
        return boxed.is_some_and(|p| {
            call.name == "valueOf"
                && call.descriptor == format!("({})L{};", p.descriptor_char(), call.owner)
        });
    }
    let numeric_owner = boxed.is_some() || call.owner == "java/lang/Number";
    numeric_owner
        && call.name.ends_with("Value")
        && call.descriptor.len() == 3
        && call.descriptor.starts_with("()")
        && UNBOXING_NAMES.contains(&call.name)
}

pub const UNBOXING_NAMES: &[&str] = &[
    "booleanValue",
    "byteValue",
    "charValue",
    "shortValue",
    "intValue",
    "longValue",
    "floatValue",
    "doubleValue",
];
