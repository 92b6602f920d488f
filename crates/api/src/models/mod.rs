pub mod closure;
pub mod instruction;
pub mod mapping;
pub mod method_ref;
pub mod program;

pub use closure::*;
pub use instruction::*;
pub use mapping::*;
pub use method_ref::*;
pub use program::*;
