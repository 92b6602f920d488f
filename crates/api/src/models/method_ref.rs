use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the owning class and the method name.
pub const MEMBER_SEPARATOR: char = '.';

/// Stable identity of a method declaration: owning class, name and descriptor.
///
/// The textual form is `owner.name(descriptor)`, e.g.
/// `net/minecraft/world/Level.getBlockState(Lnet/minecraft/core/BlockPos;)Lnet/minecraft/world/level/block/state/BlockState;`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodRef {
    /// Internal name of the owning class (`a/b/C`).
    pub owner: String,
    pub name: String,
    pub descriptor: String,
}

impl MethodRef {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }

    /// Package part of the owner's internal name, empty for the default package.
    pub fn package(&self) -> &str {
        package_of(&self.owner)
    }
}

/// Package part of an internal class name (`a/b/C` -> `a/b`).
pub fn package_of(internal_name: &str) -> &str {
    internal_name
        .rfind('/')
        .map(|pos| &internal_name[..pos])
        .unwrap_or("")
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.owner, MEMBER_SEPARATOR, self.name, self.descriptor
        )
    }
}

impl FromStr for MethodRef {
    type Err = ApiError;

    fn from_str(s: &str) -> ApiResult<Self> {
        let paren = s
            .find('(')
            .ok_or_else(|| ApiError::InvalidMethodRef(s.to_string()))?;
        let (head, descriptor) = s.split_at(paren);
        let dot = head
            .rfind(MEMBER_SEPARATOR)
            .ok_or_else(|| ApiError::InvalidMethodRef(s.to_string()))?;
        let (owner, name) = (&head[..dot], &head[dot + 1..]);
        if owner.is_empty() || name.is_empty() {
            return Err(ApiError::InvalidMethodRef(s.to_string()));
        }
        Ok(Self::new(owner, name, descriptor))
    }
}
