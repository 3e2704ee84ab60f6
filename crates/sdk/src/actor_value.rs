//! Actor value identifiers
//!
//! The engine enumerates every character statistic (skills, resources,
//! derived stats) as an integer id. This crate never defines the
//! enumeration itself; names are resolved by the host.

use std::fmt;

/// Identifier of a character statistic
///
/// A thin wrapper over the engine's raw id. Conversion to and from display
/// names is provided by an `ActorValueResolver` on the engine side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ActorValue(i32);

impl ActorValue {
    /// Sentinel for "no actor value" (unresolved name or empty slot)
    pub const NONE: Self = Self(-1);

    /// Create from a raw engine id
    #[inline]
    pub const fn from_raw(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw engine id
    #[inline]
    pub const fn raw(&self) -> i32 {
        self.0
    }

    /// Check if this is the `NONE` sentinel
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.0 < 0
    }
}

impl Default for ActorValue {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<i32> for ActorValue {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ActorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
