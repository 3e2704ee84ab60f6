//! Race handle
//!
//! Scripts pass races as object references that may be `None`. A
//! [`RaceHandle`] is the borrowed, possibly-empty form of that reference.
//! It never owns the record; the host engine does.
//!
//! Accessors must go through [`RaceHandle::resolve`], which reports an empty
//! handle to the calling stack before returning `None`.

use std::fmt;

use fire_engine::{Severity, StackId, TraceStack};
use fire_sdk::TESRace;

/// Message traced when a script passes an empty race
pub const EMPTY_RACE_MESSAGE: &str = "akRace cannot be None";

/// Borrowed, possibly-empty reference to a race record
#[derive(Clone, Copy, Default)]
pub struct RaceHandle<'a> {
    race: Option<&'a TESRace>,
}

impl<'a> RaceHandle<'a> {
    /// Handle to an existing race
    #[inline]
    pub const fn new(race: &'a TESRace) -> Self {
        Self { race: Some(race) }
    }

    /// Empty handle (script `None`)
    #[inline]
    pub const fn empty() -> Self {
        Self { race: None }
    }

    /// Check if the handle refers to a race
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.race.is_some()
    }

    /// Resolve the handle, tracing to the calling stack if it is empty
    ///
    /// Emits exactly one `Info` message per empty resolve.
    pub fn resolve(&self, vm: &dyn TraceStack, stack_id: StackId) -> Option<&'a TESRace> {
        if self.race.is_none() {
            vm.trace_stack(EMPTY_RACE_MESSAGE, stack_id, Severity::Info);
        }
        self.race
    }
}

impl<'a> From<&'a TESRace> for RaceHandle<'a> {
    fn from(race: &'a TESRace) -> Self {
        Self::new(race)
    }
}

impl<'a> From<Option<&'a TESRace>> for RaceHandle<'a> {
    fn from(race: Option<&'a TESRace>) -> Self {
        Self { race }
    }
}

impl fmt::Debug for RaceHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.race {
            Some(race) => write!(
                f,
                "RaceHandle({}, form_id={:08X})",
                race.editor_id, race.form_id
            ),
            None => write!(f, "RaceHandle(empty)"),
        }
    }
}

impl fmt::Display for RaceHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.race {
            Some(race) => write!(f, "{} [{:08X}]", race.editor_id, race.form_id),
            None => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use fire_engine::TraceBuffer;

    use super::*;

    fn nord() -> TESRace {
        TESRace::new(0x00013746, "NordRace", Default::default())
    }

    #[test]
    fn test_resolve_valid_handle() {
        let race = nord();
        let vm = TraceBuffer::new();

        let handle = RaceHandle::new(&race);
        assert!(handle.is_valid());
        assert_eq!(handle.resolve(&vm, 1).map(|r| r.form_id), Some(0x00013746));
        assert!(vm.is_empty());
    }

    #[test]
    fn test_resolve_empty_handle_traces_once() {
        let vm = TraceBuffer::new();

        let handle = RaceHandle::empty();
        assert!(!handle.is_valid());
        assert!(handle.resolve(&vm, 42).is_none());

        let entries = vm.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, EMPTY_RACE_MESSAGE);
        assert_eq!(entries[0].stack_id, 42);
        assert_eq!(entries[0].severity, Severity::Info);
    }

    #[test]
    fn test_from_option() {
        let race = nord();
        assert!(RaceHandle::from(Some(&race)).is_valid());
        assert!(!RaceHandle::from(None::<&TESRace>).is_valid());
        assert!(!RaceHandle::default().is_valid());
    }

    #[test]
    fn test_handle_display() {
        let race = nord();
        assert_eq!(format!("{}", RaceHandle::new(&race)), "NordRace [00013746]");
        assert_eq!(format!("{}", RaceHandle::empty()), "None");
    }

    #[test]
    fn test_handle_debug() {
        let race = nord();
        let debug = format!("{:?}", RaceHandle::new(&race));
        assert!(debug.contains("NordRace"));
        assert!(debug.contains("00013746"));
        assert_eq!(format!("{:?}", RaceHandle::empty()), "RaceHandle(empty)");
    }
}
