//! Actor value name resolution
//!
//! The mapping between actor value ids and their display names belongs to
//! the host's data model. Bindings receive it as a trait object.

use fire_sdk::ActorValue;

/// Converts actor values to and from their display names
pub trait ActorValueResolver: Send + Sync {
    /// Resolve a display name to an actor value
    ///
    /// Returns [`ActorValue::NONE`] for names the host does not know.
    fn lookup_id(&self, name: &str) -> ActorValue;

    /// Display name of an actor value
    ///
    /// Returns an empty string for ids the host does not know.
    fn lookup_name(&self, value: ActorValue) -> String;
}
