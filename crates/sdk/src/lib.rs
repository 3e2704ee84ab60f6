//! FIRE SDK - Game Record Type Definitions
//!
//! This crate contains the plain data types shared by the engine boundary
//! and the script bindings. It has no dependencies and compiles quickly,
//! allowing parallel compilation of dependent crates.
//!
//! # Modules
//!
//! - [`actor_value`] - Opaque actor value identifiers
//! - [`race`] - Race record layout
//! - [`version`] - Plugin version constants

pub mod actor_value;
pub mod race;
pub mod version;

pub use actor_value::ActorValue;
pub use race::{RaceData, Sex, SkillBoost, TESRace};
pub use version::{
    PROJECT_NAME, VERSION_BETA, VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH, VERSION_STRING,
};
