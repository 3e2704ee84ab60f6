//! Plugin version constants
//!
//! Kept in sync with the workspace package version.

/// Project name, also the default script class for registered functions
pub const PROJECT_NAME: &str = "FIRE";

pub const VERSION_MAJOR: u32 = 1;
pub const VERSION_MINOR: u32 = 0;
pub const VERSION_PATCH: u32 = 3;
pub const VERSION_BETA: u32 = 0;

/// Dotted version string (major.minor.patch.beta)
pub const VERSION_STRING: &str = "1.0.3.0";
