//! FIRE - Core Logic
//!
//! This crate contains the script bindings and the load/shutdown logic of
//! the plugin.
//!
//! # Re-exports
//!
//! This crate re-exports the SDK and engine crates for convenience:
//! - [`sdk`] - Race record and actor value types
//! - [`engine`] - Script VM boundary
//!
//! # Loading
//!
//! ```ignore
//! let config = CoreConfig::load().unwrap_or_default();
//! fire_core::logging::init(&config);
//!
//! if !fire_core::load(Some(vm), resolver, &config) {
//!     // host decides whether to continue without script functions
//! }
//! ```

use std::sync::Arc;

use tracing::info;

// Re-export SDK and engine crates
pub use fire_engine as engine;
pub use fire_sdk as sdk;

pub mod actor_values;
pub mod config;
pub mod handle;
pub mod logging;
pub mod papyrus;
pub mod registry;

// Re-export commonly used items
pub use actor_values::ActorValueTable;
pub use config::{ConfigError, ConfigResult, CoreConfig};
pub use handle::RaceHandle;
pub use papyrus::{RegistrationEntry, RegistrationTable};
pub use registry::{FunctionKey, FunctionRegistry};

use fire_engine::{ActorValueResolver, RegisterFunction};
use fire_sdk::{PROJECT_NAME, VERSION_STRING};

/// Load the plugin
///
/// Registers all script functions with the VM under
/// [`CoreConfig::script_class`]. Returns false if the VM was not available.
pub fn load(
    vm: Option<&mut dyn RegisterFunction>,
    resolver: Arc<dyn ActorValueResolver>,
    config: &CoreConfig,
) -> bool {
    info!("{} v{} loading...", PROJECT_NAME, VERSION_STRING);

    let registered = papyrus::race::register_funcs(vm, &config.script_class, resolver);
    if registered {
        info!("{} loaded", PROJECT_NAME);
    }
    registered
}

/// Shutdown the plugin
///
/// Called by the host when the plugin is unloaded.
pub fn shutdown() {
    info!("{} shutting down...", PROJECT_NAME);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Arc<dyn ActorValueResolver> {
        Arc::new(ActorValueTable::new())
    }

    #[test]
    fn test_load_registers_under_configured_class() {
        let config = CoreConfig {
            script_class: "RaceUtil".to_string(),
            ..Default::default()
        };
        let mut registry = FunctionRegistry::new();

        assert!(load(Some(&mut registry), resolver(), &config));
        assert!(registry.contains("RaceUtil", "GetRaceMass"));
        assert!(!registry.contains("FIRE", "GetRaceMass"));
    }

    #[test]
    fn test_load_without_vm() {
        assert!(!load(None, resolver(), &CoreConfig::default()));
    }

    #[test]
    fn test_shutdown() {
        shutdown();
    }
}
