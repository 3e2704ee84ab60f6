//! Script bindings
//!
//! Each submodule exposes one record kind to scripts and builds a
//! [`RegistrationTable`] of its native functions. The table is built locally
//! and handed to the host VM once during load.
//!
//! # Architecture
//!
//! ```text
//! load() → race::register_funcs(vm) → RegistrationTable → RegisterFunction::register_function
//! ```

pub mod race;

use fire_engine::{FunctionFlags, NativeFunction, RegisterFunction, VmError};

/// A native function waiting to be registered
#[derive(Debug, Clone)]
pub struct RegistrationEntry {
    /// Script-visible function name
    pub name: &'static str,
    pub function: NativeFunction,
    pub flags: FunctionFlags,
}

/// Ordered set of native functions for one script class
///
/// Registration happens in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RegistrationTable {
    entries: Vec<RegistrationEntry>,
}

impl RegistrationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a function registered with [`FunctionFlags::NO_WAIT`]
    pub fn add(&mut self, name: &'static str, function: NativeFunction) -> &mut Self {
        self.add_with_flags(name, function, FunctionFlags::NO_WAIT)
    }

    /// Add a function with explicit flags
    pub fn add_with_flags(
        &mut self,
        name: &'static str,
        function: NativeFunction,
        flags: FunctionFlags,
    ) -> &mut Self {
        self.entries.push(RegistrationEntry {
            name,
            function,
            flags,
        });
        self
    }

    /// Function names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistrationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand every function to the VM under `class_name`
    ///
    /// Returns the number of functions the VM accepted. Fails only when no
    /// VM is available, in which case nothing is registered.
    pub fn register(
        &self,
        vm: Option<&mut dyn RegisterFunction>,
        class_name: &str,
    ) -> Result<usize, VmError> {
        let vm = vm.ok_or(VmError::Unavailable)?;

        let mut accepted = 0;
        for entry in &self.entries {
            if vm.register_function(entry.name, class_name, entry.function.clone(), entry.flags) {
                accepted += 1;
            } else {
                tracing::warn!("VM rejected function {}.{}", class_name, entry.name);
            }
        }

        Ok(accepted)
    }
}
