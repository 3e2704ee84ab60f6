//! Function registry - registration and dispatch
//!
//! [`FunctionRegistry`] is an in-process implementation of the VM's
//! [`RegisterFunction`] surface. It stores every bound native function under
//! its (class, name) pair and dispatches script calls to it. Script
//! identifiers are case-insensitive, so lookups are too.
//!
//! # Example
//!
//! ```ignore
//! use fire_core::registry::FunctionRegistry;
//!
//! let mut registry = FunctionRegistry::new();
//! fire_core::papyrus::race::register_funcs(Some(&mut registry), "FIRE", resolver);
//!
//! let mass = registry.call("FIRE", "GetRaceMass", &vm, stack_id, &[Argument::Race(&race)])?;
//! ```

use std::collections::HashMap;

use slotmap::{new_key_type, SlotMap};

use fire_engine::{
    Argument, FunctionFlags, NativeFunction, RegisterFunction, ReturnValue, StackId, TraceStack,
    VmError,
};

new_key_type! {
    /// Handle for a registered function
    pub struct FunctionKey;
}

/// Registered function information
struct FunctionEntry {
    /// Script class as registered (e.g., "FIRE")
    class_name: String,
    /// Function name as registered (e.g., "GetRaceMass")
    name: String,
    /// Bound native function
    function: NativeFunction,
    /// Registration flags
    flags: FunctionFlags,
}

/// Lookup key: lowercase class and function name
type NameKey = (String, String);

fn name_key(class_name: &str, name: &str) -> NameKey {
    (class_name.to_lowercase(), name.to_lowercase())
}

/// Registry of native functions bound into the script VM
#[derive(Default)]
pub struct FunctionRegistry {
    /// Functions indexed by key
    functions: SlotMap<FunctionKey, FunctionEntry>,

    /// Lookup by (class, name), case-insensitive
    by_name: HashMap<NameKey, FunctionKey>,

    /// Keys in registration order
    order: Vec<FunctionKey>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function
    ///
    /// Fails if a function with the same class and name (ignoring case) is
    /// already registered.
    pub fn register(
        &mut self,
        class_name: &str,
        name: &str,
        function: NativeFunction,
        flags: FunctionFlags,
    ) -> Result<FunctionKey, VmError> {
        let key = name_key(class_name, name);

        if self.by_name.contains_key(&key) {
            return Err(VmError::DuplicateFunction {
                class: class_name.to_string(),
                name: name.to_string(),
            });
        }

        let entry = FunctionEntry {
            class_name: class_name.to_string(),
            name: name.to_string(),
            function,
            flags,
        };

        let function_key = self.functions.insert(entry);
        self.by_name.insert(key, function_key);
        self.order.push(function_key);

        tracing::debug!("Registered function: {}.{}", class_name, name);
        Ok(function_key)
    }

    /// Unregister a function by key
    pub fn unregister(&mut self, key: FunctionKey) -> bool {
        if let Some(entry) = self.functions.remove(key) {
            self.by_name
                .remove(&name_key(&entry.class_name, &entry.name));
            self.order.retain(|k| *k != key);
            tracing::debug!("Unregistered function: {}.{}", entry.class_name, entry.name);
            true
        } else {
            false
        }
    }

    /// Find a function by class and name
    pub fn find(&self, class_name: &str, name: &str) -> Option<FunctionKey> {
        self.by_name.get(&name_key(class_name, name)).copied()
    }

    /// Check if a function is registered
    pub fn contains(&self, class_name: &str, name: &str) -> bool {
        self.find(class_name, name).is_some()
    }

    /// Get the bound native function
    pub fn function(&self, key: FunctionKey) -> Option<&NativeFunction> {
        self.functions.get(key).map(|e| &e.function)
    }

    /// Get registration flags
    pub fn flags(&self, key: FunctionKey) -> Option<FunctionFlags> {
        self.functions.get(key).map(|e| e.flags)
    }

    /// Dispatch a script call
    pub fn call(
        &self,
        class_name: &str,
        name: &str,
        vm: &dyn TraceStack,
        stack_id: StackId,
        args: &[Argument<'_>],
    ) -> Result<ReturnValue, VmError> {
        let entry = self
            .find(class_name, name)
            .and_then(|key| self.functions.get(key))
            .ok_or_else(|| VmError::FunctionNotFound {
                class: class_name.to_string(),
                name: name.to_string(),
            })?;

        entry.function.invoke(vm, stack_id, args)
    }

    /// Iterate over registered functions as (key, class, name), in
    /// registration order
    pub fn iter(&self) -> impl Iterator<Item = (FunctionKey, &str, &str)> {
        self.order.iter().filter_map(|key| {
            self.functions
                .get(*key)
                .map(|e| (*key, e.class_name.as_str(), e.name.as_str()))
        })
    }

    /// Get total number of registered functions
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if no functions are registered
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl RegisterFunction for FunctionRegistry {
    fn register_function(
        &mut self,
        name: &str,
        class_name: &str,
        function: NativeFunction,
        flags: FunctionFlags,
    ) -> bool {
        match self.register(class_name, name, function, flags) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        }
    }
}
