//! Host VM surfaces
//!
//! The host script VM is not implemented here. Native code talks to it
//! through two narrow traits:
//!
//! - [`TraceStack`] - diagnostic channel, scoped to the calling script stack
//! - [`RegisterFunction`] - binds a native function to a script-visible name

use bitflags::bitflags;

use crate::native::NativeFunction;

/// Identifier of the script stack that issued a native call
pub type StackId = u32;

/// Severity of a stack trace message
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info = 0,
    Warning = 1,
    Error = 2,
    Fatal = 3,
}

impl Default for Severity {
    fn default() -> Self {
        Self::Info
    }
}

bitflags! {
    /// Flags recorded with each registered native function
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FunctionFlags: u32 {
        /// Function may run without waiting for the VM frame sync
        const NO_WAIT = 0x01;
        /// Function completes asynchronously
        const LATENT = 0x02;
    }
}

/// Diagnostic channel of the host VM
///
/// Messages appear in the script log attached to the calling stack.
pub trait TraceStack {
    fn trace_stack(&self, message: &str, stack_id: StackId, severity: Severity);
}

/// Function registration surface of the host VM
pub trait RegisterFunction {
    /// Bind `function` to `class_name.name`
    ///
    /// Returns false if the host rejected the binding.
    fn register_function(
        &mut self,
        name: &str,
        class_name: &str,
        function: NativeFunction,
        flags: FunctionFlags,
    ) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Error < Severity::Fatal);
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_function_flags() {
        let flags = FunctionFlags::NO_WAIT;
        assert!(flags.contains(FunctionFlags::NO_WAIT));
        assert!(!flags.contains(FunctionFlags::LATENT));
        assert!(FunctionFlags::default().is_empty());
    }
}
