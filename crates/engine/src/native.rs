//! Native function wrapper
//!
//! A [`NativeFunction`] is what the VM stores per registered name. It owns
//! a type-erased callback that unpacks [`Arguments`], calls the typed Rust
//! function and converts its result into a [`ReturnValue`].

use std::fmt;
use std::sync::Arc;

use crate::error::VmError;
use crate::value::{Argument, Arguments, ReturnValue};
use crate::vm::{StackId, TraceStack};

/// Type-erased native callback
pub type NativeCallback = dyn for<'s, 'a> Fn(&dyn TraceStack, StackId, Arguments<'s, 'a>) -> Result<ReturnValue, VmError>
    + Send
    + Sync;

/// A native function bound into the script VM
///
/// Cheap to clone; clones share the callback.
///
/// # Example
///
/// ```ignore
/// let function = NativeFunction::new(1, |vm, stack_id, args| {
///     let race = args.race(0)?;
///     Ok(get_race_mass(vm, stack_id, race.into()).into())
/// });
/// ```
#[derive(Clone)]
pub struct NativeFunction {
    param_count: usize,
    callback: Arc<NativeCallback>,
}

impl NativeFunction {
    /// Wrap a callback taking exactly `param_count` arguments
    pub fn new<F>(param_count: usize, callback: F) -> Self
    where
        F: for<'s, 'a> Fn(&dyn TraceStack, StackId, Arguments<'s, 'a>) -> Result<ReturnValue, VmError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            param_count,
            callback: Arc::new(callback),
        }
    }

    /// Number of script parameters
    pub fn param_count(&self) -> usize {
        self.param_count
    }

    /// Invoke the function with arguments from script
    ///
    /// The argument count is checked before the callback runs.
    pub fn invoke(
        &self,
        vm: &dyn TraceStack,
        stack_id: StackId,
        args: &[Argument<'_>],
    ) -> Result<ReturnValue, VmError> {
        if args.len() != self.param_count {
            return Err(VmError::ArgumentCount {
                expected: self.param_count,
                found: args.len(),
            });
        }
        (self.callback)(vm, stack_id, Arguments::new(args))
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("param_count", &self.param_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::TraceBuffer;

    #[test]
    fn test_invoke_passes_arguments() {
        let function = NativeFunction::new(1, |_, _, args| {
            let value = args.int(0)?;
            Ok((value * 2).into())
        });

        let vm = TraceBuffer::new();
        let result = function.invoke(&vm, 0, &[Argument::Int(21)]);
        assert_eq!(result, Ok(ReturnValue::Int(42)));
    }

    #[test]
    fn test_invoke_checks_arity() {
        let function = NativeFunction::new(2, |_, _, _| Ok(ReturnValue::None));

        let vm = TraceBuffer::new();
        let result = function.invoke(&vm, 0, &[Argument::None]);
        assert_eq!(
            result,
            Err(VmError::ArgumentCount {
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_clone_shares_callback() {
        let function = NativeFunction::new(0, |vm, stack_id, _| {
            vm.trace_stack("called", stack_id, crate::vm::Severity::Info);
            Ok(ReturnValue::None)
        });
        let cloned = function.clone();

        let vm = TraceBuffer::new();
        function.invoke(&vm, 1, &[]).unwrap();
        cloned.invoke(&vm, 2, &[]).unwrap();
        assert_eq!(vm.len(), 2);
        assert_eq!(cloned.param_count(), 0);
    }
}
