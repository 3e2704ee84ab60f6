//! FIRE Engine - Script VM Boundary
//!
//! This crate handles:
//! - The two surfaces the host script VM exposes to native code: the stack
//!   trace channel ([`TraceStack`]) and function registration
//!   ([`RegisterFunction`])
//! - Marshaling script values in and out of native functions
//! - Name resolution for actor values ([`ActorValueResolver`])
//!
//! # Architecture
//!
//! ```text
//! script call → VM → NativeFunction wrapper → typed accessor → ReturnValue → VM
//! ```
//!
//! The VM itself lives in the host. Everything here is either a trait the
//! host implements or a value type that crosses the boundary.

pub mod actor_value;
pub mod error;
pub mod native;
pub mod trace;
pub mod value;
pub mod vm;

pub use actor_value::ActorValueResolver;
pub use error::VmError;
pub use native::NativeFunction;
pub use trace::{TraceBuffer, TraceEntry, TracingStack};
pub use value::{Argument, Arguments, ReturnValue};
pub use vm::{FunctionFlags, RegisterFunction, Severity, StackId, TraceStack};
