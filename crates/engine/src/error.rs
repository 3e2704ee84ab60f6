//! Error types for the script VM boundary

/// Error type for registration and native call marshaling
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VmError {
    /// The host did not supply a VM registration surface
    #[error("cannot get VM state")]
    Unavailable,

    /// A function with the same class and name is already registered
    #[error("Function already registered: {class}.{name}")]
    DuplicateFunction { class: String, name: String },

    /// No function registered under this class and name
    #[error("Function not found: {class}.{name}")]
    FunctionNotFound { class: String, name: String },

    /// Wrong number of arguments for a native call
    #[error("Expected {expected} argument(s), got {found}")]
    ArgumentCount { expected: usize, found: usize },

    /// Argument at `index` has the wrong script type
    #[error("Argument {index}: expected {expected}, got {found}")]
    ArgumentType {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}
