// File: waypost/src/error.rs
// Purpose: Errors raised by router consumers

/// Errors raised by consumers of router state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// A consumer looked for a router in a scope tree that never provided one.
    #[error("Could not find router context for {consumer}. Make sure the router is provided in the component tree.")]
    MissingContext { consumer: &'static str },
}

pub type Result<T, E = RouterError> = std::result::Result<T, E>;
