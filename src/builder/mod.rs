//! Builder API for validated process graphs.
//!
//! Registrations are checked as they arrive (unique keys, known references,
//! deterministic routing). Connectivity is checked once, when a machine is
//! initialized, according to the builder's [`ValidationPolicy`].

pub mod error;
pub mod machine;
pub mod macros;
pub mod policy;

pub use error::BuildError;
pub use machine::ProcessBuilder;
pub use policy::ValidationPolicy;
