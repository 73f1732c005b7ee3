//! State and event identifiers.
//!
//! States and events are opaque, comparable tokens supplied by the host.
//! They carry no payload; the engine only hashes, compares and names them.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for state identifiers.
///
/// Implement it for your own enum (or use [`state_enum!`](crate::state_enum))
/// or use the ready-made [`StateName`].
///
/// # Required Traits
///
/// - `Clone`: states are copied into transitions and the cursor
/// - `Eq` + `Hash`: states key the processor map
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: graphs are shared between threads
///
/// # Example
///
/// ```rust
/// use stepwise::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum OrderState {
///     Created,
///     Paid,
///     Shipped,
/// }
///
/// impl State for OrderState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Created => "Created",
///             Self::Paid => "Paid",
///             Self::Shipped => "Shipped",
///         }
///     }
/// }
///
/// assert_eq!(OrderState::Paid.name(), "Paid");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for event identifiers.
///
/// Events live in their own namespace: a type used as a [`State`] is not
/// automatically an event, and vice versa.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

/// String-backed state identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateName(String);

impl StateName {
    /// Create a state id from any string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl State for StateName {
    fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StateName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// String-backed event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventName(String);

impl EventName {
    /// Create an event id from any string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Event for EventName {
    fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EventName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
