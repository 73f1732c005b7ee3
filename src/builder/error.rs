//! Build errors for process builders.

use thiserror::Error;

/// Errors that can occur while registering a process or initializing a
/// state machine from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("state already registered: '{state}'")]
    StateAlreadyRegistered { state: String },

    #[error("event already registered: '{event}'")]
    EventAlreadyRegistered { event: String },

    #[error("state not found: '{state}'")]
    StateNotFound { state: String },

    #[error("event not found: '{event}'")]
    EventNotFound { event: String },

    #[error("transition already registered from '{start}' to '{end}'")]
    TransitionAlreadyRegistered { start: String, end: String },

    #[error("transition event '{event}' already used from state '{start}'")]
    TransitionEventAlreadyUsed { start: String, event: String },

    #[error("process not set: register at least one state, event and transition")]
    ProcessNotSet,

    #[error("process has not-connected states ({states} states, {events} events)")]
    NotConnectedStates { states: usize, events: usize },

    #[error("process has not-connected events ({events} events, {transitions} transitions)")]
    NotConnectedEvents { events: usize, transitions: usize },

    #[error("states unreachable from the initial state: {}", .states.join(", "))]
    UnreachableStates { states: Vec<String> },

    #[error("events not used by any transition: {}", .events.join(", "))]
    UnusedEvents { events: Vec<String> },
}
