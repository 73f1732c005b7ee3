//! Transition edges of a process graph.

use super::state::{Event, State};
use serde::{Deserialize, Serialize};

/// An immutable `(start, event, end)` edge.
///
/// # Example
///
/// ```rust
/// use stepwise::core::{EventName, StateName, Transition};
///
/// let transition = Transition::new(
///     StateName::from("created"),
///     EventName::from("pay"),
///     StateName::from("paid"),
/// );
///
/// assert!(transition.matches(&StateName::from("created"), &EventName::from("pay")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<S, E> {
    /// The state being transitioned from
    pub start: S,
    /// The event labelling the edge
    pub event: E,
    /// The state being transitioned to
    pub end: S,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Create the edge `start --event--> end`.
    pub fn new(start: S, event: E, end: S) -> Self {
        Self { start, event, end }
    }

    /// Check if this edge leaves `state` on `event`.
    pub fn matches(&self, state: &S, event: &E) -> bool {
        self.start == *state && self.event == *event
    }

    /// Check if this edge connects `start` to `end`, whatever its event.
    pub fn connects(&self, start: &S, end: &S) -> bool {
        self.start == *start && self.end == *end
    }
}
