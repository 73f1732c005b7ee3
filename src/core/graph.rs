//! The process graph shared by builders and running machines.

use super::processor::{EventHandler, StateHandler};
use super::state::{Event, State};
use super::transition::Transition;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// States, events and transitions of one process.
///
/// A builder mutates its graph while registrations are accepted. Once a
/// machine is initialized the graph is frozen behind an `Arc` and only
/// read from, so any number of machines can share it.
pub struct ProcessGraph<S, E, Ctx: ?Sized = (), Args: ?Sized = ()> {
    pub(crate) states: HashMap<S, Option<StateHandler<E, Ctx, Args>>>,
    pub(crate) events: HashMap<E, Option<EventHandler<Ctx, Args>>>,
    pub(crate) transitions: Vec<Transition<S, E>>,
}

impl<S: State, E: Event, Ctx: ?Sized, Args: ?Sized> ProcessGraph<S, E, Ctx, Args> {
    /// Create an empty graph.
    pub(crate) fn new() -> Self {
        Self {
            states: HashMap::new(),
            events: HashMap::new(),
            transitions: Vec::new(),
        }
    }

    /// Check if `state` is registered.
    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Check if `event` is registered.
    pub fn contains_event(&self, event: &E) -> bool {
        self.events.contains_key(event)
    }

    /// Number of registered states.
    pub fn states_len(&self) -> usize {
        self.states.len()
    }

    /// Number of registered events.
    pub fn events_len(&self) -> usize {
        self.events.len()
    }

    /// Transitions in registration order.
    pub fn transitions(&self) -> &[Transition<S, E>] {
        &self.transitions
    }

    /// Processor slot of a state: `None` if unregistered, `Some(None)` if
    /// registered without a processor.
    pub(crate) fn state_handler(&self, state: &S) -> Option<&Option<StateHandler<E, Ctx, Args>>> {
        self.states.get(state)
    }

    /// Processor slot of an event, with the same convention as
    /// [`state_handler`](Self::state_handler).
    pub(crate) fn event_handler(&self, event: &E) -> Option<&Option<EventHandler<Ctx, Args>>> {
        self.events.get(event)
    }

    /// First transition, in registration order, leaving `state` on `event`.
    pub fn find_transition(&self, state: &S, event: &E) -> Option<&Transition<S, E>> {
        self.transitions.iter().find(|t| t.matches(state, event))
    }

    /// All states reachable from `from` along registered edges, `from` included.
    pub fn reachable_from(&self, from: &S) -> HashSet<&S> {
        let mut seen: HashSet<&S> = HashSet::new();
        let mut queue: VecDeque<&S> = VecDeque::new();

        if let Some((state, _)) = self.states.get_key_value(from) {
            seen.insert(state);
            queue.push_back(state);
        }

        while let Some(current) = queue.pop_front() {
            for t in self.transitions.iter().filter(|t| t.start == *current) {
                if seen.insert(&t.end) {
                    queue.push_back(&t.end);
                }
            }
        }

        seen
    }

    /// Registered states not reachable from `from`, sorted by name.
    pub fn unreachable_states(&self, from: &S) -> Vec<String> {
        let reachable = self.reachable_from(from);
        let mut names: Vec<String> = self
            .states
            .keys()
            .filter(|s| !reachable.contains(s))
            .map(|s| s.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Registered events that label no transition, sorted by name.
    pub fn unused_events(&self) -> Vec<String> {
        let used: HashSet<&E> = self.transitions.iter().map(|t| &t.event).collect();
        let mut names: Vec<String> = self
            .events
            .keys()
            .filter(|e| !used.contains(e))
            .map(|e| e.name().to_string())
            .collect();
        names.sort();
        names
    }
}

impl<S: Clone, E: Clone, Ctx: ?Sized, Args: ?Sized> Clone for ProcessGraph<S, E, Ctx, Args> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
            events: self.events.clone(),
            transitions: self.transitions.clone(),
        }
    }
}

impl<S: fmt::Debug, E: fmt::Debug, Ctx: ?Sized, Args: ?Sized> fmt::Debug
    for ProcessGraph<S, E, Ctx, Args>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessGraph")
            .field("states", &self.states.keys().collect::<Vec<_>>())
            .field("events", &self.events.keys().collect::<Vec<_>>())
            .field("transitions", &self.transitions)
            .finish()
    }
}
