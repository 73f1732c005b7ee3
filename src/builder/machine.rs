//! Builder for validated process graphs.

use crate::builder::error::BuildError;
use crate::builder::policy::ValidationPolicy;
use crate::core::{Event, EventHandler, ProcessGraph, State, StateHandler, Transition};
use crate::runtime::StateMachine;
use std::collections::hash_map::Entry;
use std::sync::{Arc, OnceLock};

/// Accumulates states, events and transitions, rejecting malformed
/// registrations as they arrive, and hands out [`StateMachine`]s.
///
/// `init` leaves the builder untouched, so one builder can start any
/// number of machines. Machines started between two registrations share
/// a single frozen copy of the graph.
pub struct ProcessBuilder<S, E, Ctx: ?Sized = (), Args: ?Sized = ()> {
    graph: ProcessGraph<S, E, Ctx, Args>,
    policy: ValidationPolicy,
    snapshot: OnceLock<Arc<ProcessGraph<S, E, Ctx, Args>>>,
}

impl<S: State, E: Event, Ctx: ?Sized, Args: ?Sized> ProcessBuilder<S, E, Ctx, Args> {
    /// Create an empty builder using [`ValidationPolicy::CountHeuristic`].
    pub fn new() -> Self {
        Self {
            graph: ProcessGraph::new(),
            policy: ValidationPolicy::default(),
            snapshot: OnceLock::new(),
        }
    }

    /// Set the connectivity policy applied by [`init`](Self::init).
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The connectivity policy applied by [`init`](Self::init).
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// The graph registered so far.
    pub fn graph(&self) -> &ProcessGraph<S, E, Ctx, Args> {
        &self.graph
    }

    /// Register a state. `None` registers it without a processor.
    pub fn register_state(
        &mut self,
        state: S,
        processor: Option<StateHandler<E, Ctx, Args>>,
    ) -> Result<(), BuildError> {
        match self.graph.states.entry(state) {
            Entry::Occupied(entry) => Err(BuildError::StateAlreadyRegistered {
                state: entry.key().name().to_string(),
            }),
            Entry::Vacant(entry) => {
                tracing::trace!(
                    state = entry.key().name(),
                    inert = processor.is_none(),
                    "registered state"
                );
                entry.insert(processor);
                self.snapshot.take();
                Ok(())
            }
        }
    }

    /// Register an event. `None` registers it without a processor.
    pub fn register_event(
        &mut self,
        event: E,
        processor: Option<EventHandler<Ctx, Args>>,
    ) -> Result<(), BuildError> {
        match self.graph.events.entry(event) {
            Entry::Occupied(entry) => Err(BuildError::EventAlreadyRegistered {
                event: entry.key().name().to_string(),
            }),
            Entry::Vacant(entry) => {
                tracing::trace!(
                    event = entry.key().name(),
                    inert = processor.is_none(),
                    "registered event"
                );
                entry.insert(processor);
                self.snapshot.take();
                Ok(())
            }
        }
    }

    /// Register the edge `start --event--> end`.
    ///
    /// Both states and the event must already be registered. A state may
    /// not use the same event twice, nor have two edges to the same state.
    /// When a single existing edge violates both rules, the event reuse is
    /// reported.
    pub fn register_transition(&mut self, start: S, end: S, event: E) -> Result<(), BuildError> {
        for state in [&start, &end] {
            if !self.graph.contains_state(state) {
                return Err(BuildError::StateNotFound {
                    state: state.name().to_string(),
                });
            }
        }
        if !self.graph.contains_event(&event) {
            return Err(BuildError::EventNotFound {
                event: event.name().to_string(),
            });
        }

        for existing in &self.graph.transitions {
            if existing.matches(&start, &event) {
                return Err(BuildError::TransitionEventAlreadyUsed {
                    start: start.name().to_string(),
                    event: event.name().to_string(),
                });
            }
            if existing.connects(&start, &end) {
                return Err(BuildError::TransitionAlreadyRegistered {
                    start: start.name().to_string(),
                    end: end.name().to_string(),
                });
            }
        }

        tracing::trace!(
            start = start.name(),
            event = event.name(),
            end = end.name(),
            "registered transition"
        );
        self.graph.transitions.push(Transition::new(start, event, end));
        self.snapshot.take();
        Ok(())
    }

    /// Validate the graph and start a machine at `init_state` that finishes
    /// on reaching `finish_state`.
    pub fn init(
        &self,
        init_state: S,
        finish_state: S,
    ) -> Result<StateMachine<S, E, Ctx, Args>, BuildError> {
        self.validate(&init_state, &finish_state)?;

        let graph = Arc::clone(
            self.snapshot
                .get_or_init(|| Arc::new(self.graph.clone())),
        );

        Ok(StateMachine::new(graph, init_state, finish_state))
    }

    fn validate(&self, init_state: &S, finish_state: &S) -> Result<(), BuildError> {
        for state in [init_state, finish_state] {
            if !self.graph.contains_state(state) {
                return Err(BuildError::StateNotFound {
                    state: state.name().to_string(),
                });
            }
        }

        let states = self.graph.states_len();
        let events = self.graph.events_len();
        let transitions = self.graph.transitions.len();

        if states == 0 || events == 0 || transitions == 0 {
            return Err(BuildError::ProcessNotSet);
        }
        // A spanning tree over n states needs n - 1 edges, each with its own event.
        if events + 1 < states {
            return Err(BuildError::NotConnectedStates { states, events });
        }
        if transitions < events {
            return Err(BuildError::NotConnectedEvents {
                events,
                transitions,
            });
        }

        if self.policy.checks_reachability() {
            let unreachable = self.graph.unreachable_states(init_state);
            if !unreachable.is_empty() {
                return Err(BuildError::UnreachableStates {
                    states: unreachable,
                });
            }
            let unused = self.graph.unused_events();
            if !unused.is_empty() {
                return Err(BuildError::UnusedEvents { events: unused });
            }
        }

        Ok(())
    }
}

impl<S: State, E: Event, Ctx: ?Sized, Args: ?Sized> Default for ProcessBuilder<S, E, Ctx, Args> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventName, StateName};

    type Builder = ProcessBuilder<StateName, EventName>;

    fn s(name: &str) -> StateName {
        StateName::from(name)
    }

    fn e(name: &str) -> EventName {
        EventName::from(name)
    }

    fn noop_state() -> Option<StateHandler<EventName>> {
        Some(StateHandler::from_fn(|_ctx: &(), _args: &()| Ok(e("noop"))))
    }

    fn noop_event() -> Option<EventHandler> {
        Some(EventHandler::from_fn(|_ctx: &(), _args: &()| Ok(())))
    }

    fn three_state_builder() -> Builder {
        let mut builder = Builder::new();
        for name in ["s1", "s2", "s3"] {
            builder.register_state(s(name), None).unwrap();
        }
        for name in ["e12", "e23"] {
            builder.register_event(e(name), None).unwrap();
        }
        builder
    }

    #[test]
    fn register_state_accepts_distinct_keys() {
        let mut builder = Builder::new();

        assert!(builder.register_state(s("s1"), noop_state()).is_ok());
        assert!(builder.register_state(s("s2"), None).is_ok());
        assert_eq!(builder.graph().states_len(), 2);
        assert!(builder.graph().contains_state(&s("s1")));
    }

    #[test]
    fn register_state_rejects_duplicates() {
        let mut builder = Builder::new();
        builder.register_state(s("s1"), noop_state()).unwrap();

        let result = builder.register_state(s("s1"), None);

        assert_eq!(
            result,
            Err(BuildError::StateAlreadyRegistered {
                state: "s1".to_string()
            })
        );
        assert_eq!(builder.graph().states_len(), 1);
        assert!(builder
            .graph()
            .state_handler(&s("s1"))
            .is_some_and(|slot| slot.is_some()));
    }

    #[test]
    fn register_event_rejects_duplicates() {
        let mut builder = Builder::new();
        builder.register_event(e("e12"), noop_event()).unwrap();
        builder.register_event(e("e23"), noop_event()).unwrap();

        let result = builder.register_event(e("e12"), None);

        assert!(matches!(
            result,
            Err(BuildError::EventAlreadyRegistered { .. })
        ));
        assert_eq!(builder.graph().events_len(), 2);
    }

    #[test]
    fn register_transition_appends_in_order() {
        let mut builder = three_state_builder();

        builder.register_transition(s("s1"), s("s2"), e("e12")).unwrap();
        builder.register_transition(s("s2"), s("s3"), e("e23")).unwrap();

        assert_eq!(
            builder.graph().transitions(),
            &[
                Transition::new(s("s1"), e("e12"), s("s2")),
                Transition::new(s("s2"), e("e23"), s("s3")),
            ]
        );
    }

    #[test]
    fn register_transition_errors() {
        let mut builder = three_state_builder();
        builder.register_transition(s("s1"), s("s2"), e("e12")).unwrap();

        assert!(matches!(
            builder.register_transition(s("s1"), s("s2"), e("e23")),
            Err(BuildError::TransitionAlreadyRegistered { .. })
        ));
        assert!(matches!(
            builder.register_transition(s("s1"), s("s3"), e("e12")),
            Err(BuildError::TransitionEventAlreadyUsed { .. })
        ));
        assert_eq!(
            builder.register_transition(s("s4"), s("s2"), e("e23")),
            Err(BuildError::StateNotFound {
                state: "s4".to_string()
            })
        );
        assert_eq!(
            builder.register_transition(s("s1"), s("s4"), e("e23")),
            Err(BuildError::StateNotFound {
                state: "s4".to_string()
            })
        );
        assert_eq!(
            builder.register_transition(s("s2"), s("s3"), e("event3")),
            Err(BuildError::EventNotFound {
                event: "event3".to_string()
            })
        );
        assert_eq!(builder.graph().transitions().len(), 1);
    }

    #[test]
    fn event_reuse_wins_over_duplicate_edge() {
        let mut builder = three_state_builder();
        builder.register_transition(s("s1"), s("s2"), e("e12")).unwrap();

        let result = builder.register_transition(s("s1"), s("s2"), e("e12"));

        assert!(matches!(
            result,
            Err(BuildError::TransitionEventAlreadyUsed { .. })
        ));
    }

    #[test]
    fn init_succeeds_on_wired_graph() {
        let mut builder = three_state_builder();
        builder.register_transition(s("s1"), s("s2"), e("e12")).unwrap();
        builder.register_transition(s("s2"), s("s3"), e("e23")).unwrap();

        let machine = builder.init(s("s1"), s("s3")).unwrap();

        assert_eq!(machine.current_state(), &s("s1"));
        assert_eq!(machine.finish_state(), &s("s3"));
        assert!(!machine.is_finished());
    }

    #[test]
    fn init_error_sequence() {
        let mut builder = Builder::new();
        for name in ["s1", "s2", "s3"] {
            builder.register_state(s(name), None).unwrap();
        }
        builder.register_event(e("e12"), None).unwrap();

        assert!(matches!(
            builder.init(s("s1"), s("s4")),
            Err(BuildError::StateNotFound { .. })
        ));
        assert!(matches!(
            builder.init(s("s4"), s("s3")),
            Err(BuildError::StateNotFound { .. })
        ));
        assert_eq!(
            builder.init(s("s1"), s("s3")).unwrap_err(),
            BuildError::ProcessNotSet
        );

        builder.register_transition(s("s1"), s("s2"), e("e12")).unwrap();
        assert_eq!(
            builder.init(s("s1"), s("s3")).unwrap_err(),
            BuildError::NotConnectedStates {
                states: 3,
                events: 1
            }
        );

        builder.register_event(e("e23"), None).unwrap();
        assert_eq!(
            builder.init(s("s1"), s("s3")).unwrap_err(),
            BuildError::NotConnectedEvents {
                events: 2,
                transitions: 1
            }
        );
    }

    #[test]
    fn heuristic_ignores_real_reachability() {
        // s3 is unreachable from s1, but the counts line up.
        let mut builder = three_state_builder();
        builder.register_transition(s("s1"), s("s2"), e("e12")).unwrap();
        builder.register_transition(s("s2"), s("s1"), e("e23")).unwrap();

        assert!(builder.init(s("s1"), s("s3")).is_ok());

        let builder = builder.with_policy(ValidationPolicy::Reachability);
        assert_eq!(
            builder.init(s("s1"), s("s3")).unwrap_err(),
            BuildError::UnreachableStates {
                states: vec!["s3".to_string()]
            }
        );
    }

    #[test]
    fn reachability_policy_reports_unused_events() {
        let mut builder = Builder::new().with_policy(ValidationPolicy::Reachability);
        for name in ["a", "b"] {
            builder.register_state(s(name), None).unwrap();
        }
        for name in ["ab", "spare"] {
            builder.register_event(e(name), None).unwrap();
        }
        builder.register_transition(s("a"), s("b"), e("ab")).unwrap();
        builder.register_transition(s("b"), s("a"), e("ab")).unwrap();

        assert_eq!(
            builder.init(s("a"), s("b")).unwrap_err(),
            BuildError::UnusedEvents {
                events: vec!["spare".to_string()]
            }
        );
    }

    #[test]
    fn machines_share_graph_until_builder_changes() {
        let mut builder = three_state_builder();
        builder.register_transition(s("s1"), s("s2"), e("e12")).unwrap();
        builder.register_transition(s("s2"), s("s3"), e("e23")).unwrap();

        let first = builder.init(s("s1"), s("s3")).unwrap();
        let second = builder.init(s("s2"), s("s3")).unwrap();
        assert!(first.shares_graph_with(&second));
        assert_ne!(first.id(), second.id());

        builder.register_state(s("s4"), None).unwrap();
        builder.register_event(e("e34"), None).unwrap();
        builder.register_transition(s("s3"), s("s4"), e("e34")).unwrap();
        let third = builder.init(s("s1"), s("s3")).unwrap();
        assert!(!first.shares_graph_with(&third));
        assert!(!first.graph().contains_state(&s("s4")));
        assert!(third.graph().contains_state(&s("s4")));
    }
}
