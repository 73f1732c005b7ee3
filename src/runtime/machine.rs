//! State machine that executes one transition per call.

use crate::core::{Event, ProcessGraph, State};
use crate::runtime::error::TransitionError;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A running process: a cursor over a shared, frozen [`ProcessGraph`].
///
/// Created by [`ProcessBuilder::init`](crate::builder::ProcessBuilder::init).
/// Stepping takes `&mut self`, so one instance is driven by one caller at
/// a time; separate instances can run on separate threads.
pub struct StateMachine<S, E, Ctx: ?Sized = (), Args: ?Sized = ()> {
    id: Uuid,
    current: S,
    finish: S,
    graph: Arc<ProcessGraph<S, E, Ctx, Args>>,
}

impl<S: State, E: Event, Ctx: ?Sized, Args: ?Sized> StateMachine<S, E, Ctx, Args> {
    pub(crate) fn new(graph: Arc<ProcessGraph<S, E, Ctx, Args>>, init: S, finish: S) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(
            instance = %id,
            init = init.name(),
            finish = finish.name(),
            "state machine initialized"
        );

        Self {
            id,
            current: init,
            finish,
            graph,
        }
    }

    /// Identifier of this instance, for telling machines apart in logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The terminal state this machine runs towards.
    pub fn finish_state(&self) -> &S {
        &self.finish
    }

    /// Check if machine has reached its finish state (pure)
    pub fn is_finished(&self) -> bool {
        self.current == self.finish
    }

    /// The graph this machine runs on.
    pub fn graph(&self) -> &ProcessGraph<S, E, Ctx, Args> {
        &self.graph
    }

    /// Check whether both machines run on the very same graph allocation.
    pub fn shares_graph_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.graph, &other.graph)
    }

    /// Execute one step of the state machine.
    ///
    /// The current state's processor chooses an event, the transition for
    /// that event is looked up, the event's processor runs, and only then
    /// does the machine move to the transition's end state. `ctx` and
    /// `args` are handed to both processors as-is.
    ///
    /// # Errors
    ///
    /// - [`TransitionError::ProcessFinished`] once the finish state is reached
    /// - [`TransitionError::StateProcessorNotSet`] /
    ///   [`TransitionError::EventProcessorNotSet`] for inert states and events
    /// - [`TransitionError::TransitionNotFound`] if the chosen event has no
    ///   edge out of the current state
    /// - [`TransitionError::StateProcessor`] / [`TransitionError::EventProcessor`]
    ///   wrapping whatever a processor returned
    ///
    /// On any error the current state is left unchanged.
    pub fn make_transition(&mut self, ctx: &Ctx, args: &Args) -> Result<(), TransitionError> {
        if self.is_finished() {
            return Err(TransitionError::ProcessFinished {
                state: self.current.name().to_string(),
            });
        }

        let event = self.process_state(ctx, args)?;
        let next = self.next_state(&event)?.clone();
        self.process_event(ctx, &event, args)?;

        tracing::debug!(
            instance = %self.id,
            from = self.current.name(),
            event = event.name(),
            to = next.name(),
            "transition committed"
        );
        self.current = next;
        Ok(())
    }

    fn process_state(&self, ctx: &Ctx, args: &Args) -> Result<E, TransitionError> {
        let handler = self
            .graph
            .state_handler(&self.current)
            .ok_or_else(|| TransitionError::StateNotFound {
                state: self.current.name().to_string(),
            })?
            .as_ref()
            .ok_or_else(|| TransitionError::StateProcessorNotSet {
                state: self.current.name().to_string(),
            })?;

        handler
            .process(ctx, args)
            .map_err(TransitionError::StateProcessor)
    }

    fn next_state(&self, event: &E) -> Result<&S, TransitionError> {
        self.graph
            .find_transition(&self.current, event)
            .map(|t| &t.end)
            .ok_or_else(|| TransitionError::TransitionNotFound {
                state: self.current.name().to_string(),
                event: event.name().to_string(),
            })
    }

    fn process_event(&self, ctx: &Ctx, event: &E, args: &Args) -> Result<(), TransitionError> {
        let handler = self
            .graph
            .event_handler(event)
            .ok_or_else(|| TransitionError::EventNotFound {
                event: event.name().to_string(),
            })?
            .as_ref()
            .ok_or_else(|| TransitionError::EventProcessorNotSet {
                event: event.name().to_string(),
            })?;

        handler
            .process(ctx, args)
            .map_err(TransitionError::EventProcessor)
    }
}

impl<S: fmt::Debug, E, Ctx: ?Sized, Args: ?Sized> fmt::Debug for StateMachine<S, E, Ctx, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("id", &self.id)
            .field("current", &self.current)
            .field("finish", &self.finish)
            .finish_non_exhaustive()
    }
}
