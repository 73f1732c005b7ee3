//! Errors raised while stepping a state machine.

use crate::core::ProcessorError;

/// Errors that can occur during [`StateMachine::make_transition`](crate::runtime::StateMachine::make_transition).
///
/// Whatever the variant, the machine stays in the state it was in before
/// the call.
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    #[error("process is finished in state '{state}'")]
    ProcessFinished { state: String },

    #[error("state not found: '{state}'")]
    StateNotFound { state: String },

    #[error("state processor not set for '{state}'")]
    StateProcessorNotSet { state: String },

    #[error("event not found: '{event}'")]
    EventNotFound { event: String },

    #[error("event processor not set for '{event}'")]
    EventProcessorNotSet { event: String },

    #[error("transition not found from state '{state}' on event '{event}'")]
    TransitionNotFound { state: String, event: String },

    /// Error returned by the current state's processor, unchanged.
    #[error(transparent)]
    StateProcessor(ProcessorError),

    /// Error returned by the selected event's processor, unchanged.
    #[error(transparent)]
    EventProcessor(ProcessorError),
}

impl TransitionError {
    /// Returns whether the error came from host-supplied processor code
    /// rather than from the engine.
    pub fn is_processor_error(&self) -> bool {
        matches!(self, Self::StateProcessor(_) | Self::EventProcessor(_))
    }

    /// The processor error, if any, for downcasting to the host's own type.
    pub fn processor_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::StateProcessor(err) | Self::EventProcessor(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
