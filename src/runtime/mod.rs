//! Execution of validated process graphs.
//!
//! A [`StateMachine`] owns a cursor into a graph it shares with every
//! other machine started from the same builder. Each call to
//! [`StateMachine::make_transition`] runs one step:
//!
//! 1. the current state's processor picks an event
//! 2. the matching transition is looked up
//! 3. the event's processor runs
//! 4. the cursor moves to the transition's end state
//!
//! A failure at any point leaves the cursor where it was.

mod error;
mod machine;

pub use error::TransitionError;
pub use machine::StateMachine;
