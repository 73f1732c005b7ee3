//! Core data model of the state machine engine.
//!
//! This module contains the types shared by builders and running machines:
//! - State and event identifiers via the `State` and `Event` traits
//! - Processor capabilities injected by the host
//! - Transition edges and the process graph they form
//!
//! Nothing in this module performs validation; that belongs to the builder.

mod graph;
mod processor;
mod state;
mod transition;

pub use graph::ProcessGraph;
pub use processor::{EventHandler, EventProcessor, ProcessorError, StateHandler, StateProcessor};
pub use state::{Event, EventName, State, StateName};
pub use transition::Transition;
