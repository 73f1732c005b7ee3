//! Stepwise: an embeddable finite state machine engine
//!
//! A host describes a process as states connected by named events, attaches
//! its own logic to each state and event, and then drives the process one
//! transition at a time. The engine owns the graph and the cursor; all
//! domain behavior lives in the injected processors.
//!
//! # Core Concepts
//!
//! - **State / Event**: opaque identifiers via the `State` and `Event` traits
//! - **Processors**: a `StateProcessor` picks the next event, an
//!   `EventProcessor` performs that event's side effect
//! - **Builder**: `ProcessBuilder` validates registrations and starts machines
//! - **Runtime**: `StateMachine` executes single, all-or-nothing steps
//!
//! # Example
//!
//! ```rust
//! use stepwise::builder::ProcessBuilder;
//! use stepwise::core::{EventHandler, StateHandler};
//! use stepwise::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Order {
//!         Created,
//!         Paid,
//!         Shipped,
//!     }
//! }
//!
//! event_enum! {
//!     enum OrderEvent {
//!         Pay,
//!         Ship,
//!     }
//! }
//!
//! let mut builder: ProcessBuilder<Order, OrderEvent, (), u32> = ProcessBuilder::new();
//! builder.register_state(
//!     Order::Created,
//!     Some(StateHandler::from_fn(|_ctx: &(), _amount: &u32| Ok(OrderEvent::Pay))),
//! )?;
//! builder.register_state(
//!     Order::Paid,
//!     Some(StateHandler::from_fn(|_ctx: &(), _amount: &u32| Ok(OrderEvent::Ship))),
//! )?;
//! builder.register_state(Order::Shipped, None)?;
//! builder.register_event(
//!     OrderEvent::Pay,
//!     Some(EventHandler::from_fn(|_ctx: &(), amount: &u32| {
//!         if *amount == 0 {
//!             return Err("nothing to pay".into());
//!         }
//!         Ok(())
//!     })),
//! )?;
//! builder.register_event(
//!     OrderEvent::Ship,
//!     Some(EventHandler::from_fn(|_ctx: &(), _amount: &u32| Ok(()))),
//! )?;
//! builder.register_transition(Order::Created, Order::Paid, OrderEvent::Pay)?;
//! builder.register_transition(Order::Paid, Order::Shipped, OrderEvent::Ship)?;
//!
//! let mut machine = builder.init(Order::Created, Order::Shipped)?;
//!
//! // A failing event processor leaves the machine where it was.
//! assert!(machine.make_transition(&(), &0).is_err());
//! assert_eq!(machine.current_state(), &Order::Created);
//!
//! machine.make_transition(&(), &25)?;
//! machine.make_transition(&(), &25)?;
//! assert!(machine.is_finished());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod runtime;

// Re-export commonly used types
pub use crate::builder::{BuildError, ProcessBuilder, ValidationPolicy};
pub use crate::core::{
    Event, EventHandler, EventName, EventProcessor, ProcessorError, State, StateHandler,
    StateName, StateProcessor, Transition,
};
pub use crate::runtime::{StateMachine, TransitionError};
