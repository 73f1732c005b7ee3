//! Processor capabilities injected by the host.
//!
//! A [`StateProcessor`] decides which event fires next while the machine
//! sits in a state. An [`EventProcessor`] performs the side effect of an
//! event before the machine commits to the next state. Both receive an
//! opaque context and argument list that the engine passes through
//! untouched.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Error type returned by processors.
///
/// The engine never inspects it; it is surfaced to the caller verbatim.
pub type ProcessorError = Box<dyn Error + Send + Sync + 'static>;

/// Decision logic attached to a state.
///
/// Implemented for any `Fn(&Ctx, &Args) -> Result<E, ProcessorError>`.
///
/// # Example
///
/// ```rust
/// use stepwise::core::{EventName, ProcessorError, StateProcessor};
///
/// struct Approve;
///
/// impl StateProcessor<EventName, (), u32> for Approve {
///     fn process(&self, _ctx: &(), amount: &u32) -> Result<EventName, ProcessorError> {
///         if *amount > 1000 {
///             Ok(EventName::from("escalate"))
///         } else {
///             Ok(EventName::from("approve"))
///         }
///     }
/// }
///
/// assert_eq!(Approve.process(&(), &10).unwrap(), EventName::from("approve"));
/// ```
pub trait StateProcessor<E, Ctx: ?Sized = (), Args: ?Sized = ()>: Send + Sync {
    /// Choose the next event to fire from the current state.
    fn process(&self, ctx: &Ctx, args: &Args) -> Result<E, ProcessorError>;
}

/// Side-effect logic attached to an event.
pub trait EventProcessor<Ctx: ?Sized = (), Args: ?Sized = ()>: Send + Sync {
    /// Perform the event's action. An error aborts the transition.
    fn process(&self, ctx: &Ctx, args: &Args) -> Result<(), ProcessorError>;
}

impl<E, Ctx, Args, F> StateProcessor<E, Ctx, Args> for F
where
    Ctx: ?Sized,
    Args: ?Sized,
    F: Fn(&Ctx, &Args) -> Result<E, ProcessorError> + Send + Sync,
{
    fn process(&self, ctx: &Ctx, args: &Args) -> Result<E, ProcessorError> {
        self(ctx, args)
    }
}

impl<Ctx, Args, F> EventProcessor<Ctx, Args> for F
where
    Ctx: ?Sized,
    Args: ?Sized,
    F: Fn(&Ctx, &Args) -> Result<(), ProcessorError> + Send + Sync,
{
    fn process(&self, ctx: &Ctx, args: &Args) -> Result<(), ProcessorError> {
        self(ctx, args)
    }
}

/// Shared handle to a [`StateProcessor`].
///
/// Registering a state with `None` instead of a handler marks it as
/// registered but inert; stepping out of such a state fails with
/// [`TransitionError::StateProcessorNotSet`](crate::runtime::TransitionError::StateProcessorNotSet).
pub struct StateHandler<E, Ctx: ?Sized = (), Args: ?Sized = ()> {
    processor: Arc<dyn StateProcessor<E, Ctx, Args>>,
}

impl<E, Ctx: ?Sized, Args: ?Sized> StateHandler<E, Ctx, Args> {
    /// Wrap a processor value.
    pub fn new<P>(processor: P) -> Self
    where
        P: StateProcessor<E, Ctx, Args> + 'static,
    {
        Self {
            processor: Arc::new(processor),
        }
    }

    /// Wrap a closure.
    ///
    /// ```rust
    /// use stepwise::core::{EventName, StateHandler};
    ///
    /// let handler: StateHandler<EventName> =
    ///     StateHandler::from_fn(|_ctx: &(), _args: &()| Ok(EventName::from("next")));
    /// assert_eq!(handler.process(&(), &()).unwrap(), EventName::from("next"));
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Ctx, &Args) -> Result<E, ProcessorError> + Send + Sync + 'static,
    {
        Self::new(f)
    }

    /// Run the wrapped processor.
    pub fn process(&self, ctx: &Ctx, args: &Args) -> Result<E, ProcessorError> {
        self.processor.process(ctx, args)
    }
}

impl<E, Ctx: ?Sized, Args: ?Sized> Clone for StateHandler<E, Ctx, Args> {
    fn clone(&self) -> Self {
        Self {
            processor: Arc::clone(&self.processor),
        }
    }
}

impl<E, Ctx: ?Sized, Args: ?Sized> fmt::Debug for StateHandler<E, Ctx, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StateHandler")
    }
}

/// Shared handle to an [`EventProcessor`].
pub struct EventHandler<Ctx: ?Sized = (), Args: ?Sized = ()> {
    processor: Arc<dyn EventProcessor<Ctx, Args>>,
}

impl<Ctx: ?Sized, Args: ?Sized> EventHandler<Ctx, Args> {
    /// Wrap a processor value.
    pub fn new<P>(processor: P) -> Self
    where
        P: EventProcessor<Ctx, Args> + 'static,
    {
        Self {
            processor: Arc::new(processor),
        }
    }

    /// Wrap a closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Ctx, &Args) -> Result<(), ProcessorError> + Send + Sync + 'static,
    {
        Self::new(f)
    }

    /// Run the wrapped processor.
    pub fn process(&self, ctx: &Ctx, args: &Args) -> Result<(), ProcessorError> {
        self.processor.process(ctx, args)
    }
}

impl<Ctx: ?Sized, Args: ?Sized> Clone for EventHandler<Ctx, Args> {
    fn clone(&self) -> Self {
        Self {
            processor: Arc::clone(&self.processor),
        }
    }
}

impl<Ctx: ?Sized, Args: ?Sized> fmt::Debug for EventHandler<Ctx, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler")
    }
}
