//! The state handler contract.
//!
//! A handler is "the code that implements the current state". It is invoked
//! with the whole control block and branches on [`ControlBlock::state`]:
//! ENTER for setup, EXIT for teardown, and any user tag for its own
//! sub-states.

use super::control_block::ControlBlock;
use super::status::Status;
use std::fmt;

/// Trait for state handlers driving a [`ControlBlock<C, Self>`].
///
/// Handlers are small `Copy` values (typically a fieldless enum of states or
/// a [`FnHandler`]) so the control block can hand itself to the handler it
/// stores. Handlers must not block: do a bounded amount of work and return.
///
/// # Example
///
/// ```rust
/// use coop_fsm::core::{ControlBlock, PseudoState, StateHandler, Status};
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Door {
///     Closed,
///     Open,
/// }
///
/// impl StateHandler<u32> for Door {
///     fn handle(self, fsm: &mut ControlBlock<u32, Self>) -> Status {
///         match (self, fsm.state()) {
///             (Door::Open, PseudoState::Enter) => {
///                 *fsm.user_data_mut() += 1;
///                 Status::Complete
///             }
///             (Door::Closed, PseudoState::Enter) => {
///                 fsm.transition(Door::Open);
///                 Status::Complete
///             }
///             _ => Status::InProgress,
///         }
///     }
/// }
///
/// let mut fsm = ControlBlock::new(Some("door"), Door::Closed, 0u32);
/// assert_eq!(fsm.dispatch(), Status::Complete);
/// assert_eq!(fsm.handler(), Door::Open);
/// assert_eq!(*fsm.user_data(), 1);
/// ```
pub trait StateHandler<C>: Copy + PartialEq + fmt::Debug {
    /// Run the branch selected by `fsm.state()` and report progress.
    fn handle(self, fsm: &mut ControlBlock<C, Self>) -> Status;

    /// Diagnostic name of this state, used only in log output.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Control block driven by plain handler functions.
pub type FnMachine<C> = ControlBlock<C, FnHandler<C>>;

/// Signature of a plain handler function.
pub type HandlerFn<C> = fn(&mut FnMachine<C>) -> Status;

/// A handler backed by a plain function.
///
/// Two `FnHandler`s are equal when they wrap the same function address.
///
/// # Example
///
/// ```rust
/// use coop_fsm::core::{FnHandler, FnMachine, PseudoState, Status};
///
/// fn idle(fsm: &mut FnMachine<()>) -> Status {
///     match fsm.state() {
///         PseudoState::Enter => Status::Complete,
///         _ => Status::InProgress,
///     }
/// }
///
/// let mut fsm = FnMachine::new(None, FnHandler::new(idle), ());
/// assert_eq!(fsm.dispatch(), Status::Complete);
/// ```
pub struct FnHandler<C>(HandlerFn<C>);

impl<C> FnHandler<C> {
    pub const fn new(handler: HandlerFn<C>) -> Self {
        Self(handler)
    }

    fn addr(&self) -> *const () {
        self.0 as *const ()
    }
}

impl<C> StateHandler<C> for FnHandler<C> {
    fn handle(self, fsm: &mut FnMachine<C>) -> Status {
        (self.0)(fsm)
    }

    fn name(&self) -> &'static str {
        "fn"
    }
}

impl<C> From<HandlerFn<C>> for FnHandler<C> {
    fn from(handler: HandlerFn<C>) -> Self {
        Self::new(handler)
    }
}

// Manual impls: deriving would demand `C: Clone`/`C: PartialEq`.
impl<C> Clone for FnHandler<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for FnHandler<C> {}

impl<C> PartialEq for FnHandler<C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.addr(), other.addr())
    }
}

impl<C> Eq for FnHandler<C> {}

impl<C> fmt::Debug for FnHandler<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnHandler").field(&self.addr()).finish()
    }
}
