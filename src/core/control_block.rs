//! The per-instance control block and its dispatch/transition protocol.

use super::handler::StateHandler;
use super::pseudo_state::PseudoState;
use super::status::Status;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statuses reported by both halves of a [`ControlBlock::transition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionStatus {
    /// What the outgoing handler returned from its EXIT branch
    pub exit: Status,
    /// What the incoming handler returned from its ENTER branch
    pub enter: Status,
}

impl TransitionStatus {
    /// Fold both statuses into one: `Error` if either branch failed,
    /// otherwise the ENTER status.
    pub const fn outcome(self) -> Status {
        if self.exit.is_error() {
            Status::Error
        } else {
            self.enter
        }
    }
}

/// State machine control block.
///
/// Holds the active handler `H`, the bookkeeping counters and a caller-owned
/// context `C`. `C` is whatever handle the application wants the handlers to
/// see: `&'a mut T` for a borrowed context, `()` when there is none, or an
/// owned value.
///
/// A control block is always initialized: the only ways to obtain one take
/// an initial handler. Nothing here allocates.
///
/// # Example
///
/// ```rust
/// use coop_fsm::core::{FnHandler, FnMachine, PseudoState, Status, UserState};
///
/// const BLINKING: UserState = UserState::FIRST;
///
/// fn blink(fsm: &mut FnMachine<&mut bool>) -> Status {
///     match fsm.state() {
///         PseudoState::Enter => {
///             fsm.set_state(BLINKING.into());
///             Status::InProgress
///         }
///         PseudoState::Exit => {
///             **fsm.user_data_mut() = false;
///             Status::Complete
///         }
///         PseudoState::User(_) => {
///             let led = fsm.user_data_mut();
///             **led = !**led;
///             Status::InProgress
///         }
///     }
/// }
///
/// let mut led = false;
/// let mut fsm = FnMachine::new(Some("led"), FnHandler::new(blink), &mut led);
///
/// fsm.dispatch();
/// assert_eq!(fsm.state(), PseudoState::User(BLINKING));
/// fsm.dispatch();
/// assert!(**fsm.user_data());
/// ```
pub struct ControlBlock<C, H> {
    cycle: u16,
    state: PseudoState,
    count: u32,
    name: Option<&'static str>,
    user_data: C,
    handler: H,
}

impl<C, H: StateHandler<C>> ControlBlock<C, H> {
    /// Create a control block ready for its first dispatch.
    ///
    /// Counters start at zero and the flag at ENTER. The initial handler is
    /// not called; the first [`dispatch`](Self::dispatch) runs its ENTER
    /// branch.
    pub fn new(name: Option<&'static str>, initial: H, context: C) -> Self {
        tracing::debug!(
            machine = name.unwrap_or(UNNAMED),
            handler = initial.name(),
            "control block initialized"
        );
        Self {
            cycle: 0,
            state: PseudoState::Enter,
            count: 0,
            name,
            user_data: context,
            handler: initial,
        }
    }

    /// Re-initialize in place, replacing every field.
    ///
    /// The outgoing handler is not told; run a [`transition`](Self::transition)
    /// first if it needs its EXIT branch.
    pub fn reset(&mut self, name: Option<&'static str>, initial: H, context: C) {
        *self = Self::new(name, initial, context);
    }

    /// Invoke the current handler once and return its status unchanged.
    pub fn dispatch(&mut self) -> Status {
        let handler = self.handler;
        tracing::trace!(
            machine = self.label(),
            handler = handler.name(),
            flag = %self.state,
            "dispatch"
        );
        handler.handle(self)
    }

    /// Leave the current handler and enter `target`.
    ///
    /// Runs, in this order: flag := EXIT, current handler, handler := target,
    /// flag := ENTER, new handler. Each handler is invoked exactly once.
    /// A self-transition runs the same handler's EXIT then ENTER branch.
    ///
    /// Both statuses are returned; callers that do not care may drop them.
    pub fn transition(&mut self, target: H) -> TransitionStatus {
        tracing::debug!(
            machine = self.label(),
            from = self.handler.name(),
            to = target.name(),
            "transition"
        );

        self.state = PseudoState::Exit;
        let outgoing = self.handler;
        let exit = outgoing.handle(self);

        self.handler = target;
        self.state = PseudoState::Enter;
        let incoming = self.handler;
        let enter = incoming.handle(self);

        tracing::trace!(machine = self.label(), %exit, %enter, "transition finished");
        TransitionStatus { exit, enter }
    }
}

impl<C, H> ControlBlock<C, H> {
    /// Pass counter owned by the driving loop.
    pub fn cycle(&self) -> u16 {
        self.cycle
    }

    pub fn cycle_mut(&mut self) -> &mut u16 {
        &mut self.cycle
    }

    /// General-purpose counter owned by the active handler.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn count_mut(&mut self) -> &mut u32 {
        &mut self.count
    }

    /// The pseudo-state flag for the invocation in progress.
    pub fn state(&self) -> PseudoState {
        self.state
    }

    /// Move to a handler-private sub-state (or any tag the handler wants).
    pub fn set_state(&mut self, state: PseudoState) {
        self.state = state;
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn user_data(&self) -> &C {
        &self.user_data
    }

    pub fn user_data_mut(&mut self) -> &mut C {
        &mut self.user_data
    }

    /// Give the context back, dropping the control block.
    pub fn into_user_data(self) -> C {
        self.user_data
    }

    fn label(&self) -> &'static str {
        self.name.unwrap_or(UNNAMED)
    }
}

impl<C, H: Copy> ControlBlock<C, H> {
    /// The active handler.
    pub fn handler(&self) -> H {
        self.handler
    }
}

impl<C, H: PartialEq> ControlBlock<C, H> {
    /// Check whether `handler` is the active one.
    pub fn is_in(&self, handler: &H) -> bool {
        self.handler == *handler
    }
}

const UNNAMED: &str = "<unnamed>";

// The context is opaque to the core, so it is left out.
impl<C, H: fmt::Debug> fmt::Debug for ControlBlock<C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlBlock")
            .field("name", &self.name)
            .field("handler", &self.handler)
            .field("state", &self.state)
            .field("count", &self.count)
            .field("cycle", &self.cycle)
            .finish_non_exhaustive()
    }
}
