//! coop-fsm: a minimal state machine runtime for cooperative polling loops
//!
//! A state is a single handler. The handler is called with the machine's
//! control block and branches on a pseudo-state flag: ENTER when it becomes
//! current, EXIT when it is about to be replaced, and its own user tags in
//! between. The host loop decides when to dispatch; nothing here allocates,
//! blocks or runs in the background.
//!
//! # Core Concepts
//!
//! - **ControlBlock**: current handler, counters, debug name and a caller-owned context
//! - **Dispatch**: run the current handler once and return its `Status`
//! - **Transition**: EXIT the current handler, swap, ENTER the new one
//! - **StateHandler**: the trait every state type implements
//!
//! Hierarchy is built by composition: a handler can keep a nested control
//! block in its context and dispatch it from its own branches.
//!
//! # Example
//!
//! ```rust
//! use coop_fsm::core::{ControlBlock, PseudoState, Status};
//! use coop_fsm::state_handlers;
//!
//! state_handlers! {
//!     enum Heater for u32 {
//!         Warming => warming,
//!         Holding => holding,
//!     }
//! }
//!
//! fn warming(fsm: &mut ControlBlock<u32, Heater>) -> Status {
//!     match fsm.state() {
//!         PseudoState::Enter => {
//!             *fsm.count_mut() = 0;
//!             fsm.set_state(coop_fsm::core::UserState::FIRST.into());
//!             Status::InProgress
//!         }
//!         PseudoState::Exit => Status::Complete,
//!         PseudoState::User(_) => {
//!             *fsm.count_mut() += 1;
//!             if fsm.count() == 3 {
//!                 fsm.transition(Heater::Holding).outcome()
//!             } else {
//!                 Status::InProgress
//!             }
//!         }
//!     }
//! }
//!
//! fn holding(fsm: &mut ControlBlock<u32, Heater>) -> Status {
//!     if fsm.state() == PseudoState::Enter {
//!         *fsm.user_data_mut() += 1;
//!     }
//!     Status::Complete
//! }
//!
//! let mut fsm = ControlBlock::new(Some("heater"), Heater::Warming, 0);
//! while fsm.dispatch() != Status::Complete {
//!     *fsm.cycle_mut() += 1;
//! }
//!
//! assert_eq!(fsm.handler(), Heater::Holding);
//! assert_eq!(*fsm.user_data(), 1);
//! assert_eq!(fsm.cycle(), 3);
//! ```

pub mod core;
mod macros;

// Re-export commonly used types
pub use crate::core::{
    ControlBlock, FnHandler, FnMachine, PseudoState, StateHandler, Status, UserState,
};
