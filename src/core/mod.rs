//! Control block, handler contract and the dispatch/transition protocol.
//!
//! This module is the whole runtime:
//! - `Status` codes reported by handlers
//! - `PseudoState` tags (ENTER, EXIT, user sub-states)
//! - the `StateHandler` trait and the `FnHandler` function adapter
//! - `ControlBlock` with `dispatch` and `transition`
//! - `init`/`try_init` for the status-code initialization contract
//!
//! Nothing here allocates, blocks or spawns. The caller owns the loop.

mod control_block;
mod error;
mod handler;
mod init;
mod pseudo_state;
mod status;

pub use control_block::{ControlBlock, TransitionStatus};
pub use error::{InitError, ReservedTag, UnknownStatusCode};
pub use handler::{FnHandler, FnMachine, HandlerFn, StateHandler};
pub use init::{init, try_init};
pub use pseudo_state::{PseudoState, UserState, ENTER, EXIT, USER};
pub use status::Status;
