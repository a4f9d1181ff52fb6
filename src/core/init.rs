//! Initialization of a control block whose parts may be absent.
//!
//! [`ControlBlock::new`] covers the common case. These functions cover the
//! status-code contract: the control block and the initial handler are both
//! optional, and a missing one is reported instead of aborting.

use super::control_block::ControlBlock;
use super::error::InitError;
use super::handler::StateHandler;
use super::status::Status;

/// Initialize `fsm` in place.
///
/// On success the block has zeroed counters, the ENTER flag, and the given
/// name, handler and context; the handler is not invoked. On error nothing
/// is mutated. A missing control block is reported before a missing handler.
///
/// # Example
///
/// ```rust
/// use coop_fsm::core::{try_init, FnHandler, FnMachine, InitError, Status};
///
/// fn idle(_fsm: &mut FnMachine<()>) -> Status {
///     Status::Complete
/// }
///
/// let mut fsm = FnMachine::new(None, FnHandler::new(idle), ());
/// *fsm.count_mut() = 5;
///
/// assert_eq!(
///     try_init(Some(&mut fsm), Some("idle"), None, ()),
///     Err(InitError::MissingInitialHandler)
/// );
/// assert_eq!(fsm.count(), 5);
///
/// try_init(Some(&mut fsm), Some("idle"), Some(FnHandler::new(idle)), ()).unwrap();
/// assert_eq!(fsm.count(), 0);
/// ```
pub fn try_init<C, H: StateHandler<C>>(
    fsm: Option<&mut ControlBlock<C, H>>,
    name: Option<&'static str>,
    initial: Option<H>,
    context: C,
) -> Result<(), InitError> {
    let fsm = fsm.ok_or(InitError::MissingControlBlock)?;
    let initial = initial.ok_or(InitError::MissingInitialHandler)?;
    fsm.reset(name, initial, context);
    Ok(())
}

/// [`try_init`] reported as a status code: `Complete` or `Error`.
pub fn init<C, H: StateHandler<C>>(
    fsm: Option<&mut ControlBlock<C, H>>,
    name: Option<&'static str>,
    initial: Option<H>,
    context: C,
) -> Status {
    match try_init(fsm, name, initial, context) {
        Ok(()) => Status::Complete,
        Err(err) => {
            tracing::warn!(machine = name.unwrap_or("<unnamed>"), error = %err, "init rejected");
            Status::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PseudoState;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Light {
        Off,
        On,
    }

    impl StateHandler<u8> for Light {
        fn handle(self, fsm: &mut ControlBlock<u8, Self>) -> Status {
            *fsm.user_data_mut() += 1;
            Status::Complete
        }
    }

    fn used_block() -> ControlBlock<u8, Light> {
        let mut fsm = ControlBlock::new(Some("light"), Light::Off, 0);
        fsm.transition(Light::On);
        fsm.set_state(PseudoState::Exit);
        *fsm.count_mut() = 11;
        *fsm.cycle_mut() = 12;
        fsm
    }

    #[test]
    fn missing_control_block_is_an_error() {
        let result = try_init::<u8, Light>(None, Some("light"), Some(Light::Off), 0);
        assert_eq!(result, Err(InitError::MissingControlBlock));
    }

    #[test]
    fn missing_control_block_wins_over_missing_handler() {
        let result = try_init::<u8, Light>(None, None, None, 0);
        assert_eq!(result, Err(InitError::MissingControlBlock));
    }

    #[test]
    fn missing_handler_leaves_block_untouched() {
        let mut fsm = used_block();

        let result = try_init(Some(&mut fsm), Some("other"), None, 99);

        assert_eq!(result, Err(InitError::MissingInitialHandler));
        assert_eq!(fsm.count(), 11);
        assert_eq!(fsm.cycle(), 12);
        assert_eq!(fsm.state(), PseudoState::Exit);
        assert_eq!(fsm.handler(), Light::On);
        assert_eq!(fsm.name(), Some("light"));
        assert_eq!(*fsm.user_data(), 2);
    }

    #[test]
    fn valid_init_resets_block() {
        let mut fsm = used_block();

        let status = init(Some(&mut fsm), Some("fresh"), Some(Light::Off), 40);

        assert_eq!(status, Status::Complete);
        assert_eq!(fsm.count(), 0);
        assert_eq!(fsm.cycle(), 0);
        assert_eq!(fsm.state(), PseudoState::Enter);
        assert_eq!(fsm.handler(), Light::Off);
        assert_eq!(fsm.name(), Some("fresh"));
        assert_eq!(*fsm.user_data(), 40);
    }

    #[test]
    fn init_does_not_invoke_handler() {
        let mut fsm = used_block();
        init(Some(&mut fsm), None, Some(Light::On), 0);
        assert_eq!(*fsm.user_data(), 0);
    }

    #[test]
    fn init_reports_errors_as_status() {
        let mut fsm = used_block();

        assert_eq!(init::<u8, Light>(None, None, Some(Light::On), 0), Status::Error);
        assert_eq!(init(Some(&mut fsm), None, None, 0), Status::Error);
    }
}
