//! Macros for declaring handler enums.

/// Declare an enum of states and implement `StateHandler` for it.
///
/// Each variant is routed to a handler function taking
/// `&mut ControlBlock<Ctx, Enum>`. The generated enum is `Copy`, `Eq` and
/// `Debug`, and `name()` returns the variant name.
///
/// # Example
///
/// ```
/// use coop_fsm::core::{ControlBlock, PseudoState, Status};
/// use coop_fsm::state_handlers;
///
/// state_handlers! {
///     pub enum Valve for u32 {
///         Closed => closed,
///         Open => open,
///     }
/// }
///
/// fn closed(fsm: &mut ControlBlock<u32, Valve>) -> Status {
///     if fsm.state() == PseudoState::Enter {
///         fsm.transition(Valve::Open);
///     }
///     Status::Complete
/// }
///
/// fn open(fsm: &mut ControlBlock<u32, Valve>) -> Status {
///     *fsm.user_data_mut() += 1;
///     Status::InProgress
/// }
///
/// let mut fsm = ControlBlock::new(Some("valve"), Valve::Closed, 0);
/// fsm.dispatch();
/// assert_eq!(fsm.handler(), Valve::Open);
/// assert_eq!(*fsm.user_data(), 1);
/// ```
#[macro_export]
macro_rules! state_handlers {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $ctx:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $handler:path
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateHandler<$ctx> for $name {
            fn handle(
                self,
                fsm: &mut $crate::core::ControlBlock<$ctx, Self>,
            ) -> $crate::core::Status {
                match self {
                    $(Self::$variant => $handler(fsm)),*
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
