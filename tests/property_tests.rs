//! Property-based tests for the dispatch/transition protocol.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated handler sequences.

use coop_fsm::core::{ControlBlock, PseudoState, StateHandler, Status, UserState};
use proptest::prelude::*;

type Log = Vec<(Probe, PseudoState)>;

#[derive(Clone, Copy, PartialEq, Debug)]
enum Probe {
    A,
    B,
    C,
    D,
}

impl Probe {
    fn status(self) -> Status {
        match self {
            Self::A => Status::Complete,
            Self::B => Status::InProgress,
            Self::C => Status::WaitingOnResource,
            Self::D => Status::Asynchronous,
        }
    }
}

impl StateHandler<Log> for Probe {
    fn handle(self, fsm: &mut ControlBlock<Log, Self>) -> Status {
        let flag = fsm.state();
        fsm.user_data_mut().push((self, flag));
        self.status()
    }
}

prop_compose! {
    fn arbitrary_probe()(variant in 0..4u8) -> Probe {
        match variant {
            0 => Probe::A,
            1 => Probe::B,
            2 => Probe::C,
            _ => Probe::D,
        }
    }
}

proptest! {
    #[test]
    fn transitions_alternate_exit_and_enter(
        initial in arbitrary_probe(),
        targets in prop::collection::vec(arbitrary_probe(), 0..20)
    ) {
        let mut fsm = ControlBlock::new(Some("prop"), initial, Vec::new());

        for target in &targets {
            fsm.transition(*target);
        }

        let log = fsm.user_data();
        prop_assert_eq!(log.len(), 2 * targets.len());

        let mut previous = initial;
        for (i, target) in targets.iter().enumerate() {
            prop_assert_eq!(log[2 * i], (previous, PseudoState::Exit));
            prop_assert_eq!(log[2 * i + 1], (*target, PseudoState::Enter));
            previous = *target;
        }
        prop_assert_eq!(fsm.handler(), previous);
    }

    #[test]
    fn transition_reports_both_branch_statuses(
        from in arbitrary_probe(),
        to in arbitrary_probe()
    ) {
        let mut fsm = ControlBlock::new(None, from, Vec::new());

        let status = fsm.transition(to);

        prop_assert_eq!(status.exit, from.status());
        prop_assert_eq!(status.enter, to.status());
    }

    #[test]
    fn dispatch_returns_handler_status(probe in arbitrary_probe(), raw in any::<u8>()) {
        let mut fsm = ControlBlock::new(None, probe, Vec::new());
        fsm.set_state(PseudoState::from_raw(raw));

        prop_assert_eq!(fsm.dispatch(), probe.status());
        prop_assert_eq!(fsm.user_data().as_slice(), &[(probe, PseudoState::from_raw(raw))]);
    }

    #[test]
    fn counters_untouched_by_core(
        count in any::<u32>(),
        cycle in any::<u16>(),
        dispatches in 0..10usize,
        targets in prop::collection::vec(arbitrary_probe(), 0..5)
    ) {
        let mut fsm = ControlBlock::new(None, Probe::A, Vec::new());
        *fsm.count_mut() = count;
        *fsm.cycle_mut() = cycle;

        for _ in 0..dispatches {
            fsm.dispatch();
        }
        for target in targets {
            fsm.transition(target);
            fsm.dispatch();
        }

        prop_assert_eq!(fsm.count(), count);
        prop_assert_eq!(fsm.cycle(), cycle);
    }

    #[test]
    fn dispatch_leaves_flag_alone(raw in any::<u8>(), dispatches in 1..10usize) {
        let mut fsm = ControlBlock::new(None, Probe::B, Vec::new());
        let flag = PseudoState::from_raw(raw);
        fsm.set_state(flag);

        for _ in 0..dispatches {
            fsm.dispatch();
        }

        prop_assert_eq!(fsm.state(), flag);
        prop_assert!(fsm.user_data().iter().all(|(_, seen)| *seen == flag));
    }

    #[test]
    fn status_code_roundtrip(code in -1i8..=3) {
        let status = Status::try_from(code).unwrap();
        prop_assert_eq!(status.code(), code);
    }

    #[test]
    fn unknown_status_codes_rejected(code in any::<i8>().prop_filter("known code", |c| !(-1..=3).contains(c))) {
        prop_assert!(Status::try_from(code).is_err());
    }

    #[test]
    fn pseudo_state_order_matches_raw_order(a in any::<u8>(), b in any::<u8>()) {
        let left = PseudoState::from_raw(a);
        let right = PseudoState::from_raw(b);
        prop_assert_eq!(left.cmp(&right), a.cmp(&b));
    }

    #[test]
    fn user_states_start_at_user(raw in any::<u8>()) {
        match UserState::new(raw) {
            Ok(state) => {
                prop_assert!(raw >= coop_fsm::core::USER);
                prop_assert_eq!(UserState::nth(state.index()), state);
            }
            Err(_) => prop_assert!(raw < coop_fsm::core::USER),
        }
    }
}
