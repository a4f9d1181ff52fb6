//! Nested State Machines
//!
//! This example composes two machines: a door controller owns a lock
//! machine in its context and drives it from its own branches.
//!
//! Key concepts:
//! - Enum handlers declared with `state_handlers!`
//! - Hierarchy by composition (a control block inside a context)
//! - Parent ENTER/EXIT branches transition the child
//! - Transition statuses folded with `outcome()`
//!
//! Run with: RUST_LOG=debug cargo run --example nested_machine

use coop_fsm::core::{ControlBlock, PseudoState, Status, UserState};
use coop_fsm::state_handlers;
use tracing_subscriber::EnvFilter;

const WAITING: UserState = UserState::FIRST;

state_handlers! {
    enum Lock for () {
        Engaged => lock_engaged,
        Released => lock_released,
    }
}

type LockMachine = ControlBlock<(), Lock>;

fn lock_engaged(fsm: &mut LockMachine) -> Status {
    if fsm.state() == PseudoState::Enter {
        println!("    [lock] engaged");
    }
    Status::Complete
}

fn lock_released(fsm: &mut LockMachine) -> Status {
    match fsm.state() {
        PseudoState::Enter => println!("    [lock] released"),
        PseudoState::Exit => println!("    [lock] re-engaging"),
        PseudoState::User(_) => {}
    }
    Status::Complete
}

state_handlers! {
    enum Door for LockMachine {
        Closed => door_closed,
        Open => door_open,
    }
}

fn door_closed(fsm: &mut ControlBlock<LockMachine, Door>) -> Status {
    match fsm.state() {
        PseudoState::Enter => {
            println!("  [door] closed");
            fsm.set_state(WAITING.into());
            Status::InProgress
        }
        PseudoState::Exit => Status::Complete,
        PseudoState::User(_) => fsm.transition(Door::Open).outcome(),
    }
}

fn door_open(fsm: &mut ControlBlock<LockMachine, Door>) -> Status {
    match fsm.state() {
        PseudoState::Enter => {
            let lock = fsm.user_data_mut().transition(Lock::Released);
            println!("  [door] open");
            *fsm.count_mut() = 0;
            fsm.set_state(WAITING.into());
            lock.outcome()
        }
        PseudoState::Exit => fsm.user_data_mut().transition(Lock::Engaged).outcome(),
        PseudoState::User(_) => {
            *fsm.count_mut() += 1;
            println!("  [door] held open for {} cycle(s)", fsm.count());
            if fsm.count() < 3 {
                return Status::WaitingOnResource;
            }
            fsm.transition(Door::Closed);
            Status::Complete
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Nested State Machines ===\n");

    let lock = ControlBlock::new(Some("lock"), Lock::Engaged, ());
    let mut door = ControlBlock::new(Some("door"), Door::Closed, lock);

    for _ in 0..8 {
        let status = door.dispatch();
        *door.cycle_mut() += 1;
        println!(
            "cycle {}: door={:?} lock={:?} -> {}",
            door.cycle(),
            door.handler(),
            door.user_data().handler(),
            status
        );
        if status == Status::Complete {
            break;
        }
    }

    println!("\nKey Characteristics:");
    println!("- The parent decides when the child runs");
    println!("- Leaving the parent state re-engages the child");
    println!("- No allocation, no threads, no hidden control flow");

    println!("\n=== Example Complete ===");
}
