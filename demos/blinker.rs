//! Blinker State Machine
//!
//! This example drives function handlers from a cooperative polling loop.
//!
//! Key concepts:
//! - Plain functions as state handlers (`FnHandler`)
//! - ENTER/EXIT branches for setup and teardown
//! - A user sub-state counted with `count`
//! - The loop, not the runtime, owns `cycle`
//!
//! Run with: RUST_LOG=trace cargo run --example blinker

use coop_fsm::core::{FnHandler, FnMachine, PseudoState, Status, UserState};
use tracing_subscriber::EnvFilter;

const TOGGLING: UserState = UserState::FIRST;
const BLINKS: u32 = 3;

#[derive(Default)]
struct Board {
    led: bool,
    toggles: u32,
}

type Blinker<'a> = FnMachine<&'a mut Board>;

fn blinking(fsm: &mut Blinker<'_>) -> Status {
    match fsm.state() {
        PseudoState::Enter => {
            println!("  [blinking] enter");
            *fsm.count_mut() = 0;
            fsm.set_state(TOGGLING.into());
            Status::InProgress
        }
        PseudoState::Exit => {
            println!("  [blinking] exit, LED off");
            fsm.user_data_mut().led = false;
            Status::Complete
        }
        PseudoState::User(_) => {
            let board = fsm.user_data_mut();
            board.led = !board.led;
            board.toggles += 1;
            println!("  [blinking] LED {}", if board.led { "on" } else { "off" });

            *fsm.count_mut() += 1;
            if fsm.count() == 2 * BLINKS {
                fsm.transition(FnHandler::new(resting)).outcome()
            } else {
                Status::InProgress
            }
        }
    }
}

fn resting(fsm: &mut Blinker<'_>) -> Status {
    if fsm.state() == PseudoState::Enter {
        println!("  [resting] enter");
    }
    Status::Complete
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Blinker State Machine ===\n");

    let mut board = Board::default();
    let mut fsm = FnMachine::new(Some("blinker"), FnHandler::new(blinking), &mut board);

    loop {
        let status = fsm.dispatch();
        *fsm.cycle_mut() += 1;
        println!("cycle {:>2}: {}", fsm.cycle(), status);

        if status == Status::Complete {
            break;
        }
    }

    let cycles = fsm.cycle();
    drop(fsm);

    println!("\nFinished after {} cycles", cycles);
    println!("LED toggled {} times, now {}", board.toggles, if board.led { "on" } else { "off" });

    println!("\n=== Example Complete ===");
}
