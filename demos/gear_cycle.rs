//! Landing Gear Cycle
//!
//! This example walks the gear through one full deploy and retract,
//! printing every event the controller emits.
//!
//! Key concepts:
//! - Guarded commands (a wrong-state command is rejected, not an error)
//! - Time-based completion of transitions
//! - Injected event sink instead of direct output
//!
//! Run with: cargo run --example gear_cycle

use gearsim::{GearController, GearEvent, GearTiming};

fn main() {
    println!("=== Landing Gear Cycle ===\n");

    let timing = GearTiming::new(1.0, 1.5).expect("durations are positive");
    let mut gear = GearController::new(timing, Vec::<GearEvent>::new());

    println!("Initial state: {}\n", gear.state());

    gear.command_gear_up();
    gear.command_gear_down();
    for _ in 0..5 {
        gear.advance(0.25).expect("tick is non-negative");
    }
    gear.command_gear_up();
    for _ in 0..6 {
        gear.advance(0.25).expect("tick is non-negative");
    }

    println!("Events:");
    for event in gear.sink() {
        println!("  {event}");
    }

    println!("\nTransitions (simulated time):");
    for transition in gear.history().transitions() {
        println!(
            "  {:>5.2}s  {} -> {}",
            transition.at_s, transition.from, transition.to
        );
    }

    println!("\nFinal state: {}", gear.state());
    println!("\n=== Example Complete ===");
}
