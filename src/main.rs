//! Stable Roommates - Binary Entry Point
//!
//! Runs phase 1 on a six-participant reference instance and prints the
//! reduced table. Set `RUST_LOG=stable_roommates=debug` to see every
//! accept/reject/displace step.

use stable_roommates::MatchingEngine;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("===========================================");
    println!("  Stable Roommates - Phase 1");
    println!("===========================================");
    println!();

    let preferences = vec![
        ("person1", vec!["person3", "person4", "person2", "person6", "person5"]),
        ("person2", vec!["person6", "person5", "person4", "person1", "person3"]),
        ("person3", vec!["person2", "person4", "person5", "person1", "person6"]),
        ("person4", vec!["person5", "person2", "person3", "person6", "person1"]),
        ("person5", vec!["person3", "person1", "person2", "person4", "person6"]),
        ("person6", vec!["person5", "person1", "person3", "person4", "person2"]),
    ];

    let mut engine = match MatchingEngine::new(preferences) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    println!("Initial preferences:");
    print!("{}", engine.table());
    println!();

    let outcome = engine.run_phase1();

    println!("Reduced preferences (x = removed):");
    print!("{}", engine.table());
    println!();

    println!("Held proposals:");
    for person in engine.table().participants() {
        match engine.held_proposal(person) {
            Some(proposer) => println!("  {person} holds {proposer}"),
            None => println!("  {person} holds nothing"),
        }
    }
    println!();

    let receipt = engine.receipt();
    println!("Outcome:      {outcome}");
    println!("Proposals:    {}", receipt.proposals);
    println!("Rejections:   {}", receipt.rejections);
    println!("State root:   {}", receipt.state_root_hex());
}
