//! Standalone random-move soak runner.
//!
//! Run with:
//! `cargo run --release --bin random_probe`
//! `cargo run --release --bin random_probe -- --verbose`

use peach_chess::utils::probe_harness::{run_probe, ProbeConfig};
use peach_chess::utils::render_board::render_board;

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let result = run_probe(&ProbeConfig {
        attempts: 20_000,
        seed: 1234,
    });

    println!("{}", result.stats.report());
    if verbose {
        println!("{}", render_board(&result.final_board));
    }
}
