//! binary-g1 - terminal front panel for the Binary-G1 logic module
//!
//! Run with: cargo run --bin binary-g1

mod app;
mod patch;
mod ui;

use app::Bench;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    // Monitor channel 0 at ~60 panel updates per second
    Bench::new().monitor(0).refresh_rate(60.0).run()
}
