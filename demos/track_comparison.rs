//! The same financials valued on every track.
//!
//! This example demonstrates:
//! - Looking up industries in the registry
//! - Valuating one raw bag on each track
//! - How SDE definitions and base multiples differ between tracks

use bizval::strategies::registry::industries_by_track;
use bizval::{IndustryTrack, RawAttributes};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let raw = RawAttributes::new()
        .with("revenue", 1_200_000.0)
        .with("netProfit", 180_000.0)
        .with("ownerWage", 80_000.0)
        .with("debt", 50_000.0);

    println!("{:<10} {:>10} {:>14} {:>14}", "Track", "Multiple", "Estimate", "High");
    println!("{}", "-".repeat(52));

    for track in IndustryTrack::ALL {
        let result = bizval::valuate(track, &raw)?;
        println!(
            "{:<10} {:>10.2} {:>14.0} {:>14.0}",
            track.name(),
            result.multiple,
            result.estimated_value,
            result.high_range
        );
    }

    println!();
    for track in IndustryTrack::ALL {
        let names: Vec<_> = industries_by_track(track).iter().map(|i| i.name).collect();
        println!("{}: {}", track.name(), names.join(", "));
        println!("  {}", track.description());
    }

    Ok(())
}
