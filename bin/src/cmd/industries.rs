//! Industry listing command implementation.

use bizval::IndustryTrack;
use bizval::strategies::registry::industries_by_track;

/// List supported industries, optionally filtered by track.
pub(crate) fn list_industries(track: Option<IndustryTrack>, verbose: bool) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Supported Industries                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for t in IndustryTrack::ALL {
        if track.is_some_and(|wanted| wanted != t) {
            continue;
        }

        let industries = industries_by_track(t);
        if industries.is_empty() {
            continue;
        }

        println!("{} track:", t.name());
        println!("{}", "-".repeat(60));
        if verbose {
            println!("  {}\n", t.description());
        }

        for info in industries {
            if verbose && !info.sub_categories.is_empty() {
                println!("  {:22} - {}", info.name, info.sub_categories.join(", "));
            } else {
                println!("  {}", info.name);
            }
        }
        println!();
    }

    if !verbose {
        println!("Use --verbose for track formulas and sub-categories.\n");
    }

    println!("Unlisted industries are valued on the generic track.");
    println!();
}
