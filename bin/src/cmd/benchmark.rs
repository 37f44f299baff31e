//! Benchmark command implementation.

use bizval::{Appraiser, BenchmarkSource};

use crate::format;

/// Compare a multiple against a narrative or explicit reference.
pub(crate) fn show_benchmark(
    appraiser: &Appraiser,
    multiple: f64,
    narrative: Option<String>,
    reference: Option<f64>,
) {
    let source = reference.map_or(BenchmarkSource::Narrative(narrative), BenchmarkSource::Explicit);
    let cmp = appraiser.compare_to_benchmark(multiple, &source);

    println!("Your multiple:     {}", format::multiple(cmp.your_multiple));
    println!("Industry multiple: {}", format::multiple(cmp.industry_multiple));
    println!("Verdict:           {}", cmp.verdict);
    println!();
    println!("{}", cmp.summary());
}
