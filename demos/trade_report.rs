//! Trade business appraisal from a stored submission.
//!
//! This example demonstrates:
//! - Deserializing a questionnaire submission as the form layer stores it
//! - Running the full appraisal pipeline
//! - Explaining the multiple through its adjustments

use bizval::{Appraiser, Intake};

/// Submission for an established plumbing business.
const SUBMISSION: &str = r#"{
    "businessName": "Harbour Plumbing",
    "industry": "Trade Business",
    "subCategory": "Plumbing",
    "location": "Newcastle",
    "yearsInOperation": 8,
    "benchmarks": "Plumbing businesses in the region typically sell for 2.8x-3.5x SDE.",
    "industry_specific_data": {
        "annualRevenue": "500,000",
        "netProfit": 150000,
        "ownerWage": 60000,
        "addBacks": 10000,
        "equipmentValue": 40000,
        "vehicleValue": "",
        "businessDebts": 0,
        "recurringRevenue": "Yes",
        "numberOfStaff": 3,
        "ownerInvolvement": "Low",
        "clientConcentration": 20
    }
}"#;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let intake: Intake = serde_json::from_str(SUBMISSION)?;
    let appraisal = Appraiser::default().appraise(&intake)?;

    println!("{} ({})", appraisal.business_name, appraisal.industry);
    println!("{}", "=".repeat(50));
    println!("SDE:              {:>12.0}", appraisal.valuation.sde);
    println!("Base multiple:    {:>12.2}", appraisal.valuation.base_multiple);
    for adj in &appraisal.valuation.adjustments {
        println!("  {:+.2} {}", adj.delta, adj.factor);
    }
    println!("Final multiple:   {:>12.2}", appraisal.result.multiple);
    println!();
    println!("Estimated value:  {:>12.0}", appraisal.result.estimated_value);
    println!(
        "Range:            {:.0} - {:.0}",
        appraisal.result.low_range, appraisal.result.high_range
    );
    println!(
        "Saleability:      {}/10 ({})",
        appraisal.saleability.score, appraisal.saleability.band
    );
    println!("Benchmark:        {}", appraisal.benchmark.summary());

    Ok(())
}
