//! E-commerce appraisal built in code.
//!
//! This example demonstrates:
//! - Building raw attributes with the questionnaire's select labels
//! - Using a custom engine configuration
//! - Printing the appraisal as JSON

use bizval::eval::{BenchmarkConfig, RangeConfig};
use bizval::{AppraisalConfig, Appraiser, Intake, RawAttributes};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let intake = Intake {
        business_name: "Loop Box Co".to_string(),
        industry: "E-commerce".to_string(),
        sub_category: Some("Subscription Boxes".to_string()),
        industry_specific_data: RawAttributes::new()
            .with("annualRevenue", 2_000_000.0)
            .with("netProfit", 200_000.0)
            .with("ownerAddBacks", 20_000.0)
            .with("businessModel", "Subscription/Membership")
            .with("trafficSource", "Mostly Organic")
            .with("ownerInvolvement", "< 5 hrs/week")
            .with("inventoryValue", "$50,000"),
        ..Default::default()
    };

    // Tighter band and a higher fallback reference for online retail.
    let config = AppraisalConfig {
        range: RangeConfig {
            low_factor: 0.9,
            high_factor: 1.1,
        },
        benchmark: BenchmarkConfig {
            default_multiple: 3.0,
        },
        ..Default::default()
    };

    let appraisal = Appraiser::new(config)?.appraise(&intake)?;
    println!("{}", serde_json::to_string_pretty(&appraisal)?);

    Ok(())
}
