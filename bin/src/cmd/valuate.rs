//! Valuate command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use bizval::{Appraisal, Appraiser};

use crate::format::{money, multiple};
use crate::{OutputFormat, intake};

/// Appraise the intake stored at `path` and print the report.
pub(crate) fn appraise_file(
    appraiser: &Appraiser,
    path: &Path,
    format: OutputFormat,
    benchmark: Option<String>,
) -> Result<()> {
    let mut submission = intake::load_intake(path)?;
    if benchmark.is_some() {
        submission.benchmarks = benchmark;
    }

    let appraisal = appraiser.appraise(&submission)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&appraisal)
                .context("Failed to serialize appraisal")?;
            println!("{json}");
        }
        OutputFormat::Text => print_report(&appraisal),
    }

    Ok(())
}

fn industry_line(appraisal: &Appraisal) -> String {
    match appraisal.sub_category.as_deref().map(str::trim) {
        Some(sub) if !sub.is_empty() => format!("{} / {sub}", appraisal.industry),
        _ => appraisal.industry.clone(),
    }
}

fn print_report(appraisal: &Appraisal) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Business Valuation                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let name = if appraisal.business_name.is_empty() {
        "(unnamed)"
    } else {
        appraisal.business_name.as_str()
    };
    println!("Business: {name}");
    println!("Industry: {}", industry_line(appraisal));
    println!("Track:    {}", appraisal.valuation.track);
    println!("Date:     {}", appraisal.appraised_on);
    println!();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("VALUATION");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let result = &appraisal.result;
    println!("  Estimated value: {:>14}", money(result.estimated_value));
    println!("  Low range:       {:>14}", money(result.low_range));
    println!("  High range:      {:>14}", money(result.high_range));
    match appraisal.spread_percent {
        Some(spread) => println!("  Spread:          {:>13.0}%", spread),
        None => println!("  Spread:          {:>14}", "N/A"),
    }
    println!(
        "  Confidence:      {:>14}",
        format!("{}% ({})", appraisal.confidence.level, appraisal.confidence.label)
    );
    println!();

    let valuation = &appraisal.valuation;
    println!("  SDE:             {:>14}", money(valuation.sde));
    println!("  Base multiple:   {:>14}", multiple(valuation.base_multiple));
    for adj in &valuation.adjustments {
        println!("    {:+.2}  {}", adj.delta, adj.factor);
    }
    println!("  Multiple:        {:>14}", multiple(valuation.multiple));
    println!();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("SALEABILITY");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let saleability = &appraisal.saleability;
    println!("  Profit margin:   {:>13.1}%", appraisal.profit_margin);
    println!("  Score:           {:>11}/10", saleability.score);
    println!("  Band:            {}", saleability.band);
    println!("  {}", saleability.band.summary());
    println!();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("INDUSTRY BENCHMARK");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let benchmark = &appraisal.benchmark;
    println!("  Your multiple:     {}", multiple(benchmark.your_multiple));
    println!("  Industry multiple: {}", multiple(benchmark.industry_multiple));
    println!("  Verdict:           {}", benchmark.verdict);
    println!("  {}", benchmark.summary());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizval::Intake;

    fn appraisal(sub_category: Option<&str>) -> Appraisal {
        let intake = Intake::from_json(
            r#"{"industry": "Retail", "industry_specific_data": {"revenue": 400000, "netProfit": 80000}}"#,
        )
        .unwrap();
        let mut appraisal = Appraiser::default().appraise(&intake).unwrap();
        appraisal.sub_category = sub_category.map(str::to_string);
        appraisal
    }

    #[test]
    fn test_industry_line() {
        assert_eq!(industry_line(&appraisal(Some("Clothing"))), "Retail / Clothing");
        assert_eq!(industry_line(&appraisal(Some(""))), "Retail");
        assert_eq!(industry_line(&appraisal(None)), "Retail");
    }
}
