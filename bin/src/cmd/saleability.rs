//! Saleability command implementation.

use anyhow::{Result, bail};
use bizval::{OwnerInvolvement, score_saleability};

/// Score saleability and print the band with its summary.
pub(crate) fn show_saleability(margin: f64, recurring: bool, owner: Option<&str>) -> Result<()> {
    let owner = match owner {
        Some(label) => match OwnerInvolvement::from_label(label) {
            Some(o) => Some(o),
            None => bail!("Unknown owner involvement '{label}' (expected Low, Medium or High)"),
        },
        None => None,
    };

    let result = score_saleability(margin, recurring, owner);

    println!("Profit margin:     {margin:.1}%");
    println!("Recurring revenue: {}", if recurring { "Yes" } else { "No" });
    println!(
        "Owner involvement: {}",
        owner.map_or("Not specified", |o| o.label())
    );
    println!();
    println!("Saleability score: {}/10 ({})", result.score, result.band);
    println!("{}", result.band.summary());

    Ok(())
}
