//! Saleability scoring.
//!
//! A 1-10 heuristic of how readily a business will sell, driven by profit
//! margin, revenue recurrence and owner dependency.

use std::fmt;

use bizval_traits::OwnerInvolvement;
use serde::{Deserialize, Serialize};

/// Starting score before adjustments.
pub const BASE_SCORE: i32 = 5;

/// Qualitative saleability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SaleabilityBand {
    /// Score below 4.
    ChallengingToSell,
    /// Score 4 or 5.
    FairlySaleable,
    /// Score 6 or 7.
    ModeratelySaleable,
    /// Score 8 and above.
    HighlySaleable,
}

impl SaleabilityBand {
    /// Band for a score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            8.. => Self::HighlySaleable,
            6..=7 => Self::ModeratelySaleable,
            4..=5 => Self::FairlySaleable,
            _ => Self::ChallengingToSell,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ChallengingToSell => "Challenging to Sell",
            Self::FairlySaleable => "Fairly Saleable",
            Self::ModeratelySaleable => "Moderately Saleable",
            Self::HighlySaleable => "Highly Saleable",
        }
    }

    /// One-sentence summary shown under the score.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::HighlySaleable => {
                "Your business is in excellent condition for sale with strong market appeal."
            }
            Self::ModeratelySaleable => {
                "Your business has good saleability potential with some areas for improvement."
            }
            Self::FairlySaleable => {
                "Your business has moderate saleability but would benefit from addressing key areas."
            }
            Self::ChallengingToSell => {
                "Your business may face challenges in the current market. Focus on improving key metrics."
            }
        }
    }
}

impl fmt::Display for SaleabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Saleability score and its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleabilityResult {
    /// Score in `1..=10`
    pub score: u8,
    /// Band derived from the score
    pub band: SaleabilityBand,
}

/// Net profit as a percentage of revenue, or 0 when revenue is not positive.
///
/// # Example
///
/// ```
/// use bizval_eval::profit_margin_percent;
///
/// assert_eq!(profit_margin_percent(500_000.0, 150_000.0), 30.0);
/// assert_eq!(profit_margin_percent(0.0, 10_000.0), 0.0);
/// ```
#[must_use]
pub fn profit_margin_percent(revenue: f64, net_profit: f64) -> f64 {
    if revenue > 0.0 {
        net_profit / revenue * 100.0
    } else {
        0.0
    }
}

/// Scores saleability.
///
/// Starts at 5. Margin adds 2 above 20%, else 1 above 10%, else takes 1 off
/// below 7%. Recurring revenue adds 1. Low owner involvement adds 1 and high
/// takes 1 off. The result is clamped to `1..=10`.
#[must_use]
pub fn score_saleability(
    profit_margin: f64,
    recurring: bool,
    owner_involvement: Option<OwnerInvolvement>,
) -> SaleabilityResult {
    let mut score = BASE_SCORE;

    if profit_margin > 20.0 {
        score += 2;
    } else if profit_margin > 10.0 {
        score += 1;
    } else if profit_margin < 7.0 {
        score -= 1;
    }

    if recurring {
        score += 1;
    }

    match owner_involvement {
        Some(OwnerInvolvement::Low) => score += 1,
        Some(OwnerInvolvement::High) => score -= 1,
        Some(OwnerInvolvement::Medium) | None => {}
    }

    // Clamped to 1..=10, so the cast cannot truncate.
    let score = score.clamp(1, 10) as u8;
    let band = SaleabilityBand::from_score(score);
    tracing::debug!(profit_margin, recurring, score, %band, "saleability scored");

    SaleabilityResult { score, band }
}
