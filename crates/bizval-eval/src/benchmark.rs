//! Benchmark comparison.
//!
//! Compares the multiple a strategy applied against an industry reference
//! multiple. The reference is usually pulled out of a free-text benchmark
//! narrative ("Typical multiples range 2.8x to 3.5x") but can be given directly.

use std::fmt;
use std::sync::LazyLock;

use bizval_traits::numeric::round_half_up;
use bizval_traits::{BizvalError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// First number immediately followed by `x` or `X`.
static MULTIPLE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)[xX]").expect("static regex"));

/// Configuration for benchmark comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Reference multiple used when none can be determined
    pub default_multiple: f64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            default_multiple: 2.5,
        }
    }
}

impl BenchmarkConfig {
    /// Checks that the default reference is a positive finite number.
    ///
    /// # Errors
    ///
    /// Returns [`BizvalError::InvalidConfig`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.default_multiple.is_finite() && self.default_multiple > 0.0 {
            Ok(())
        } else {
            Err(BizvalError::InvalidConfig(format!(
                "benchmark default_multiple must be positive, got {}",
                self.default_multiple
            )))
        }
    }
}

/// Where the industry reference multiple comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkSource {
    /// Free-text narrative to scan for a multiple; `None` if there is none.
    Narrative(Option<String>),
    /// A reference multiple given directly.
    Explicit(f64),
}

/// Whether the business beats its industry reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Applied multiple strictly greater than the reference.
    Above,
    /// Applied multiple at or below the reference.
    Below,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Above => f.write_str("Above Average"),
            Self::Below => f.write_str("Below Average"),
        }
    }
}

/// Result of comparing a multiple against the industry reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    /// Multiple the strategy applied
    pub your_multiple: f64,
    /// Industry reference multiple
    pub industry_multiple: f64,
    /// Above or below the reference
    pub verdict: Verdict,
    /// Absolute relative difference, in percent
    pub delta_percent: f64,
}

impl BenchmarkComparison {
    /// Sentence describing the comparison, with the percentage rounded to a whole number.
    #[must_use]
    pub fn summary(&self) -> String {
        let pct = round_half_up(self.delta_percent);
        match self.verdict {
            Verdict::Above => {
                format!("Your business is performing {pct}% better than the industry average.")
            }
            Verdict::Below => format!(
                "Your business is {pct}% below the industry average. \
                 Consider implementing the recommendations to improve your valuation."
            ),
        }
    }
}

/// Extracts the first `<number>x` token from a narrative.
///
/// # Example
///
/// ```
/// use bizval_eval::extract_reference_multiple;
///
/// assert_eq!(extract_reference_multiple("Typical multiples range 2.8x-3.5x"), Some(2.8));
/// assert_eq!(extract_reference_multiple("Strong demand, 4X earnings"), Some(4.0));
/// assert_eq!(extract_reference_multiple("No figures available"), None);
/// ```
#[must_use]
pub fn extract_reference_multiple(narrative: &str) -> Option<f64> {
    MULTIPLE_TOKEN
        .captures(narrative)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Resolves the reference multiple for a source, falling back to the configured default.
#[must_use]
pub fn reference_multiple(source: &BenchmarkSource, config: &BenchmarkConfig) -> f64 {
    let candidate = match source {
        BenchmarkSource::Narrative(Some(text)) => extract_reference_multiple(text),
        BenchmarkSource::Narrative(None) => None,
        BenchmarkSource::Explicit(multiple) => Some(*multiple),
    };
    match candidate {
        Some(m) if m.is_finite() && m > 0.0 => m,
        other => {
            tracing::debug!(
                candidate = ?other,
                default = config.default_multiple,
                "using default benchmark multiple"
            );
            config.default_multiple
        }
    }
}

/// Compares `multiple` against the reference resolved from `source`.
#[must_use]
pub fn compare_to_benchmark(
    multiple: f64,
    source: &BenchmarkSource,
    config: &BenchmarkConfig,
) -> BenchmarkComparison {
    let industry_multiple = reference_multiple(source, config);
    let verdict = if multiple > industry_multiple {
        Verdict::Above
    } else {
        Verdict::Below
    };

    BenchmarkComparison {
        your_multiple: multiple,
        industry_multiple,
        verdict,
        delta_percent: (multiple / industry_multiple - 1.0).abs() * 100.0,
    }
}
