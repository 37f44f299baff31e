//! Scoring and comparison for bizval valuations.
//!
//! This crate turns a strategy's point estimate into what the seller sees:
//! - Confidence range around the estimate, with the ± spread
//! - Saleability score (1-10) and qualitative band
//! - Benchmark comparison against an industry reference multiple
//!
//! # Example
//!
//! ```
//! use bizval_eval::{
//!     BenchmarkConfig, BenchmarkSource, RangeConfig, ValuationResult, Verdict,
//!     compare_to_benchmark, score_saleability,
//! };
//! use bizval_traits::OwnerInvolvement;
//!
//! let result = ValuationResult::new(755_000.0, 3.25, &RangeConfig::default());
//! assert!(result.low_range < result.estimated_value);
//!
//! let saleability = score_saleability(30.0, true, Some(OwnerInvolvement::Low));
//! assert_eq!(saleability.score, 9);
//!
//! let source = BenchmarkSource::Narrative(Some("Typical multiples 2.8x-3.5x".into()));
//! let cmp = compare_to_benchmark(3.25, &source, &BenchmarkConfig::default());
//! assert_eq!(cmp.verdict, Verdict::Above);
//! ```

pub mod benchmark;
pub mod range;
pub mod saleability;

// Re-export main types
pub use benchmark::{
    BenchmarkComparison, BenchmarkConfig, BenchmarkSource, Verdict, compare_to_benchmark,
    extract_reference_multiple, reference_multiple,
};
pub use range::{RangeConfig, ValuationResult};
pub use saleability::{
    SaleabilityBand, SaleabilityResult, profit_margin_percent, score_saleability,
};
