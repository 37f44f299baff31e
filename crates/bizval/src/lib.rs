#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/bizval/bizval/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # bizval
//!
//! Small-business valuation and saleability scoring.
//!
//! bizval is an umbrella crate that re-exports the bizval sub-crates and adds
//! the [`Appraiser`], which runs the full pipeline for one submission.
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types ([`ValuationStrategy`], [`RawAttributes`], [`Valuation`])
//! - [`strategies`] - Trade, e-commerce and generic valuation strategies, plus the industry registry
//! - [`eval`] - Range, saleability and benchmark calculators
//! - [`engine`] - The appraisal pipeline and its configuration
//!
//! ## Pipeline
//!
//! 1. **Routing** maps the industry category to a track
//! 2. **Normalization** coerces raw answers into the track's attributes
//! 3. **Valuation** applies the track's SDE multiple and asset rules
//! 4. **Scoring** adds the range, saleability and benchmark comparison

/// Version information for the bizval crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Core trait and type definitions.
///
/// - [`ValuationStrategy`] - Contract every industry track implements
/// - [`RawAttributes`] - Questionnaire answers as stored
/// - [`Valuation`] - Strategy output with the multiple breakdown
pub mod traits {
    pub use bizval_traits::*;
}

pub use bizval_traits::{
    BizvalError, IndustryTrack, MultipleAdjustment, OwnerInvolvement, RawAttributes, RawValue,
    Result, Valuation, ValuationStrategy,
};

// ============================================================================
// Strategies
// ============================================================================

/// Valuation strategies and the industry registry.
///
/// ## Tracks
///
/// - **TradeStrategy**: base 2.0x SDE including owner wage, plus equipment and vehicles, less debt
/// - **EcommerceStrategy**: base 2.5x SDE excluding owner wage, plus inventory
/// - **GenericStrategy**: base 2.5x SDE including owner wage, plus assets, less debt
///
/// # Example
///
/// ```
/// use bizval::strategies::registry::industries_by_track;
/// use bizval::IndustryTrack;
///
/// let generic = industries_by_track(IndustryTrack::Generic);
/// assert!(generic.iter().any(|i| i.name == "Healthcare"));
/// ```
pub mod strategies {
    pub use bizval_strategies::*;
}

// ============================================================================
// Evaluation
// ============================================================================

/// Range, saleability and benchmark calculators.
///
/// ### Saleability bands
///
/// ```text
/// score >= 8   Highly Saleable
/// score 6-7    Moderately Saleable
/// score 4-5    Fairly Saleable
/// score < 4    Challenging to Sell
/// ```
pub mod eval {
    pub use bizval_eval::*;
}

pub use bizval_eval::{
    BenchmarkComparison, BenchmarkSource, SaleabilityBand, SaleabilityResult, ValuationResult,
    Verdict,
};

// ============================================================================
// Engine
// ============================================================================

pub mod engine;

pub use engine::{
    Appraisal, AppraisalConfig, Appraiser, Confidence, Intake, compare_to_benchmark,
    score_saleability, valuate,
};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use bizval::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Appraisal, AppraisalConfig, Appraiser, BenchmarkSource, BizvalError, IndustryTrack,
        Intake, RawAttributes, Result, ValuationStrategy,
    };
}
