#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core trait definitions for the bizval valuation engine.
//!
//! This crate provides the foundational abstractions shared by the valuation
//! strategies, the scoring calculators and the appraisal engine.

/// The version of the bizval-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod numeric;
pub mod strategy;
pub mod types;

// Re-exports
pub use error::{BizvalError, Result};
pub use strategy::ValuationStrategy;
pub use types::{
    IndustryTrack, MultipleAdjustment, OwnerInvolvement, RawAttributes, RawValue, Valuation,
};
