//! Valuation strategies for the bizval engine.
//!
//! This crate provides the three industry tracks and the intake normalization
//! they share:
//! - Trade: services businesses valued on SDE including owner wage, plus hard assets
//! - E-commerce: online stores valued on SDE excluding owner wage, plus inventory
//! - Generic: every other industry, with revenue-scale and earnings-size bonuses
//!
//! Each strategy turns a raw questionnaire bag into a rounded [`Valuation`]
//! with a named breakdown of the multiple.
//!
//! # Example
//!
//! ```
//! use bizval_strategies::dispatch;
//! use bizval_strategies::registry::get_industry_info;
//! use bizval_traits::RawAttributes;
//!
//! let track = get_industry_info("Retail").unwrap().track;
//! let raw = RawAttributes::new()
//!     .with("revenue", 6_000_000.0)
//!     .with("netProfit", 300_000.0);
//!
//! let valuation = dispatch::valuate(track, &raw).unwrap();
//! assert_eq!(valuation.estimated_value, 1_275_000.0);
//! ```
//!
//! [`Valuation`]: bizval_traits::Valuation

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod dispatch;
pub mod ecommerce;
pub mod generic;
pub mod intake;
pub mod registry;
pub mod trade;

// Re-export key types
pub use dispatch::BusinessAttributes;
pub use ecommerce::{BusinessModel, EcommerceAttributes, EcommerceStrategy, TrafficSource, WeeklyHours};
pub use generic::{GenericAttributes, GenericStrategy};
pub use registry::IndustryInfo;
pub use trade::{TradeAttributes, TradeStrategy};
