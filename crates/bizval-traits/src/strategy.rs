//! Valuation strategy trait.
//!
//! This module defines the `ValuationStrategy` trait, the common contract of
//! every industry track: typed attributes in, a rounded valuation out. The
//! attribute type is an associated type so each track carries its own closed
//! schema, while the raw-bag entry point lets callers stay track-agnostic.

use crate::{IndustryTrack, RawAttributes, Result, Valuation};

/// An industry-specific valuation formula.
///
/// Implementations must be pure: the same attributes always produce the same
/// valuation, and no call has side effects beyond log events. They are
/// `Send + Sync` so a single instance can serve concurrent callers.
///
/// # Example
///
/// ```
/// use bizval_traits::{IndustryTrack, RawAttributes, Result, Valuation, ValuationStrategy};
///
/// struct FlatMultiple;
///
/// impl ValuationStrategy for FlatMultiple {
///     type Attributes = f64;
///
///     fn name(&self) -> &str {
///         "flat"
///     }
///
///     fn track(&self) -> IndustryTrack {
///         IndustryTrack::Generic
///     }
///
///     fn normalize(&self, raw: &RawAttributes) -> Result<f64> {
///         Ok(match raw.get("sde") {
///             Some(bizval_traits::RawValue::Number(n)) => *n,
///             _ => 0.0,
///         })
///     }
///
///     fn valuate(&self, sde: &f64) -> Valuation {
///         Valuation {
///             track: IndustryTrack::Generic,
///             sde: *sde,
///             base_multiple: 3.0,
///             adjustments: vec![],
///             multiple: 3.0,
///             estimated_value: (sde * 3.0).round(),
///         }
///     }
/// }
///
/// let raw = RawAttributes::new().with("sde", 100.0);
/// assert_eq!(FlatMultiple.valuate_raw(&raw).unwrap().estimated_value, 300.0);
/// ```
pub trait ValuationStrategy: Send + Sync {
    /// Typed, fully-defaulted attributes this strategy consumes.
    type Attributes;

    /// Returns the name of this strategy, used in logs and reports.
    fn name(&self) -> &str;

    /// Returns the track this strategy implements.
    fn track(&self) -> IndustryTrack;

    /// Coerces a raw attribute bag into this strategy's attributes.
    ///
    /// # Errors
    ///
    /// Returns an error only when a required field is missing or is not a
    /// number. Optional fields fall back to their documented defaults.
    fn normalize(&self, raw: &RawAttributes) -> Result<Self::Attributes>;

    /// Computes the valuation for already-normalized attributes.
    fn valuate(&self, attrs: &Self::Attributes) -> Valuation;

    /// Normalizes a raw bag and valuates it in one step.
    ///
    /// # Errors
    ///
    /// Propagates normalization errors.
    fn valuate_raw(&self, raw: &RawAttributes) -> Result<Valuation> {
        let attrs = self.normalize(raw)?;
        let valuation = self.valuate(&attrs);
        tracing::debug!(
            strategy = self.name(),
            sde = valuation.sde,
            multiple = valuation.multiple,
            value = valuation.estimated_value,
            "valuation computed"
        );
        Ok(valuation)
    }
}
