//! Track dispatch.
//!
//! [`BusinessAttributes`] is the closed union of per-track attribute records,
//! so callers that only know the track at runtime can normalize and valuate
//! without naming a concrete strategy.

use bizval_traits::{IndustryTrack, RawAttributes, Result, Valuation, ValuationStrategy};
use serde::{Deserialize, Serialize};

use crate::ecommerce::{EcommerceAttributes, EcommerceStrategy};
use crate::generic::{GenericAttributes, GenericStrategy};
use crate::trade::{TradeAttributes, TradeStrategy};

/// Normalized attributes for whichever track applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "track", rename_all = "lowercase")]
pub enum BusinessAttributes {
    /// Trade business attributes.
    Trade(TradeAttributes),
    /// E-commerce attributes.
    Ecommerce(EcommerceAttributes),
    /// Generic attributes.
    Generic(GenericAttributes),
}

impl BusinessAttributes {
    /// Normalizes a raw bag with the strategy for `track`.
    ///
    /// # Errors
    ///
    /// Returns an error when revenue or net profit is missing or not numeric.
    pub fn normalize(track: IndustryTrack, raw: &RawAttributes) -> Result<Self> {
        Ok(match track {
            IndustryTrack::Trade => Self::Trade(TradeStrategy.normalize(raw)?),
            IndustryTrack::Ecommerce => Self::Ecommerce(EcommerceStrategy.normalize(raw)?),
            IndustryTrack::Generic => Self::Generic(GenericStrategy.normalize(raw)?),
        })
    }

    /// The track these attributes belong to.
    #[must_use]
    pub const fn track(&self) -> IndustryTrack {
        match self {
            Self::Trade(_) => IndustryTrack::Trade,
            Self::Ecommerce(_) => IndustryTrack::Ecommerce,
            Self::Generic(_) => IndustryTrack::Generic,
        }
    }

    /// Annual revenue.
    #[must_use]
    pub const fn revenue(&self) -> f64 {
        match self {
            Self::Trade(a) => a.revenue,
            Self::Ecommerce(a) => a.revenue,
            Self::Generic(a) => a.revenue,
        }
    }

    /// Annual net profit.
    #[must_use]
    pub const fn net_profit(&self) -> f64 {
        match self {
            Self::Trade(a) => a.net_profit,
            Self::Ecommerce(a) => a.net_profit,
            Self::Generic(a) => a.net_profit,
        }
    }

    /// Runs the matching strategy.
    #[must_use]
    pub fn valuate(&self) -> Valuation {
        match self {
            Self::Trade(a) => TradeStrategy.valuate(a),
            Self::Ecommerce(a) => EcommerceStrategy.valuate(a),
            Self::Generic(a) => GenericStrategy.valuate(a),
        }
    }
}

/// Normalizes and valuates a raw bag on the given track.
///
/// # Errors
///
/// Propagates normalization errors.
pub fn valuate(track: IndustryTrack, raw: &RawAttributes) -> Result<Valuation> {
    let attrs = BusinessAttributes::normalize(track, raw)?;
    let valuation = attrs.valuate();
    tracing::debug!(
        %track,
        sde = valuation.sde,
        multiple = valuation.multiple,
        value = valuation.estimated_value,
        "valuation computed"
    );
    Ok(valuation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizval_traits::BizvalError;

    fn sample() -> RawAttributes {
        RawAttributes::new()
            .with("revenue", 6_000_000.0)
            .with("netProfit", 300_000.0)
    }

    #[test]
    fn test_dispatch_selects_track() {
        for track in IndustryTrack::ALL {
            let attrs = BusinessAttributes::normalize(track, &sample()).unwrap();
            assert_eq!(attrs.track(), track);
            assert_eq!(attrs.valuate().track, track);
            assert_eq!(attrs.revenue(), 6_000_000.0);
            assert_eq!(attrs.net_profit(), 300_000.0);
        }
    }

    #[test]
    fn test_dispatch_matches_direct_strategy() {
        let via_dispatch = valuate(IndustryTrack::Generic, &sample()).unwrap();
        let direct = GenericStrategy.valuate_raw(&sample()).unwrap();
        assert_eq!(via_dispatch, direct);
        assert_eq!(via_dispatch.estimated_value, 1_275_000.0);
    }

    #[test]
    fn test_same_inputs_differ_by_track() {
        let trade = valuate(IndustryTrack::Trade, &sample()).unwrap();
        let generic = valuate(IndustryTrack::Generic, &sample()).unwrap();
        assert_eq!(trade.estimated_value, 600_000.0);
        assert!(generic.estimated_value > trade.estimated_value);
    }

    #[test]
    fn test_dispatch_propagates_missing_revenue() {
        let raw = RawAttributes::new().with("netProfit", 10.0);
        let err = valuate(IndustryTrack::Ecommerce, &raw).unwrap_err();
        assert!(matches!(err, BizvalError::MissingField(_)));
    }

    #[test]
    fn test_attributes_serialize_with_track_tag() {
        let attrs = BusinessAttributes::normalize(IndustryTrack::Generic, &sample()).unwrap();
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["track"], "generic");
        assert_eq!(json["revenue"], 6_000_000.0);
    }
}
