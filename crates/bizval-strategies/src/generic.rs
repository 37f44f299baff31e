//! Fallback valuation for every industry without its own track.

use bizval_traits::numeric::{round_half_up, sum_deltas};
use bizval_traits::{
    IndustryTrack, MultipleAdjustment, RawAttributes, Result, Valuation, ValuationStrategy,
};
use serde::{Deserialize, Serialize};

use crate::intake::{self, fields};

/// Revenue above which the multiple gains 0.5.
pub const SCALE_THRESHOLD: f64 = 1_000_000.0;

/// Revenue above which the multiple gains a further 1.0.
pub const LARGE_SCALE_THRESHOLD: f64 = 5_000_000.0;

/// Stacking revenue-scale bonuses shared by the e-commerce and generic tracks.
pub(crate) fn revenue_scale_adjustments(revenue: f64) -> Vec<MultipleAdjustment> {
    let mut adjustments = Vec::new();
    if revenue > SCALE_THRESHOLD {
        adjustments.push(MultipleAdjustment::new("revenue over 1M", 0.5));
    }
    if revenue > LARGE_SCALE_THRESHOLD {
        adjustments.push(MultipleAdjustment::new("revenue over 5M", 1.0));
    }
    adjustments
}

/// Normalized attributes for a generic business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericAttributes {
    /// Annual revenue.
    pub revenue: f64,
    /// Annual net profit.
    pub net_profit: f64,
    /// Owner's wage (default 0).
    pub owner_wage: f64,
    /// Discretionary add-backs (default 0).
    pub add_backs: f64,
    /// Business assets at market value (default 0).
    pub asset_value: f64,
    /// Business debts (default 0).
    pub debt: f64,
}

impl GenericAttributes {
    /// Seller's discretionary earnings.
    #[must_use]
    pub fn sde(&self) -> f64 {
        self.net_profit + self.owner_wage + self.add_backs
    }
}

/// Generic strategy: base 2.5x with revenue-scale and earnings-size bonuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericStrategy;

impl GenericStrategy {
    /// Multiple before adjustments.
    pub const BASE_MULTIPLE: f64 = 2.5;

    /// SDE above which the multiple gains 0.25.
    pub const SDE_THRESHOLD: f64 = 250_000.0;

    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ValuationStrategy for GenericStrategy {
    type Attributes = GenericAttributes;

    fn name(&self) -> &str {
        "generic"
    }

    fn track(&self) -> IndustryTrack {
        IndustryTrack::Generic
    }

    fn normalize(&self, raw: &RawAttributes) -> Result<GenericAttributes> {
        Ok(GenericAttributes {
            revenue: intake::required_number(raw, fields::REVENUE)?,
            net_profit: intake::required_number(raw, fields::NET_PROFIT)?,
            owner_wage: intake::optional_number(raw, fields::OWNER_WAGE, 0.0),
            add_backs: intake::optional_number(raw, fields::ADD_BACKS, 0.0),
            asset_value: intake::optional_number(raw, fields::ASSET_VALUE, 0.0),
            debt: intake::optional_number(raw, fields::DEBT, 0.0),
        })
    }

    fn valuate(&self, attrs: &GenericAttributes) -> Valuation {
        let sde = attrs.sde();
        let mut adjustments = revenue_scale_adjustments(attrs.revenue);
        if sde > Self::SDE_THRESHOLD {
            adjustments.push(MultipleAdjustment::new("SDE over 250k", 0.25));
        }
        let multiple = sum_deltas(Self::BASE_MULTIPLE, adjustments.iter().map(|a| a.delta));

        Valuation {
            track: IndustryTrack::Generic,
            sde,
            base_multiple: Self::BASE_MULTIPLE,
            adjustments,
            multiple,
            estimated_value: round_half_up(sde * multiple + attrs.asset_value - attrs.debt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_generic_valuation() {
        let raw = RawAttributes::new()
            .with("revenue", 6_000_000.0)
            .with("netProfit", 300_000.0);

        let valuation = GenericStrategy.valuate_raw(&raw).unwrap();
        assert_relative_eq!(valuation.sde, 300_000.0);
        assert_relative_eq!(valuation.multiple, 4.25);
        assert_eq!(valuation.estimated_value, 1_275_000.0);
        assert_eq!(valuation.adjustments.len(), 3);
    }

    #[test]
    fn test_small_business_base_multiple() {
        let attrs = GenericAttributes {
            revenue: 400_000.0,
            net_profit: 80_000.0,
            owner_wage: 40_000.0,
            ..Default::default()
        };
        let valuation = GenericStrategy.valuate(&attrs);
        assert_relative_eq!(valuation.multiple, 2.5);
        assert_eq!(valuation.estimated_value, 300_000.0);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let attrs = GenericAttributes {
            revenue: 1_000_000.0,
            net_profit: 250_000.0,
            ..Default::default()
        };
        assert_relative_eq!(GenericStrategy.valuate(&attrs).multiple, 2.5);

        let attrs = GenericAttributes {
            revenue: 1_000_001.0,
            ..attrs
        };
        assert_relative_eq!(GenericStrategy.valuate(&attrs).multiple, 3.0);
    }

    #[test]
    fn test_assets_and_debt() {
        let attrs = GenericAttributes {
            revenue: 500_000.0,
            net_profit: 100_000.0,
            asset_value: 30_000.0,
            debt: 80_000.0,
            ..Default::default()
        };
        let valuation = GenericStrategy.valuate(&attrs);
        assert_eq!(valuation.estimated_value, 200_000.0);
    }

    #[test]
    fn test_negative_valuation_allowed() {
        let attrs = GenericAttributes {
            revenue: 50_000.0,
            net_profit: -20_000.0,
            debt: 10_000.0,
            ..Default::default()
        };
        let valuation = GenericStrategy.valuate(&attrs);
        assert_eq!(valuation.estimated_value, -60_000.0);
    }

    #[test]
    fn test_revenue_scale_adjustments_stack() {
        assert!(revenue_scale_adjustments(999_999.0).is_empty());
        assert_eq!(revenue_scale_adjustments(2_000_000.0).len(), 1);
        let big = revenue_scale_adjustments(5_000_001.0);
        assert_relative_eq!(big.iter().map(|a| a.delta).sum::<f64>(), 1.5);
    }
}
