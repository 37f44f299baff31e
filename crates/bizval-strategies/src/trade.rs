//! Trade business valuation.

use bizval_traits::numeric::{round_half_up, sum_deltas};
use bizval_traits::{
    IndustryTrack, MultipleAdjustment, OwnerInvolvement, RawAttributes, Result, Valuation,
    ValuationStrategy,
};
use serde::{Deserialize, Serialize};

use crate::intake::{self, fields};

/// Normalized attributes for a trade or services business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeAttributes {
    /// Annual revenue.
    pub revenue: f64,
    /// Annual net profit.
    pub net_profit: f64,
    /// Owner's wage included in expenses (default 0).
    pub owner_wage: f64,
    /// Discretionary add-backs (default 0).
    pub add_backs: f64,
    /// Equipment and tools at market value (default 0).
    pub equipment_value: f64,
    /// Vehicles at market value (default 0).
    pub vehicle_value: f64,
    /// Business debts (default 0).
    pub debt: f64,
    /// Whether revenue is recurring or contracted (default false).
    pub recurring: bool,
    /// Staff excluding the owner (default 0).
    pub staff_count: f64,
    /// Owner involvement; `None` is treated like `Medium`.
    pub owner_involvement: Option<OwnerInvolvement>,
    /// Years trading (default 0).
    pub years_in_operation: f64,
    /// Percent of revenue from the top clients (default 0).
    pub top_client_revenue_pct: f64,
}

impl TradeAttributes {
    /// Seller's discretionary earnings: net profit plus owner wage plus add-backs.
    #[must_use]
    pub fn sde(&self) -> f64 {
        self.net_profit + self.owner_wage + self.add_backs
    }
}

/// Trade business strategy.
///
/// Starts at 2.0x SDE and adds independent adjustments:
///
/// | Condition                     | Delta  |
/// |-------------------------------|--------|
/// | recurring revenue             | +0.5   |
/// | more than 2 staff             | +0.25  |
/// | owner involvement Low / High  | ±0.25  |
/// | more than 5 years trading     | +0.25  |
/// | top clients > 50% of revenue  | -0.25  |
///
/// Hard assets are added and debt subtracted with no floor, so heavily
/// indebted businesses can value below zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct TradeStrategy;

impl TradeStrategy {
    /// Multiple before adjustments.
    pub const BASE_MULTIPLE: f64 = 2.0;

    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn adjustments(attrs: &TradeAttributes) -> Vec<MultipleAdjustment> {
        let mut adjustments = Vec::new();
        if attrs.recurring {
            adjustments.push(MultipleAdjustment::new("recurring revenue", 0.5));
        }
        if attrs.staff_count > 2.0 {
            adjustments.push(MultipleAdjustment::new("more than 2 staff", 0.25));
        }
        match attrs.owner_involvement {
            Some(OwnerInvolvement::Low) => {
                adjustments.push(MultipleAdjustment::new("low owner involvement", 0.25));
            }
            Some(OwnerInvolvement::High) => {
                adjustments.push(MultipleAdjustment::new("high owner involvement", -0.25));
            }
            Some(OwnerInvolvement::Medium) | None => {}
        }
        if attrs.years_in_operation > 5.0 {
            adjustments.push(MultipleAdjustment::new("more than 5 years trading", 0.25));
        }
        if attrs.top_client_revenue_pct > 50.0 {
            adjustments.push(MultipleAdjustment::new("client concentration over 50%", -0.25));
        }
        adjustments
    }
}

impl ValuationStrategy for TradeStrategy {
    type Attributes = TradeAttributes;

    fn name(&self) -> &str {
        "trade"
    }

    fn track(&self) -> IndustryTrack {
        IndustryTrack::Trade
    }

    fn normalize(&self, raw: &RawAttributes) -> Result<TradeAttributes> {
        Ok(TradeAttributes {
            revenue: intake::required_number(raw, fields::REVENUE)?,
            net_profit: intake::required_number(raw, fields::NET_PROFIT)?,
            owner_wage: intake::optional_number(raw, fields::OWNER_WAGE, 0.0),
            add_backs: intake::optional_number(raw, fields::ADD_BACKS, 0.0),
            equipment_value: intake::optional_number(raw, fields::EQUIPMENT_VALUE, 0.0),
            vehicle_value: intake::optional_number(raw, fields::VEHICLE_VALUE, 0.0),
            debt: intake::optional_number(raw, fields::DEBT, 0.0),
            recurring: intake::recurring_flag(raw),
            staff_count: intake::optional_number(raw, fields::STAFF_COUNT, 0.0),
            owner_involvement: intake::owner_involvement(raw),
            years_in_operation: intake::optional_number(raw, fields::YEARS_IN_OPERATION, 0.0),
            top_client_revenue_pct: intake::optional_number(
                raw,
                fields::TOP_CLIENT_REVENUE_PCT,
                0.0,
            ),
        })
    }

    fn valuate(&self, attrs: &TradeAttributes) -> Valuation {
        let sde = attrs.sde();
        let adjustments = Self::adjustments(attrs);
        let multiple = sum_deltas(Self::BASE_MULTIPLE, adjustments.iter().map(|a| a.delta));
        let raw_value = sde * multiple + attrs.equipment_value + attrs.vehicle_value - attrs.debt;

        Valuation {
            track: IndustryTrack::Trade,
            sde,
            base_multiple: Self::BASE_MULTIPLE,
            adjustments,
            multiple,
            estimated_value: round_half_up(raw_value),
        }
    }
}
