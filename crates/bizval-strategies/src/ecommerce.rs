//! E-commerce valuation.

use std::fmt;

use bizval_traits::numeric::{round_half_up, sum_deltas};
use bizval_traits::{
    IndustryTrack, MultipleAdjustment, RawAttributes, Result, Valuation, ValuationStrategy,
};
use serde::{Deserialize, Serialize};

use crate::generic::revenue_scale_adjustments;
use crate::intake::{self, fields};

/// How the store sources and sells its product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessModel {
    /// Supplier ships directly to customers.
    Dropshipping,
    /// Stock held in a warehouse or 3PL.
    OwnInventory,
    /// Subscription or membership revenue.
    Subscription,
    /// Fulfilled by Amazon.
    AmazonFba,
    /// Downloadable or digital goods.
    DigitalProduct,
}

impl BusinessModel {
    /// Parses a questionnaire option, accepting both the short and long labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Dropshipping" => Some(Self::Dropshipping),
            "Own Inventory" | "Own Inventory (warehouse or 3PL)" => Some(Self::OwnInventory),
            "Subscription" | "Subscription/Membership" => Some(Self::Subscription),
            "Amazon FBA" => Some(Self::AmazonFba),
            "Digital Product" => Some(Self::DigitalProduct),
            _ => None,
        }
    }

    /// The questionnaire label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dropshipping => "Dropshipping",
            Self::OwnInventory => "Own Inventory (warehouse or 3PL)",
            Self::Subscription => "Subscription/Membership",
            Self::AmazonFba => "Amazon FBA",
            Self::DigitalProduct => "Digital Product",
        }
    }

    /// Multiple delta for this model.
    #[must_use]
    pub const fn delta(&self) -> f64 {
        match self {
            Self::Subscription => 0.5,
            Self::DigitalProduct => 0.75,
            Self::OwnInventory => 0.25,
            Self::Dropshipping => -0.25,
            Self::AmazonFba => 0.0,
        }
    }
}

impl fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the store's traffic comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficSource {
    /// Entirely paid acquisition.
    PaidAds,
    /// Paid and organic mix.
    Mix,
    /// Mostly organic search and social.
    MostlyOrganic,
}

impl TrafficSource {
    /// Parses a questionnaire option.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "100% Paid Ads" => Some(Self::PaidAds),
            "Mix" | "Mix of Paid & Organic" => Some(Self::Mix),
            "Mostly Organic" => Some(Self::MostlyOrganic),
            _ => None,
        }
    }

    /// The questionnaire label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PaidAds => "100% Paid Ads",
            Self::Mix => "Mix of Paid & Organic",
            Self::MostlyOrganic => "Mostly Organic",
        }
    }

    /// Multiple delta for this traffic mix.
    #[must_use]
    pub const fn delta(&self) -> f64 {
        match self {
            Self::MostlyOrganic => 0.5,
            Self::PaidAds => -0.25,
            Self::Mix => 0.0,
        }
    }
}

impl fmt::Display for TrafficSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Owner's weekly hours, bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeeklyHours {
    /// Under 5 hours a week.
    Light,
    /// Between 5 and 15 hours a week.
    Moderate,
    /// More than 15 hours a week.
    Heavy,
}

impl WeeklyHours {
    /// Buckets a numeric hour count. Exactly 5 and exactly 15 are moderate.
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        if hours < 5.0 {
            Self::Light
        } else if hours > 15.0 {
            Self::Heavy
        } else {
            Self::Moderate
        }
    }

    /// Parses the weekly-hours select option.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "< 5 hrs/week" => Some(Self::Light),
            "5-15 hrs/week" => Some(Self::Moderate),
            "15+ hrs/week" => Some(Self::Heavy),
            _ => None,
        }
    }

    /// The questionnaire label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Light => "< 5 hrs/week",
            Self::Moderate => "5-15 hrs/week",
            Self::Heavy => "15+ hrs/week",
        }
    }

    /// Multiple delta for this band.
    #[must_use]
    pub const fn delta(&self) -> f64 {
        match self {
            Self::Light => 0.25,
            Self::Moderate => 0.0,
            Self::Heavy => -0.25,
        }
    }
}

/// Normalized attributes for an online store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EcommerceAttributes {
    /// Annual revenue.
    pub revenue: f64,
    /// Annual net profit.
    pub net_profit: f64,
    /// Discretionary add-backs (default 0).
    pub add_backs: f64,
    /// Business model, if recognised.
    pub business_model: Option<BusinessModel>,
    /// Traffic source, if recognised.
    pub traffic_source: Option<TrafficSource>,
    /// Owner's weekly hours band, if known.
    pub owner_hours: Option<WeeklyHours>,
    /// Inventory at cost (default 0).
    pub inventory_value: f64,
}

impl EcommerceAttributes {
    /// Seller's discretionary earnings. Owner wage is not part of e-commerce SDE.
    #[must_use]
    pub fn sde(&self) -> f64 {
        self.net_profit + self.add_backs
    }
}

/// E-commerce strategy.
///
/// Base 2.5x, then revenue scale (stacking), business model, traffic source
/// and owner hours. Inventory is added at cost; debt is not considered.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcommerceStrategy;

impl EcommerceStrategy {
    /// Multiple before adjustments.
    pub const BASE_MULTIPLE: f64 = 2.5;

    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn adjustments(attrs: &EcommerceAttributes) -> Vec<MultipleAdjustment> {
        let mut adjustments = revenue_scale_adjustments(attrs.revenue);

        if let Some(model) = attrs.business_model
            && model.delta() != 0.0
        {
            adjustments.push(MultipleAdjustment::new(
                format!("business model: {model}"),
                model.delta(),
            ));
        }
        if let Some(traffic) = attrs.traffic_source
            && traffic.delta() != 0.0
        {
            adjustments.push(MultipleAdjustment::new(
                format!("traffic: {traffic}"),
                traffic.delta(),
            ));
        }
        if let Some(hours) = attrs.owner_hours
            && hours.delta() != 0.0
        {
            adjustments.push(MultipleAdjustment::new(
                format!("owner hours: {}", hours.label()),
                hours.delta(),
            ));
        }
        adjustments
    }

    fn owner_hours(raw: &RawAttributes) -> Option<WeeklyHours> {
        if let Some(hours) = intake::maybe_number(raw, fields::OWNER_HOURS) {
            return Some(WeeklyHours::from_hours(hours));
        }
        // The questionnaire reuses the ownerInvolvement key for the hours select.
        intake::optional_option(raw, fields::OWNER_INVOLVEMENT, WeeklyHours::from_label)
    }
}

impl ValuationStrategy for EcommerceStrategy {
    type Attributes = EcommerceAttributes;

    fn name(&self) -> &str {
        "ecommerce"
    }

    fn track(&self) -> IndustryTrack {
        IndustryTrack::Ecommerce
    }

    fn normalize(&self, raw: &RawAttributes) -> Result<EcommerceAttributes> {
        Ok(EcommerceAttributes {
            revenue: intake::required_number(raw, fields::REVENUE)?,
            net_profit: intake::required_number(raw, fields::NET_PROFIT)?,
            add_backs: intake::optional_number(raw, fields::ADD_BACKS, 0.0),
            business_model: intake::optional_option(
                raw,
                fields::BUSINESS_MODEL,
                BusinessModel::from_label,
            ),
            traffic_source: intake::optional_option(
                raw,
                fields::TRAFFIC_SOURCE,
                TrafficSource::from_label,
            ),
            owner_hours: Self::owner_hours(raw),
            inventory_value: intake::optional_number(raw, fields::INVENTORY_VALUE, 0.0),
        })
    }

    fn valuate(&self, attrs: &EcommerceAttributes) -> Valuation {
        let sde = attrs.sde();
        let adjustments = Self::adjustments(attrs);
        let multiple = sum_deltas(Self::BASE_MULTIPLE, adjustments.iter().map(|a| a.delta));

        Valuation {
            track: IndustryTrack::Ecommerce,
            sde,
            base_multiple: Self::BASE_MULTIPLE,
            adjustments,
            multiple,
            estimated_value: round_half_up(sde * multiple + attrs.inventory_value),
        }
    }
}
