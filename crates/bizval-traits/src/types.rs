//! Common types used throughout the bizval engine.
//!
//! This module defines the raw intake representation handed over by the form
//! layer, the industry tracks that select a valuation strategy, and the
//! valuation record each strategy produces.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single submitted questionnaire value.
///
/// The form layer stores whatever the browser sent: numbers, strings typed
/// into number inputs, select labels, booleans or explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A JSON number.
    Number(f64),
    /// A JSON boolean.
    Flag(bool),
    /// Free text, a select label, or a number typed as text.
    Text(String),
    /// An explicit null. Treated exactly like a missing key.
    Null,
}

impl RawValue {
    /// Returns true for `Null` and for text that is empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) | Self::Flag(_) => false,
        }
    }

    /// Returns the trimmed text for `Text` values.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.trim()),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Flat mapping of questionnaire field name to submitted value.
///
/// # Example
///
/// ```
/// use bizval_traits::{RawAttributes, RawValue};
///
/// let attrs = RawAttributes::new()
///     .with("revenue", 500_000.0)
///     .with("ownerInvolvement", "Low");
///
/// assert_eq!(attrs.len(), 2);
/// assert_eq!(attrs.get("ownerInvolvement"), Some(&RawValue::from("Low")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAttributes {
    fields: BTreeMap<String, RawValue>,
}

impl RawAttributes {
    /// Creates an empty attribute bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the value for `name`, treating `Null` as absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.get(name).filter(|v| !matches!(v, RawValue::Null))
    }

    /// Returns the first non-blank value among `names`, with the key it was found under.
    ///
    /// Nulls and empty text are skipped, so a stale empty field never hides an
    /// alias that carries the answer.
    #[must_use]
    pub fn first_of<'a>(&'a self, names: &[&'a str]) -> Option<(&'a str, &'a RawValue)> {
        names.iter().find_map(|name| {
            self.get(name)
                .filter(|value| !value.is_blank())
                .map(|value| (*name, value))
        })
    }

    /// Returns whether a non-blank value exists for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.first_of(&[name]).is_some()
    }

    /// Number of stored fields, including explicit nulls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over stored fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, RawValue)> for RawAttributes {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// The valuation strategy an industry routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustryTrack {
    /// Services and trade businesses (plumbers, electricians, cleaners).
    Trade,
    /// Online retail.
    Ecommerce,
    /// Every other industry.
    Generic,
}

impl IndustryTrack {
    /// All tracks, in display order.
    pub const ALL: [Self; 3] = [Self::Trade, Self::Ecommerce, Self::Generic];

    /// Routes a submitted industry category to a track.
    ///
    /// Matching ignores case and surrounding whitespace. Anything that is not
    /// a trade or e-commerce category, including an empty string, is generic.
    #[must_use]
    pub fn from_category(category: &str) -> Self {
        let normalized = category.trim().to_ascii_lowercase();
        let track = match normalized.as_str() {
            "trade business" | "trade" | "trades" => Self::Trade,
            "e-commerce" | "ecommerce" | "e commerce" => Self::Ecommerce,
            _ => Self::Generic,
        };
        tracing::debug!(category, ?track, "routed industry category");
        track
    }

    /// Short machine name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Trade => "trade",
            Self::Ecommerce => "ecommerce",
            Self::Generic => "generic",
        }
    }

    /// Human-readable description of how the track values a business.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Trade => {
                "SDE incl. owner wage, base 2.0x adjusted for recurrence, staff, owner role, \
                 tenure and client concentration, plus equipment and vehicles less debt"
            }
            Self::Ecommerce => {
                "SDE excl. owner wage, base 2.5x adjusted for revenue scale, business model, \
                 traffic source and owner hours, plus inventory"
            }
            Self::Generic => {
                "SDE incl. owner wage, base 2.5x adjusted for revenue scale and earnings size, \
                 plus assets less debt"
            }
        }
    }
}

impl fmt::Display for IndustryTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for IndustryTrack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trade" => Ok(Self::Trade),
            "ecommerce" | "e-commerce" => Ok(Self::Ecommerce),
            "generic" => Ok(Self::Generic),
            other => Err(format!(
                "unknown track '{other}' (expected trade, ecommerce or generic)"
            )),
        }
    }
}

/// How much the business depends on its owner day to day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OwnerInvolvement {
    /// The business largely runs without the owner.
    Low,
    /// Some owner involvement; also the neutral default.
    #[default]
    Medium,
    /// The owner is central to operations.
    High,
}

impl OwnerInvolvement {
    /// Parses a questionnaire option. Only the exact labels are recognised.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }

    /// The questionnaire label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for OwnerInvolvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One additive change to the base multiple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleAdjustment {
    /// What triggered the adjustment, e.g. "recurring revenue".
    pub factor: String,
    /// Signed amount added to the multiple.
    pub delta: f64,
}

impl MultipleAdjustment {
    /// Creates an adjustment.
    #[must_use]
    pub fn new(factor: impl Into<String>, delta: f64) -> Self {
        Self {
            factor: factor.into(),
            delta,
        }
    }
}

/// Output of a valuation strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// Track that produced this valuation.
    pub track: IndustryTrack,
    /// Seller's discretionary earnings the multiple was applied to.
    pub sde: f64,
    /// Base multiple before adjustments.
    pub base_multiple: f64,
    /// Adjustments that fired, in evaluation order.
    pub adjustments: Vec<MultipleAdjustment>,
    /// Final multiple (base plus all adjustments).
    pub multiple: f64,
    /// Point estimate, rounded to whole currency units.
    pub estimated_value: f64,
}
