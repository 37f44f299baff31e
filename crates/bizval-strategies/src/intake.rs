//! Attribute normalization.
//!
//! Questionnaire answers arrive as whatever the browser sent. These helpers
//! coerce them into typed values with one policy: required fields (revenue and
//! net profit) fail fast, every optional field silently falls back to its
//! neutral default.

use bizval_traits::{BizvalError, OwnerInvolvement, RawAttributes, RawValue, Result};

/// Field names accepted for each canonical attribute, first match wins.
///
/// The first entry is the canonical name used in error messages; the rest are
/// the questionnaire's own field names.
pub mod fields {
    /// Annual revenue.
    pub const REVENUE: &[&str] = &["revenue", "annualRevenue"];
    /// Annual net profit.
    pub const NET_PROFIT: &[&str] = &["netProfit"];
    /// Owner's wage or drawings.
    pub const OWNER_WAGE: &[&str] = &["ownerWage"];
    /// Discretionary add-backs.
    pub const ADD_BACKS: &[&str] = &["addBacks", "ownerAddBacks"];
    /// Equipment and tools.
    pub const EQUIPMENT_VALUE: &[&str] = &["equipmentValue"];
    /// Vehicles.
    pub const VEHICLE_VALUE: &[&str] = &["vehicleValue"];
    /// Business debts and liabilities.
    pub const DEBT: &[&str] = &["debt", "businessDebts"];
    /// Recurring revenue flag.
    pub const RECURRING: &[&str] = &["recurring", "recurringRevenue"];
    /// Staff headcount excluding the owner.
    pub const STAFF_COUNT: &[&str] = &["staffCount", "numberOfStaff", "fullTimeStaff"];
    /// Owner involvement select (`Low`/`Medium`/`High`, or weekly hours for e-commerce).
    pub const OWNER_INVOLVEMENT: &[&str] = &["ownerInvolvement"];
    /// Years trading.
    pub const YEARS_IN_OPERATION: &[&str] = &["yearsInOperation"];
    /// Share of revenue from the largest clients, in percent.
    pub const TOP_CLIENT_REVENUE_PCT: &[&str] = &["topClientRevenuePct", "clientConcentration"];
    /// E-commerce business model select.
    pub const BUSINESS_MODEL: &[&str] = &["businessModel", "model"];
    /// E-commerce traffic source select.
    pub const TRAFFIC_SOURCE: &[&str] = &["trafficSource", "traffic"];
    /// Owner's weekly hours as a number.
    pub const OWNER_HOURS: &[&str] = &["ownerHours"];
    /// Inventory at cost.
    pub const INVENTORY_VALUE: &[&str] = &["inventoryValue", "inventory"];
    /// Generic asset value.
    pub const ASSET_VALUE: &[&str] = &["assetValue"];
}

/// Coerces a raw value to a finite number.
///
/// Numbers pass through. Text is trimmed and a leading `$` and any `,`
/// separators are dropped before parsing. Booleans, blanks, nulls and
/// non-finite results yield `None`.
///
/// # Examples
///
/// ```
/// use bizval_strategies::intake::parse_number;
/// use bizval_traits::RawValue;
///
/// assert_eq!(parse_number(&RawValue::from("$150,000")), Some(150_000.0));
/// assert_eq!(parse_number(&RawValue::from(" 42.5 ")), Some(42.5));
/// assert_eq!(parse_number(&RawValue::from("n/a")), None);
/// assert_eq!(parse_number(&RawValue::from("")), None);
/// ```
#[must_use]
pub fn parse_number(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(n) if n.is_finite() => Some(*n),
        RawValue::Text(s) => {
            let trimmed = s.trim();
            let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
            let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

/// Reads a required numeric field.
///
/// # Errors
///
/// Returns [`BizvalError::MissingField`] when no alias is present or the value
/// is blank, and [`BizvalError::InvalidField`] when it cannot be coerced.
pub fn required_number(raw: &RawAttributes, names: &[&str]) -> Result<f64> {
    let canonical = names.first().copied().unwrap_or("field");
    let Some((_, value)) = raw.first_of(names) else {
        return Err(BizvalError::MissingField(canonical.to_string()));
    };
    parse_number(value).ok_or_else(|| BizvalError::InvalidField {
        field: canonical.to_string(),
        value: value.to_string(),
    })
}

/// Reads an optional numeric field, returning `default` when absent or invalid.
#[must_use]
pub fn optional_number(raw: &RawAttributes, names: &[&str], default: f64) -> f64 {
    match raw.first_of(names) {
        None => default,
        Some((key, value)) => parse_number(value).unwrap_or_else(|| {
            tracing::debug!(field = key, %value, default, "non-numeric optional field defaulted");
            default
        }),
    }
}

/// Reads an optional numeric field, keeping absence distinguishable.
#[must_use]
pub fn maybe_number(raw: &RawAttributes, names: &[&str]) -> Option<f64> {
    raw.first_of(names).and_then(|(_, value)| parse_number(value))
}

/// Reads a closed-set text option. Unrecognised labels count as absent.
#[must_use]
pub fn optional_option<T>(
    raw: &RawAttributes,
    names: &[&str],
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let (key, value) = raw.first_of(names)?;
    let label = value.as_text()?;
    let parsed = parse(label);
    if parsed.is_none() {
        tracing::debug!(field = key, label, "unrecognised option treated as absent");
    }
    parsed
}

/// Reads the recurring-revenue flag.
///
/// Accepts a JSON boolean or the `Yes`/`No` select labels; anything else,
/// including a recurring-revenue percentage, reads as not recurring.
#[must_use]
pub fn recurring_flag(raw: &RawAttributes) -> bool {
    match raw.first_of(fields::RECURRING) {
        Some((_, RawValue::Flag(b))) => *b,
        Some((_, RawValue::Text(s))) => s.trim() == "Yes",
        _ => false,
    }
}

/// Reads the `Low`/`Medium`/`High` owner involvement select.
#[must_use]
pub fn owner_involvement(raw: &RawAttributes) -> Option<OwnerInvolvement> {
    optional_option(raw, fields::OWNER_INVOLVEMENT, OwnerInvolvement::from_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_variants() {
        assert_eq!(parse_number(&RawValue::Number(12.5)), Some(12.5));
        assert_eq!(parse_number(&RawValue::from("1,250,000")), Some(1_250_000.0));
        assert_eq!(parse_number(&RawValue::from("-500")), Some(-500.0));
        assert_eq!(parse_number(&RawValue::from("NaN")), None);
        assert_eq!(parse_number(&RawValue::from("inf")), None);
        assert_eq!(parse_number(&RawValue::from("$")), None);
        assert_eq!(parse_number(&RawValue::Flag(true)), None);
        assert_eq!(parse_number(&RawValue::Null), None);
    }

    #[test]
    fn test_required_number_missing() {
        let raw = RawAttributes::new();
        let err = required_number(&raw, fields::REVENUE).unwrap_err();
        assert!(matches!(err, BizvalError::MissingField(ref f) if f == "revenue"));
    }

    #[test]
    fn test_required_number_blank_is_missing() {
        let raw = RawAttributes::new().with("netProfit", "   ");
        let err = required_number(&raw, fields::NET_PROFIT).unwrap_err();
        assert!(matches!(err, BizvalError::MissingField(_)));
    }

    #[test]
    fn test_required_number_invalid() {
        let raw = RawAttributes::new().with("annualRevenue", "about a million");
        let err = required_number(&raw, fields::REVENUE).unwrap_err();
        assert!(matches!(err, BizvalError::InvalidField { ref field, .. } if field == "revenue"));
        assert!(err.to_string().contains("about a million"));
    }

    #[test]
    fn test_required_number_alias() {
        let raw = RawAttributes::new().with("annualRevenue", "750000");
        assert_eq!(required_number(&raw, fields::REVENUE).unwrap(), 750_000.0);
    }

    #[test]
    fn test_optional_number_defaults() {
        let raw = RawAttributes::new()
            .with("ownerWage", "")
            .with("addBacks", "lots")
            .with("debt", 1_000.0);

        assert_eq!(optional_number(&raw, fields::OWNER_WAGE, 0.0), 0.0);
        assert_eq!(optional_number(&raw, fields::ADD_BACKS, 0.0), 0.0);
        assert_eq!(optional_number(&raw, fields::DEBT, 0.0), 1_000.0);
        assert_eq!(optional_number(&raw, fields::VEHICLE_VALUE, 0.0), 0.0);
    }

    #[test]
    fn test_maybe_number() {
        let raw = RawAttributes::new().with("ownerHours", "3");
        assert_eq!(maybe_number(&raw, fields::OWNER_HOURS), Some(3.0));
        assert_eq!(maybe_number(&RawAttributes::new(), fields::OWNER_HOURS), None);
    }

    #[test]
    fn test_recurring_flag() {
        assert!(recurring_flag(&RawAttributes::new().with("recurring", true)));
        assert!(recurring_flag(&RawAttributes::new().with("recurringRevenue", "Yes")));
        assert!(!recurring_flag(&RawAttributes::new().with("recurringRevenue", "No")));
        assert!(!recurring_flag(&RawAttributes::new().with("recurringRevenue", "yes please")));
        assert!(!recurring_flag(&RawAttributes::new().with("recurringRevenue", 40.0)));
        assert!(!recurring_flag(&RawAttributes::new()));
    }

    #[test]
    fn test_blank_field_falls_through_to_alias() {
        let raw = RawAttributes::new()
            .with("revenue", "")
            .with("annualRevenue", 500_000.0);
        assert_eq!(required_number(&raw, fields::REVENUE).unwrap(), 500_000.0);

        let raw = RawAttributes::new()
            .with("debt", "")
            .with("businessDebts", 50_000.0)
            .with("staffCount", "")
            .with("fullTimeStaff", 5.0)
            .with("recurring", "")
            .with("recurringRevenue", "Yes")
            .with("businessModel", " ")
            .with("model", "Subscription");

        assert_eq!(optional_number(&raw, fields::DEBT, 0.0), 50_000.0);
        assert_eq!(optional_number(&raw, fields::STAFF_COUNT, 0.0), 5.0);
        assert_eq!(maybe_number(&raw, fields::STAFF_COUNT), Some(5.0));
        assert!(recurring_flag(&raw));
        assert_eq!(
            optional_option(&raw, fields::BUSINESS_MODEL, |label| {
                (label == "Subscription").then_some(label.len())
            }),
            Some(12)
        );
    }

    #[test]
    fn test_owner_involvement_unrecognised_is_absent() {
        let raw = RawAttributes::new().with("ownerInvolvement", "Sometimes");
        assert_eq!(owner_involvement(&raw), None);

        let raw = RawAttributes::new().with("ownerInvolvement", "High");
        assert_eq!(owner_involvement(&raw), Some(OwnerInvolvement::High));
    }
}
