//! Valuation range.
//!
//! Expands a point estimate into the low/high band shown to the seller and
//! reports the ± spread as a percentage of the estimate.

use bizval_traits::{BizvalError, Result, Valuation};
use serde::{Deserialize, Serialize};

/// Configuration for the confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Factor applied to the estimate for the low end
    pub low_factor: f64,
    /// Factor applied to the estimate for the high end
    pub high_factor: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            low_factor: 0.85,
            high_factor: 1.15,
        }
    }
}

impl RangeConfig {
    /// Checks that both factors are positive and `low_factor <= high_factor`.
    ///
    /// # Errors
    ///
    /// Returns [`BizvalError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !(self.low_factor.is_finite() && self.low_factor > 0.0) {
            return Err(BizvalError::InvalidConfig(format!(
                "range low_factor must be positive, got {}",
                self.low_factor
            )));
        }
        if !(self.high_factor.is_finite() && self.high_factor >= self.low_factor) {
            return Err(BizvalError::InvalidConfig(format!(
                "range high_factor must be at least low_factor ({}), got {}",
                self.low_factor, self.high_factor
            )));
        }
        Ok(())
    }
}

/// Point estimate with its confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Rounded point estimate
    pub estimated_value: f64,
    /// Multiple actually applied
    pub multiple: f64,
    /// Low end of the band
    pub low_range: f64,
    /// High end of the band
    pub high_range: f64,
}

impl ValuationResult {
    /// Builds the band around `estimated_value`.
    ///
    /// The factors are applied literally, so for a negative estimate the
    /// "low" end is numerically above the "high" end.
    ///
    /// # Example
    ///
    /// ```
    /// use bizval_eval::{RangeConfig, ValuationResult};
    ///
    /// let result = ValuationResult::new(755_000.0, 3.25, &RangeConfig::default());
    /// assert!((result.low_range - 641_750.0).abs() < 1e-6);
    /// assert_eq!(result.spread_percent().map(f64::round), Some(15.0));
    /// ```
    #[must_use]
    pub fn new(estimated_value: f64, multiple: f64, config: &RangeConfig) -> Self {
        Self {
            estimated_value,
            multiple,
            low_range: estimated_value * config.low_factor,
            high_range: estimated_value * config.high_factor,
        }
    }

    /// Builds the band for a strategy's valuation.
    #[must_use]
    pub fn from_valuation(valuation: &Valuation, config: &RangeConfig) -> Self {
        Self::new(valuation.estimated_value, valuation.multiple, config)
    }

    /// Half the band width as a percentage of the estimate.
    ///
    /// Returns `None` when the estimate is zero or negative, where a
    /// percentage would be meaningless.
    #[must_use]
    pub fn spread_percent(&self) -> Option<f64> {
        if self.estimated_value > 0.0 {
            Some((self.high_range - self.low_range) / 2.0 / self.estimated_value * 100.0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_band() {
        let result = ValuationResult::new(1_000_000.0, 3.0, &RangeConfig::default());
        assert_relative_eq!(result.low_range, 850_000.0);
        assert_relative_eq!(result.high_range, 1_150_000.0);
        assert_relative_eq!(result.spread_percent().unwrap(), 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_band_brackets_positive_estimate() {
        for value in [1.0, 985_000.0, 1_275_000.0, 42_000_000.0] {
            let result = ValuationResult::new(value, 2.5, &RangeConfig::default());
            assert!(result.low_range < value);
            assert!(value < result.high_range);
            assert_relative_eq!(
                result.high_range / result.low_range,
                1.15 / 0.85,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_zero_and_negative_have_no_spread() {
        let zero = ValuationResult::new(0.0, 2.0, &RangeConfig::default());
        assert_eq!(zero.spread_percent(), None);
        assert_eq!(zero.low_range, 0.0);

        let negative = ValuationResult::new(-80_000.0, 2.0, &RangeConfig::default());
        assert_eq!(negative.spread_percent(), None);
        assert!(negative.low_range > negative.high_range);
    }

    #[test]
    fn test_custom_factors() {
        let config = RangeConfig {
            low_factor: 0.9,
            high_factor: 1.1,
        };
        let result = ValuationResult::new(200_000.0, 2.0, &config);
        assert_relative_eq!(result.low_range, 180_000.0);
        assert_relative_eq!(result.spread_percent().unwrap(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_validate() {
        assert!(RangeConfig::default().validate().is_ok());
        assert!(RangeConfig {
            low_factor: 0.0,
            high_factor: 1.1
        }
        .validate()
        .is_err());
        assert!(RangeConfig {
            low_factor: 1.2,
            high_factor: 1.1
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: RangeConfig = serde_json::from_str(r#"{"low_factor": 0.8}"#).unwrap();
        assert_relative_eq!(config.low_factor, 0.8);
        assert_relative_eq!(config.high_factor, 1.15);
    }
}
