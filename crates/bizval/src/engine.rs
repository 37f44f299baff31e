//! Appraisal engine.
//!
//! Runs the whole pipeline for one stored questionnaire submission: route the
//! industry to a track, normalize and valuate, build the range, score
//! saleability and compare against the industry benchmark.

use bizval_eval::{
    BenchmarkComparison, BenchmarkConfig, BenchmarkSource, RangeConfig, SaleabilityResult,
    ValuationResult, profit_margin_percent,
};
use bizval_strategies::BusinessAttributes;
use bizval_strategies::intake::{fields, owner_involvement, recurring_flag};
use bizval_traits::{
    BizvalError, IndustryTrack, OwnerInvolvement, RawAttributes, RawValue, Result, Valuation,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Configuration for the appraisal engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppraisalConfig {
    /// Confidence band around the point estimate
    pub range: RangeConfig,
    /// Benchmark fallback settings
    pub benchmark: BenchmarkConfig,
    /// Confidence level reported with every appraisal, in percent
    pub confidence_level: u8,
}

impl Default for AppraisalConfig {
    fn default() -> Self {
        Self {
            range: RangeConfig::default(),
            benchmark: BenchmarkConfig::default(),
            confidence_level: 85,
        }
    }
}

impl AppraisalConfig {
    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns [`BizvalError::InvalidConfig`] for the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        self.range.validate()?;
        self.benchmark.validate()?;
        if !(1..=100).contains(&self.confidence_level) {
            return Err(BizvalError::InvalidConfig(format!(
                "confidence_level must be between 1 and 100, got {}",
                self.confidence_level
            )));
        }
        Ok(())
    }
}

/// A stored questionnaire submission.
///
/// Field names follow the form layer's JSON: camelCase for the base form and
/// `industry_specific_data` for the per-industry answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Intake {
    /// Business name as entered.
    pub business_name: String,
    /// Industry category, e.g. "Trade Business".
    pub industry: String,
    /// Sub-category, e.g. "Plumbing".
    pub sub_category: Option<String>,
    /// Location as entered.
    pub location: Option<String>,
    /// Years trading, from the base form.
    pub years_in_operation: Option<RawValue>,
    /// Free-text industry benchmark narrative, if one was generated.
    pub benchmarks: Option<String>,
    /// Industry-specific answers.
    #[serde(rename = "industry_specific_data")]
    pub industry_specific_data: RawAttributes,
}

/// Stored submissions are either the flat request body or wrapped in the
/// persisted record's `form_data` field.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredIntake {
    Record { form_data: Intake },
    Flat(Intake),
}

impl Intake {
    /// Parses a submission from JSON.
    ///
    /// Accepts the flat request body as well as a persisted record that
    /// carries it under `form_data`.
    ///
    /// # Errors
    ///
    /// Returns [`BizvalError::Json`] when the text is not a JSON object of
    /// either shape.
    pub fn from_json(text: &str) -> Result<Self> {
        let stored: StoredIntake = serde_json::from_str(text)?;
        Ok(match stored {
            StoredIntake::Record { form_data } => form_data,
            StoredIntake::Flat(intake) => intake,
        })
    }

    /// Sub-category, with an empty selection treated as none.
    #[must_use]
    pub fn sub_category(&self) -> Option<&str> {
        self.sub_category
            .as_deref()
            .map(str::trim)
            .filter(|sub| !sub.is_empty())
    }

    /// Track the industry routes to.
    #[must_use]
    pub fn track(&self) -> IndustryTrack {
        IndustryTrack::from_category(&self.industry)
    }

    /// Industry answers with the base form's years in operation merged in.
    ///
    /// A value already present in the industry answers wins.
    #[must_use]
    pub fn attributes(&self) -> RawAttributes {
        let mut attrs = self.industry_specific_data.clone();
        if let Some(years) = &self.years_in_operation
            && !attrs.contains(fields::YEARS_IN_OPERATION[0])
        {
            attrs.insert(fields::YEARS_IN_OPERATION[0], years.clone());
        }
        attrs
    }
}

/// How much weight to put on an appraisal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confidence {
    /// Confidence level in percent
    pub level: u8,
    /// Qualitative label
    pub label: String,
}

impl Confidence {
    /// Labels a confidence level: 80 and above is High, 60 and above Medium.
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        let label = match level {
            80.. => "High",
            60..=79 => "Medium",
            _ => "Low",
        };
        Self {
            level,
            label: label.to_string(),
        }
    }
}

/// Everything computed for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appraisal {
    /// Business name from the intake
    pub business_name: String,
    /// Industry category from the intake
    pub industry: String,
    /// Sub-category from the intake
    pub sub_category: Option<String>,
    /// Date the appraisal was produced
    pub appraised_on: NaiveDate,
    /// Strategy output with the multiple breakdown
    pub valuation: Valuation,
    /// Point estimate and confidence band
    pub result: ValuationResult,
    /// ± spread in percent, `None` for non-positive estimates
    pub spread_percent: Option<f64>,
    /// Net profit over revenue, in percent
    pub profit_margin: f64,
    /// Saleability score and band
    pub saleability: SaleabilityResult,
    /// Comparison against the industry reference multiple
    pub benchmark: BenchmarkComparison,
    /// Confidence in the estimate
    pub confidence: Confidence,
}

/// Runs appraisals with a fixed configuration.
///
/// # Example
///
/// ```
/// use bizval::{Appraiser, Intake, RawAttributes};
///
/// let intake = Intake {
///     business_name: "Corner Cafe".into(),
///     industry: "Food & Beverage".into(),
///     industry_specific_data: RawAttributes::new()
///         .with("annualRevenue", "6,000,000")
///         .with("netProfit", 300_000.0),
///     ..Default::default()
/// };
///
/// let appraisal = Appraiser::default().appraise(&intake).unwrap();
/// assert_eq!(appraisal.result.estimated_value, 1_275_000.0);
/// assert_eq!(appraisal.confidence.label, "High");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Appraiser {
    config: AppraisalConfig,
}

impl Appraiser {
    /// Creates an appraiser after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BizvalError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: AppraisalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &AppraisalConfig {
        &self.config
    }

    /// Valuates a raw bag on `track` and builds its range.
    ///
    /// # Errors
    ///
    /// Returns an error when revenue or net profit is missing or not numeric.
    pub fn valuate(&self, track: IndustryTrack, raw: &RawAttributes) -> Result<ValuationResult> {
        let valuation = bizval_strategies::dispatch::valuate(track, raw)?;
        Ok(ValuationResult::from_valuation(&valuation, &self.config.range))
    }

    /// Compares a multiple against the reference resolved from `source`.
    #[must_use]
    pub fn compare_to_benchmark(
        &self,
        multiple: f64,
        source: &BenchmarkSource,
    ) -> BenchmarkComparison {
        bizval_eval::compare_to_benchmark(multiple, source, &self.config.benchmark)
    }

    /// Appraises a submission, dated today.
    ///
    /// # Errors
    ///
    /// Returns an error when revenue or net profit is missing or not numeric.
    pub fn appraise(&self, intake: &Intake) -> Result<Appraisal> {
        self.appraise_on(intake, Local::now().date_naive())
    }

    /// Appraises a submission with an explicit date.
    ///
    /// # Errors
    ///
    /// Returns an error when revenue or net profit is missing or not numeric.
    pub fn appraise_on(&self, intake: &Intake, date: NaiveDate) -> Result<Appraisal> {
        let track = intake.track();
        let raw = intake.attributes();

        let attrs = BusinessAttributes::normalize(track, &raw)?;
        let valuation = attrs.valuate();
        let result = ValuationResult::from_valuation(&valuation, &self.config.range);

        let profit_margin = profit_margin_percent(attrs.revenue(), attrs.net_profit());
        let saleability = score_saleability(
            profit_margin,
            recurring_flag(&raw),
            owner_involvement(&raw),
        );

        let source = BenchmarkSource::Narrative(intake.benchmarks.clone());
        let benchmark = self.compare_to_benchmark(valuation.multiple, &source);

        tracing::info!(
            business = %intake.business_name,
            industry = %intake.industry,
            %track,
            value = result.estimated_value,
            multiple = result.multiple,
            score = saleability.score,
            "appraisal complete"
        );

        Ok(Appraisal {
            business_name: intake.business_name.clone(),
            industry: intake.industry.clone(),
            sub_category: intake.sub_category().map(str::to_string),
            appraised_on: date,
            spread_percent: result.spread_percent(),
            valuation,
            result,
            profit_margin,
            saleability,
            benchmark,
            confidence: Confidence::from_level(self.config.confidence_level),
        })
    }
}

/// Valuates a raw bag on `track` with the default range.
///
/// # Errors
///
/// Returns an error when revenue or net profit is missing or not numeric.
pub fn valuate(track: IndustryTrack, raw: &RawAttributes) -> Result<ValuationResult> {
    Appraiser::default().valuate(track, raw)
}

/// Scores saleability from margin, recurrence and owner involvement.
#[must_use]
pub fn score_saleability(
    profit_margin: f64,
    recurring: bool,
    owner_involvement: Option<OwnerInvolvement>,
) -> SaleabilityResult {
    bizval_eval::score_saleability(profit_margin, recurring, owner_involvement)
}

/// Compares a multiple against a benchmark with the default fallback reference.
#[must_use]
pub fn compare_to_benchmark(multiple: f64, source: &BenchmarkSource) -> BenchmarkComparison {
    Appraiser::default().compare_to_benchmark(multiple, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bizval_eval::{SaleabilityBand, Verdict};

    fn trade_intake() -> Intake {
        serde_json::from_str(
            r#"{
                "businessName": "Harbour Plumbing",
                "industry": "Trade Business",
                "subCategory": "Plumbing",
                "location": "Sydney",
                "yearsInOperation": "8",
                "benchmarks": "Plumbing businesses typically sell for 2.8x-3.5x SDE.",
                "industry_specific_data": {
                    "annualRevenue": "500000",
                    "netProfit": 150000,
                    "ownerWage": 60000,
                    "addBacks": 10000,
                    "equipmentValue": 40000,
                    "vehicleValue": "",
                    "businessDebts": null,
                    "recurringRevenue": "Yes",
                    "numberOfStaff": 3,
                    "ownerInvolvement": "Low",
                    "clientConcentration": 20
                }
            }"#,
        )
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_trade_appraisal() {
        let appraisal = Appraiser::default()
            .appraise_on(&trade_intake(), date())
            .unwrap();

        assert_eq!(appraisal.valuation.track, IndustryTrack::Trade);
        assert_eq!(appraisal.result.estimated_value, 755_000.0);
        assert_relative_eq!(appraisal.result.multiple, 3.25);
        assert_relative_eq!(appraisal.result.low_range, 641_750.0, max_relative = 1e-12);
        assert_relative_eq!(appraisal.result.high_range, 868_250.0, max_relative = 1e-12);
        assert_relative_eq!(appraisal.spread_percent.unwrap(), 15.0, epsilon = 1e-9);
        assert_relative_eq!(appraisal.profit_margin, 30.0);
        assert_eq!(appraisal.saleability.score, 9);
        assert_eq!(appraisal.saleability.band, SaleabilityBand::HighlySaleable);
        assert_relative_eq!(appraisal.benchmark.industry_multiple, 2.8);
        assert_eq!(appraisal.benchmark.verdict, Verdict::Above);
        assert_eq!(appraisal.confidence, Confidence::from_level(85));
        assert_eq!(appraisal.appraised_on, date());
    }

    #[test]
    fn test_years_from_base_form_merged() {
        let mut intake = trade_intake();
        intake.years_in_operation = Some(RawValue::from(3.0));
        let appraisal = Appraiser::default().appraise_on(&intake, date()).unwrap();
        assert_relative_eq!(appraisal.valuation.multiple, 3.0);
    }

    #[test]
    fn test_years_in_industry_data_wins() {
        let mut intake = trade_intake();
        intake
            .industry_specific_data
            .insert("yearsInOperation", 2.0);
        let attrs = intake.attributes();
        assert_eq!(attrs.get("yearsInOperation"), Some(&RawValue::Number(2.0)));
    }

    #[test]
    fn test_blank_years_in_industry_data_uses_base_form() {
        let mut intake = trade_intake();
        intake
            .industry_specific_data
            .insert("yearsInOperation", "");
        let attrs = intake.attributes();
        assert_eq!(attrs.get("yearsInOperation"), Some(&RawValue::from("8")));
    }

    #[test]
    fn test_empty_sub_category_is_none() {
        let mut intake = trade_intake();
        intake.sub_category = Some(String::new());
        let appraisal = Appraiser::default().appraise_on(&intake, date()).unwrap();
        assert_eq!(appraisal.sub_category, None);

        intake.sub_category = Some(" Plumbing ".into());
        assert_eq!(intake.sub_category(), Some("Plumbing"));
    }

    #[test]
    fn test_from_json_accepts_stored_record() {
        let intake = Intake::from_json(
            r#"{
                "id": 17,
                "form_data": {
                    "businessName": "Harbour Plumbing",
                    "industry": "Trade Business",
                    "industry_specific_data": {"annualRevenue": 500000, "netProfit": 150000}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(intake.business_name, "Harbour Plumbing");
        assert_eq!(intake.track(), IndustryTrack::Trade);
        assert_eq!(intake.industry_specific_data.len(), 2);
    }

    #[test]
    fn test_from_json_accepts_flat_body() {
        let intake = Intake::from_json(r#"{"industry": "E-commerce"}"#).unwrap();
        assert_eq!(intake.track(), IndustryTrack::Ecommerce);
        assert!(Intake::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_ecommerce_appraisal() {
        let intake = Intake {
            business_name: "Loop Box".into(),
            industry: "E-commerce".into(),
            industry_specific_data: RawAttributes::new()
                .with("annualRevenue", 2_000_000.0)
                .with("netProfit", 200_000.0)
                .with("ownerAddBacks", 20_000.0)
                .with("businessModel", "Subscription/Membership")
                .with("trafficSource", "Mostly Organic")
                .with("ownerInvolvement", "< 5 hrs/week")
                .with("inventoryValue", 50_000.0),
            ..Default::default()
        };
        let appraisal = Appraiser::default().appraise_on(&intake, date()).unwrap();
        assert_eq!(appraisal.result.estimated_value, 985_000.0);
        // Hours label is not an owner involvement level, so saleability ignores it.
        assert_eq!(appraisal.saleability.score, 5);
        assert_relative_eq!(appraisal.benchmark.industry_multiple, 2.5);
    }

    #[test]
    fn test_unknown_industry_is_generic() {
        let intake = Intake {
            industry: "Underwater Basket Weaving".into(),
            industry_specific_data: RawAttributes::new()
                .with("revenue", 6_000_000.0)
                .with("netProfit", 300_000.0),
            ..Default::default()
        };
        let appraisal = Appraiser::default().appraise_on(&intake, date()).unwrap();
        assert_eq!(appraisal.valuation.track, IndustryTrack::Generic);
        assert_eq!(appraisal.result.estimated_value, 1_275_000.0);
    }

    #[test]
    fn test_negative_estimate_has_no_spread() {
        let intake = Intake {
            industry: "Retail".into(),
            industry_specific_data: RawAttributes::new()
                .with("revenue", 100_000.0)
                .with("netProfit", 10_000.0)
                .with("businessDebts", 200_000.0),
            ..Default::default()
        };
        let appraisal = Appraiser::default().appraise_on(&intake, date()).unwrap();
        assert!(appraisal.result.estimated_value < 0.0);
        assert_eq!(appraisal.spread_percent, None);
    }

    #[test]
    fn test_missing_revenue_fails() {
        let intake = Intake {
            industry: "Retail".into(),
            industry_specific_data: RawAttributes::new().with("netProfit", 10_000.0),
            ..Default::default()
        };
        let err = Appraiser::default().appraise(&intake).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_appraisal_is_repeatable() {
        let appraiser = Appraiser::default();
        let first = appraiser.appraise_on(&trade_intake(), date()).unwrap();
        let second = appraiser.appraise_on(&trade_intake(), date()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_validation() {
        assert!(Appraiser::new(AppraisalConfig::default()).is_ok());

        let config = AppraisalConfig {
            confidence_level: 0,
            ..Default::default()
        };
        assert!(matches!(
            Appraiser::new(config),
            Err(BizvalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_custom_config_applies() {
        let config: AppraisalConfig = serde_json::from_str(
            r#"{"range": {"low_factor": 0.9, "high_factor": 1.1}, "benchmark": {"default_multiple": 4.0}, "confidence_level": 70}"#,
        )
        .unwrap();
        let mut intake = trade_intake();
        intake.benchmarks = None;

        let appraisal = Appraiser::new(config)
            .unwrap()
            .appraise_on(&intake, date())
            .unwrap();
        assert_relative_eq!(appraisal.spread_percent.unwrap(), 10.0, epsilon = 1e-9);
        assert_eq!(appraisal.benchmark.verdict, Verdict::Below);
        assert_eq!(appraisal.confidence.label, "Medium");
    }

    #[test]
    fn test_free_functions() {
        let raw = RawAttributes::new()
            .with("revenue", 6_000_000.0)
            .with("netProfit", 300_000.0);
        let result = valuate(IndustryTrack::Generic, &raw).unwrap();
        assert_eq!(result.estimated_value, 1_275_000.0);

        let cmp = compare_to_benchmark(result.multiple, &BenchmarkSource::Explicit(5.0));
        assert_eq!(cmp.verdict, Verdict::Below);
        assert_relative_eq!(cmp.delta_percent, 15.0, epsilon = 1e-9);

        assert_eq!(score_saleability(5.0, false, None).score, 4);
    }

    #[test]
    fn test_appraisal_serializes() {
        let appraisal = Appraiser::default()
            .appraise_on(&trade_intake(), date())
            .unwrap();
        let json = serde_json::to_value(&appraisal).unwrap();
        assert_eq!(json["appraised_on"], "2024-03-01");
        assert_eq!(json["result"]["estimated_value"], 755_000.0);
        assert_eq!(json["saleability"]["band"], "HighlySaleable");
    }

    #[test]
    fn test_appraiser_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Appraiser>();
    }
}
