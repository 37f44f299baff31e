//! Intake and configuration loading for the bizval CLI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bizval::{AppraisalConfig, Appraiser, Intake};

/// Load a stored questionnaire submission from a JSON file.
pub(crate) fn load_intake(path: &Path) -> Result<Intake> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read intake file {}", path.display()))?;
    parse_intake(&text).with_context(|| format!("Invalid intake file {}", path.display()))
}

/// Parse a questionnaire submission from JSON text, flat or as a stored record.
pub(crate) fn parse_intake(text: &str) -> Result<Intake> {
    Ok(Intake::from_json(text)?)
}

/// Build an appraiser from an optional JSON config file.
pub(crate) fn load_appraiser(path: Option<&Path>) -> Result<Appraiser> {
    let Some(path) = path else {
        return Ok(Appraiser::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = parse_config(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded engine configuration");
    Ok(Appraiser::new(config)?)
}

/// Parse engine configuration from JSON text. Missing sections keep their defaults.
pub(crate) fn parse_config(text: &str) -> Result<AppraisalConfig> {
    let config: AppraisalConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}
