//! Planner configuration loaded from TOML.
//!
//! Every section is optional. Missing sections and missing keys take the
//! built-in defaults, so an empty file is a valid configuration.
//!
//! ```toml
//! [investment]
//! land_cost_per_plot = 6000000
//!
//! [business_case]
//! fixed_costs = 45000000
//! target_factors = [0.15, 0.20, 0.25, 0.40]
//!
//! [projection]
//! revenue_growth = 0.12
//! years = 7
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use plantain_core::calculations::{BusinessCaseConfig, InvestmentConfig, ProjectionConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    pub investment: InvestmentConfig,
    pub business_case: BusinessCaseConfig,
    pub projection: ProjectionConfig,
}

impl PlannerConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid planner configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("in config file '{}'", path.display()))?;
        info!(path = %path.display(), "loaded planner configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.investment
            .validate()
            .context("[investment] section")?;
        self.business_case
            .validate()
            .context("[business_case] section")?;
        self.projection
            .validate()
            .context("[projection] section")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_text_yields_defaults() {
        let config = PlannerConfig::from_toml_str("").unwrap();

        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn missing_path_yields_defaults() {
        let config = PlannerConfig::load(None).unwrap();

        assert_eq!(config.projection.years, 5);
        assert_eq!(config.business_case.fixed_costs, dec!(40000000));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let text = "\
[business_case]
fixed_costs = 45000000

[projection]
revenue_growth = 0.12
";
        let config = PlannerConfig::from_toml_str(text).unwrap();

        assert_eq!(config.business_case.fixed_costs, dec!(45000000));
        assert_eq!(config.business_case.plantain_per_kg_flour, dec!(4));
        assert_eq!(config.projection.revenue_growth, dec!(0.12));
        assert_eq!(config.projection.cost_inflation, dec!(0.08));
        assert_eq!(config.investment, InvestmentConfig::default());
    }

    #[test]
    fn shares_that_do_not_sum_to_one_are_rejected() {
        let text = "\
[investment]
equipment_share = 0.5
";
        let err = PlannerConfig::from_toml_str(text).unwrap_err();

        assert!(format!("{err:#}").contains("[investment]"));
    }

    #[test]
    fn zero_projection_years_are_rejected() {
        let text = "[projection]\nyears = 0\n";

        assert!(PlannerConfig::from_toml_str(text).is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(PlannerConfig::from_toml_str("[payroll]\nrate = 1\n").is_err());
    }

    #[test]
    fn unreadable_path_reports_file_name() {
        let err = PlannerConfig::load(Some(Path::new("/no/such/planner.toml"))).unwrap_err();

        assert!(err.to_string().contains("planner.toml"));
    }
}
